use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::auth::Session;
use crate::db::JsonStore;
use crate::error::{AppError, AppResult};
use crate::model::{LeaveRequest, LeaveType};
use crate::utils::form::not_blank;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLeave {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(custom(function = "not_blank", message = "Please provide a reason"))]
    pub reason: String,
}

/* =========================
Submit leave request (owner)
========================= */
pub fn submit_leave(
    store: &JsonStore,
    session: &Session,
    payload: CreateLeave,
) -> AppResult<LeaveRequest> {
    let employee = session.require_employee_profile()?;

    payload.validate()?;
    if payload.start_date > payload.end_date {
        return Err(AppError::validation("Start date must be before end date"));
    }

    let request = LeaveRequest::new(
        employee.id,
        payload.leave_type,
        payload.start_date,
        payload.end_date,
        payload.reason.trim().to_string(),
    );

    store.update::<LeaveRequest, _, _>(|requests| {
        requests.push(request.clone());
        Ok(())
    })?;

    info!(
        leave_id = %request.id,
        employee_id = %employee.id,
        leave_type = %request.leave_type,
        "Leave request submitted"
    );
    Ok(request)
}

/* =========================
Own leave requests
========================= */
pub fn my_leave_requests(store: &JsonStore, session: &Session) -> AppResult<Vec<LeaveRequest>> {
    session.require_user()?;

    let Some(employee) = session.employee() else {
        return Ok(Vec::new());
    };

    Ok(store
        .load::<LeaveRequest>()?
        .into_iter()
        .filter(|r| r.employee_id == employee.id)
        .collect())
}
