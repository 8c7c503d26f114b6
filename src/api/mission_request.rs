use chrono::NaiveDate;
use tracing::info;
use validator::Validate;

use crate::auth::Session;
use crate::db::JsonStore;
use crate::error::{AppError, AppResult};
use crate::model::{MissionRequest, MissionType};
use crate::utils::form::{ClockTime, not_blank};

/// Mission or permission for part of a single day.
#[derive(Debug, Clone, Validate)]
pub struct CreateMission {
    pub mission_type: MissionType,
    pub date: NaiveDate,
    pub start: ClockTime,
    pub end: ClockTime,
    #[validate(custom(function = "not_blank", message = "Please enter a destination"))]
    pub destination: String,
    #[validate(custom(function = "not_blank", message = "Please enter a purpose"))]
    pub purpose: String,
}

pub fn submit_mission(
    store: &JsonStore,
    session: &Session,
    payload: CreateMission,
) -> AppResult<MissionRequest> {
    let employee = session.require_employee_profile()?;

    payload.validate()?;
    let start_time = payload.start.on(payload.date)?;
    let end_time = payload.end.on(payload.date)?;
    if end_time <= start_time {
        return Err(AppError::validation("End time must be after start time"));
    }

    let request = MissionRequest::new(
        employee.id,
        payload.mission_type,
        start_time,
        end_time,
        payload.destination.trim().to_string(),
        payload.purpose.trim().to_string(),
    );

    store.update::<MissionRequest, _, _>(|requests| {
        requests.push(request.clone());
        Ok(())
    })?;

    info!(
        mission_id = %request.id,
        employee_id = %employee.id,
        mission_type = %request.mission_type,
        "Mission request submitted"
    );
    Ok(request)
}

pub fn my_mission_requests(store: &JsonStore, session: &Session) -> AppResult<Vec<MissionRequest>> {
    session.require_user()?;

    let Some(employee) = session.employee() else {
        return Ok(Vec::new());
    };

    Ok(store
        .load::<MissionRequest>()?
        .into_iter()
        .filter(|r| r.employee_id == employee.id)
        .collect())
}
