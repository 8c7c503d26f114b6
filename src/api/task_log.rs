use chrono::NaiveDate;
use tracing::info;

use crate::api::employee::find_active_by_name;
use crate::auth::Session;
use crate::db::JsonStore;
use crate::error::{AppError, AppResult};
use crate::model::{Task, TaskLog};
use crate::utils::form::ClockTime;

/// Time spent by an employee on a task within one day.
#[derive(Debug, Clone)]
pub struct CreateTaskLog {
    pub task_code: String,
    /// Name of an active employee
    pub employee: String,
    pub date: NaiveDate,
    pub from: ClockTime,
    pub to: ClockTime,
    pub notes: String,
}

pub fn list_task_logs(store: &JsonStore, session: &Session) -> AppResult<Vec<TaskLog>> {
    session.require_admin_or_leader()?;
    store.load::<TaskLog>()
}

pub fn add_task_log(store: &JsonStore, session: &Session, payload: CreateTaskLog) -> AppResult<TaskLog> {
    session.require_admin_or_leader()?;

    let code = payload.task_code.trim();
    if code.is_empty() {
        return Err(AppError::validation("Please select a task"));
    }
    if !store.load::<Task>()?.iter().any(|t| t.code == code) {
        return Err(AppError::not_found(format!("Task '{}'", code)));
    }

    let employee = find_active_by_name(store, &payload.employee)?;

    let from_time = payload.from.on(payload.date)?;
    let to_time = payload.to.on(payload.date)?;
    if to_time < from_time {
        return Err(AppError::validation("End time must not be before start time"));
    }

    let log = TaskLog::new(
        code.to_string(),
        employee.id,
        from_time,
        to_time,
        payload.notes.trim().to_string(),
    );

    store.update::<TaskLog, _, _>(|logs| {
        logs.push(log.clone());
        Ok(())
    })?;

    info!(
        log_id = %log.id,
        task_code = %log.task_code,
        employee_id = %employee.id,
        hours = log.hours_spent,
        "Task log added"
    );
    Ok(log)
}
