use chrono::NaiveDate;
use tracing::{debug, info};
use validator::Validate;

use crate::api::employee::find_active_by_name;
use crate::auth::Session;
use crate::db::JsonStore;
use crate::error::{AppError, AppResult, OptionExt};
use crate::model::{Priority, Project, Task, TaskPhase};
use crate::utils::form::{DEFAULT_END, DEFAULT_START, not_blank, parse_i64};

#[derive(Debug, Clone, Validate)]
pub struct CreateTask {
    #[validate(custom(function = "not_blank", message = "Task code cannot be empty"))]
    pub code: String,
    #[validate(custom(function = "not_blank", message = "Task title cannot be empty"))]
    pub title: String,
    pub description: String,
    /// Name of an active employee
    pub assigned_employee: String,
    pub phase: TaskPhase,
    /// Project name
    pub project: String,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Raw text from the estimation field
    pub estimation_hours: String,
}

/* =========================
All tasks (admin / leader)
========================= */
pub fn list_tasks(store: &JsonStore, session: &Session) -> AppResult<Vec<Task>> {
    session.require_admin_or_leader()?;
    store.load::<Task>()
}

/* =========================
Tasks assigned to me
========================= */
pub fn my_tasks(store: &JsonStore, session: &Session) -> AppResult<Vec<Task>> {
    session.require_user()?;

    let Some(employee) = session.employee() else {
        debug!("No employee profile; no assigned tasks");
        return Ok(Vec::new());
    };

    Ok(store
        .load::<Task>()?
        .into_iter()
        .filter(|t| t.is_assigned_to(employee.id))
        .collect())
}

/* =========================
Create task (admin / leader)
========================= */
pub fn create_task(store: &JsonStore, session: &Session, payload: CreateTask) -> AppResult<Task> {
    session.require_admin_or_leader()?;
    let creator = session.require_user()?;
    payload.validate()?;

    let estimation = parse_i64(
        &payload.estimation_hours,
        "Estimation hours must be a valid number",
    )?;
    if payload.end_date < payload.start_date {
        return Err(AppError::validation("End date must not be before start date"));
    }

    let assignee = find_active_by_name(store, &payload.assigned_employee)?;
    let project_name = payload.project.trim();
    let project = store
        .load::<Project>()?
        .into_iter()
        .find(|p| p.name == project_name)
        .ok_or_not_found("Project")?;

    let task = Task {
        code: payload.code.trim().to_string(),
        title: payload.title.trim().to_string(),
        description: payload.description.trim().to_string(),
        assigned_employee_id: assignee.id,
        task_phase: payload.phase,
        project_id: project.id,
        priority: payload.priority,
        creator_id: Some(creator.id),
        start_date: DEFAULT_START.on(payload.start_date)?,
        end_date: DEFAULT_END.on(payload.end_date)?,
        estimation_hours: estimation as f64,
        actual_hours: 0.0,
    };

    store.update::<Task, _, _>(|tasks| {
        if tasks.iter().any(|t| t.code == task.code) {
            return Err(AppError::conflict(format!("Task code '{}'", task.code)));
        }
        tasks.push(task.clone());
        Ok(())
    })?;

    info!(
        code = %task.code,
        assignee = %assignee.id,
        project = %project.id,
        creator = %creator.username,
        "Task created"
    );
    Ok(task)
}
