use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::model::task::{Priority, Task, TaskPhase};

/// One task as it appears on one calendar day. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub task_code: String,
    pub task_title: String,
    pub date: NaiveDate,
    pub phase: TaskPhase,
    pub assigned_employee_id: Uuid,
    pub priority: Priority,
}

impl CalendarEvent {
    pub fn from_task(task: &Task, date: NaiveDate) -> Self {
        Self {
            task_code: task.code.clone(),
            task_title: task.title.clone(),
            date,
            phase: task.task_phase,
            assigned_employee_id: task.assigned_employee_id,
            priority: task.priority,
        }
    }
}
