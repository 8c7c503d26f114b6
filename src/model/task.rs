use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::db::Record;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum TaskPhase {
    Pending,
    #[serde(rename = "Under Work")]
    #[strum(to_string = "Under Work", serialize = "under_work")]
    UnderWork,
    Test,
    Evaluation,
    Completed,
    Cancelled,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// User-chosen key, unique across tasks
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub assigned_employee_id: Uuid,
    pub task_phase: TaskPhase,
    pub project_id: Uuid,
    pub priority: Priority,
    #[serde(default)]
    pub creator_id: Option<Uuid>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub estimation_hours: f64,
    #[serde(default)]
    pub actual_hours: f64,
}

impl Task {
    pub fn is_assigned_to(&self, employee_id: Uuid) -> bool {
        self.assigned_employee_id == employee_id
    }

    /// Whether the task shows up on `date` in the calendar: it starts that
    /// day, or started earlier and ends on a later day.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        let start = self.start_date.date();
        let end = self.end_date.date();
        start == date || (start < date && end > date)
    }
}

impl Record for Task {
    const FILE: &'static str = "tasks.json";
}
