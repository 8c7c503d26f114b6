use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskLog {
    pub id: Uuid,
    pub task_code: String,
    pub employee_id: Uuid,
    pub from_time: NaiveDateTime,
    pub to_time: NaiveDateTime,
    pub hours_spent: f64,
    #[serde(default)]
    pub notes: String,
}

impl TaskLog {
    pub fn new(
        task_code: String,
        employee_id: Uuid,
        from_time: NaiveDateTime,
        to_time: NaiveDateTime,
        notes: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_code,
            employee_id,
            from_time,
            to_time,
            hours_spent: hours_between(from_time, to_time),
            notes,
        }
    }
}

/// Whole minutes between the two instants, expressed in hours.
pub fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_minutes() as f64 / 60.0
}

impl Record for TaskLog {
    const FILE: &'static str = "tasklogs.json";
}
