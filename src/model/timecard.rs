use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timecard {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub arrival_time: NaiveDateTime,
    pub departure_time: NaiveDateTime,
    #[serde(default)]
    pub notes: String,
}

impl Timecard {
    pub fn worked_hours(&self) -> f64 {
        (self.departure_time - self.arrival_time).num_minutes() as f64 / 60.0
    }
}

impl Record for Timecard {
    const FILE: &'static str = "timecards.json";
}
