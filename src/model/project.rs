use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::db::Record;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ProjectStatus {
    Active,
    Completed,
    #[serde(rename = "On Hold")]
    #[strum(to_string = "On Hold", serialize = "on_hold")]
    OnHold,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub customer_name: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub status: ProjectStatus,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Record for Project {
    const FILE: &'static str = "projects.json";
}
