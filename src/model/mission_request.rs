use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::db::Record;
use crate::model::request::{Review, Reviewable};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum MissionType {
    Mission,
    Permission,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    #[serde(rename = "type")]
    pub mission_type: MissionType,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub destination: String,
    pub purpose: String,
    #[serde(flatten)]
    pub review: Review,
}

impl MissionRequest {
    pub fn new(
        employee_id: Uuid,
        mission_type: MissionType,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        destination: String,
        purpose: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id,
            mission_type,
            start_time,
            end_time,
            destination,
            purpose,
            review: Review::pending(),
        }
    }
}

impl Record for MissionRequest {
    const FILE: &'static str = "missionrequests.json";
}

impl Reviewable for MissionRequest {
    const KIND: &'static str = "Mission request";

    fn id(&self) -> Uuid {
        self.id
    }

    fn employee_id(&self) -> Uuid {
        self.employee_id
    }

    fn review(&self) -> &Review {
        &self.review
    }

    fn review_mut(&mut self) -> &mut Review {
        &mut self.review
    }
}
