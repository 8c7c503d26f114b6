use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::db::Record;
use crate::model::request::{Review, Reviewable};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Maternity,
    Study,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    #[serde(flatten)]
    pub review: Review,
}

impl LeaveRequest {
    pub fn new(
        employee_id: Uuid,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id,
            leave_type,
            start_date,
            end_date,
            reason,
            review: Review::pending(),
        }
    }

    /// Calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl Record for LeaveRequest {
    const FILE: &'static str = "leaverequests.json";
}

impl Reviewable for LeaveRequest {
    const KIND: &'static str = "Leave request";

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
