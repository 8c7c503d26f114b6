//! Review state shared by leave and mission requests.
//!
//! A request is created PENDING and is reviewed exactly once: either
//! approved, or rejected with notes. Both outcomes are terminal.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

use crate::db::Record;
use crate::error::{AppError, AppResult};

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    status: RequestStatus,
    #[serde(default)]
    reviewed_by: Option<String>,
    #[serde(default)]
    review_notes: Option<String>,
}

impl Review {
    pub fn pending() -> Self {
        Self {
            status: RequestStatus::Pending,
            reviewed_by: None,
            review_notes: None,
        }
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn reviewed_by(&self) -> Option<&str> {
        self.reviewed_by.as_deref()
    }

    pub fn review_notes(&self) -> Option<&str> {
        self.review_notes.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    fn ensure_pending(&self) -> AppResult<()> {
        if self.status.is_terminal() {
            return Err(AppError::validation("Request has already been processed"));
        }
        Ok(())
    }

    pub fn approve(&mut self, reviewer: &str) -> AppResult<()> {
        self.ensure_pending()?;

        self.status = RequestStatus::Approved;
        self.reviewed_by = Some(reviewer.to_string());
        Ok(())
    }

    pub fn reject(&mut self, reviewer: &str, notes: &str) -> AppResult<()> {
        self.ensure_pending()?;

        let notes = notes.trim();
        if notes.is_empty() {
            return Err(AppError::validation("Please provide rejection notes"));
        }

        self.status = RequestStatus::Rejected;
        self.reviewed_by = Some(reviewer.to_string());
        self.review_notes = Some(notes.to_string());
        Ok(())
    }
}

impl Default for Review {
    fn default() -> Self {
        Self::pending()
    }
}

/// A request that goes through review.
pub trait Reviewable: Record {
    /// Label used in messages and logs.
    const KIND: &'static str;

    fn id(&self) -> Uuid;
    fn employee_id(&self) -> Uuid;
    fn review(&self) -> &Review;
    fn review_mut(&mut self) -> &mut Review;

    fn is_pending(&self) -> bool {
        self.review().is_pending()
    }
}
