use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{
    entry::Entry,
    format::{datetime, null_as_empty},
    user::User,
};
use crate::{
    dates::DateRange,
    errors::{ShiftError, ShiftResult},
};

/// A manager's call for availability over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub id: i64,
    pub creator: User,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "datetime")]
    pub deadline: NaiveDateTime,
    #[serde(with = "datetime")]
    pub created_at: NaiveDateTime,
}

impl Request {
    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub submitter: User,
}

/// Payload of `GET /requests/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDetail {
    #[serde(flatten)]
    pub request: Request,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<Entry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub submissions: Vec<Submission>,
}

impl RequestDetail {
    /// Submitters the server knows about, in the order it listed them.
    pub fn known_submitters(&self) -> Vec<User> {
        self.submissions
            .iter()
            .map(|submission| submission.submitter.clone())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "datetime")]
    pub deadline: NaiveDateTime,
}

impl NewRequest {
    /// Requires `deadline <= start_date <= end_date`, the deadline being
    /// compared by its calendar date.
    pub fn validate(&self) -> ShiftResult<()> {
        if self.deadline.date() > self.start_date {
            return Err(ShiftError::Validation(
                "deadline must not be after start_date".to_string(),
            ));
        }
        if self.start_date > self.end_date {
            return Err(ShiftError::Validation(
                "start_date must not be after end_date".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRequest {
    pub id: i64,
}
