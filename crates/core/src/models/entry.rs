use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::user::User;
use crate::{
    dates::{DATE_FORMAT, DateRange, HOURS_PER_DAY},
    errors::{ShiftError, ShiftResult},
};

/// One hour of declared availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub user: User,
    pub date: NaiveDate,
    pub hour: u8,
}

/// Body element of `POST /requests/{id}/submissions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub hour: u8,
}

impl NewEntry {
    pub fn validate_within(&self, range: &DateRange) -> ShiftResult<()> {
        if !range.contains(self.date) {
            return Err(ShiftError::Validation(format!(
                "date {} must be within {} and {}",
                self.date.format(DATE_FORMAT),
                range.start.format(DATE_FORMAT),
                range.end.format(DATE_FORMAT),
            )));
        }
        if self.hour >= HOURS_PER_DAY {
            return Err(ShiftError::Validation(format!(
                "hour {} must be between 0 and 23",
                self.hour
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryId {
    pub id: i64,
}

/// Response of a successful submission; `id` is the request id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEntries {
    pub id: i64,
    #[serde(default, deserialize_with = "super::format::null_as_empty")]
    pub entries: Vec<EntryId>,
}
