//! # Availability Grid
//!
//! Reshapes the flat entry list of a request into the hour-by-hour matrix the
//! console renders. Two projections exist over the same entries:
//!
//! - **by submitter**: one row per submitter, one line per date, hour columns
//! - **by date**: one row per date, one line per submitter, hour columns
//!
//! Everything here is a pure function of its inputs. Malformed input (an
//! inverted range, an unknown axis name, no entries) degrades to an empty
//! grid instead of an error.

use std::{collections::HashMap, fmt, str::FromStr};

use chrono::NaiveDate;

use crate::{
    dates::{DATE_FORMAT, DateRange, hour_range},
    errors::ShiftError,
    models::{Entry, User},
};

/// Which axis becomes the grid's rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupAxis {
    Submitter,
    Date,
}

impl FromStr for GroupAxis {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "submitter" | "user" => Ok(GroupAxis::Submitter),
            "date" => Ok(GroupAxis::Date),
            other => Err(ShiftError::Validation(format!("unknown grouping axis: {other}"))),
        }
    }
}

impl fmt::Display for GroupAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupAxis::Submitter => f.write_str("submitter"),
            GroupAxis::Date => f.write_str("date"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Submitter(i64),
    Date(NaiveDate),
}

impl GroupKey {
    fn of(entry: &Entry, axis: GroupAxis) -> (GroupKey, String) {
        match axis {
            GroupAxis::Submitter => (GroupKey::Submitter(entry.user.id), entry.user.name.clone()),
            GroupAxis::Date => (
                GroupKey::Date(entry.date),
                entry.date.format(DATE_FORMAT).to_string(),
            ),
        }
    }
}

/// Entries sharing one group key, borrowed from the caller's list.
#[derive(Debug, Clone)]
pub struct EntryGroup<'a> {
    key: GroupKey,
    label: String,
    entries: Vec<&'a Entry>,
}

impl<'a> EntryGroup<'a> {
    pub fn key(&self) -> &GroupKey {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entries(&self) -> &[&'a Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear scan; the group never holds more than a month of hours.
    pub fn has_entry(&self, date: NaiveDate, hour: u8) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.date == date && entry.hour == hour)
    }

    pub fn has_entry_of(&self, submitter_id: i64, date: NaiveDate, hour: u8) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.user.id == submitter_id && entry.date == date && entry.hour == hour)
    }
}

/// Groups in first-seen key order.
#[derive(Debug, Clone)]
pub struct EntryGroups<'a> {
    axis: GroupAxis,
    groups: Vec<EntryGroup<'a>>,
    index: HashMap<GroupKey, usize>,
}

impl<'a> EntryGroups<'a> {
    pub fn new(axis: GroupAxis) -> Self {
        Self {
            axis,
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Starts with empty groups for keys the caller expects, so they show
    /// up even when nothing was submitted under them.
    pub fn seeded<I>(axis: GroupAxis, keys: I) -> Self
    where
        I: IntoIterator<Item = (GroupKey, String)>,
    {
        let mut groups = Self::new(axis);
        for (key, label) in keys {
            groups.slot(key, label);
        }
        groups
    }

    pub fn extend(&mut self, entries: &'a [Entry]) {
        for entry in entries {
            let (key, label) = GroupKey::of(entry, self.axis);
            let slot = self.slot(key, label);
            self.groups[slot].entries.push(entry);
        }
    }

    fn slot(&mut self, key: GroupKey, label: String) -> usize {
        if let Some(&slot) = self.index.get(&key) {
            return slot;
        }
        let slot = self.groups.len();
        self.index.insert(key.clone(), slot);
        self.groups.push(EntryGroup {
            key,
            label,
            entries: Vec::new(),
        });
        slot
    }

    pub fn axis(&self) -> GroupAxis {
        self.axis
    }

    pub fn get(&self, key: &GroupKey) -> Option<&EntryGroup<'a>> {
        self.index.get(key).map(|&slot| &self.groups[slot])
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.groups.iter().map(|group| &group.key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntryGroup<'a>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'g, 'a> IntoIterator for &'g EntryGroups<'a> {
    type Item = &'g EntryGroup<'a>;
    type IntoIter = std::slice::Iter<'g, EntryGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Groups `entries` by `axis` in one left-to-right scan. Every entry lands in
/// exactly one group.
pub fn group_entries(entries: &[Entry], axis: GroupAxis) -> EntryGroups<'_> {
    let mut groups = EntryGroups::new(axis);
    groups.extend(entries);
    groups
}

/// One line of hour cells inside a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLine {
    pub key: GroupKey,
    pub label: String,
    pub cells: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub key: GroupKey,
    pub label: String,
    pub lines: Vec<GridLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    axis: Option<GroupAxis>,
    dates: Vec<NaiveDate>,
    submitters: Vec<User>,
    hours: Vec<u8>,
    rows: Vec<GridRow>,
}

impl Grid {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn axis(&self) -> Option<GroupAxis> {
        self.axis
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn submitters(&self) -> &[User] {
        &self.submitters
    }

    pub fn hours(&self) -> &[u8] {
        &self.hours
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Presence of a (submitter, date, hour) cell, independent of the axis
    /// the grid was built with.
    pub fn is_present(&self, submitter_id: i64, date: NaiveDate, hour: u8) -> bool {
        let Some(column) = self.hours.iter().position(|&h| h == hour) else {
            return false;
        };
        let (row_key, line_key) = match self.axis {
            Some(GroupAxis::Submitter) => (GroupKey::Submitter(submitter_id), GroupKey::Date(date)),
            Some(GroupAxis::Date) => (GroupKey::Date(date), GroupKey::Submitter(submitter_id)),
            None => return false,
        };
        self.rows
            .iter()
            .find(|row| row.key == row_key)
            .and_then(|row| row.lines.iter().find(|line| line.key == line_key))
            .is_some_and(|line| line.cells[column])
    }

    /// Every present cell as `(submitter_id, date, hour)`, in render order.
    pub fn present_cells(&self) -> Vec<(i64, NaiveDate, u8)> {
        let mut present = Vec::new();
        for row in &self.rows {
            for line in &row.lines {
                let (submitter_id, date) = match (&row.key, &line.key) {
                    (GroupKey::Submitter(id), GroupKey::Date(date))
                    | (GroupKey::Date(date), GroupKey::Submitter(id)) => (*id, *date),
                    _ => continue,
                };
                for (column, &cell) in line.cells.iter().enumerate() {
                    if cell {
                        present.push((submitter_id, date, self.hours[column]));
                    }
                }
            }
        }
        present
    }
}

/// Assembles a [`Grid`] from a request's entries.
///
/// # Example
///
/// ```
/// use shiftboard_core::{dates::DateRange, grid::{GridBuilder, GroupAxis}};
///
/// let range = DateRange::parse("2024-06-01", "2024-06-02").unwrap();
/// let grid = GridBuilder::new(&[], range).axis(GroupAxis::Date).build();
/// assert_eq!(grid.dates().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GridBuilder<'a> {
    entries: &'a [Entry],
    range: DateRange,
    axis: Option<GroupAxis>,
    expected: Vec<User>,
    hours: Vec<u8>,
}

impl<'a> GridBuilder<'a> {
    pub fn new(entries: &'a [Entry], range: DateRange) -> Self {
        Self {
            entries,
            range,
            axis: Some(GroupAxis::Submitter),
            expected: Vec::new(),
            hours: hour_range(),
        }
    }

    pub fn axis(mut self, axis: GroupAxis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Like [`GridBuilder::axis`] but from a name; an unknown name makes
    /// `build` return an empty grid.
    pub fn axis_name(mut self, name: &str) -> Self {
        self.axis = name.parse().ok();
        self
    }

    /// Submitters that get a row or line even without any entry.
    pub fn expected_submitters<I>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = User>,
    {
        self.expected = users.into_iter().collect();
        self
    }

    pub fn hours<I>(mut self, hours: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        self.hours = hours.into_iter().collect();
        self
    }

    pub fn build(self) -> Grid {
        let Some(axis) = self.axis else {
            return Grid::empty();
        };
        let dates = self.range.days();
        if dates.is_empty() {
            return Grid::empty();
        }

        let seed = self
            .expected
            .iter()
            .map(|user| (GroupKey::Submitter(user.id), user.name.clone()));
        let mut by_submitter = EntryGroups::seeded(GroupAxis::Submitter, seed);
        by_submitter.extend(self.entries);

        let submitters: Vec<User> = by_submitter
            .iter()
            .filter_map(|group| match group.key() {
                GroupKey::Submitter(id) => Some(User {
                    id: *id,
                    name: group.label().to_string(),
                }),
                GroupKey::Date(_) => None,
            })
            .collect();

        let rows = match axis {
            GroupAxis::Submitter => by_submitter
                .iter()
                .map(|group| GridRow {
                    key: group.key().clone(),
                    label: group.label().to_string(),
                    lines: dates
                        .iter()
                        .map(|&date| GridLine {
                            key: GroupKey::Date(date),
                            label: date.format(DATE_FORMAT).to_string(),
                            cells: self.hours.iter().map(|&h| group.has_entry(date, h)).collect(),
                        })
                        .collect(),
                })
                .collect(),
            GroupAxis::Date => {
                let by_date = group_entries(self.entries, GroupAxis::Date);
                dates
                    .iter()
                    .map(|&date| {
                        let group = by_date.get(&GroupKey::Date(date));
                        GridRow {
                            key: GroupKey::Date(date),
                            label: date.format(DATE_FORMAT).to_string(),
                            lines: submitters
                                .iter()
                                .map(|user| GridLine {
                                    key: GroupKey::Submitter(user.id),
                                    label: user.name.clone(),
                                    cells: self
                                        .hours
                                        .iter()
                                        .map(|&h| group.is_some_and(|g| g.has_entry_of(user.id, date, h)))
                                        .collect(),
                                })
                                .collect(),
                        }
                    })
                    .collect()
            }
        };

        Grid {
            axis: Some(axis),
            dates,
            submitters,
            hours: self.hours,
            rows,
        }
    }
}
