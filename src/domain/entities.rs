//! Domain entities. Pure data structures for the core business.
//!
//! No filesystem/terminal types here — these are mapped from adapters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Board kind token for the governing board. Minutes for other bodies
/// (committees, general meetings) live in sibling directories.
pub const BOARD_KIND_BOD: &str = "bod";

/// A semester identifier. Opaque to the domain; the meeting-directory
/// adapter interprets it as a directory name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Semester(String);

impl Semester {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies one meeting: the semester it took place in and the minutes
/// filename. Filenames are `YYYY-MM-DD`, optionally suffixed when the board
/// met more than once on the same day (e.g. `2019-04-08.2`), and sort
/// consistently with meeting chronology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRef {
    pub semester: Semester,
    pub filename: String,
}

impl MeetingRef {
    pub fn new(semester: Semester, filename: impl Into<String>) -> Self {
        Self {
            semester,
            filename: filename.into(),
        }
    }

    /// The meeting date, parsed from the leading `YYYY-MM-DD` of the filename.
    pub fn date(&self) -> Result<NaiveDate, DomainError> {
        let prefix = self.filename.get(..10).ok_or_else(|| {
            DomainError::Format(format!(
                "minutes filename too short for a date: {:?}",
                self.filename
            ))
        })?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|e| {
            DomainError::Format(format!(
                "minutes filename {:?} does not start with a date: {}",
                self.filename, e
            ))
        })
    }
}

impl std::fmt::Display for MeetingRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.semester, self.filename)
    }
}

/// Guests at one meeting, split by whether they were appointed to the board
/// there (trailing `*` in the minutes) or merely visiting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestPartition {
    pub appointed: Vec<String>,
    pub visiting: Vec<String>,
}

/// Parsed attendance of one meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSheet {
    pub directors: Vec<String>,
    pub guests: GuestPartition,
}

impl AttendanceSheet {
    /// Everyone this sheet puts on the board: directors present plus guests
    /// appointed at the meeting. Visiting guests are not members.
    pub fn board_members(&self) -> impl Iterator<Item = &str> {
        self.directors
            .iter()
            .chain(self.guests.appointed.iter())
            .map(String::as_str)
    }
}
