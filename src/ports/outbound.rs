//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::{DomainError, MeetingRef, Semester};

/// Meeting-directory service: resolves semesters and walks the chronological
/// sequence of minutes files for a board kind.
pub trait MeetingDirPort: Send + Sync {
    /// The semester to operate on by default. Resolved fresh on every call,
    /// never captured at startup, so long-lived processes cannot go stale.
    fn current_semester(&self) -> Result<Semester, DomainError>;

    /// Location of the minutes directory for a board kind and semester.
    fn minutes_dir(&self, kind: &str, semester: &Semester) -> Result<PathBuf, DomainError>;

    /// Minutes filenames for the semester in chronological order.
    fn list_meetings(&self, kind: &str, semester: &Semester) -> Result<Vec<String>, DomainError>;

    /// The chronologically nearest meeting strictly before `date`, searching
    /// the given semester first and then earlier semesters. Errors when no
    /// such meeting exists anywhere (e.g. the first-ever meeting).
    fn preceding_meeting(
        &self,
        kind: &str,
        semester: &Semester,
        date: NaiveDate,
    ) -> Result<MeetingRef, DomainError>;
}

/// Raw minutes text storage. Whole files only: a rewrite either fully
/// replaces the file or leaves it untouched.
pub trait MinutesRepoPort: Send + Sync {
    /// All lines of the file, without line terminators.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, DomainError>;

    /// Overwrite the file with the given lines.
    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<(), DomainError>;
}

/// Interactive operator prompting.
pub trait PrompterPort: Send + Sync {
    /// Blocking yes/no question. Accepts exactly `y`, `yes`, `n`, `no`
    /// (case-sensitive) and re-prompts on anything else; invalid input is
    /// never an error.
    fn ask_yes_no(&self, prompt: &str) -> Result<bool, DomainError>;

    /// Show a paragraph to the operator, wrapped for the terminal.
    fn say(&self, text: &str) -> Result<(), DomainError>;
}
