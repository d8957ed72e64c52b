//! In-memory port fakes for use-case tests.
//!
//! One store implements both the meeting directory and the minutes
//! repository, keyed by the same path convention the fs adapters use.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::domain::{DomainError, MeetingRef, Semester};
use crate::ports::{MeetingDirPort, MinutesRepoPort};

const FAKE_ROOT: &str = "/minutes";

pub struct InMemoryMeetings {
    /// Meetings in insertion order == chronological order.
    order: Vec<MeetingRef>,
    files: Mutex<BTreeMap<PathBuf, Vec<String>>>,
}

impl InMemoryMeetings {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            files: Mutex::new(BTreeMap::new()),
        }
    }

    fn path_of(semester: &Semester, filename: &str) -> PathBuf {
        PathBuf::from(FAKE_ROOT)
            .join(semester.as_str())
            .join("bod")
            .join(filename)
    }

    /// Seed one meeting's minutes. Call order must be chronological.
    pub fn add(&mut self, semester: &str, filename: &str, text: &str) {
        let meeting = MeetingRef::new(Semester::new(semester), filename);
        self.files.lock().unwrap().insert(
            Self::path_of(&meeting.semester, filename),
            text.lines().map(str::to_string).collect(),
        );
        self.order.push(meeting);
    }

    /// Current stored lines of one meeting's minutes.
    pub fn stored(&self, semester: &str, filename: &str) -> Vec<String> {
        self.files
            .lock()
            .unwrap()
            .get(&Self::path_of(&Semester::new(semester), filename))
            .cloned()
            .unwrap_or_default()
    }
}

impl MeetingDirPort for InMemoryMeetings {
    fn current_semester(&self) -> Result<Semester, DomainError> {
        self.order
            .last()
            .map(|m| m.semester.clone())
            .ok_or_else(|| DomainError::Locator("no meetings seeded".into()))
    }

    fn minutes_dir(&self, kind: &str, semester: &Semester) -> Result<PathBuf, DomainError> {
        Ok(PathBuf::from(FAKE_ROOT).join(semester.as_str()).join(kind))
    }

    fn list_meetings(&self, _kind: &str, semester: &Semester) -> Result<Vec<String>, DomainError> {
        Ok(self
            .order
            .iter()
            .filter(|m| &m.semester == semester)
            .map(|m| m.filename.clone())
            .collect())
    }

    fn preceding_meeting(
        &self,
        _kind: &str,
        _semester: &Semester,
        date: NaiveDate,
    ) -> Result<MeetingRef, DomainError> {
        self.order
            .iter()
            .rev()
            .find(|m| m.date().is_ok_and(|d| d < date))
            .cloned()
            .ok_or_else(|| DomainError::Locator(format!("no meeting precedes {date}")))
    }
}

impl MinutesRepoPort for InMemoryMeetings {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, DomainError> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| DomainError::Repo(format!("no such minutes file: {}", path.display())))
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<(), DomainError> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), lines.to_vec());
        Ok(())
    }
}
