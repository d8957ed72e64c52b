//! Implements MeetingDirPort over the on-disk minutes tree.
//!
//! Layout: `<root>/<semester>/<kind>/<YYYY-MM-DD...>`. Semester directories
//! follow the `YYYY-term` convention with terms spring, summer, fall.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDate};
use tracing::warn;

use crate::domain::{DomainError, MeetingRef, Semester};
use crate::ports::MeetingDirPort;

/// Filesystem meeting directory.
pub struct FsMeetingDir {
    root: PathBuf,
    /// Configured override for the current semester; wins over the
    /// date-derived default when present.
    semester_override: Option<Semester>,
}

impl FsMeetingDir {
    pub fn new(root: impl AsRef<Path>, semester_override: Option<Semester>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            semester_override,
        }
    }

    /// Chronological sort key of a semester directory name. None for names
    /// outside the `YYYY-term` convention.
    fn semester_key(name: &str) -> Option<(i32, u8)> {
        let (year, term) = name.split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let term = match term {
            "spring" => 0,
            "summer" => 1,
            "fall" => 2,
            _ => return None,
        };
        Some((year, term))
    }

    /// Semester a calendar date falls in: January through May is spring,
    /// June and July are summer, August through December is fall.
    fn semester_of(date: NaiveDate) -> Semester {
        let term = match date.month() {
            1..=5 => "spring",
            6..=7 => "summer",
            _ => "fall",
        };
        Semester::new(format!("{}-{}", date.year(), term))
    }

    /// Date carried in a minutes filename, when it has one.
    fn file_date(filename: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(filename.get(..10)?, "%Y-%m-%d").ok()
    }

    /// Semester directories under the root sorting strictly before the given
    /// semester, most recent first.
    fn earlier_semesters(&self, semester: &Semester) -> Result<Vec<Semester>, DomainError> {
        let Some(current) = Self::semester_key(semester.as_str()) else {
            warn!(
                semester = %semester,
                "semester outside the YYYY-term convention; not walking earlier semesters"
            );
            return Ok(vec![]);
        };
        let entries = std::fs::read_dir(&self.root).map_err(|e| {
            DomainError::Locator(format!("cannot list {}: {}", self.root.display(), e))
        })?;
        let mut earlier: Vec<((i32, u8), String)> = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| DomainError::Locator(format!("reading minutes root: {e}")))?;
            if !entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(key) = Self::semester_key(&name) {
                if key < current {
                    earlier.push((key, name));
                }
            }
        }
        earlier.sort();
        Ok(earlier
            .into_iter()
            .rev()
            .map(|(_, name)| Semester::new(name))
            .collect())
    }

    /// Latest meeting in the semester dated strictly before `date`.
    fn latest_meeting_before(
        &self,
        kind: &str,
        semester: &Semester,
        date: NaiveDate,
    ) -> Result<Option<String>, DomainError> {
        Ok(self
            .list_meetings(kind, semester)?
            .into_iter()
            .filter(|name| Self::file_date(name).is_some_and(|d| d < date))
            .next_back())
    }
}

impl MeetingDirPort for FsMeetingDir {
    fn current_semester(&self) -> Result<Semester, DomainError> {
        if let Some(semester) = &self.semester_override {
            return Ok(semester.clone());
        }
        Ok(Self::semester_of(Local::now().date_naive()))
    }

    fn minutes_dir(&self, kind: &str, semester: &Semester) -> Result<PathBuf, DomainError> {
        Ok(self.root.join(semester.as_str()).join(kind))
    }

    fn list_meetings(&self, kind: &str, semester: &Semester) -> Result<Vec<String>, DomainError> {
        let dir = self.minutes_dir(kind, semester)?;
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => {
                return Err(DomainError::Locator(format!(
                    "cannot list {}: {}",
                    dir.display(),
                    e
                )));
            }
        };
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| DomainError::Locator(format!("listing {}: {}", dir.display(), e)))?;
            if !entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if Self::file_date(&name).is_none() {
                warn!(file = %name, dir = %dir.display(), "skipping non-minutes file");
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(names)
    }

    fn preceding_meeting(
        &self,
        kind: &str,
        semester: &Semester,
        date: NaiveDate,
    ) -> Result<MeetingRef, DomainError> {
        if let Some(name) = self.latest_meeting_before(kind, semester, date)? {
            return Ok(MeetingRef::new(semester.clone(), name));
        }
        for earlier in self.earlier_semesters(semester)? {
            if let Some(name) = self.latest_meeting_before(kind, &earlier, date)? {
                return Ok(MeetingRef::new(earlier, name));
            }
        }
        Err(DomainError::Locator(format!(
            "no {kind} meeting precedes {date}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seed(root: &Path, semester: &str, filenames: &[&str]) {
        let dir = root.join(semester).join("bod");
        fs::create_dir_all(&dir).unwrap();
        for name in filenames {
            fs::write(dir.join(name), "Directors in attendance:\nAlice\n").unwrap();
        }
    }

    fn locator(root: &Path) -> FsMeetingDir {
        FsMeetingDir::new(root, None)
    }

    #[test]
    fn test_list_meetings_sorted_and_filtered() {
        let tmp = TempDir::new().unwrap();
        seed(tmp.path(), "2017-fall", &["2017-11-13", "2017-11-06", "2017-11-06.2"]);
        fs::write(tmp.path().join("2017-fall/bod/notes.txt"), "junk").unwrap();
        let names = locator(tmp.path())
            .list_meetings("bod", &Semester::new("2017-fall"))
            .unwrap();
        assert_eq!(names, vec!["2017-11-06", "2017-11-06.2", "2017-11-13"]);
    }

    #[test]
    fn test_list_meetings_missing_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        let names = locator(tmp.path())
            .list_meetings("bod", &Semester::new("2019-spring"))
            .unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_preceding_meeting_within_semester() {
        let tmp = TempDir::new().unwrap();
        seed(tmp.path(), "2017-fall", &["2017-11-06", "2017-11-13", "2017-11-20"]);
        let prev = locator(tmp.path())
            .preceding_meeting("bod", &Semester::new("2017-fall"), date(2017, 11, 20))
            .unwrap();
        assert_eq!(prev.filename, "2017-11-13");
        assert_eq!(prev.semester, Semester::new("2017-fall"));
    }

    #[test]
    fn test_preceding_meeting_crosses_semesters() {
        let tmp = TempDir::new().unwrap();
        seed(tmp.path(), "2017-fall", &["2017-11-20", "2017-12-04"]);
        seed(tmp.path(), "2018-spring", &["2018-01-22"]);
        let prev = locator(tmp.path())
            .preceding_meeting("bod", &Semester::new("2018-spring"), date(2018, 1, 22))
            .unwrap();
        assert_eq!(prev.semester, Semester::new("2017-fall"));
        assert_eq!(prev.filename, "2017-12-04");
    }

    #[test]
    fn test_fall_sorts_after_spring_of_same_year() {
        let tmp = TempDir::new().unwrap();
        seed(tmp.path(), "2017-spring", &["2017-04-03"]);
        seed(tmp.path(), "2017-fall", &["2017-09-11"]);
        seed(tmp.path(), "2018-spring", &["2018-01-22"]);
        let prev = locator(tmp.path())
            .preceding_meeting("bod", &Semester::new("2018-spring"), date(2018, 1, 22))
            .unwrap();
        assert_eq!(prev.semester, Semester::new("2017-fall"));
    }

    #[test]
    fn test_first_ever_meeting_has_no_predecessor() {
        let tmp = TempDir::new().unwrap();
        seed(tmp.path(), "2017-fall", &["2017-11-06"]);
        let result = locator(tmp.path()).preceding_meeting(
            "bod",
            &Semester::new("2017-fall"),
            date(2017, 11, 6),
        );
        assert!(matches!(result, Err(DomainError::Locator(_))));
    }

    #[test]
    fn test_same_day_suffix_orders_after_base_name() {
        let tmp = TempDir::new().unwrap();
        seed(tmp.path(), "2017-fall", &["2017-11-06", "2017-11-06.2"]);
        let prev = locator(tmp.path())
            .preceding_meeting("bod", &Semester::new("2017-fall"), date(2017, 11, 13))
            .unwrap();
        assert_eq!(prev.filename, "2017-11-06.2");
    }

    #[test]
    fn test_semester_override_wins() {
        let tmp = TempDir::new().unwrap();
        let dir = FsMeetingDir::new(tmp.path(), Some(Semester::new("2016-fall")));
        assert_eq!(dir.current_semester().unwrap(), Semester::new("2016-fall"));
    }

    #[test]
    fn test_semester_of_date() {
        assert_eq!(
            FsMeetingDir::semester_of(date(2018, 2, 1)),
            Semester::new("2018-spring")
        );
        assert_eq!(
            FsMeetingDir::semester_of(date(2018, 6, 15)),
            Semester::new("2018-summer")
        );
        assert_eq!(
            FsMeetingDir::semester_of(date(2018, 10, 31)),
            Semester::new("2018-fall")
        );
    }
}
