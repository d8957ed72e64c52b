//! Standing-roster and quorum computation from consecutive minutes files.
//!
//! Board composition is inferred, never stored: the minutes files are the
//! system of record, and every operation re-reads whatever it needs.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::{AttendanceSheet, BOARD_KIND_BOD, DomainError, MeetingRef, minutes, quorum};
use crate::ports::{MeetingDirPort, MinutesRepoPort};

/// Roster service. Combines two consecutive meetings' attendance into the
/// standing roster and derives quorum thresholds from it.
pub struct RosterService {
    dir: Arc<dyn MeetingDirPort>,
    minutes: Arc<dyn MinutesRepoPort>,
}

impl RosterService {
    pub fn new(dir: Arc<dyn MeetingDirPort>, minutes: Arc<dyn MinutesRepoPort>) -> Self {
        Self { dir, minutes }
    }

    /// Path of the minutes file for a meeting.
    pub fn minutes_path(&self, meeting: &MeetingRef) -> Result<PathBuf, DomainError> {
        Ok(self
            .dir
            .minutes_dir(BOARD_KIND_BOD, &meeting.semester)?
            .join(&meeting.filename))
    }

    /// Parsed attendance for one meeting.
    pub fn attendance(&self, meeting: &MeetingRef) -> Result<AttendanceSheet, DomainError> {
        let path = self.minutes_path(meeting)?;
        let lines = self.minutes.read_lines(&path)?;
        minutes::parse_sheet(&lines)
    }

    /// The meeting immediately before the given one.
    pub fn preceding(&self, meeting: &MeetingRef) -> Result<MeetingRef, DomainError> {
        self.dir
            .preceding_meeting(BOARD_KIND_BOD, &meeting.semester, meeting.date()?)
    }

    /// Everyone on BoD at the conclusion of the given meeting: directors
    /// present or guests appointed, at this meeting or the one before it.
    ///
    /// Two-meeting window: a member who attended neither of the two most
    /// recent meetings drops out of the computed roster. Membership follows
    /// attendance, not a persisted ledger.
    pub fn roster(&self, meeting: &MeetingRef) -> Result<BTreeSet<String>, DomainError> {
        let prev = self.preceding(meeting)?;
        let mut members = BTreeSet::new();
        for sheet in [self.attendance(&prev)?, self.attendance(meeting)?] {
            members.extend(sheet.board_members().map(str::to_string));
        }
        info!(
            meeting = %meeting,
            prev = %prev,
            members = members.len(),
            "computed standing roster"
        );
        Ok(members)
    }

    /// Quorum for the BoD meeting *after* the given one.
    pub fn quorum_next(&self, meeting: &MeetingRef) -> Result<usize, DomainError> {
        let members = self.roster(meeting)?.len();
        Ok(quorum::threshold(members, meeting.date()?))
    }

    /// Quorum that was required to hold the given meeting. Equals the
    /// next-meeting quorum of its predecessor; the indirection is exactly
    /// one step.
    pub fn quorum(&self, meeting: &MeetingRef) -> Result<usize, DomainError> {
        let prev = self.preceding(meeting)?;
        self.quorum_next(&prev)
    }
}
