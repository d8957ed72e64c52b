//! Implements InputPort. Inquire-based interactive menu.

use std::sync::Arc;

use inquire::{Select, Text};

use crate::domain::{BOARD_KIND_BOD, DomainError, MeetingRef, Semester};
use crate::ports::{InputPort, MeetingDirPort};
use crate::usecases::{AttendanceService, RosterService};

const MENU_SPLIT: &str = "Split an attendance block";
const MENU_ROSTER: &str = "Show the standing roster";
const MENU_QUORUM: &str = "Show a meeting's quorum";
const MENU_QUORUM_NEXT: &str = "Show the next meeting's quorum";
const MENU_QUIT: &str = "Quit";

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    dir: Arc<dyn MeetingDirPort>,
    roster: Arc<RosterService>,
    attendance: Arc<AttendanceService>,
}

impl TuiInputPort {
    pub fn new(
        dir: Arc<dyn MeetingDirPort>,
        roster: Arc<RosterService>,
        attendance: Arc<AttendanceService>,
    ) -> Self {
        Self {
            dir,
            roster,
            attendance,
        }
    }

    /// Semester (defaulting to the current one) and meeting selection.
    fn pick_meeting(&self) -> Result<MeetingRef, DomainError> {
        let default = self.dir.current_semester()?;
        let semester = Text::new("Semester:")
            .with_default(default.as_str())
            .prompt()
            .map_err(|e| DomainError::Prompt(e.to_string()))?;
        let semester = Semester::new(semester);
        let meetings = self.dir.list_meetings(BOARD_KIND_BOD, &semester)?;
        if meetings.is_empty() {
            return Err(DomainError::Locator(format!(
                "no BoD minutes under semester {semester}"
            )));
        }
        let filename = Select::new("Meeting minutes:", meetings)
            .prompt()
            .map_err(|e| DomainError::Prompt(e.to_string()))?;
        Ok(MeetingRef::new(semester, filename))
    }
}

impl InputPort for TuiInputPort {
    fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice = Select::new(
                "What would you like to do?",
                vec![
                    MENU_SPLIT,
                    MENU_ROSTER,
                    MENU_QUORUM,
                    MENU_QUORUM_NEXT,
                    MENU_QUIT,
                ],
            )
            .prompt()
            .map_err(|e| DomainError::Prompt(e.to_string()))?;
            match choice {
                MENU_SPLIT => {
                    let meeting = self.pick_meeting()?;
                    let outcome = self.attendance.split_attendance(&meeting)?;
                    println!(
                        "Recorded {} directors, {} appointed guests, {} visiting guests.",
                        outcome.directors.len(),
                        outcome.appointed.len(),
                        outcome.visiting.len()
                    );
                }
                MENU_ROSTER => {
                    let meeting = self.pick_meeting()?;
                    let members = self.roster.roster(&meeting)?;
                    println!("On BoD as of {meeting} ({} members):", members.len());
                    for member in &members {
                        println!("  {member}");
                    }
                }
                MENU_QUORUM => {
                    let meeting = self.pick_meeting()?;
                    println!("Quorum for {}: {}", meeting, self.roster.quorum(&meeting)?);
                }
                MENU_QUORUM_NEXT => {
                    let meeting = self.pick_meeting()?;
                    println!(
                        "Quorum for the meeting after {}: {}",
                        meeting,
                        self.roster.quorum_next(&meeting)?
                    );
                }
                _ => break,
            }
        }
        Ok(())
    }
}
