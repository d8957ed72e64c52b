//! Splits a raw `Attendance:` block into directors and classified guests.
//!
//! Reads the whole file before touching it; on any error the file is left
//! as it was. The raw marker is consumed by the rewrite, so this is a
//! single-use transform, not a normalizer.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, GuestPartition, MeetingRef, minutes};
use crate::ports::{MinutesRepoPort, PrompterPort};
use crate::usecases::RosterService;

const JOIN_QUESTION: &str = "The following guests are not on BoD. Would they like to join, \
                             and can they commit to coming regularly?";

/// Attendance service. Rewrites one meeting's attendance block in canonical
/// categorized form, consulting the operator about unknown attendees.
pub struct AttendanceService {
    minutes: Arc<dyn MinutesRepoPort>,
    prompter: Arc<dyn PrompterPort>,
    roster: Arc<RosterService>,
}

/// What a split produced, for reporting back to the operator.
#[derive(Debug, Default)]
pub struct SplitOutcome {
    pub directors: Vec<String>,
    pub appointed: Vec<String>,
    pub visiting: Vec<String>,
}

impl AttendanceService {
    pub fn new(
        minutes: Arc<dyn MinutesRepoPort>,
        prompter: Arc<dyn PrompterPort>,
        roster: Arc<RosterService>,
    ) -> Self {
        Self {
            minutes,
            prompter,
            roster,
        }
    }

    /// Splits the attendance section of the given meeting's minutes into a
    /// directors section and a guests section, asking the operator whether
    /// each attendee not already on the board is joining it.
    ///
    /// Attendees already on the board walking into the meeting (the standing
    /// roster of the *preceding* meeting) become directors; everyone else is
    /// classified interactively, in lexicographic order.
    pub fn split_attendance(&self, meeting: &MeetingRef) -> Result<SplitOutcome, DomainError> {
        let path = self.roster.minutes_path(meeting)?;
        let mut lines = self.minutes.read_lines(&path)?;
        let (start, end) = minutes::raw_attendance_block(&lines)?;
        let attendees: BTreeSet<String> = lines[start + 1..end]
            .iter()
            .map(|line| line.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        // Who was already on the board walking into this meeting.
        let prev = self.roster.preceding(meeting)?;
        let on_board = self.roster.roster(&prev)?;

        let directors: Vec<String> = attendees.intersection(&on_board).cloned().collect();
        let mut guests = GuestPartition::default();
        let unknown: Vec<&String> = attendees.difference(&on_board).collect();
        if !unknown.is_empty() {
            self.prompter.say(JOIN_QUESTION)?;
            for guest in unknown {
                if self.prompter.ask_yes_no(&format!("{guest}: (y/n) "))? {
                    guests.appointed.push(guest.clone());
                } else {
                    guests.visiting.push(guest.clone());
                }
            }
        }

        let replacement = minutes::render_split_block(&directors, &guests);
        lines.splice(start..end, replacement);
        self.minutes.write_lines(&path, &lines)?;
        info!(
            meeting = %meeting,
            directors = directors.len(),
            appointed = guests.appointed.len(),
            visiting = guests.visiting.len(),
            "split attendance block"
        );
        Ok(SplitOutcome {
            directors,
            appointed: guests.appointed,
            visiting: guests.visiting,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ui::prompt::ScriptedPrompter;
    use crate::domain::Semester;
    use crate::usecases::fixtures::InMemoryMeetings;

    const PRIOR: &str = "Directors in attendance:\nAlice\nBob\n\nGuests in attendance:\nCarol*\n";
    const BEFORE: &str = "Directors in attendance:\nAlice\nCarol\n";

    fn mref(filename: &str) -> MeetingRef {
        MeetingRef::new(Semester::new("2018-spring"), filename)
    }

    /// Store with two already-split meetings establishing the board as
    /// {Alice, Bob, Carol}, plus one raw meeting to split.
    fn seeded(raw: &str) -> Arc<InMemoryMeetings> {
        let mut store = InMemoryMeetings::new();
        store.add("2018-spring", "2018-02-05", PRIOR);
        store.add("2018-spring", "2018-02-12", BEFORE);
        store.add("2018-spring", "2018-02-19", raw);
        Arc::new(store)
    }

    fn service(store: &Arc<InMemoryMeetings>, replies: &[&str]) -> AttendanceService {
        let roster = Arc::new(RosterService::new(store.clone(), store.clone()));
        AttendanceService::new(store.clone(), Arc::new(ScriptedPrompter::new(replies)), roster)
    }

    #[test]
    fn test_known_members_become_sorted_directors_without_prompts() {
        let store = seeded("Minutes 2018-02-19\n\nAttendance:\nCarol\nAlice\nBob\n\nAgenda.\n");
        let outcome = service(&store, &[]).split_attendance(&mref("2018-02-19")).unwrap();
        assert_eq!(outcome.directors, vec!["Alice", "Bob", "Carol"]);
        assert!(outcome.appointed.is_empty());
        assert!(outcome.visiting.is_empty());
        let written = store.stored("2018-spring", "2018-02-19");
        assert_eq!(
            written,
            vec![
                "Minutes 2018-02-19",
                "",
                "Directors in attendance:",
                "Alice",
                "Bob",
                "Carol",
                "",
                "",
                "Agenda.",
            ]
        );
        // No guests section at all in the rewritten file.
        assert!(!written.iter().any(|l| l == minutes::GUESTS_MARKER));
    }

    #[test]
    fn test_guests_are_classified_by_operator() {
        let store = seeded("Attendance:\nAlice\nZoe\nMallory\n\nAgenda.\n");
        // Prompts come in lexicographic order: Mallory first, then Zoe.
        let outcome = service(&store, &["y", "no"])
            .split_attendance(&mref("2018-02-19"))
            .unwrap();
        assert_eq!(outcome.directors, vec!["Alice"]);
        assert_eq!(outcome.appointed, vec!["Mallory"]);
        assert_eq!(outcome.visiting, vec!["Zoe"]);
        assert_eq!(
            store.stored("2018-spring", "2018-02-19"),
            vec![
                "Directors in attendance:",
                "Alice",
                "",
                "Guests in attendance:",
                "Mallory*",
                "Zoe",
                "",
                minutes::APPOINTED_NOTE,
                "",
                "Agenda.",
            ]
        );
    }

    #[test]
    fn test_invalid_replies_reprompt_before_classifying() {
        let store = seeded("Attendance:\nAlice\nZoe\n\nAgenda.\n");
        // "Y" and "maybe" are invalid; only the final "yes" classifies Zoe.
        let outcome = service(&store, &["Y", "maybe", "yes"])
            .split_attendance(&mref("2018-02-19"))
            .unwrap();
        assert_eq!(outcome.appointed, vec!["Zoe"]);
        assert!(outcome.visiting.is_empty());
    }

    #[test]
    fn test_duplicate_attendee_lines_collapse() {
        let store = seeded("Attendance:\nAlice\nAlice\nBob \n\n");
        let outcome = service(&store, &[]).split_attendance(&mref("2018-02-19")).unwrap();
        assert_eq!(outcome.directors, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_missing_marker_fails_without_writing() {
        let store = seeded("Directors in attendance:\nAlice\n");
        let result = service(&store, &[]).split_attendance(&mref("2018-02-19"));
        assert!(matches!(result, Err(DomainError::Format(_))));
        assert_eq!(
            store.stored("2018-spring", "2018-02-19"),
            vec!["Directors in attendance:", "Alice"]
        );
    }

    #[test]
    fn test_rerunning_on_split_output_fails() {
        let store = seeded("Attendance:\nAlice\nBob\n\nAgenda.\n");
        let meeting = mref("2018-02-19");
        service(&store, &[]).split_attendance(&meeting).unwrap();
        let again = service(&store, &[]).split_attendance(&meeting);
        assert!(matches!(again, Err(DomainError::Format(_))));
    }
}
