//! Minutes section parsing. Exact-literal tagged-line scanning.
//!
//! Minutes files are plain text; sections are keyed by a marker line that
//! must match byte-for-byte and run until the next blank line.

use crate::domain::{AttendanceSheet, DomainError, GuestPartition};

pub const DIRECTORS_MARKER: &str = "Directors in attendance:";
pub const GUESTS_MARKER: &str = "Guests in attendance:";
pub const RAW_ATTENDANCE_MARKER: &str = "Attendance:";
pub const APPOINTED_NOTE: &str = "Guests marked with a * were appointed to BoD.";

enum ScanState {
    Seeking,
    Collecting,
}

/// Scanner for one marker-keyed section. The marker must equal the whole
/// line, untrimmed; a marker that never occurs yields an empty collection.
pub struct SectionScanner<'m> {
    marker: &'m str,
}

impl<'m> SectionScanner<'m> {
    pub fn new(marker: &'m str) -> Self {
        Self { marker }
    }

    /// Collects the trimmed, non-blank lines after the marker line, stopping
    /// at the first blank line or end of input.
    pub fn scan<'a, I>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = ScanState::Seeking;
        let mut collected = Vec::new();
        for line in lines {
            match state {
                ScanState::Seeking => {
                    if line == self.marker {
                        state = ScanState::Collecting;
                    }
                }
                ScanState::Collecting => {
                    let entry = line.trim();
                    if entry.is_empty() {
                        break;
                    }
                    collected.push(entry.to_string());
                }
            }
        }
        collected
    }
}

/// Directors present at the meeting, in file order.
///
/// A BoD meeting with no directors recorded is malformed minutes, not an
/// empty roster; a missing marker line lands here too, since it scans to
/// an empty collection.
pub fn parse_directors(lines: &[String]) -> Result<Vec<String>, DomainError> {
    let directors = SectionScanner::new(DIRECTORS_MARKER).scan(lines.iter().map(String::as_str));
    if directors.is_empty() {
        return Err(DomainError::Integrity(
            "a BoD meeting needs at least one director present".into(),
        ));
    }
    Ok(directors)
}

/// Guests present at the meeting. A trailing `*` marks a guest appointed to
/// the board there; the `*` is stripped. Meetings without a guests section
/// are normal, so a missing marker yields an empty partition.
pub fn parse_guests(lines: &[String]) -> GuestPartition {
    let mut guests = GuestPartition::default();
    for entry in SectionScanner::new(GUESTS_MARKER).scan(lines.iter().map(String::as_str)) {
        match entry.strip_suffix('*') {
            Some(name) => guests.appointed.push(name.to_string()),
            None => guests.visiting.push(entry),
        }
    }
    guests
}

/// Full parsed attendance of one meeting's minutes.
pub fn parse_sheet(lines: &[String]) -> Result<AttendanceSheet, DomainError> {
    Ok(AttendanceSheet {
        directors: parse_directors(lines)?,
        guests: parse_guests(lines),
    })
}

/// Bounds of the raw (pre-split) attendance block: index of the
/// `Attendance:` marker line, and the exclusive end at the terminating blank
/// line or end of input. The blank line itself stays outside the block.
pub fn raw_attendance_block(lines: &[String]) -> Result<(usize, usize), DomainError> {
    let start = lines
        .iter()
        .position(|line| line == RAW_ATTENDANCE_MARKER)
        .ok_or_else(|| {
            DomainError::Format(format!(
                "no {RAW_ATTENDANCE_MARKER:?} line in minutes; already split?"
            ))
        })?;
    let mut end = start + 1;
    while end < lines.len() && !lines[end].trim().is_empty() {
        end += 1;
    }
    Ok((start, end))
}

/// Renders the canonical categorized attendance block: directors section,
/// then a guests section (appointed first, `*`-suffixed) with the note about
/// the marking convention — the guests section only when guests exist.
pub fn render_split_block(directors: &[String], guests: &GuestPartition) -> Vec<String> {
    let mut block = Vec::new();
    block.push(DIRECTORS_MARKER.to_string());
    block.extend(directors.iter().cloned());
    block.push(String::new());
    if !guests.appointed.is_empty() || !guests.visiting.is_empty() {
        block.push(GUESTS_MARKER.to_string());
        for name in &guests.appointed {
            block.push(format!("{name}*"));
        }
        block.extend(guests.visiting.iter().cloned());
        block.push(String::new());
        block.push(APPOINTED_NOTE.to_string());
    }
    block
}
