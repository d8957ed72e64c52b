//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Meeting lookup failed: unreadable semester layout, or no meeting
    /// precedes the given date anywhere.
    #[error("meeting lookup error: {0}")]
    Locator(String),

    #[error("minutes repository error: {0}")]
    Repo(String),

    /// A minutes file does not have the shape an operation requires
    /// (missing `Attendance:` marker, filename without a leading date).
    #[error("minutes format error: {0}")]
    Format(String),

    /// The minutes contradict an invariant of the data itself, e.g. a BoD
    /// meeting with no directors recorded present.
    #[error("attendance integrity error: {0}")]
    Integrity(String),

    #[error("prompt error: {0}")]
    Prompt(String),
}
