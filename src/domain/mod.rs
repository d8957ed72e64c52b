//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod minutes;
pub mod quorum;

pub use entities::{AttendanceSheet, BOARD_KIND_BOD, GuestPartition, MeetingRef, Semester};
pub use errors::DomainError;
