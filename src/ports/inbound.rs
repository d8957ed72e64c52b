//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI invokes application use cases.
pub trait InputPort: Send + Sync {
    /// Run the interactive flow (pick a meeting, run an operation).
    /// Returns when the operator quits.
    fn run(&self) -> Result<(), DomainError>;
}
