//! bod-minutes: BoD meeting-minutes governance tooling with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
