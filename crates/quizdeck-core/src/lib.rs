//! quizdeck-core — Quiz data model, loader, and session state machine.
//!
//! This crate defines the quiz file format, the validated in-memory model,
//! and the session state machine that the quizdeck CLI drives.

pub mod error;
pub mod loader;
pub mod model;
pub mod report;
pub mod session;
