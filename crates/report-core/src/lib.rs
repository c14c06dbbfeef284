//! Core data model for the EDR event report pipeline.
//!
//! Holds the pieces every other crate depends on: the comparable
//! [`timestamp::Timestamp`] model, the [`event::Event`] record produced by
//! classification, and the [`error::ReportError`] taxonomy.

pub mod error;
pub mod event;
pub mod timestamp;
