//! Ingestion side of the EDR event report pipeline.
//!
//! [`classifier`] maps one raw JSON record into a typed
//! [`report_core::event::Event`]; [`store`] accumulates events across a
//! whole log, sorts them chronologically and partitions them per process.

pub mod classifier;
pub mod store;
