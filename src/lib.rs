//! Candidate intake service for the recruitment data platform.
//!
//! The crate exposes the intake workflow (validation, aggregate construction, and
//! cascaded persistence of a candidate with their education, work experience, and
//! résumé records) behind a repository port, plus the HTTP router and bootstrap
//! plumbing used by the service binary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
