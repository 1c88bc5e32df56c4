//! Activity Roster - extracurricular activity signup service.
//!
//! Keeps an in-memory catalog of school activities and lets students:
//! - List every activity with its current roster
//! - Sign up for an activity
//! - Unregister from an activity

pub mod api;
pub mod config;
pub mod error;
pub mod registry;

pub use config::Config;
pub use error::RosterError;
pub use registry::{Activity, Registry};
