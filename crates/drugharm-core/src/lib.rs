//! drugharm-core
//!
//! Domain types shared by the study tables and the API. No I/O.

pub mod error;
pub mod models;
