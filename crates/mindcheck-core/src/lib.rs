//! mindcheck-core
//!
//! Pure domain types shared by every Mindcheck crate: the region list and
//! the risk prediction payload exchanged with the scoring backend.
//! No HTTP or async dependency.

pub mod error;
pub mod models;
