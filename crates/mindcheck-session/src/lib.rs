//! mindcheck-session
//!
//! The questionnaire session: six ordered steps, per-step completion rules
//! gating forward navigation, answer recording, the crisis-help side
//! channel, and the terminal submission to the risk prediction service.
//!
//! A [`session::Session`] is single-writer. [`handle::SessionHandle`] shares
//! one between tasks and keeps the `loading` state observable while a
//! submission is in flight.

pub mod error;
pub mod events;
pub mod handle;
pub mod session;
pub mod step;
pub mod summary;
