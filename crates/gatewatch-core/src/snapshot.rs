//! Read-only state snapshot handed to the presentation layer.
//!
//! The snapshot is the entire boundary in that direction: everything the
//! frontend may render, nothing it may mutate. It serializes to JSON so thin
//! clients can consume it over any transport.

use serde::Serialize;

use gatewatch_logic::applicant::{Applicant, ReviewTrack};
use gatewatch_logic::mood::Mood;
use gatewatch_logic::population::Resident;

use crate::engine::Phase;

/// One frame's view of the session.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub track: ReviewTrack,
    /// Raw security gauge — may be negative after a collapse; clamping to
    /// zero is a display concern.
    pub score: i32,
    /// Raw welfare gauge, same convention.
    pub resources: i32,
    pub time_left: u32,
    pub current_applicant: Option<Applicant>,
    /// Admission pool in admission order, oldest first.
    pub population: Vec<Resident>,
    pub processed: u32,
    pub spies_admitted: u32,
    pub locals_displaced: u32,
    /// Collapse report text; `None` for a time's-up ending (and before one).
    pub collapse_report: Option<&'static str>,
    /// Active desk alert, already resolved to its message.
    pub alert: Option<&'static str>,
    /// Derived officer mood for this frame.
    pub mood: Mood,
    /// Whether the results screen accepts the restart slider yet.
    pub results_interactive: bool,
}
