//! Officer mood as a pure projection of session state.
//!
//! Mood is never stored: it is re-derived on demand from the current score,
//! welfare level, and the transient override left by the last resolution.
//! Keeping it a function (rather than a field) means the displayed mood can
//! never drift from the numbers behind it.

use serde::Serialize;

/// Display mood of the desk officer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mood {
    Normal,
    /// Some gauge is slipping.
    Panic,
    /// Welfare resources are nearly gone.
    Angry,
    /// Security is nearly gone (or the worst just happened).
    Dead,
}

/// Score at or below this reads as terminal dread.
const SCORE_DEAD: i32 = 20;

/// Welfare at or below this reads as fury.
const RESOURCES_ANGRY: i32 = 20;

/// Either gauge at or below this reads as panic.
const GAUGE_PANIC: i32 = 50;

/// Derive the current mood. A transient override from the last resolution
/// wins outright; otherwise thresholds on the two gauges decide, security
/// checked first.
pub fn dynamic_mood(score: i32, resources: i32, transient: Option<Mood>) -> Mood {
    if let Some(mood) = transient {
        return mood;
    }
    if score <= SCORE_DEAD {
        Mood::Dead
    } else if resources <= RESOURCES_ANGRY {
        Mood::Angry
    } else if score <= GAUGE_PANIC || resources <= GAUGE_PANIC {
        Mood::Panic
    } else {
        Mood::Normal
    }
}
