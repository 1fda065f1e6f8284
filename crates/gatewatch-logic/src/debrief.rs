//! Results-screen commentary selection.
//!
//! The debrief is policy-selected content: which line the player reads
//! depends on how the session ended, which track they played, and what the
//! counters say. The strings themselves live in [`content`].

use serde::Serialize;

use crate::applicant::ReviewTrack;
use crate::content;
use crate::mood::Mood;
use crate::resolution::CollapseReason;

/// Locals-displaced count above which the four-year debrief calls it out.
const DISPLACEMENT_CALLOUT: u32 = 2;

/// Final score at or below which the officer looks defeated on the results
/// screen even without a collapse.
const DEFEATED_SCORE: i32 = 50;

/// Locals-displaced count above which the officer looks defeated.
const DEFEATED_DISPLACED: u32 = 3;

/// The frozen numbers a finished session is judged by.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionReport {
    pub track: ReviewTrack,
    pub final_score: i32,
    pub spies_admitted: u32,
    pub locals_displaced: u32,
    pub collapse: Option<CollapseReason>,
}

/// Pick the closing commentary for the report.
pub fn commentary(report: &SessionReport) -> &'static str {
    if report.collapse.is_some() {
        return content::DEBRIEF_COLLAPSE;
    }
    match report.track {
        ReviewTrack::SixYear => content::DEBRIEF_SIX_YEAR,
        ReviewTrack::FourYear => {
            if report.spies_admitted > 0 {
                content::DEBRIEF_FOUR_YEAR_INFILTRATED
            } else if report.locals_displaced > DISPLACEMENT_CALLOUT {
                content::DEBRIEF_FOUR_YEAR_DISPLACED
            } else {
                content::DEBRIEF_FOUR_YEAR_LUCKY
            }
        }
    }
}

/// The per-track footnote explaining the flagging asymmetry.
pub fn footnote(track: ReviewTrack) -> &'static str {
    match track {
        ReviewTrack::SixYear => content::FOOTNOTE_SIX_YEAR,
        ReviewTrack::FourYear => content::FOOTNOTE_FOUR_YEAR,
    }
}

/// Officer mood on the results screen. Collapse or a bad enough report reads
/// as defeat; anything else is composure.
pub fn results_mood(report: &SessionReport) -> Mood {
    if report.collapse.is_some()
        || report.final_score <= DEFEATED_SCORE
        || report.locals_displaced > DEFEATED_DISPLACED
    {
        Mood::Dead
    } else {
        Mood::Normal
    }
}
