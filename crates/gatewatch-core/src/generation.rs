//! Applicant generation — random draws applied to the pure policy.
//!
//! The policy itself (thresholds, pools, flagging) lives in
//! `gatewatch_logic`; this module only supplies the randomness. Scripted
//! sessions and tests bypass it via `Applicant::compose` with fixed rolls.

use rand::Rng;

use gatewatch_logic::applicant::{classify_draw, Applicant, ReviewTrack};
use gatewatch_logic::content;

/// Generate the next applicant for the given track.
pub fn next_applicant(track: ReviewTrack, id: u64, rng: &mut impl Rng) -> Applicant {
    let draw = rng.gen::<f64>();
    let kind = classify_draw(track, draw);
    let face_roll = rng.gen_range(0..content::INNOCENT_FACES.len());
    let text_roll = rng.gen_range(0..content::GOOD_DOSSIERS.len().max(content::SPY_COVER_DOSSIERS.len()));
    Applicant::compose(id, track, kind, face_roll, text_roll)
}
