//! Applicant kinds, review tracks, and draw classification.
//!
//! The two tracks differ only in detection probability and threshold
//! placement: the six-year track trades time for certainty (spies arrive
//! pre-flagged), the four-year track trades speed for ambiguity (spies carry
//! a hidden clue and a cover story indistinguishable from a good dossier).

use serde::{Deserialize, Serialize};

use crate::content;

/// Naturalization review track chosen for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewTrack {
    /// Six-year residency review — slow, deep vetting, spies get flagged.
    SixYear,
    /// Four-year residency review — fast, shallow vetting, spies slip in.
    FourYear,
}

/// What an applicant really is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicantKind {
    /// Genuine applicant — small security gain, small welfare upkeep.
    Good,
    /// Hostile infiltrator — large security hit if admitted.
    Spy,
    /// Genuine but welfare-intensive — large welfare hit if admitted.
    ResourceHeavy,
}

/// How much of a spy's nature the vetting surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskClue {
    /// Nothing to surface (non-spies).
    None,
    /// The clue exists in the dossier text but is not called out.
    Hidden,
    /// Deep vetting exposed it — surfaced to the player as a flag.
    Obvious,
}

/// A person at the desk awaiting a decision. Created by generation, consumed
/// exactly once by resolution; approved applicants become residents, rejected
/// ones are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Applicant {
    /// Unique per applicant, used only for keying.
    pub id: u64,
    pub kind: ApplicantKind,
    /// Opaque display token.
    pub face: &'static str,
    pub risk_clue: RiskClue,
    /// True iff policy decided this spy is exposed to the player.
    pub is_flagged: bool,
    /// Dossier line from the kind's content pool.
    pub description: &'static str,
}

/// Classify a uniform draw `r ∈ [0,1)` into an applicant kind.
///
/// Thresholds are strict (`>`) exactly as tuned; the boundary values
/// themselves land in the lower category.
pub fn classify_draw(track: ReviewTrack, r: f64) -> ApplicantKind {
    match track {
        ReviewTrack::SixYear => {
            if r > 0.8 {
                ApplicantKind::Spy
            } else if r > 0.6 {
                ApplicantKind::ResourceHeavy
            } else {
                ApplicantKind::Good
            }
        }
        ReviewTrack::FourYear => {
            if r > 0.7 {
                ApplicantKind::Spy
            } else if r > 0.4 {
                ApplicantKind::ResourceHeavy
            } else {
                ApplicantKind::Good
            }
        }
    }
}

/// Clue visibility and flagging for a spy on the given track.
/// Non-spies never carry a clue or a flag.
pub fn risk_profile(track: ReviewTrack, kind: ApplicantKind) -> (RiskClue, bool) {
    match (kind, track) {
        (ApplicantKind::Spy, ReviewTrack::SixYear) => (RiskClue::Obvious, true),
        (ApplicantKind::Spy, ReviewTrack::FourYear) => (RiskClue::Hidden, false),
        _ => (RiskClue::None, false),
    }
}

impl Applicant {
    /// Assemble an applicant from pre-drawn rolls. Pure: the engine supplies
    /// the random rolls, scripted sessions supply fixed ones.
    ///
    /// `face_roll` and `text_roll` are reduced modulo the relevant pool size,
    /// so any `usize` is valid.
    pub fn compose(
        id: u64,
        track: ReviewTrack,
        kind: ApplicantKind,
        face_roll: usize,
        text_roll: usize,
    ) -> Self {
        let (risk_clue, is_flagged) = risk_profile(track, kind);
        let innocent = content::INNOCENT_FACES[face_roll % content::INNOCENT_FACES.len()];
        let (face, description) = match kind {
            ApplicantKind::Good => (
                innocent,
                content::GOOD_DOSSIERS[text_roll % content::GOOD_DOSSIERS.len()],
            ),
            ApplicantKind::Spy => (
                innocent,
                content::SPY_COVER_DOSSIERS[text_roll % content::SPY_COVER_DOSSIERS.len()],
            ),
            ApplicantKind::ResourceHeavy => {
                (content::RESOURCE_HEAVY_FACE, content::RESOURCE_HEAVY_DOSSIER)
            }
        };
        Self {
            id,
            kind,
            face,
            risk_clue,
            is_flagged,
            description,
        }
    }
}
