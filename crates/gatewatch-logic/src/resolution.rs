//! Decision resolution — the heart of the game.
//!
//! A single decision mutates the session ledger (score, welfare, counters,
//! population), selects at most one desk alert, sets the transient officer
//! mood, and detects collapse. Everything here is deterministic: given the
//! same ledger, applicant, and decision, the outcome is always the same.

use serde::Serialize;

use crate::applicant::{Applicant, ApplicantKind};
use crate::content;
use crate::mood::Mood;
use crate::population::{Population, Resident, ResidentKind};

// ============================================================================
// TUNING
// ============================================================================

/// Opening value of both gauges.
pub const INITIAL_GAUGE: i32 = 100;

/// Security hit for admitting a spy.
pub const SPY_SECURITY_PENALTY: i32 = 20;

/// Welfare hit for admitting a welfare-heavy applicant.
pub const RESOURCE_HEAVY_WELFARE_COST: i32 = 15;

/// Welfare upkeep every good admission costs, unconditionally.
pub const ADMISSION_UPKEEP: i32 = 2;

/// Good admissions recover +1 security, but only while the score sits below
/// this ceiling — the recovery can never push it past 90.
pub const GOOD_RECOVERY_CEILING: i32 = 90;

/// Security penalty for turning away a genuine applicant.
pub const FALSE_REJECTION_PENALTY: i32 = 5;

// ============================================================================
// LEDGER
// ============================================================================

/// The mutable book of one playthrough: both gauges, the admission pool, and
/// the monotonic session counters.
#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    /// National security gauge. May go negative before collapse is detected.
    pub score: i32,
    /// Welfare resources gauge. Same.
    pub resources: i32,
    pub population: Population,
    /// Decisions resolved this session.
    pub processed: u32,
    pub spies_admitted: u32,
    pub locals_displaced: u32,
}

impl Ledger {
    /// A fresh ledger with full gauges and `residents` local placeholders.
    pub fn opening(residents: usize) -> Self {
        Self {
            score: INITIAL_GAUGE,
            resources: INITIAL_GAUGE,
            population: Population::seeded(residents),
            processed: 0,
            spies_admitted: 0,
            locals_displaced: 0,
        }
    }

    /// Score as shown to the player — never negative.
    pub fn display_score(&self) -> i32 {
        self.score.max(0)
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Desk alert raised by a resolution. At most one per decision; displacement
/// is computed first and outranks the kind-specific alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alert {
    Displacement,
    SpyAdmitted,
    ResourceDrain,
}

impl Alert {
    pub fn message(self) -> &'static str {
        match self {
            Self::Displacement => content::ALERT_DISPLACEMENT,
            Self::SpyAdmitted => content::ALERT_SPY_ADMITTED,
            Self::ResourceDrain => content::ALERT_RESOURCE_DRAIN,
        }
    }
}

/// Why the session ended early. Security collapse is checked before welfare
/// collapse, so a decision that zeroes both reports on security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CollapseReason {
    /// Security gone with at least one spy inside.
    Infiltration,
    /// Security gone without a single admitted spy — rejected it away.
    OverExclusion,
    /// Welfare resources gone.
    ResourceExhaustion,
}

impl CollapseReason {
    pub fn report(self) -> &'static str {
        match self {
            Self::Infiltration => content::REPORT_INFILTRATION,
            Self::OverExclusion => content::REPORT_OVER_EXCLUSION,
            Self::ResourceExhaustion => content::REPORT_RESOURCE_EXHAUSTION,
        }
    }
}

/// Everything a resolution produces besides the ledger mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub alert: Option<Alert>,
    /// Transient mood override; `None` reverts the officer to the derived
    /// mood. Replaces whatever the previous decision set.
    pub mood_override: Option<Mood>,
    pub collapse: Option<CollapseReason>,
}

/// Resolve one decision against the ledger.
///
/// Approval admits the applicant (possibly displacing the oldest resident)
/// and applies the kind's costs; rejection only penalizes turning away a
/// genuine applicant. Collapse is checked after mutation, security first.
pub fn resolve(ledger: &mut Ledger, applicant: &Applicant, approve: bool) -> Outcome {
    let mut alert = None;
    let mut mood_override = None;

    if approve {
        // Displacement first — its alert outranks the kind-specific ones.
        if let Some(evicted) = ledger.population.admit(Resident::from_applicant(applicant)) {
            if evicted.kind == ResidentKind::Local {
                ledger.locals_displaced += 1;
                alert = Some(Alert::Displacement);
                mood_override = Some(Mood::Panic);
            }
        }

        match applicant.kind {
            ApplicantKind::Spy => {
                ledger.score -= SPY_SECURITY_PENALTY;
                ledger.spies_admitted += 1;
                if alert.is_none() {
                    alert = Some(Alert::SpyAdmitted);
                }
                mood_override = Some(Mood::Dead);
            }
            ApplicantKind::ResourceHeavy => {
                ledger.resources -= RESOURCE_HEAVY_WELFARE_COST;
                if alert.is_none() {
                    alert = Some(Alert::ResourceDrain);
                }
                mood_override = Some(Mood::Angry);
            }
            ApplicantKind::Good => {
                if ledger.score < GOOD_RECOVERY_CEILING {
                    ledger.score += 1;
                }
                ledger.resources -= ADMISSION_UPKEEP;
            }
        }
    } else if applicant.kind == ApplicantKind::Good {
        ledger.score -= FALSE_REJECTION_PENALTY;
    }

    ledger.processed += 1;

    let collapse = if ledger.score <= 0 {
        Some(if ledger.spies_admitted > 0 {
            CollapseReason::Infiltration
        } else {
            CollapseReason::OverExclusion
        })
    } else if ledger.resources <= 0 {
        Some(CollapseReason::ResourceExhaustion)
    } else {
        None
    };

    Outcome {
        alert,
        mood_override,
        collapse,
    }
}
