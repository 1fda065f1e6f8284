//! Session engine - phases, clock, timers, and the command surface.
//!
//! The engine owns one session at a time and walks it through
//! `Menu → ActivePlay → Results → Menu`. Decisions route through the pure
//! resolution rules; the countdown clock and the two one-shot timers are
//! driven by [`SessionEngine::update`] calls from the host loop.

use gatewatch_logic::applicant::{Applicant, ReviewTrack};
use gatewatch_logic::debrief::SessionReport;
use gatewatch_logic::mood::{dynamic_mood, Mood};
use gatewatch_logic::resolution::{self, Alert, CollapseReason, Ledger};

use crate::generation;
use crate::snapshot::Snapshot;
use crate::timer::DelayTimer;

use serde::Serialize;

/// Session length in seconds.
pub const SESSION_SECONDS: u32 = 30;

/// How long a desk alert stays up before it clears itself.
pub const ALERT_CLEAR_SECONDS: f32 = 2.5;

/// Pause before the results screen accepts the restart slider — a pacing
/// rule, not a technical constraint.
pub const RESULTS_UNLOCK_SECONDS: f32 = 1.0;

/// Local placeholders shown behind the menu, before any session starts.
pub const MENU_RESIDENTS: usize = 10;

/// Local placeholders a fresh session opens with.
pub const SESSION_RESIDENTS: usize = 12;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Menu,
    ActivePlay,
    Results,
}

/// The orchestrator. Holds all mutable session state and exposes the
/// command surface; everything else in the workspace is pure rules.
#[derive(Debug)]
pub struct SessionEngine {
    phase: Phase,
    track: ReviewTrack,
    ledger: Ledger,
    time_left: u32,
    current_applicant: Option<Applicant>,
    alert: Option<Alert>,
    transient_mood: Option<Mood>,
    collapse: Option<CollapseReason>,
    results_interactive: bool,

    next_applicant_id: u64,
    clock_accum: f32,
    alert_timer: DelayTimer,
    unlock_timer: DelayTimer,
}

impl SessionEngine {
    /// A fresh engine sitting at the menu.
    pub fn new() -> Self {
        Self {
            phase: Phase::Menu,
            track: ReviewTrack::SixYear,
            ledger: Ledger::opening(MENU_RESIDENTS),
            time_left: SESSION_SECONDS,
            current_applicant: None,
            alert: None,
            transient_mood: None,
            collapse: None,
            results_interactive: false,
            next_applicant_id: 0,
            clock_accum: 0.0,
            alert_timer: DelayTimer::default(),
            unlock_timer: DelayTimer::default(),
        }
    }

    // ── Command surface ─────────────────────────────────────────────────

    /// Begin a session on the chosen track. Valid from the menu only;
    /// anywhere else it is a logged no-op.
    pub fn start_game(&mut self, track: ReviewTrack) {
        if self.phase != Phase::Menu {
            log::warn!("start_game ignored outside menu (phase {:?})", self.phase);
            return;
        }
        self.track = track;
        self.ledger = Ledger::opening(SESSION_RESIDENTS);
        self.time_left = SESSION_SECONDS;
        self.clock_accum = 0.0;
        self.alert = None;
        self.transient_mood = None;
        self.collapse = None;
        self.results_interactive = false;
        self.alert_timer.cancel();
        self.unlock_timer.cancel();
        self.phase = Phase::ActivePlay;
        self.current_applicant = Some(self.draw_applicant());
    }

    /// Resolve the applicant at the desk. Valid during active play; without
    /// an applicant present it is a logged no-op (unreachable under correct
    /// sequencing).
    pub fn decide(&mut self, approve: bool) {
        if self.phase != Phase::ActivePlay {
            log::warn!("decide ignored in phase {:?}", self.phase);
            return;
        }
        let Some(applicant) = self.current_applicant else {
            log::debug!("decide with no applicant at the desk");
            return;
        };

        let outcome = resolution::resolve(&mut self.ledger, &applicant, approve);
        self.alert = outcome.alert;
        self.transient_mood = outcome.mood_override;

        if let Some(reason) = outcome.collapse {
            // The applicant stays frozen on the desk for the results screen.
            self.enter_results(Some(reason));
            return;
        }

        // Each decision re-arms the clear timer; alerts never stack.
        self.alert_timer.start(ALERT_CLEAR_SECONDS);
        self.current_applicant = Some(self.draw_applicant());
    }

    /// Return to the menu from anywhere, discarding the session outright.
    pub fn restart(&mut self) {
        self.alert_timer.cancel();
        self.unlock_timer.cancel();
        self.phase = Phase::Menu;
        self.ledger = Ledger::opening(MENU_RESIDENTS);
        self.time_left = SESSION_SECONDS;
        self.clock_accum = 0.0;
        self.current_applicant = None;
        self.alert = None;
        self.transient_mood = None;
        self.collapse = None;
        self.results_interactive = false;
    }

    /// Advance the engine by `delta_seconds` of host time. Drives the
    /// one-second countdown during active play and the pending one-shot
    /// timers; outside those phases it is inert.
    pub fn update(&mut self, delta_seconds: f32) {
        match self.phase {
            Phase::ActivePlay => {
                if self.alert_timer.advance(delta_seconds) {
                    self.alert = None;
                    self.transient_mood = None;
                }
                self.clock_accum += delta_seconds;
                while self.clock_accum >= 1.0 && self.phase == Phase::ActivePlay {
                    self.clock_accum -= 1.0;
                    self.time_left = self.time_left.saturating_sub(1);
                    if self.time_left == 0 {
                        // Time's up — no collapse reason; the ending is
                        // judged descriptively by the debrief.
                        self.enter_results(None);
                    }
                }
            }
            Phase::Results => {
                if self.unlock_timer.advance(delta_seconds) {
                    self.results_interactive = true;
                }
            }
            Phase::Menu => {}
        }
    }

    /// Put a specific applicant at the desk, replacing whoever is there.
    /// Scripted sessions and the headless harness use this to drive
    /// deterministic decisions; valid during active play only.
    pub fn present_applicant(&mut self, applicant: Applicant) {
        if self.phase != Phase::ActivePlay {
            log::warn!("present_applicant ignored in phase {:?}", self.phase);
            return;
        }
        self.current_applicant = Some(applicant);
    }

    // ── Read side ───────────────────────────────────────────────────────

    /// The frame view handed to the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            track: self.track,
            score: self.ledger.score,
            resources: self.ledger.resources,
            time_left: self.time_left,
            current_applicant: self.current_applicant,
            population: self.ledger.population.to_vec(),
            processed: self.ledger.processed,
            spies_admitted: self.ledger.spies_admitted,
            locals_displaced: self.ledger.locals_displaced,
            collapse_report: self.collapse.map(CollapseReason::report),
            alert: self.alert.map(Alert::message),
            mood: dynamic_mood(self.ledger.score, self.ledger.resources, self.transient_mood),
            results_interactive: self.results_interactive,
        }
    }

    /// Frozen numbers for the results screen. `None` until the session ends.
    pub fn session_report(&self) -> Option<SessionReport> {
        if self.phase != Phase::Results {
            return None;
        }
        Some(SessionReport {
            track: self.track,
            final_score: self.ledger.score,
            spies_admitted: self.ledger.spies_admitted,
            locals_displaced: self.ledger.locals_displaced,
            collapse: self.collapse,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn enter_results(&mut self, reason: Option<CollapseReason>) {
        self.collapse = reason;
        self.phase = Phase::Results;
        self.results_interactive = false;
        self.alert_timer.cancel();
        self.unlock_timer.start(RESULTS_UNLOCK_SECONDS);
    }

    fn draw_applicant(&mut self) -> Applicant {
        let id = self.next_applicant_id;
        self.next_applicant_id += 1;
        generation::next_applicant(self.track, id, &mut rand::thread_rng())
    }
}

impl Default for SessionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatewatch_logic::applicant::ApplicantKind;
    use gatewatch_logic::population::ResidentKind;

    fn scripted(kind: ApplicantKind) -> Applicant {
        Applicant::compose(999, ReviewTrack::SixYear, kind, 0, 0)
    }

    #[test]
    fn test_menu_state() {
        let engine = SessionEngine::new();
        let snap = engine.snapshot();
        assert_eq!(snap.phase, Phase::Menu);
        assert_eq!(snap.population.len(), MENU_RESIDENTS);
        assert!(snap.population.iter().all(|r| r.kind == ResidentKind::Local));
        assert!(snap.current_applicant.is_none());
    }

    #[test]
    fn test_start_game_initializes_session() {
        let mut engine = SessionEngine::new();
        engine.start_game(ReviewTrack::SixYear);
        let snap = engine.snapshot();
        assert_eq!(snap.phase, Phase::ActivePlay);
        assert_eq!(snap.score, 100);
        assert_eq!(snap.resources, 100);
        assert_eq!(snap.time_left, SESSION_SECONDS);
        assert_eq!(snap.population.len(), SESSION_RESIDENTS);
        assert!(snap.current_applicant.is_some());
        assert_eq!(snap.processed, 0);
    }

    #[test]
    fn test_commands_outside_their_phase_are_noops() {
        let mut engine = SessionEngine::new();
        engine.decide(true); // menu: nothing to decide
        assert_eq!(engine.snapshot().processed, 0);

        engine.start_game(ReviewTrack::FourYear);
        engine.start_game(ReviewTrack::SixYear); // already playing
        assert_eq!(engine.snapshot().track, ReviewTrack::FourYear);
    }

    #[test]
    fn test_restart_from_active_play() {
        let mut engine = SessionEngine::new();
        engine.start_game(ReviewTrack::FourYear);
        engine.decide(true);
        engine.restart();
        let snap = engine.snapshot();
        assert_eq!(snap.phase, Phase::Menu);
        assert_eq!(snap.population.len(), MENU_RESIDENTS);
        assert!(snap.current_applicant.is_none());
        assert!(snap.alert.is_none());
        // A cancelled alert timer must not fire against the new state.
        engine.update(10.0);
        assert_eq!(engine.phase(), Phase::Menu);
    }

    #[test]
    fn test_alert_clears_after_delay() {
        let mut engine = SessionEngine::new();
        engine.start_game(ReviewTrack::SixYear);
        // Full pool, good admission: displacement alert + panic override.
        engine.present_applicant(scripted(ApplicantKind::Good));
        engine.decide(true);
        let snap = engine.snapshot();
        assert!(snap.alert.is_some());
        assert_eq!(snap.mood, Mood::Panic);

        engine.update(2.0);
        assert!(engine.snapshot().alert.is_some());
        engine.update(0.5);
        let snap = engine.snapshot();
        assert!(snap.alert.is_none());
        // Override gone; gauges are healthy, so mood re-derives to normal.
        assert_eq!(snap.mood, Mood::Normal);
    }

    #[test]
    fn test_new_decision_rearms_alert_timer() {
        let mut engine = SessionEngine::new();
        engine.start_game(ReviewTrack::SixYear);
        engine.present_applicant(scripted(ApplicantKind::Good));
        engine.decide(true);
        engine.update(2.0);
        // Second decision resets the 2.5 s window.
        engine.present_applicant(scripted(ApplicantKind::Good));
        engine.decide(true);
        engine.update(1.0);
        assert!(engine.snapshot().alert.is_some());
        engine.update(1.5);
        assert!(engine.snapshot().alert.is_none());
    }

    #[test]
    fn test_collapse_freezes_desk() {
        let mut engine = SessionEngine::new();
        engine.start_game(ReviewTrack::FourYear);
        // Five spies: 100 → 0.
        for _ in 0..5 {
            engine.present_applicant(scripted(ApplicantKind::Spy));
            engine.decide(true);
        }
        let snap = engine.snapshot();
        assert_eq!(snap.phase, Phase::Results);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.spies_admitted, 5);
        assert!(snap.collapse_report.is_some());
        // The last applicant stays on the desk for display.
        assert!(snap.current_applicant.is_some());
        assert!(!snap.results_interactive);

        engine.update(RESULTS_UNLOCK_SECONDS);
        assert!(engine.snapshot().results_interactive);
    }

    #[test]
    fn test_session_report_only_in_results() {
        let mut engine = SessionEngine::new();
        assert!(engine.session_report().is_none());
        engine.start_game(ReviewTrack::FourYear);
        assert!(engine.session_report().is_none());
        for _ in 0..5 {
            engine.present_applicant(scripted(ApplicantKind::Spy));
            engine.decide(true);
        }
        let report = engine.session_report().expect("results phase");
        assert_eq!(report.spies_admitted, 5);
        assert!(report.collapse.is_some());
    }

    #[test]
    fn test_fractional_updates_accumulate() {
        let mut engine = SessionEngine::new();
        engine.start_game(ReviewTrack::SixYear);
        for _ in 0..10 {
            engine.update(0.1);
        }
        assert_eq!(engine.snapshot().time_left, SESSION_SECONDS - 1);
    }
}
