//! Whole-session integration tests for the desk engine.
//!
//! Exercises: start → scripted decisions → collapse / clock expiry →
//! results → restart, plus the snapshot wire form. Applicants are scripted
//! through `present_applicant` so every run is deterministic.

use gatewatch_core::engine::{Phase, SessionEngine, SESSION_SECONDS};
use gatewatch_logic::applicant::{Applicant, ApplicantKind, ReviewTrack};
use gatewatch_logic::content;
use gatewatch_logic::debrief;
use gatewatch_logic::mood::Mood;
use gatewatch_logic::population::ResidentKind;

// ── Helpers ────────────────────────────────────────────────────────────

fn scripted(kind: ApplicantKind, track: ReviewTrack) -> Applicant {
    Applicant::compose(7, track, kind, 0, 0)
}

fn engine_at_desk(track: ReviewTrack) -> SessionEngine {
    let mut engine = SessionEngine::new();
    engine.start_game(track);
    engine
}

// ── Scripted scenarios ─────────────────────────────────────────────────

#[test]
fn fresh_six_year_session_opens_clean() {
    let engine = engine_at_desk(ReviewTrack::SixYear);
    let snap = engine.snapshot();
    assert_eq!(snap.score, 100);
    assert_eq!(snap.resources, 100);
    assert_eq!(snap.time_left, 30);
    assert_eq!(snap.population.len(), 12);
    assert!(snap.population.iter().all(|r| r.kind == ResidentKind::Local));
}

#[test]
fn forced_spy_approval_displaces_a_local() {
    let mut engine = engine_at_desk(ReviewTrack::SixYear);
    engine.present_applicant(scripted(ApplicantKind::Spy, ReviewTrack::SixYear));
    engine.decide(true);

    let snap = engine.snapshot();
    assert_eq!(snap.score, 80);
    assert_eq!(snap.spies_admitted, 1);
    assert_eq!(snap.population.len(), 12);
    assert_eq!(snap.locals_displaced, 1);
    // Displacement outranks the spy alert; the mood is still the spy's.
    assert_eq!(snap.alert, Some(content::ALERT_DISPLACEMENT));
    assert_eq!(snap.mood, Mood::Dead);
    assert_eq!(snap.phase, Phase::ActivePlay);
}

#[test]
fn five_good_rejections_cost_exactly_twenty_five() {
    let mut engine = engine_at_desk(ReviewTrack::FourYear);
    for _ in 0..5 {
        engine.present_applicant(scripted(ApplicantKind::Good, ReviewTrack::FourYear));
        engine.decide(false);
    }
    let snap = engine.snapshot();
    assert_eq!(snap.score, 75);
    assert_eq!(snap.resources, 100);
    assert_eq!(snap.population.len(), 12);
    assert_eq!(snap.locals_displaced, 0);
    assert_eq!(snap.processed, 5);
}

#[test]
fn welfare_drain_to_zero_ends_in_resource_collapse() {
    let mut engine = engine_at_desk(ReviewTrack::FourYear);
    // 15 welfare per admission: the seventh crosses zero (100 → -5).
    for i in 0..7 {
        assert_eq!(engine.phase(), Phase::ActivePlay, "ended early at {i}");
        engine.present_applicant(scripted(ApplicantKind::ResourceHeavy, ReviewTrack::FourYear));
        engine.decide(true);
    }
    let snap = engine.snapshot();
    assert_eq!(snap.phase, Phase::Results);
    assert_eq!(snap.resources, -5);
    assert!(snap.score > 0);
    assert_eq!(snap.collapse_report, Some(content::REPORT_RESOURCE_EXHAUSTION));
}

#[test]
fn processed_matches_decide_calls() {
    let mut engine = engine_at_desk(ReviewTrack::SixYear);
    for i in 0..10 {
        let kind = if i % 2 == 0 {
            ApplicantKind::Good
        } else {
            ApplicantKind::Spy
        };
        engine.present_applicant(scripted(kind, ReviewTrack::SixYear));
        engine.decide(i % 3 == 0);
    }
    assert_eq!(engine.snapshot().processed, 10);
}

// ── Clock ──────────────────────────────────────────────────────────────

#[test]
fn clock_expiry_ends_without_a_collapse_report() {
    let mut engine = engine_at_desk(ReviewTrack::SixYear);
    for _ in 0..SESSION_SECONDS {
        engine.update(1.0);
    }
    let snap = engine.snapshot();
    assert_eq!(snap.phase, Phase::Results);
    assert_eq!(snap.time_left, 0);
    assert!(snap.collapse_report.is_none());
    assert!(!snap.results_interactive);

    engine.update(1.0);
    assert!(engine.snapshot().results_interactive);
}

#[test]
fn clock_stops_once_results_begin() {
    let mut engine = engine_at_desk(ReviewTrack::FourYear);
    for _ in 0..100 {
        engine.update(1.0);
    }
    // time_left bottoms out at 0 and never wraps.
    assert_eq!(engine.snapshot().time_left, 0);
    assert_eq!(engine.phase(), Phase::Results);
}

// ── Debrief wiring ─────────────────────────────────────────────────────

#[test]
fn timed_out_four_year_session_debriefs_on_the_counters() {
    let mut engine = engine_at_desk(ReviewTrack::FourYear);
    engine.present_applicant(scripted(ApplicantKind::Spy, ReviewTrack::FourYear));
    engine.decide(true);
    for _ in 0..SESSION_SECONDS {
        engine.update(1.0);
    }
    let report = engine.session_report().expect("in results");
    assert!(report.collapse.is_none());
    assert_eq!(
        debrief::commentary(&report),
        content::DEBRIEF_FOUR_YEAR_INFILTRATED
    );
}

#[test]
fn collapsed_session_debriefs_on_the_collapse() {
    let mut engine = engine_at_desk(ReviewTrack::SixYear);
    for _ in 0..5 {
        engine.present_applicant(scripted(ApplicantKind::Spy, ReviewTrack::SixYear));
        engine.decide(true);
    }
    let report = engine.session_report().expect("in results");
    assert_eq!(debrief::commentary(&report), content::DEBRIEF_COLLAPSE);
    assert_eq!(debrief::results_mood(&report), Mood::Dead);
}

// ── Restart ────────────────────────────────────────────────────────────

#[test]
fn restart_bypasses_results_and_reseeds_the_menu_pool() {
    let mut engine = engine_at_desk(ReviewTrack::FourYear);
    engine.present_applicant(scripted(ApplicantKind::Spy, ReviewTrack::FourYear));
    engine.decide(true);
    engine.restart();

    let snap = engine.snapshot();
    assert_eq!(snap.phase, Phase::Menu);
    assert_eq!(snap.population.len(), 10);
    assert_eq!(snap.spies_admitted, 0);
    assert!(snap.alert.is_none());
    assert!(snap.collapse_report.is_none());

    // Back-to-back sessions start clean.
    engine.start_game(ReviewTrack::SixYear);
    let snap = engine.snapshot();
    assert_eq!(snap.score, 100);
    assert_eq!(snap.population.len(), 12);
    assert_eq!(snap.processed, 0);
}

#[test]
fn restart_cancels_pending_timers() {
    let mut engine = engine_at_desk(ReviewTrack::SixYear);
    engine.present_applicant(scripted(ApplicantKind::Good, ReviewTrack::SixYear));
    engine.decide(true); // displacement alert + 2.5 s clear timer
    engine.restart();
    engine.start_game(ReviewTrack::SixYear);
    engine.update(3.0);
    // The stale timer must not have cleared anything in the new session,
    // nor may it resurrect the old alert.
    let snap = engine.snapshot();
    assert!(snap.alert.is_none());
    assert_eq!(snap.phase, Phase::ActivePlay);
    assert_eq!(snap.time_left, SESSION_SECONDS - 3);
}

// ── Snapshot wire form ─────────────────────────────────────────────────

#[test]
fn snapshot_serializes_with_all_boundary_fields() {
    let mut engine = engine_at_desk(ReviewTrack::SixYear);
    engine.present_applicant(scripted(ApplicantKind::Spy, ReviewTrack::SixYear));
    engine.decide(true);

    let json = serde_json::to_value(engine.snapshot()).expect("snapshot serializes");
    for field in [
        "phase",
        "track",
        "score",
        "resources",
        "time_left",
        "current_applicant",
        "population",
        "processed",
        "spies_admitted",
        "locals_displaced",
        "collapse_report",
        "alert",
        "mood",
        "results_interactive",
    ] {
        assert!(json.get(field).is_some(), "snapshot missing `{field}`");
    }
    assert_eq!(json["score"], 80);
    assert_eq!(json["population"].as_array().map(Vec::len), Some(12));
}
