//! Gatewatch Headless Session Harness
//!
//! Validates the pure rules and content tables without any frontend.
//! Runs entirely in-process — no rendering, no timers beyond the engine's
//! own update calls, no networking.
//!
//! Usage:
//!   cargo run -p gatewatch-simtest
//!   cargo run -p gatewatch-simtest -- --verbose

use gatewatch_core::engine::{Phase, SessionEngine, SESSION_SECONDS};
use gatewatch_core::generation;
use gatewatch_logic::applicant::{classify_draw, Applicant, ApplicantKind, ReviewTrack};
use gatewatch_logic::content;
use gatewatch_logic::debrief::{self, SessionReport};
use gatewatch_logic::population::{Population, Resident, ResidentKind};
use gatewatch_logic::resolution::{self, Ledger};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Gatewatch Session Harness ===\n");

    let mut results = Vec::new();

    // 1. Content tables
    results.extend(validate_content_tables(verbose));

    // 2. Admission policy distribution
    results.extend(validate_policy_distribution(verbose));

    // 3. Population pool invariants
    results.extend(validate_population_pool(verbose));

    // 4. Scripted ledger sweeps
    results.extend(validate_resolution_rules(verbose));

    // 5. Full clocked session
    results.extend(validate_full_session(verbose));

    // 6. Snapshot wire form
    results.extend(validate_snapshot_json(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Content tables ───────────────────────────────────────────────────

fn validate_content_tables(verbose: bool) -> Vec<TestResult> {
    println!("--- Content Tables (v{}) ---", content::CONTENT_VERSION);
    let mut results = Vec::new();

    results.push(TestResult {
        name: "content_pool_sizes".into(),
        passed: content::GOOD_DOSSIERS.len() == 3
            && content::SPY_COVER_DOSSIERS.len() == 3
            && content::INNOCENT_FACES.len() == 5,
        detail: format!(
            "good={} spy={} faces={}",
            content::GOOD_DOSSIERS.len(),
            content::SPY_COVER_DOSSIERS.len(),
            content::INNOCENT_FACES.len()
        ),
    });

    // The deception property: both dossier pools share a preamble and
    // stay disjoint.
    let preamble = "資料顯示：文件齊全，";
    let uniform = content::GOOD_DOSSIERS
        .iter()
        .chain(content::SPY_COVER_DOSSIERS)
        .all(|line| line.starts_with(preamble));
    let disjoint = content::GOOD_DOSSIERS
        .iter()
        .all(|line| !content::is_spy_cover(line));
    results.push(TestResult {
        name: "content_camouflage".into(),
        passed: uniform && disjoint,
        detail: format!("shared preamble={} disjoint pools={}", uniform, disjoint),
    });

    // Every spy cover reads from the spy pool, every good dossier from the
    // good pool, across all compose rolls.
    let mut membership_ok = true;
    for roll in 0..6 {
        let spy = Applicant::compose(0, ReviewTrack::FourYear, ApplicantKind::Spy, roll, roll);
        let good = Applicant::compose(0, ReviewTrack::FourYear, ApplicantKind::Good, roll, roll);
        if !content::is_spy_cover(spy.description) || !content::is_good_dossier(good.description) {
            membership_ok = false;
        }
    }
    results.push(TestResult {
        name: "content_pool_membership".into(),
        passed: membership_ok,
        detail: "compose always draws from the kind's own pool".into(),
    });

    if verbose {
        println!("  Good dossiers:");
        for line in content::GOOD_DOSSIERS {
            println!("    {}", line);
        }
        println!("  Spy covers:");
        for line in content::SPY_COVER_DOSSIERS {
            println!("    {}", line);
        }
    }

    results
}

// ── 2. Admission policy ─────────────────────────────────────────────────

fn validate_policy_distribution(verbose: bool) -> Vec<TestResult> {
    println!("--- Admission Policy ---");
    let mut results = Vec::new();
    let n = 100_000u32;

    for (track, expected) in [
        (ReviewTrack::SixYear, [0.60, 0.20, 0.20]),
        (ReviewTrack::FourYear, [0.40, 0.30, 0.30]),
    ] {
        // Deterministic even sweep over [0,1).
        let mut counts = [0u32; 3];
        for i in 0..n {
            let r = (f64::from(i) + 0.5) / f64::from(n);
            match classify_draw(track, r) {
                ApplicantKind::Good => counts[0] += 1,
                ApplicantKind::ResourceHeavy => counts[1] += 1,
                ApplicantKind::Spy => counts[2] += 1,
            }
        }
        let shares: Vec<f64> = counts.iter().map(|&c| f64::from(c) / f64::from(n)).collect();
        let within = shares
            .iter()
            .zip(expected.iter())
            .all(|(got, want)| (got - want).abs() < 0.02);
        results.push(TestResult {
            name: format!("policy_shares_{:?}", track),
            passed: within,
            detail: format!(
                "good={:.1}% heavy={:.1}% spy={:.1}%",
                shares[0] * 100.0,
                shares[1] * 100.0,
                shares[2] * 100.0
            ),
        });
    }

    // Sampled generation agrees with the sweep and honors the flag policy.
    let mut rng = StdRng::seed_from_u64(2024);
    let mut flagged_spies = 0u32;
    let mut unflagged_spies = 0u32;
    for i in 0..10_000 {
        let six = generation::next_applicant(ReviewTrack::SixYear, i, &mut rng);
        if six.kind == ApplicantKind::Spy {
            if six.is_flagged {
                flagged_spies += 1;
            } else {
                unflagged_spies += 1;
            }
        }
    }
    results.push(TestResult {
        name: "policy_six_year_flags_every_spy".into(),
        passed: flagged_spies > 0 && unflagged_spies == 0,
        detail: format!("{} spies, all flagged", flagged_spies),
    });

    if verbose {
        println!("  (even sweep, {} draws per track)", n);
    }

    results
}

// ── 3. Population pool ──────────────────────────────────────────────────

fn validate_population_pool(_verbose: bool) -> Vec<TestResult> {
    println!("--- Population Pool ---");
    let mut results = Vec::new();

    let mut pool = Population::seeded(Population::CAPACITY);
    let mut evictions = 0u32;
    let mut over_capacity = false;
    for i in 0..200u64 {
        let kind = if i % 3 == 0 {
            ApplicantKind::Spy
        } else {
            ApplicantKind::Good
        };
        let applicant = Applicant::compose(i, ReviewTrack::FourYear, kind, 0, 0);
        if pool.admit(Resident::from_applicant(&applicant)).is_some() {
            evictions += 1;
        }
        if pool.len() > Population::CAPACITY {
            over_capacity = true;
        }
    }
    results.push(TestResult {
        name: "pool_capacity_invariant".into(),
        passed: !over_capacity && pool.len() == Population::CAPACITY,
        detail: format!("200 admits, {} evictions, len={}", evictions, pool.len()),
    });

    // Oldest-first: the first 12 evictees from a fully local pool are all
    // locals.
    let mut pool = Population::seeded(Population::CAPACITY);
    let mut first_wave_local = true;
    for i in 0..Population::CAPACITY as u64 {
        let applicant = Applicant::compose(i, ReviewTrack::FourYear, ApplicantKind::Good, 0, 0);
        match pool.admit(Resident::from_applicant(&applicant)) {
            Some(out) if out.kind == ResidentKind::Local => {}
            _ => first_wave_local = false,
        }
    }
    results.push(TestResult {
        name: "pool_fifo_eviction".into(),
        passed: first_wave_local,
        detail: "first 12 evictees are the seeded locals".into(),
    });

    results
}

// ── 4. Resolution rules ─────────────────────────────────────────────────

fn validate_resolution_rules(_verbose: bool) -> Vec<TestResult> {
    println!("--- Resolution Rules ---");
    let mut results = Vec::new();

    let applicant =
        |kind| Applicant::compose(0, ReviewTrack::FourYear, kind, 0, 0);

    // Rejecting threats is free.
    let mut ledger = Ledger::opening(12);
    resolution::resolve(&mut ledger, &applicant(ApplicantKind::Spy), false);
    resolution::resolve(&mut ledger, &applicant(ApplicantKind::ResourceHeavy), false);
    results.push(TestResult {
        name: "rules_free_threat_rejection".into(),
        passed: ledger.score == 100 && ledger.resources == 100 && ledger.spies_admitted == 0,
        detail: format!("score={} resources={}", ledger.score, ledger.resources),
    });

    // Good approvals never raise the score past the recovery ceiling.
    let mut ledger = Ledger::opening(12);
    ledger.score = 85;
    for _ in 0..20 {
        resolution::resolve(&mut ledger, &applicant(ApplicantKind::Good), true);
    }
    results.push(TestResult {
        name: "rules_recovery_ceiling".into(),
        passed: ledger.score == resolution::GOOD_RECOVERY_CEILING,
        detail: format!("20 good approvals from 85 → {}", ledger.score),
    });

    // Collapse precedence: security reported before welfare.
    let mut ledger = Ledger::opening(12);
    ledger.score = 20;
    ledger.resources = 0;
    let outcome = resolution::resolve(&mut ledger, &applicant(ApplicantKind::Spy), true);
    results.push(TestResult {
        name: "rules_security_precedence".into(),
        passed: outcome.collapse == Some(resolution::CollapseReason::Infiltration),
        detail: format!("both gauges ≤0 → {:?}", outcome.collapse),
    });

    // Displacement alert outranks the spy alert on a full pool.
    let mut ledger = Ledger::opening(12);
    let outcome = resolution::resolve(&mut ledger, &applicant(ApplicantKind::Spy), true);
    results.push(TestResult {
        name: "rules_alert_priority".into(),
        passed: outcome.alert == Some(resolution::Alert::Displacement),
        detail: format!("{:?}", outcome.alert),
    });

    results
}

// ── 5. Full session ─────────────────────────────────────────────────────

fn validate_full_session(verbose: bool) -> Vec<TestResult> {
    println!("--- Full Session ---");
    let mut results = Vec::new();

    // Play a four-year session to the clock: approve everything, one
    // decision per second.
    let mut engine = SessionEngine::new();
    engine.start_game(ReviewTrack::FourYear);
    let mut decisions = 0u32;
    while engine.phase() == Phase::ActivePlay {
        engine.decide(true);
        decisions += 1;
        engine.update(1.0);
        if decisions > SESSION_SECONDS * 2 {
            break; // safety against a stuck clock
        }
    }
    let snap = engine.snapshot();
    results.push(TestResult {
        name: "session_reaches_results".into(),
        passed: snap.phase == Phase::Results && snap.processed == decisions,
        detail: format!(
            "{} decisions, final score={} resources={}",
            snap.processed, snap.score, snap.resources
        ),
    });

    // The debrief always has something to say about a finished session.
    let commentary = engine.session_report().map(|r| debrief::commentary(&r));
    results.push(TestResult {
        name: "session_has_debrief".into(),
        passed: commentary.is_some(),
        detail: commentary.unwrap_or("<missing>").into(),
    });

    // A collapsed session reports, a timed-out one doesn't.
    let mut engine = SessionEngine::new();
    engine.start_game(ReviewTrack::SixYear);
    for _ in 0..5 {
        engine.present_applicant(Applicant::compose(
            1,
            ReviewTrack::SixYear,
            ApplicantKind::Spy,
            0,
            0,
        ));
        engine.decide(true);
    }
    let collapsed = engine.snapshot();
    results.push(TestResult {
        name: "session_collapse_report".into(),
        passed: collapsed.phase == Phase::Results
            && collapsed.collapse_report == Some(content::REPORT_INFILTRATION),
        detail: format!("{:?}", collapsed.collapse_report),
    });

    if verbose {
        let report = SessionReport {
            track: ReviewTrack::FourYear,
            final_score: snap.score,
            spies_admitted: snap.spies_admitted,
            locals_displaced: snap.locals_displaced,
            collapse: None,
        };
        println!(
            "  approve-everything run: spies_in={} displaced={} mood={:?}",
            snap.spies_admitted,
            snap.locals_displaced,
            debrief::results_mood(&report)
        );
    }

    results
}

// ── 6. Snapshot wire form ───────────────────────────────────────────────

fn validate_snapshot_json(_verbose: bool) -> Vec<TestResult> {
    println!("--- Snapshot JSON ---");
    let mut results = Vec::new();

    let mut engine = SessionEngine::new();
    engine.start_game(ReviewTrack::SixYear);
    let json = match serde_json::to_value(engine.snapshot()) {
        Ok(v) => v,
        Err(e) => {
            results.push(TestResult {
                name: "snapshot_serializes".into(),
                passed: false,
                detail: format!("serialize error: {}", e),
            });
            return results;
        }
    };

    let fields = [
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
    ];
    let missing: Vec<_> = fields
        .iter()
        .filter(|f| json.get(**f).is_none())
        .collect();
    results.push(TestResult {
        name: "snapshot_boundary_fields".into(),
        passed: missing.is_empty(),
        detail: if missing.is_empty() {
            format!("all {} boundary fields present", fields.len())
        } else {
            format!("missing: {:?}", missing)
        },
    });

    results.push(TestResult {
        name: "snapshot_opening_values".into(),
        passed: json["score"] == 100
            && json["resources"] == 100
            && json["time_left"] == 30
            && json["population"].as_array().map(Vec::len) == Some(12),
        detail: "fresh session snapshot matches the opening ledger".into(),
    });

    results
}
