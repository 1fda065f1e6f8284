//! Gatewatch Core - Immigration Desk Session Engine
//!
//! A single-threaded, event-driven engine for the timed approve/reject
//! minigame. All mutation happens in response to three external stimuli — a
//! decision command, elapsed time fed through [`SessionEngine::update`], or a
//! restart — each processed to completion before the next.
//!
//! The presentation layer stays entirely outside: it reads the engine through
//! [`SessionEngine::snapshot`] and drives it through the command surface,
//! never the other way around.
//!
//! # Example
//!
//! ```rust,no_run
//! use gatewatch_core::prelude::*;
//!
//! let mut engine = SessionEngine::new();
//! engine.start_game(ReviewTrack::SixYear);
//!
//! // Frame loop owned by the presentation layer
//! loop {
//!     engine.update(1.0 / 60.0);
//!     let snap = engine.snapshot();
//!     if snap.current_applicant.is_some() {
//!         engine.decide(true);
//!     }
//! }
//! ```

pub mod engine;
pub mod generation;
pub mod snapshot;
pub mod timer;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::{Phase, SessionEngine};
    pub use crate::snapshot::Snapshot;
    pub use gatewatch_logic::applicant::{Applicant, ApplicantKind, ReviewTrack, RiskClue};
    pub use gatewatch_logic::mood::Mood;
}
