//! Pure game rules for Gatewatch.
//!
//! This crate contains every rule of the immigration-desk minigame that is
//! independent of randomness, wall-clock time, or any runtime. Functions take
//! plain data and return results, making them unit-testable and portable
//! across the native engine, the headless harness, and any future frontend.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`applicant`] | Applicant kinds, review tracks, draw classification |
//! | [`content`] | Versioned text/face tables (dossiers, alerts, debriefs) |
//! | [`debrief`] | Results-screen commentary selection |
//! | [`mood`] | Officer mood as a pure projection of session state |
//! | [`population`] | Fixed-capacity admission queue with FIFO eviction |
//! | [`resolution`] | Decision resolution, score/welfare mutation, collapse |

pub mod applicant;
pub mod content;
pub mod debrief;
pub mod mood;
pub mod population;
pub mod resolution;
