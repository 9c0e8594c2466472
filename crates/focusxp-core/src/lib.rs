//! # FocusXP Core Library
//!
//! This library provides the scoring and state-tracking engine behind the
//! FocusXP deep-work tracker. Like the CLI built on it, every operation is a
//! plain synchronous call against an injected store and clock.
//!
//! ## Architecture
//!
//! - **Scoring**: pure functions for session difficulty, same-day decay and
//!   the XP formulas
//! - **Ledger**: append-only XP log with all-time and weekly totals
//! - **Streaks**: one-advance-per-day consecutive-day tracking
//! - **Achievements**: catalogue evaluation with one-way unlocks
//! - **Storage**: table-per-document persistence over SQLite or memory, plus
//!   TOML configuration
//!
//! ## Key Components
//!
//! - [`FocusEngine`]: facade running each compound operation to completion
//! - [`TableStore`]: the persistence seam
//! - [`Clock`]: the time seam
//! - [`Config`]: application configuration management

pub mod achievements;
pub mod clock;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod model;
pub mod scoring;
pub mod stats;
pub mod storage;
pub mod streak;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::FocusEngine;
pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use ledger::XpLedger;
pub use model::*;
pub use scoring::{Difficulty, WeekTag};
pub use stats::{DayActivity, SessionStats};
pub use storage::{Config, MemoryStore, SqliteStore, TableStore};
pub use streak::{StreakAdvance, StreakTracker};
