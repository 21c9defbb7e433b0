//! # Matinale Core Library
//!
//! Core business logic for Matinale, a guided morning-routine companion.
//! It follows a CLI-first philosophy: every operation is available through
//! the standalone `matinale-cli` binary, and any GUI is a thin layer over
//! this same library.
//!
//! ## Architecture
//!
//! - **Routine Engine**: a tick-driven state machine that sequences the
//!   timed steps of one routine run; the host delivers one `tick()` per
//!   elapsed second
//! - **Catalog**: preset and user-created routines with step editing
//! - **Journal / Affirmations**: tagged content collections with SQLite
//!   persistence
//! - **Alarm**: morning alarm settings and ring-time arithmetic
//! - **Storage**: SQLite repositories and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`RoutineEngine`]: the countdown / step-sequencing state machine
//! - [`Database`]: typed repositories over a single SQLite file
//! - [`Config`]: application configuration management

pub mod affirmations;
pub mod alarm;
pub mod error;
pub mod events;
pub mod journal;
pub mod morning;
pub mod routine;
pub mod storage;
pub mod timer;

pub use affirmations::{Affirmation, Quality};
pub use alarm::{AlarmConfig, AlarmSound};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use events::Event;
pub use journal::JournalEntry;
pub use morning::Mood;
pub use routine::{Need, Routine, Step};
pub use storage::{Config, DataResetOptions, DataResetSummary, Database};
pub use timer::{EngineState, RoutineEngine};
