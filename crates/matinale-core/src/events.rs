use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::EngineState;

/// Every observable state change in the engine produces an Event.
/// Hosts (CLI, GUI) react to events; none of them is required for the
/// engine itself to make progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    RoutineStarted {
        routine_id: String,
        routine_name: String,
        step_count: usize,
        step_name: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The countdown entered a new step (natural expiry of the previous one).
    StepChanged {
        step_index: usize,
        step_name: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        seconds_remaining: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        seconds_remaining: u64,
        at: DateTime<Utc>,
    },
    /// The current step was skipped, discarding its remaining time.
    StepSkipped {
        from_step: usize,
        to_step: usize,
        at: DateTime<Utc>,
    },
    /// Terminal: the last step finished (naturally or by skip).
    RoutineCompleted {
        routine_id: String,
        at: DateTime<Utc>,
    },
    /// The session was discarded; nothing is recorded.
    RoutineAborted {
        step_index: usize,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: EngineState,
        step_index: usize,
        step_count: usize,
        step_name: String,
        seconds_remaining: u64,
        step_total_secs: u64,
        routine_progress_pct: f64,
        at: DateTime<Utc>,
    },
}
