//! Routine execution engine.
//!
//! The engine is a tick-driven state machine. It does not use internal
//! threads and performs no I/O - the caller delivers one `tick()` per
//! elapsed second and reacts to the returned events.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!           |             \
//!           v              v
//!       Completed        Idle (abort, from any non-idle state)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = RoutineEngine::new();
//! engine.start(routine)?;
//! // Once per second:
//! engine.tick(); // Returns Some(Event) on step change / completion
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;
use crate::routine::{Routine, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineState {
    Idle,
    Running,
    Paused,
    /// Terminal for the session; no further ticking.
    Completed,
}

/// Transient state of one in-progress routine run. Created by `start`,
/// dropped on `abort`; kept after completion so the final snapshot still
/// resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Session {
    routine: Routine,
    step_index: usize,
    seconds_remaining: u64,
}

/// Core routine engine.
///
/// Sequences the timed steps of a single routine run. The caller is
/// responsible for calling `tick()` once per elapsed second while the
/// engine is `Running`; ticks in any other state have no effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineEngine {
    state: EngineState,
    #[serde(default)]
    session: Option<Session>,
}

impl RoutineEngine {
    /// Create an idle engine with no session.
    pub fn new() -> Self {
        Self {
            state: EngineState::Idle,
            session: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Index of the step the countdown is in. 0 while idle.
    pub fn step_index(&self) -> usize {
        self.session.as_ref().map(|s| s.step_index).unwrap_or(0)
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.session
            .as_ref()
            .map(|s| s.seconds_remaining)
            .unwrap_or(0)
    }

    pub fn current_step(&self) -> Option<&Step> {
        let session = self.session.as_ref()?;
        session.routine.steps.get(session.step_index)
    }

    pub fn routine(&self) -> Option<&Routine> {
        self.session.as_ref().map(|s| &s.routine)
    }

    /// Total seconds of the current step. 0 while idle.
    pub fn step_total_secs(&self) -> u64 {
        self.current_step().map(|s| s.duration_secs()).unwrap_or(0)
    }

    /// 0.0 .. 1.0 progress within the current step. Defined as 0 when the
    /// step duration is 0.
    pub fn step_progress(&self) -> f64 {
        let total = self.step_total_secs();
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.seconds_remaining());
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// 0.0 .. 100.0 progress across the entire routine.
    pub fn routine_progress_pct(&self) -> f64 {
        let Some(session) = self.session.as_ref() else {
            return 0.0;
        };
        if self.state == EngineState::Completed {
            return 100.0;
        }
        let total_min = session.routine.total_duration_min() as f64;
        if total_min == 0.0 {
            return 0.0;
        }
        let completed_min = session.routine.cumulative_min(session.step_index) as f64;
        let current_step_min = self
            .current_step()
            .map(|s| s.duration_min as f64)
            .unwrap_or(0.0);
        let current_elapsed_min = current_step_min * self.step_progress();
        ((completed_min + current_elapsed_min) / total_min * 100.0).min(100.0)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let step = self.current_step();
        Event::StateSnapshot {
            state: self.state,
            step_index: self.step_index(),
            step_count: self.session.as_ref().map(|s| s.routine.steps.len()).unwrap_or(0),
            step_name: step.map(|s| s.name.clone()).unwrap_or_default(),
            seconds_remaining: self.seconds_remaining(),
            step_total_secs: self.step_total_secs(),
            routine_progress_pct: self.routine_progress_pct(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a fresh run of `routine`, replacing any session in flight.
    ///
    /// # Errors
    ///
    /// Rejects a routine with no steps; the engine state is unchanged.
    pub fn start(&mut self, routine: Routine) -> Result<Event, ValidationError> {
        let first = routine
            .steps
            .first()
            .ok_or_else(|| ValidationError::EmptyCollection("routine.steps".into()))?;
        let event = Event::RoutineStarted {
            routine_id: routine.id.clone(),
            routine_name: routine.name.clone(),
            step_count: routine.steps.len(),
            step_name: first.name.clone(),
            duration_secs: first.duration_secs(),
            at: Utc::now(),
        };
        let seconds_remaining = first.duration_secs();
        self.session = Some(Session {
            routine,
            step_index: 0,
            seconds_remaining,
        });
        self.state = EngineState::Running;
        Ok(event)
    }

    /// Call once per elapsed second. Returns `Some(Event)` when the
    /// countdown enters a new step or the routine completes.
    ///
    /// The tick that consumes a step's final second performs the advance,
    /// so a routine finishes after exactly `total_duration_secs()` ticks.
    /// A zero-duration step advances on the next tick.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != EngineState::Running {
            return None;
        }
        let session = self.session.as_mut()?;
        if session.seconds_remaining > 1 {
            session.seconds_remaining -= 1;
            return None;
        }
        self.advance()
    }

    /// Only valid while `Running`; no time elapses while paused.
    pub fn pause(&mut self) -> Option<Event> {
        if self.state != EngineState::Running {
            return None;
        }
        self.state = EngineState::Paused;
        Some(Event::TimerPaused {
            seconds_remaining: self.seconds_remaining(),
            at: Utc::now(),
        })
    }

    /// Only valid while `Paused`; the countdown resumes from the
    /// preserved remaining seconds.
    pub fn resume(&mut self) -> Option<Event> {
        if self.state != EngineState::Paused {
            return None;
        }
        self.state = EngineState::Running;
        Some(Event::TimerResumed {
            seconds_remaining: self.seconds_remaining(),
            at: Utc::now(),
        })
    }

    /// Advance to the next step immediately, discarding the remaining time
    /// of the current one. Valid while `Running` or `Paused`; on the last
    /// step this completes the routine exactly like a natural expiry.
    pub fn skip(&mut self) -> Option<Event> {
        if !matches!(self.state, EngineState::Running | EngineState::Paused) {
            return None;
        }
        let from = self.step_index();
        let event = self.advance()?;
        match event {
            Event::StepChanged {
                step_index: to_step,
                at,
                ..
            } => Some(Event::StepSkipped {
                from_step: from,
                to_step,
                at,
            }),
            completed => Some(completed),
        }
    }

    /// Discard the session and return to `Idle`. Valid in any non-idle
    /// state; nothing is recorded. Subsequent ticks have no effect until
    /// the next `start`.
    pub fn abort(&mut self) -> Option<Event> {
        if self.state == EngineState::Idle {
            return None;
        }
        let step_index = self.step_index();
        self.state = EngineState::Idle;
        self.session = None;
        Some(Event::RoutineAborted {
            step_index,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Enter the next step, or complete when on the last one. Entering a
    /// step always resets the countdown to that step's full duration; a
    /// paused engine stays paused on the new step.
    fn advance(&mut self) -> Option<Event> {
        let session = self.session.as_mut()?;
        let next = session.step_index + 1;
        match session.routine.steps.get(next) {
            Some(step) => {
                session.step_index = next;
                session.seconds_remaining = step.duration_secs();
                Some(Event::StepChanged {
                    step_index: next,
                    step_name: step.name.clone(),
                    duration_secs: step.duration_secs(),
                    at: Utc::now(),
                })
            }
            None => {
                session.seconds_remaining = 0;
                self.state = EngineState::Completed;
                Some(Event::RoutineCompleted {
                    routine_id: session.routine.id.clone(),
                    at: Utc::now(),
                })
            }
        }
    }
}

impl Default for RoutineEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routine(minutes: &[u64]) -> Routine {
        let mut r = Routine::custom("Test");
        r.steps = minutes
            .iter()
            .enumerate()
            .map(|(i, &m)| Step::new(format!("step {i}"), m))
            .collect();
        r
    }

    #[test]
    fn start_rejects_empty_routine() {
        let mut engine = RoutineEngine::new();
        let mut empty = Routine::custom("Vide");
        empty.steps.clear();
        assert!(engine.start(empty).is_err());
        assert_eq!(engine.state(), EngineState::Idle);
        assert!(engine.tick().is_none());
    }

    #[test]
    fn start_enters_first_step() {
        let mut engine = RoutineEngine::new();
        engine.start(routine(&[5, 4])).unwrap();
        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(engine.step_index(), 0);
        assert_eq!(engine.seconds_remaining(), 300);
    }

    #[test]
    fn normative_two_step_scenario() {
        // Steps [5 min, 4 min]: 300 ticks reach step 1 with 240 s left,
        // 240 more complete the routine.
        let mut engine = RoutineEngine::new();
        engine.start(routine(&[5, 4])).unwrap();

        for _ in 0..299 {
            assert!(engine.tick().is_none());
        }
        let event = engine.tick().expect("step change on tick 300");
        assert!(matches!(event, Event::StepChanged { step_index: 1, .. }));
        assert_eq!(engine.step_index(), 1);
        assert_eq!(engine.seconds_remaining(), 240);

        for _ in 0..239 {
            assert!(engine.tick().is_none());
        }
        let event = engine.tick().expect("completion on tick 540");
        assert!(matches!(event, Event::RoutineCompleted { .. }));
        assert_eq!(engine.state(), EngineState::Completed);
        assert_eq!(engine.seconds_remaining(), 0);
    }

    #[test]
    fn completes_exactly_once_with_no_further_events() {
        let mut engine = RoutineEngine::new();
        let r = routine(&[1, 2]);
        let total = r.total_duration_secs();
        engine.start(r).unwrap();

        let mut completions = 0;
        for _ in 0..total {
            if let Some(Event::RoutineCompleted { .. }) = engine.tick() {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(engine.state(), EngineState::Completed);
        for _ in 0..120 {
            assert!(engine.tick().is_none());
        }
    }

    #[test]
    fn pause_resume_preserves_remaining_seconds() {
        let mut engine = RoutineEngine::new();
        engine.start(routine(&[5])).unwrap();
        engine.tick();
        let before = engine.seconds_remaining();

        assert!(engine.pause().is_some());
        assert_eq!(engine.state(), EngineState::Paused);
        for _ in 0..50 {
            assert!(engine.tick().is_none());
        }
        assert!(engine.resume().is_some());
        assert_eq!(engine.seconds_remaining(), before);
    }

    #[test]
    fn invalid_transitions_are_noops() {
        let mut engine = RoutineEngine::new();
        assert!(engine.pause().is_none());
        assert!(engine.resume().is_none());
        assert!(engine.skip().is_none());
        assert!(engine.abort().is_none());

        engine.start(routine(&[5])).unwrap();
        assert!(engine.resume().is_none());
        assert_eq!(engine.state(), EngineState::Running);

        engine.pause();
        assert!(engine.pause().is_none());
        assert_eq!(engine.state(), EngineState::Paused);
    }

    #[test]
    fn skip_advances_and_discards_remaining_time() {
        let mut engine = RoutineEngine::new();
        engine.start(routine(&[5, 4])).unwrap();
        engine.tick();

        let event = engine.skip().unwrap();
        assert!(matches!(
            event,
            Event::StepSkipped {
                from_step: 0,
                to_step: 1,
                ..
            }
        ));
        assert_eq!(engine.seconds_remaining(), 240);
    }

    #[test]
    fn skip_while_paused_stays_paused_on_next_step() {
        let mut engine = RoutineEngine::new();
        engine.start(routine(&[5, 4])).unwrap();
        engine.pause();
        engine.skip().unwrap();
        assert_eq!(engine.state(), EngineState::Paused);
        assert_eq!(engine.step_index(), 1);
        assert!(engine.tick().is_none());
        assert!(engine.resume().is_some());
        assert_eq!(engine.seconds_remaining(), 240);
    }

    #[test]
    fn skip_on_last_step_equals_natural_completion() {
        let mut engine = RoutineEngine::new();
        engine.start(routine(&[5, 4])).unwrap();
        engine.skip();
        let event = engine.skip().unwrap();
        assert!(matches!(event, Event::RoutineCompleted { .. }));
        assert_eq!(engine.state(), EngineState::Completed);
        assert_eq!(engine.seconds_remaining(), 0);
    }

    #[test]
    fn abort_discards_session_and_disarms_ticking() {
        let mut engine = RoutineEngine::new();
        engine.start(routine(&[5, 4])).unwrap();
        engine.tick();
        engine.pause();

        let event = engine.abort().unwrap();
        assert!(matches!(event, Event::RoutineAborted { step_index: 0, .. }));
        assert_eq!(engine.state(), EngineState::Idle);
        assert!(engine.routine().is_none());
        assert!(engine.tick().is_none());
        assert_eq!(engine.seconds_remaining(), 0);
    }

    #[test]
    fn zero_duration_step_advances_on_next_tick() {
        let mut engine = RoutineEngine::new();
        engine.start(routine(&[0, 1])).unwrap();
        assert_eq!(engine.seconds_remaining(), 0);
        let event = engine.tick().expect("immediate advance");
        assert!(matches!(event, Event::StepChanged { step_index: 1, .. }));
        assert_eq!(engine.seconds_remaining(), 60);
    }

    #[test]
    fn step_progress_is_clamped_and_zero_for_zero_duration() {
        let mut engine = RoutineEngine::new();
        assert_eq!(engine.step_progress(), 0.0);

        engine.start(routine(&[0])).unwrap();
        assert_eq!(engine.step_progress(), 0.0);

        engine.start(routine(&[1])).unwrap();
        for _ in 0..30 {
            engine.tick();
        }
        assert!((engine.step_progress() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn routine_progress_reaches_100_on_completion() {
        let mut engine = RoutineEngine::new();
        engine.start(routine(&[1, 1])).unwrap();
        assert_eq!(engine.routine_progress_pct(), 0.0);
        engine.skip();
        assert_eq!(engine.routine_progress_pct(), 50.0);
        engine.skip();
        assert_eq!(engine.routine_progress_pct(), 100.0);
    }

    #[test]
    fn snapshot_reflects_current_state() {
        let mut engine = RoutineEngine::new();
        engine.start(routine(&[5, 4])).unwrap();
        match engine.snapshot() {
            Event::StateSnapshot {
                state,
                step_index,
                step_count,
                seconds_remaining,
                step_total_secs,
                ..
            } => {
                assert_eq!(state, EngineState::Running);
                assert_eq!(step_index, 0);
                assert_eq!(step_count, 2);
                assert_eq!(seconds_remaining, 300);
                assert_eq!(step_total_secs, 300);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }

    #[test]
    fn engine_round_trips_through_serde() {
        let mut engine = RoutineEngine::new();
        engine.start(routine(&[5, 4])).unwrap();
        for _ in 0..10 {
            engine.tick();
        }
        let json = serde_json::to_string(&engine).unwrap();
        let mut restored: RoutineEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.state(), EngineState::Running);
        assert_eq!(restored.seconds_remaining(), 290);
        restored.tick();
        assert_eq!(restored.seconds_remaining(), 289);
    }
}
