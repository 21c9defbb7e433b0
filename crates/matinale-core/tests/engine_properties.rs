//! Property tests for the routine engine's sequencing behavior.

use proptest::prelude::*;

use matinale_core::events::Event;
use matinale_core::routine::{Routine, Step};
use matinale_core::{EngineState, RoutineEngine};

fn routine_from(minutes: Vec<u64>) -> Routine {
    let mut routine = Routine::custom("Proptest");
    routine.steps = minutes
        .iter()
        .enumerate()
        .map(|(i, &m)| Step::new(format!("step {i}"), m))
        .collect();
    routine
}

/// Short step lists with small durations keep tick counts manageable.
fn minutes_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..4, 1..6)
}

proptest! {
    /// Ticking sum(minutes) * 60 times completes exactly once, with no
    /// step-change events after completion.
    #[test]
    fn completes_after_exactly_total_seconds(minutes in minutes_strategy()) {
        let routine = routine_from(minutes);
        let total = routine.total_duration_secs();
        let mut engine = RoutineEngine::new();
        engine.start(routine).unwrap();

        let mut completions = 0;
        // A zero-duration step still consumes the tick that advances past
        // it, so completion needs at most total + steps ticks.
        let mut ticks_to_complete = None;
        for n in 0..total + 10 {
            match engine.tick() {
                Some(Event::RoutineCompleted { .. }) => {
                    completions += 1;
                    ticks_to_complete.get_or_insert(n + 1);
                }
                Some(Event::StepChanged { .. }) => {
                    prop_assert_eq!(completions, 0);
                }
                _ => {}
            }
        }
        prop_assert_eq!(completions, 1);
        prop_assert_eq!(engine.state(), EngineState::Completed);
        if engine.routine().unwrap().steps.iter().all(|s| s.duration_min > 0) {
            prop_assert_eq!(ticks_to_complete, Some(total));
        }
    }

    /// The step index never decreases and never exceeds len - 1.
    #[test]
    fn index_is_monotonic_and_bounded(minutes in minutes_strategy()) {
        let routine = routine_from(minutes);
        let len = routine.steps.len();
        let total = routine.total_duration_secs();
        let mut engine = RoutineEngine::new();
        engine.start(routine).unwrap();

        let mut last = engine.step_index();
        for _ in 0..total + 10 {
            engine.tick();
            let index = engine.step_index();
            prop_assert!(index >= last);
            prop_assert!(index < len);
            last = index;
        }
    }

    /// Pausing swallows any number of ticks without touching the countdown.
    #[test]
    fn paused_ticks_have_no_effect(
        minutes in minutes_strategy(),
        warmup in 0u64..120,
        paused_ticks in 0u64..120,
    ) {
        let routine = routine_from(minutes);
        let mut engine = RoutineEngine::new();
        engine.start(routine).unwrap();

        for _ in 0..warmup {
            engine.tick();
        }
        if engine.state() != EngineState::Running {
            return Ok(());
        }

        engine.pause().unwrap();
        let index = engine.step_index();
        let remaining = engine.seconds_remaining();
        for _ in 0..paused_ticks {
            prop_assert!(engine.tick().is_none());
        }
        engine.resume().unwrap();
        prop_assert_eq!(engine.step_index(), index);
        prop_assert_eq!(engine.seconds_remaining(), remaining);
    }

    /// Skipping through every step completes, matching natural completion.
    #[test]
    fn skipping_every_step_completes(minutes in minutes_strategy()) {
        let routine = routine_from(minutes);
        let len = routine.steps.len();
        let mut engine = RoutineEngine::new();
        engine.start(routine).unwrap();

        for _ in 0..len - 1 {
            let event = engine.skip().unwrap();
            prop_assert!(matches!(event, Event::StepSkipped { .. }), "expected StepSkipped event");
        }
        let event = engine.skip().unwrap();
        prop_assert!(matches!(event, Event::RoutineCompleted { .. }), "expected RoutineCompleted event");
        prop_assert_eq!(engine.state(), EngineState::Completed);
        prop_assert_eq!(engine.seconds_remaining(), 0);
        prop_assert!(engine.skip().is_none());
    }

    /// Abort from any point returns to Idle and disarms ticking.
    #[test]
    fn abort_always_returns_to_idle(
        minutes in minutes_strategy(),
        warmup in 0u64..120,
        pause_first in any::<bool>(),
    ) {
        let routine = routine_from(minutes);
        let mut engine = RoutineEngine::new();
        engine.start(routine).unwrap();

        for _ in 0..warmup {
            engine.tick();
        }
        if pause_first {
            engine.pause();
        }

        engine.abort().unwrap();
        prop_assert_eq!(engine.state(), EngineState::Idle);
        for _ in 0..10 {
            prop_assert!(engine.tick().is_none());
        }
        prop_assert_eq!(engine.seconds_remaining(), 0);
    }
}
