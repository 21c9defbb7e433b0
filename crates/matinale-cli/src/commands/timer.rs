use chrono::{DateTime, Utc};
use clap::Subcommand;
use matinale_core::{Database, EngineState, Event, RoutineEngine};

const ENGINE_KEY: &str = "routine_engine";
const LAST_TICK_KEY: &str = "routine_engine_last_tick";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a routine run
    Start {
        /// Routine id (see `routine list`)
        routine_id: String,
    },
    /// Pause the countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Skip to the next step, discarding remaining time
    Skip,
    /// Abort the run; nothing is recorded
    Abort,
    /// Print the current timer state as JSON
    Status,
}

fn load_engine(db: &Database) -> RoutineEngine {
    if let Ok(Some(json)) = db.kv_get(ENGINE_KEY) {
        if let Ok(engine) = serde_json::from_str::<RoutineEngine>(&json) {
            return engine;
        }
    }
    RoutineEngine::new()
}

fn save_engine(db: &Database, engine: &RoutineEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    db.kv_set(ENGINE_KEY, &json)?;
    Ok(())
}

/// Deliver the whole seconds elapsed since the last invocation as ticks.
///
/// The engine counts discrete seconds; the CLI only wakes up when invoked,
/// so wall-clock time is adapted here. Ticks stop as soon as the engine
/// leaves `Running`.
fn catch_up(
    db: &Database,
    engine: &mut RoutineEngine,
) -> Result<Vec<Event>, Box<dyn std::error::Error>> {
    let now = Utc::now();
    let mut events = Vec::new();
    if engine.state() == EngineState::Running {
        let last = db
            .kv_get(LAST_TICK_KEY)?
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));
        if let Some(last) = last {
            let elapsed = (now - last).num_seconds().max(0) as u64;
            for _ in 0..elapsed {
                if let Some(event) = engine.tick() {
                    events.push(event);
                }
                if engine.state() != EngineState::Running {
                    break;
                }
            }
        }
    }
    db.kv_set(LAST_TICK_KEY, &now.to_rfc3339())?;
    Ok(events)
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut engine = load_engine(&db);

    for event in catch_up(&db, &mut engine)? {
        println!("{}", serde_json::to_string_pretty(&event)?);
    }

    match action {
        TimerAction::Start { routine_id } => {
            let routine = db.require_routine(&routine_id)?;
            let event = engine.start(routine)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Pause => match engine.pause() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
        },
        TimerAction::Resume => match engine.resume() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
        },
        TimerAction::Skip => match engine.skip() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
        },
        TimerAction::Abort => {
            match engine.abort() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
            }
            // No orphaned countdown: the next invocation starts from a
            // clean slate.
            db.kv_delete(LAST_TICK_KEY)?;
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
    }

    save_engine(&db, &engine)?;
    Ok(())
}
