mod engine;

pub use engine::{EngineState, RoutineEngine};
