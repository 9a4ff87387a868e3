mod engine;

pub use engine::{play_scenario, PlayOutcome, PlayerShell, ScenarioEngine, TRAIL_LIMIT};
