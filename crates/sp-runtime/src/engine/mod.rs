use sp_core::{ChoiceItem, EndReason, Scenario};

mod lifecycle;
mod play;
mod step;

pub use play::{play_scenario, PlayOutcome, PlayerShell};

/// Visits kept in the trail. A looping scenario keeps only its latest ones.
pub const TRAIL_LIMIT: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepPhase {
    Describe,
    Decide,
}

/// Pull-based walker over one scenario. Starts at branch 0; each branch is
/// first described, then either offers its options or ends the playthrough.
#[derive(Debug, Clone)]
pub struct ScenarioEngine {
    scenario: Scenario,
    current_index: i64,
    phase: StepPhase,
    pending_choice: Option<Vec<ChoiceItem>>,
    ended: Option<EndReason>,
    trail: Vec<usize>,
}
