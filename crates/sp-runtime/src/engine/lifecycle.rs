use sp_core::{EndReason, Scenario};

use super::{ScenarioEngine, StepPhase};

impl ScenarioEngine {
    pub fn new(scenario: Scenario) -> Self {
        log::debug!(
            "engine created for \"{}\" with {} branches",
            scenario.title,
            scenario.branches.len()
        );
        Self {
            scenario,
            current_index: 0,
            phase: StepPhase::Describe,
            pending_choice: None,
            ended: None,
            trail: Vec::new(),
        }
    }

    pub fn restart(&mut self) {
        self.current_index = 0;
        self.phase = StepPhase::Describe;
        self.pending_choice = None;
        self.ended = None;
        self.trail.clear();
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn current_index(&self) -> i64 {
        self.current_index
    }

    /// Branch indices described so far, in visiting order, capped at the
    /// latest `TRAIL_LIMIT` visits.
    pub fn trail(&self) -> &[usize] {
        &self.trail
    }

    pub fn end_reason(&self) -> Option<&EndReason> {
        self.ended.as_ref()
    }

    pub fn is_ended(&self) -> bool {
        self.ended.is_some()
    }

    pub fn waiting_choice(&self) -> bool {
        self.pending_choice.is_some()
    }
}
