use sp_core::{ChoiceItem, EndReason, EngineOutput, ScenarioError};

use super::{ScenarioEngine, StepPhase, TRAIL_LIMIT};

impl ScenarioEngine {
    pub fn next_output(&mut self) -> Result<EngineOutput, ScenarioError> {
        if let Some(reason) = &self.ended {
            return Ok(EngineOutput::End {
                reason: reason.clone(),
            });
        }

        if let Some(items) = &self.pending_choice {
            return Ok(EngineOutput::Choices {
                items: items.clone(),
            });
        }

        let index = self.current_index;
        let Some(branch) = self.scenario.branch(index) else {
            let reason = if self.scenario.branches.is_empty() && index == 0 {
                EndReason::NoBranches
            } else {
                EndReason::OutOfRange { index }
            };
            return Ok(self.finish(reason));
        };
        // `branch` resolved, so the index is in 0..branches.len()
        let branch_index = index as usize;

        match self.phase {
            StepPhase::Describe => {
                let text = branch.description.clone();
                self.phase = StepPhase::Decide;
                self.record_visit(branch_index);
                Ok(EngineOutput::Text { text, branch_index })
            }
            StepPhase::Decide => {
                if branch.is_terminal() {
                    return Ok(self.finish(EndReason::TerminalBranch {
                        index: branch_index,
                    }));
                }

                let items = branch
                    .options
                    .iter()
                    .enumerate()
                    .map(|(index, option)| ChoiceItem {
                        index,
                        label: option.label.clone(),
                        target: option.target,
                    })
                    .collect::<Vec<_>>();
                self.pending_choice = Some(items.clone());
                Ok(EngineOutput::Choices { items })
            }
        }
    }

    /// Takes the pending option at `index` (0-based). The target is not
    /// checked here; an out-of-range jump ends the walk on the next step.
    pub fn choose(&mut self, index: usize) -> Result<(), ScenarioError> {
        let Some(items) = &self.pending_choice else {
            return Err(ScenarioError::new(
                "ENGINE_NO_PENDING_CHOICE",
                "No pending choice is available.",
            ));
        };

        let Some(item) = items.get(index) else {
            return Err(ScenarioError::new(
                "ENGINE_CHOICE_INDEX",
                format!("Choice index \"{}\" is out of range.", index),
            ));
        };

        log::debug!(
            "choice \"{}\" jumps from {} to {}",
            item.label,
            self.current_index,
            item.target
        );
        self.current_index = i64::from(item.target);
        self.phase = StepPhase::Describe;
        self.pending_choice = None;
        Ok(())
    }

    fn record_visit(&mut self, branch_index: usize) {
        self.trail.push(branch_index);
        if self.trail.len() > TRAIL_LIMIT {
            let excess = self.trail.len() - TRAIL_LIMIT;
            self.trail.drain(..excess);
        }
    }

    fn finish(&mut self, reason: EndReason) -> EngineOutput {
        log::debug!("scenario \"{}\" ended: {}", self.scenario.title, reason.code());
        self.ended = Some(reason.clone());
        self.pending_choice = None;
        EngineOutput::End { reason }
    }
}
