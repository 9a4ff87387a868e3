use sp_core::{EndReason, EngineOutput, ScenarioError};

use super::ScenarioEngine;

/// The interactive side of a playthrough.
pub trait PlayerShell {
    fn show_description(&mut self, text: &str) -> Result<(), ScenarioError>;

    /// Returns the 0-based position of the picked label. Implementations keep
    /// asking until the answer is valid.
    fn choose_option(&mut self, labels: &[String]) -> Result<usize, ScenarioError>;

    fn announce_end(&mut self, reason: &EndReason) -> Result<(), ScenarioError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub reason: EndReason,
    pub trail: Vec<usize>,
}

/// Drives `engine` to its end through `shell`. Any error stops the walk
/// right away and is handed back to the caller.
pub fn play_scenario(
    engine: &mut ScenarioEngine,
    shell: &mut dyn PlayerShell,
) -> Result<PlayOutcome, ScenarioError> {
    loop {
        match engine.next_output()? {
            EngineOutput::Text { text, .. } => shell.show_description(&text)?,
            EngineOutput::Choices { items } => {
                let labels = items
                    .iter()
                    .map(|item| item.label.clone())
                    .collect::<Vec<_>>();
                let picked = shell.choose_option(&labels)?;
                engine.choose(picked)?;
            }
            EngineOutput::End { reason } => {
                shell.announce_end(&reason)?;
                return Ok(PlayOutcome {
                    reason,
                    trail: engine.trail().to_vec(),
                });
            }
        }
    }
}
