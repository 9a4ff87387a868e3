use sp_core::{EngineOutput, ScenarioError};
use sp_runtime::ScenarioEngine;

use crate::{json_string, BoundaryEvent, BoundaryResult};

/// Advances until the engine waits for a choice or ends, collecting the
/// descriptions shown on the way.
pub(crate) fn run_to_boundary(
    engine: &mut ScenarioEngine,
) -> Result<BoundaryResult, ScenarioError> {
    let mut texts = Vec::new();

    loop {
        match engine.next_output()? {
            EngineOutput::Text { text, .. } => texts.push(text),
            EngineOutput::Choices { items } => {
                return Ok(BoundaryResult {
                    event: BoundaryEvent::Choices,
                    texts,
                    choices: items
                        .into_iter()
                        .map(|item| (item.index, item.label))
                        .collect(),
                    end_reason: None,
                })
            }
            EngineOutput::End { reason } => {
                return Ok(BoundaryResult {
                    event: BoundaryEvent::End,
                    texts,
                    choices: Vec::new(),
                    end_reason: Some(reason),
                })
            }
        }
    }
}

pub(crate) fn format_boundary(boundary: &BoundaryResult, trail: &[usize]) -> Vec<String> {
    let mut lines = vec!["RESULT:OK".to_string()];
    match boundary.event {
        BoundaryEvent::Choices => lines.push("EVENT:CHOICES".to_string()),
        BoundaryEvent::End => lines.push("EVENT:END".to_string()),
    }

    for text in &boundary.texts {
        lines.push(format!("TEXT_JSON:{}", json_string(text)));
    }

    // numbered from 1, like the console menus and --choices
    for (index, label) in &boundary.choices {
        lines.push(format!("CHOICE:{}|{}", index + 1, json_string(label)));
    }

    if let Some(reason) = &boundary.end_reason {
        lines.push(format!("END_REASON:{}", reason.code()));
    }

    lines.push(format!(
        "TRAIL:{}",
        trail
            .iter()
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(",")
    ));
    lines
}

pub(crate) fn emit_boundary(boundary: &BoundaryResult, trail: &[usize]) {
    for line in format_boundary(boundary, trail) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod boundary_runner_tests {
    use super::*;
    use crate::cli_test_support::*;

    #[test]
    fn run_to_boundary_stops_at_first_menu() {
        let mut engine = engine_from_text(MANOR);
        let boundary = run_to_boundary(&mut engine).expect("boundary should resolve");
        assert_eq!(boundary.event, BoundaryEvent::Choices);
        assert_eq!(boundary.texts, vec!["You stand before a manor.".to_string()]);
        assert_eq!(
            boundary.choices,
            vec![(0, "Enter".to_string()), (1, "Leave".to_string())]
        );
        assert!(boundary.end_reason.is_none());
    }

    #[test]
    fn run_to_boundary_reports_end_reason() {
        let mut engine = engine_from_text(MANOR);
        run_to_boundary(&mut engine).expect("first boundary");
        engine.choose(1).expect("leave");
        let boundary = run_to_boundary(&mut engine).expect("second boundary");
        assert_eq!(boundary.event, BoundaryEvent::End);
        assert_eq!(boundary.texts, vec!["You walk away safely.".to_string()]);
        assert_eq!(
            boundary.end_reason.as_ref().map(|reason| reason.code()),
            Some("TERMINAL_BRANCH")
        );
    }

    #[test]
    fn format_boundary_uses_one_based_choices_and_json_text() {
        let mut engine = engine_from_text(MANOR);
        let boundary = run_to_boundary(&mut engine).expect("boundary");
        let lines = format_boundary(&boundary, engine.trail());
        assert_eq!(
            lines,
            vec![
                "RESULT:OK".to_string(),
                "EVENT:CHOICES".to_string(),
                "TEXT_JSON:\"You stand before a manor.\"".to_string(),
                "CHOICE:1|\"Enter\"".to_string(),
                "CHOICE:2|\"Leave\"".to_string(),
                "TRAIL:0".to_string(),
            ]
        );
    }
}
