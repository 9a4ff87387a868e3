use std::path::Path;

use sp_api::create_engine;
use sp_core::{DiagnosticKind, EngineOutput};

use crate::source::{read_scenario, read_test_case};
use crate::{ExpectedEvent, SpToolError, TestAction, TestCase};

const MAX_STEPS: usize = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub observed_events: Vec<ExpectedEvent>,
    pub diagnostics: Vec<DiagnosticKind>,
    pub consumed_actions: usize,
}

pub fn run_case(example_dir: &Path, case: &TestCase) -> Result<RunReport, SpToolError> {
    let (loaded, diagnostics) = read_scenario(example_dir, case)?;
    let diagnostics = diagnostics
        .iter()
        .map(|diagnostic| diagnostic.kind)
        .collect::<Vec<_>>();
    let mut engine = create_engine(&loaded);

    let mut observed_events = Vec::new();
    let mut action_index = 0usize;

    for _ in 0..MAX_STEPS {
        match engine.next_output()? {
            EngineOutput::Text { text, .. } => {
                observed_events.push(ExpectedEvent::Text { text });
            }
            EngineOutput::Choices { items } => {
                let choices = items.into_iter().map(|item| item.label).collect();
                observed_events.push(ExpectedEvent::Choices { choices });
                let event_index = observed_events.len() - 1;
                let TestAction::Choose { index } = case
                    .actions
                    .get(action_index)
                    .ok_or(SpToolError::MissingAction { event_index })?;
                engine.choose(*index)?;
                action_index += 1;
            }
            EngineOutput::End { reason } => {
                observed_events.push(ExpectedEvent::End {
                    reason: reason.code().to_string(),
                });
                if action_index != case.actions.len() {
                    return Err(SpToolError::UnusedActions {
                        used: action_index,
                        total: case.actions.len(),
                    });
                }
                return Ok(RunReport {
                    observed_events,
                    diagnostics,
                    consumed_actions: action_index,
                });
            }
        }
    }

    Err(SpToolError::GuardExceeded {
        max_steps: MAX_STEPS,
    })
}

pub fn assert_case(example_dir: &Path, case_path: &Path) -> Result<(), SpToolError> {
    let case = read_test_case(case_path)?;
    let report = run_case(example_dir, &case)?;

    if report.diagnostics != case.expected_diagnostics {
        return Err(SpToolError::DiagnosticMismatch {
            expected: case.expected_diagnostics,
            actual: report.diagnostics,
        });
    }

    if report.observed_events.len() != case.expected_events.len() {
        let observed = serde_json::to_string_pretty(&report.observed_events)
            .map_err(SpToolError::EventSerialize)?;
        return Err(SpToolError::EventCountMismatch {
            expected: case.expected_events.len(),
            actual: report.observed_events.len(),
            observed,
        });
    }

    for (index, (expected, actual)) in case
        .expected_events
        .iter()
        .zip(report.observed_events.iter())
        .enumerate()
    {
        if expected != actual {
            let expected = serde_json::to_string(expected).map_err(SpToolError::EventSerialize)?;
            let actual = serde_json::to_string(actual).map_err(SpToolError::EventSerialize)?;
            return Err(SpToolError::EventMismatch {
                index,
                expected,
                actual,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod runner_tests {
    use super::*;

    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    const MANOR: &str = "The Haunted Manor\nYou stand before a manor.->Enter:1,Leave:2\nYou are inside. The door creaks shut.\nYou walk away safely.\n";

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should move forward")
            .as_nanos();
        std::env::temp_dir().join(format!("sp-tool-runner-{}-{}", name, nanos))
    }

    fn write_file(path: &Path, content: &str) {
        let parent = path.parent().expect("path should have parent");
        fs::create_dir_all(parent).expect("parent dir should be created");
        fs::write(path, content).expect("file should be written");
    }

    fn case_with(actions: Vec<TestAction>, expected_events: Vec<ExpectedEvent>) -> TestCase {
        TestCase {
            schema_version: crate::TESTCASE_SCHEMA_V1.to_string(),
            scenario_file: "scenario.txt".to_string(),
            actions,
            expected_events,
            expected_diagnostics: Vec::new(),
        }
    }

    fn text(value: &str) -> ExpectedEvent {
        ExpectedEvent::Text {
            text: value.to_string(),
        }
    }

    #[test]
    fn run_case_follows_choose_actions() {
        let root = temp_dir("manor");
        write_file(&root.join("scenario.txt"), MANOR);

        let case = case_with(
            vec![TestAction::Choose { index: 0 }],
            vec![
                text("You stand before a manor."),
                ExpectedEvent::Choices {
                    choices: vec!["Enter".to_string(), "Leave".to_string()],
                },
                text("You are inside. The door creaks shut."),
                ExpectedEvent::End {
                    reason: "TERMINAL_BRANCH".to_string(),
                },
            ],
        );
        let report = run_case(&root, &case).expect("run should pass");
        assert_eq!(report.consumed_actions, 1);
        assert_eq!(report.observed_events, case.expected_events);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn run_case_reports_missing_unused_and_invalid_actions() {
        let root = temp_dir("actions");
        write_file(&root.join("scenario.txt"), MANOR);

        let missing = run_case(&root, &case_with(Vec::new(), Vec::new()))
            .expect_err("missing action should fail");
        assert!(matches!(
            missing,
            SpToolError::MissingAction { event_index: 1 }
        ));

        let unused = run_case(
            &root,
            &case_with(
                vec![TestAction::Choose { index: 1 }, TestAction::Choose { index: 0 }],
                Vec::new(),
            ),
        )
        .expect_err("unused action should fail");
        assert!(matches!(
            unused,
            SpToolError::UnusedActions { used: 1, total: 2 }
        ));

        let invalid = run_case(
            &root,
            &case_with(vec![TestAction::Choose { index: 9 }], Vec::new()),
        )
        .expect_err("invalid choose should fail");
        assert!(matches!(invalid, SpToolError::Engine(_)));
    }

    #[test]
    fn run_case_reports_guard_exceeded_on_endless_loop() {
        let root = temp_dir("guard");
        write_file(&root.join("scenario.txt"), "Loop\nHall->Again:0");

        let actions = (0..MAX_STEPS)
            .map(|_| TestAction::Choose { index: 0 })
            .collect();
        let error = run_case(&root, &case_with(actions, Vec::new())).expect_err("guard should fail");
        assert!(matches!(error, SpToolError::GuardExceeded { .. }));
    }

    #[test]
    fn assert_case_checks_diagnostics_then_events() {
        let root = temp_dir("assert");
        write_file(&root.join("scenario.txt"), "Rough\nStart->Go:1,Bad:x\nDone");

        let diagnostics_case = root.join("diagnostics.json");
        write_file(
            &diagnostics_case,
            r#"{"schemaVersion":"sp-tool-case.v1","actions":[{"kind":"choose","index":0}]}"#,
        );
        assert!(matches!(
            assert_case(&root, &diagnostics_case).expect_err("diagnostics should differ"),
            SpToolError::DiagnosticMismatch { .. }
        ));

        let count_case = root.join("count.json");
        write_file(
            &count_case,
            r#"{
  "schemaVersion":"sp-tool-case.v1",
  "actions":[{"kind":"choose","index":0}],
  "expectedDiagnostics":["malformedOption"],
  "expectedEvents":[{"kind":"end","reason":"TERMINAL_BRANCH"}]
}"#,
        );
        assert!(matches!(
            assert_case(&root, &count_case).expect_err("count should differ"),
            SpToolError::EventCountMismatch { .. }
        ));

        let value_case = root.join("value.json");
        write_file(
            &value_case,
            r#"{
  "schemaVersion":"sp-tool-case.v1",
  "actions":[{"kind":"choose","index":0}],
  "expectedDiagnostics":["malformedOption"],
  "expectedEvents":[
    {"kind":"text","text":"Start"},
    {"kind":"choices","choices":["Go"]},
    {"kind":"text","text":"Wrong"},
    {"kind":"end","reason":"TERMINAL_BRANCH"}
  ]
}"#,
        );
        assert!(matches!(
            assert_case(&root, &value_case).expect_err("value should differ"),
            SpToolError::EventMismatch { index: 2, .. }
        ));
    }

    #[test]
    fn assert_case_passes_with_matching_case() {
        let root = temp_dir("assert-pass");
        write_file(&root.join("scenario.txt"), "Edge\nStart->Fall:99");
        let case_path = root.join("testcase.json");
        write_file(
            &case_path,
            r#"{
  "schemaVersion":"sp-tool-case.v1",
  "actions":[{"kind":"choose","index":0}],
  "expectedEvents":[
    {"kind":"text","text":"Start"},
    {"kind":"choices","choices":["Fall"]},
    {"kind":"end","reason":"OUT_OF_RANGE"}
  ]
}"#,
        );

        assert_case(&root, &case_path).expect("assert should pass");
    }
}
