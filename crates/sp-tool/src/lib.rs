mod case;
mod runner;
mod source;

pub use case::{ExpectedEvent, TestAction, TestCase, TESTCASE_SCHEMA_V1};
pub use runner::{assert_case, run_case, RunReport};
pub use source::{read_scenario, read_test_case};

use std::path::PathBuf;

use sp_core::DiagnosticKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpToolError {
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse testcase {path}: {source}")]
    ParseCase {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid testcase schema version \"{found}\", expected \"{expected}\".")]
    InvalidSchemaVersion { expected: String, found: String },
    #[error("Scenario {path} did not load: {reason}")]
    ScenarioLoad { path: PathBuf, reason: String },
    #[error("Engine error: {0}")]
    Engine(#[from] sp_core::ScenarioError),
    #[error("Action missing at event index {event_index}: expected choose.")]
    MissingAction { event_index: usize },
    #[error("Unused actions: used {used} of {total}.")]
    UnusedActions { used: usize, total: usize },
    #[error("Guard exceeded: max_steps={max_steps}.")]
    GuardExceeded { max_steps: usize },
    #[error("Expected event count {expected}, actual {actual}. observed={observed}")]
    EventCountMismatch {
        expected: usize,
        actual: usize,
        observed: String,
    },
    #[error("Event mismatch at index {index}. expected={expected} actual={actual}")]
    EventMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
    #[error("Diagnostics mismatch. expected={expected:?} actual={actual:?}")]
    DiagnosticMismatch {
        expected: Vec<DiagnosticKind>,
        actual: Vec<DiagnosticKind>,
    },
    #[error("Failed to serialize event for diff: {0}")]
    EventSerialize(serde_json::Error),
}
