use serde::{Deserialize, Serialize};
use sp_core::DiagnosticKind;

pub const TESTCASE_SCHEMA_V1: &str = "sp-tool-case.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub schema_version: String,
    #[serde(default = "default_scenario_file")]
    pub scenario_file: String,
    #[serde(default)]
    pub actions: Vec<TestAction>,
    #[serde(default)]
    pub expected_events: Vec<ExpectedEvent>,
    /// Kinds of the parser warnings the scenario file is expected to raise,
    /// in source order.
    #[serde(default)]
    pub expected_diagnostics: Vec<DiagnosticKind>,
}

fn default_scenario_file() -> String {
    "scenario.txt".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TestAction {
    /// 0-based position in the offered menu.
    Choose { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExpectedEvent {
    Text { text: String },
    Choices { choices: Vec<String> },
    End { reason: String },
}
