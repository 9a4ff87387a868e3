use std::fs;
use std::path::Path;

use sp_api::{load_scenario_file, LoadedScenario};
use sp_core::Diagnostic;

use crate::{SpToolError, TestCase, TESTCASE_SCHEMA_V1};

/// Loads the case's scenario file from `example_dir` together with the
/// parser warnings it raised.
pub fn read_scenario(
    example_dir: &Path,
    case: &TestCase,
) -> Result<(LoadedScenario, Vec<Diagnostic>), SpToolError> {
    let path = example_dir.join(&case.scenario_file);
    load_scenario_file(&path).map_err(|diagnostic| SpToolError::ScenarioLoad {
        path,
        reason: diagnostic.reason,
    })
}

pub fn read_test_case(case_path: &Path) -> Result<TestCase, SpToolError> {
    let raw = fs::read_to_string(case_path).map_err(|source| SpToolError::ReadFile {
        path: case_path.to_path_buf(),
        source,
    })?;
    let parsed: TestCase = serde_json::from_str(&raw).map_err(|source| SpToolError::ParseCase {
        path: case_path.to_path_buf(),
        source,
    })?;

    if parsed.schema_version != TESTCASE_SCHEMA_V1 {
        return Err(SpToolError::InvalidSchemaVersion {
            expected: TESTCASE_SCHEMA_V1.to_string(),
            found: parsed.schema_version,
        });
    }

    Ok(parsed)
}
