use std::fs;
use std::path::Path;

use sp_core::{Diagnostic, DiagnosticKind, Scenario};
use sp_parser::parse_scenario_text;
use sp_runtime::ScenarioEngine;
use walkdir::WalkDir;

pub const DEFAULT_SCENARIOS_DIR: &str = "scenarios";
pub const SCENARIO_FILE_SUFFIX: &str = ".txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedScenario {
    /// `scenario-file:<absolute path>`, stable across runs from any working
    /// directory.
    pub id: String,
    pub file_name: String,
    pub scenario: Scenario,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub scenarios: Vec<LoadedScenario>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    pub fn titles(&self) -> Vec<String> {
        self.scenarios
            .iter()
            .map(|loaded| loaded.scenario.title.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

/// Loads every `*.txt` file directly inside `scenarios_dir`. Files that are
/// empty or unreadable are skipped and reported; this never fails as a whole.
pub fn load_scenarios(scenarios_dir: &Path) -> LoadReport {
    let mut report = LoadReport::default();

    if !scenarios_dir.is_dir() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::DirectoryNotFound,
            "Scenarios directory not found.",
        )
        .with_file(scenarios_dir.display().to_string());
        log::warn!("{}", diagnostic);
        report.diagnostics.push(diagnostic);
        return report;
    }

    for entry in WalkDir::new(scenarios_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if !file_name.ends_with(SCENARIO_FILE_SUFFIX) {
            continue;
        }

        match load_scenario_file(entry.path()) {
            Ok((loaded, diagnostics)) => {
                report.diagnostics.extend(diagnostics);
                report.scenarios.push(loaded);
            }
            Err(diagnostic) => report.diagnostics.push(diagnostic),
        }
    }

    log::info!(
        "loaded {} scenarios from {} ({} diagnostics)",
        report.scenarios.len(),
        scenarios_dir.display(),
        report.diagnostics.len()
    );
    report
}

/// Reads and parses a single scenario file. A file that yields no scenario
/// comes back as the diagnostic explaining why.
pub fn load_scenario_file(
    path: &Path,
) -> Result<(LoadedScenario, Vec<Diagnostic>), Diagnostic> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let content = fs::read_to_string(path).map_err(|error| {
        log::warn!("failed to read {}: {}", path.display(), error);
        Diagnostic::new(
            DiagnosticKind::ReadFailure,
            format!("Failed to load scenario: {}", file_name),
        )
        .with_file(file_name.clone())
    })?;

    let parsed = parse_scenario_text(&file_name, &content).map_err(|error| {
        let kind = if error.code == "PARSE_EMPTY_FILE" {
            DiagnosticKind::EmptyFile
        } else {
            DiagnosticKind::ReadFailure
        };
        let diagnostic = Diagnostic::new(kind, error.message).with_file(file_name.clone());
        log::warn!("{}", diagnostic);
        diagnostic
    })?;

    Ok((
        LoadedScenario {
            id: make_scenario_id(path),
            file_name,
            scenario: parsed.scenario,
        },
        parsed.diagnostics,
    ))
}

pub fn make_scenario_id(path: &Path) -> String {
    let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    format!("scenario-file:{}", absolute.display())
}

pub fn create_engine(loaded: &LoadedScenario) -> ScenarioEngine {
    ScenarioEngine::new(loaded.scenario.clone())
}
