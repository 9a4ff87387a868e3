use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use sp_api::{load_scenario_file, LoadReport, LoadedScenario};
use sp_runtime::ScenarioEngine;

pub(crate) const MANOR: &str = "The Haunted Manor\nYou stand before a manor.->Enter:1,Leave:2\nYou are inside. The door creaks shut.\nYou walk away safely.\n";

pub(crate) fn temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time should move forward")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("sp-cli-{}-{}", name, nanos));
    fs::create_dir_all(&path).expect("temp dir should be created");
    path
}

pub(crate) fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent should be created");
    }
    fs::write(path, content).expect("file should be written");
}

/// Loads `files` in the given order, the way the directory loader would.
pub(crate) fn report_from(files: &[(&str, &str)]) -> LoadReport {
    let root = temp_path("report");
    let mut report = LoadReport::default();
    for (name, content) in files {
        let path = root.join(name);
        write_file(&path, content);
        match load_scenario_file(&path) {
            Ok((loaded, diagnostics)) => {
                report.diagnostics.extend(diagnostics);
                report.scenarios.push(loaded);
            }
            Err(diagnostic) => report.diagnostics.push(diagnostic),
        }
    }
    report
}

pub(crate) fn loaded_from_text(content: &str) -> LoadedScenario {
    let report = report_from(&[("scenario.txt", content)]);
    report
        .scenarios
        .into_iter()
        .next()
        .expect("scenario should load")
}

pub(crate) fn engine_from_text(content: &str) -> ScenarioEngine {
    sp_api::create_engine(&loaded_from_text(content))
}
