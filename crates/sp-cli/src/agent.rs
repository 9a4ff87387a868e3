use std::path::Path;

use sp_api::{create_engine, load_scenarios};
use sp_core::ScenarioError;

use crate::{emit_boundary, json_string, run_to_boundary, AgentArgs, AgentCommand, BoundaryEvent, PlayArgs};

pub(super) fn run_agent(args: AgentArgs, scenarios_dir: &Path) -> Result<i32, ScenarioError> {
    match args.command {
        AgentCommand::List => run_list(scenarios_dir),
        AgentCommand::Play(args) => run_play(args, scenarios_dir),
    }
}

pub(super) fn run_list(scenarios_dir: &Path) -> Result<i32, ScenarioError> {
    let report = load_scenarios(scenarios_dir);
    println!("RESULT:OK");
    for diagnostic in &report.diagnostics {
        println!("WARNING_JSON:{}", diagnostic_json(diagnostic));
    }
    for (index, loaded) in report.scenarios.iter().enumerate() {
        println!(
            "SCENARIO:{}|{}|{}|{}",
            index + 1,
            json_string(&loaded.file_name),
            json_string(&loaded.scenario.title),
            json_string(&loaded.id)
        );
    }
    println!("SCENARIO_COUNT:{}", report.scenarios.len());
    Ok(0)
}

/// Replays `--choices` from branch 0 and prints the boundary reached after
/// the last one. Nothing is persisted between invocations.
pub(super) fn run_play(args: PlayArgs, scenarios_dir: &Path) -> Result<i32, ScenarioError> {
    let report = load_scenarios(scenarios_dir);
    if report.is_empty() {
        return Err(ScenarioError::new(
            "CLI_NO_SCENARIOS",
            format!("No scenarios found in {}", scenarios_dir.display()),
        ));
    }

    let loaded = args
        .scenario
        .checked_sub(1)
        .and_then(|index| report.scenarios.get(index))
        .ok_or_else(|| {
            ScenarioError::new(
                "CLI_SCENARIO_INDEX",
                format!(
                    "Scenario \"{}\" is out of range (1-{}).",
                    args.scenario,
                    report.scenarios.len()
                ),
            )
        })?;

    let mut engine = create_engine(loaded);
    let mut boundary = run_to_boundary(&mut engine)?;
    for (used, choice) in args.choices.iter().enumerate() {
        if boundary.event == BoundaryEvent::End {
            return Err(ScenarioError::new(
                "CLI_UNUSED_CHOICES",
                format!(
                    "Scenario ended after {} of {} choices.",
                    used,
                    args.choices.len()
                ),
            ));
        }
        let index = choice.checked_sub(1).ok_or_else(|| {
            ScenarioError::new("CLI_CHOICE_INDEX", "Choices are numbered from 1.")
        })?;
        engine.choose(index)?;
        boundary = run_to_boundary(&mut engine)?;
    }

    for diagnostic in report
        .diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.file.as_deref() == Some(loaded.file_name.as_str()))
    {
        println!("WARNING_JSON:{}", diagnostic_json(diagnostic));
    }
    println!("SCENARIO_ID:{}", json_string(&loaded.id));
    emit_boundary(&boundary, engine.trail());
    Ok(0)
}

fn diagnostic_json(diagnostic: &sp_core::Diagnostic) -> String {
    serde_json::to_string(diagnostic).unwrap_or_else(|_| json_string(&diagnostic.reason))
}
