use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use sp_api::{load_scenarios, LoadReport};
use sp_core::ScenarioError;

mod agent;
mod boundary_runner;
mod cli_args;
mod error_map;
mod line_shell;
mod models;
mod tui;
mod tui_actions;
mod tui_render;
mod tui_state;

pub(crate) use boundary_runner::{emit_boundary, run_to_boundary};
pub(crate) use cli_args::{AgentArgs, AgentCommand, Cli, Mode, PlayArgs};
pub(crate) use error_map::{emit_error, json_string, map_shell_io, map_tui_io};
pub(crate) use line_shell::run_line_mode_with_io;
pub(crate) use models::{BoundaryEvent, BoundaryResult, END_OF_SCENARIO_MESSAGE};

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let _ = env_logger::try_init();

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, ScenarioError> {
    let scenarios_dir = Path::new(&cli.scenarios_dir);
    log::debug!("using scenarios directory {}", scenarios_dir.display());

    match cli.command.unwrap_or(Mode::Line) {
        Mode::Line => run_line_mode(&load_scenarios(scenarios_dir)),
        Mode::Tui => tui::run_tui_mode(&load_scenarios(scenarios_dir)),
        Mode::Agent(args) => agent::run_agent(args, scenarios_dir),
    }
}

fn run_line_mode(report: &LoadReport) -> Result<i32, ScenarioError> {
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut writer = std::io::stdout().lock();
    run_line_mode_with_io(report, &mut reader, &mut writer)
}

#[cfg(test)]
mod cli_test_support;
#[cfg(test)]
mod tests;
