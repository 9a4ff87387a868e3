use super::*;
use crate::cli_test_support::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("args should parse")
}

#[test]
fn no_arguments_means_line_mode_over_default_directory() {
    let cli = parse(&["sp-cli"]);
    assert_eq!(cli.scenarios_dir, "scenarios");
    assert!(cli.command.is_none());
}

#[test]
fn scenarios_dir_is_accepted_after_the_subcommand() {
    let cli = parse(&["sp-cli", "tui", "--scenarios-dir", "stories"]);
    assert_eq!(cli.scenarios_dir, "stories");
    assert!(matches!(cli.command, Some(Mode::Tui)));
}

#[test]
fn agent_play_splits_choices_on_commas() {
    let cli = parse(&["sp-cli", "agent", "play", "--scenario", "2", "--choices", "1,3,2"]);
    let Some(Mode::Agent(AgentArgs {
        command: AgentCommand::Play(args),
    })) = cli.command
    else {
        panic!("expected agent play");
    };
    assert_eq!(args.scenario, 2);
    assert_eq!(args.choices, vec![1, 3, 2]);
}

#[test]
fn invalid_arguments_return_clap_exit_code() {
    assert_eq!(run_cli_from_args(["sp-cli", "agent", "play"]), 2);
    assert_eq!(run_cli_from_args(["sp-cli", "--bogus"]), 2);
}

#[test]
fn agent_play_rejects_out_of_range_scenario() {
    let root = temp_path("agent-scenario-index");
    write_file(&root.join("manor.txt"), MANOR);
    let error = agent::run_play(
        PlayArgs {
            scenario: 2,
            choices: Vec::new(),
        },
        &root,
    )
    .expect_err("scenario 2 should not exist");
    assert_eq!(error.code, "CLI_SCENARIO_INDEX");

    let error = agent::run_play(
        PlayArgs {
            scenario: 0,
            choices: Vec::new(),
        },
        &root,
    )
    .expect_err("scenario numbers start at 1");
    assert_eq!(error.code, "CLI_SCENARIO_INDEX");
}

#[test]
fn agent_play_rejects_bad_and_unused_choices() {
    let root = temp_path("agent-choices");
    write_file(&root.join("manor.txt"), MANOR);

    let error = agent::run_play(
        PlayArgs {
            scenario: 1,
            choices: vec![3],
        },
        &root,
    )
    .expect_err("choice 3 should not exist");
    assert_eq!(error.code, "ENGINE_CHOICE_INDEX");

    let error = agent::run_play(
        PlayArgs {
            scenario: 1,
            choices: vec![0],
        },
        &root,
    )
    .expect_err("choice 0 should fail");
    assert_eq!(error.code, "CLI_CHOICE_INDEX");

    let error = agent::run_play(
        PlayArgs {
            scenario: 1,
            choices: vec![2, 1],
        },
        &root,
    )
    .expect_err("scenario ends after one choice");
    assert_eq!(error.code, "CLI_UNUSED_CHOICES");
}

#[test]
fn agent_play_requires_scenarios() {
    let root = temp_path("agent-empty");
    let error = agent::run_play(
        PlayArgs {
            scenario: 1,
            choices: Vec::new(),
        },
        &root,
    )
    .expect_err("empty directory should fail");
    assert_eq!(error.code, "CLI_NO_SCENARIOS");
}

#[test]
fn agent_play_reaches_end_through_choices() {
    let root = temp_path("agent-end");
    write_file(&root.join("manor.txt"), MANOR);
    let code = agent::run_play(
        PlayArgs {
            scenario: 1,
            choices: vec![1],
        },
        &root,
    )
    .expect("play should succeed");
    assert_eq!(code, 0);
}
