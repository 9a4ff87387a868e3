use clap::{Args, Parser, Subcommand};
use sp_api::DEFAULT_SCENARIOS_DIR;

#[derive(Debug, Parser)]
#[command(name = "scenario-player")]
#[command(about = "Branching text scenario player")]
pub(crate) struct Cli {
    #[arg(long = "scenarios-dir", default_value = DEFAULT_SCENARIOS_DIR, global = true)]
    pub(crate) scenarios_dir: String,
    #[command(subcommand)]
    pub(crate) command: Option<Mode>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    /// Numbered console menus (default).
    Line,
    /// Full-screen terminal player.
    Tui,
    /// Machine-readable, non-interactive commands.
    Agent(AgentArgs),
}

#[derive(Debug, Args)]
pub(crate) struct AgentArgs {
    #[command(subcommand)]
    pub(crate) command: AgentCommand,
}

#[derive(Debug, Subcommand)]
pub(crate) enum AgentCommand {
    List,
    Play(PlayArgs),
}

#[derive(Debug, Args)]
pub(crate) struct PlayArgs {
    /// 1-based position in the scenario list.
    #[arg(long = "scenario")]
    pub(crate) scenario: usize,
    /// 1-based option numbers replayed from branch 0.
    #[arg(long = "choices", value_delimiter = ',')]
    pub(crate) choices: Vec<usize>,
}
