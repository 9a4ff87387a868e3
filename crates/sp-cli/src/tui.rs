use sp_api::LoadReport;
use sp_core::ScenarioError;

#[cfg(coverage)]
pub(super) fn run_tui_mode(report: &LoadReport) -> Result<i32, ScenarioError> {
    super::run_line_mode(report)
}

#[cfg(not(coverage))]
mod rich {
    use std::io;
    use std::time::{Duration, Instant};

    use crossterm::event::{self, Event, KeyEventKind};
    use crossterm::terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    };
    use crossterm::ExecutableCommand;
    use ratatui::backend::CrosstermBackend;
    use ratatui::Terminal;
    use sp_api::LoadReport;
    use sp_core::ScenarioError;
    use sp_runtime::ScenarioEngine;

    use crate::map_tui_io;
    use crate::tui_actions::handle_key;
    use crate::tui_render::render_tui;
    use crate::tui_state::TuiUiState;

    const TYPEWRITER_CHARS_PER_SECOND: usize = 60;
    const TYPEWRITER_TICK_MS: u64 = (1000 / TYPEWRITER_CHARS_PER_SECOND) as u64;

    struct TuiTerminal {
        terminal: Terminal<CrosstermBackend<io::Stdout>>,
    }

    impl TuiTerminal {
        fn new() -> Result<Self, ScenarioError> {
            enable_raw_mode().map_err(map_tui_io)?;
            io::stdout()
                .execute(EnterAlternateScreen)
                .map_err(map_tui_io)?;
            let backend = CrosstermBackend::new(io::stdout());
            let terminal = Terminal::new(backend).map_err(map_tui_io)?;
            Ok(Self { terminal })
        }
    }

    impl Drop for TuiTerminal {
        fn drop(&mut self) {
            let _ = disable_raw_mode();
            let _ = io::stdout().execute(LeaveAlternateScreen);
        }
    }

    pub(super) fn run_tui_mode(report: &LoadReport) -> Result<i32, ScenarioError> {
        let mut terminal = TuiTerminal::new()?;
        let mut engine: Option<ScenarioEngine> = None;
        let mut ui = TuiUiState {
            status: "ready".to_string(),
            ..TuiUiState::default()
        };

        let tick = Duration::from_millis(TYPEWRITER_TICK_MS);
        let mut last_tick = Instant::now();

        loop {
            terminal
                .terminal
                .draw(|frame| render_tui(frame, &ui, report))
                .map_err(map_tui_io)?;

            if last_tick.elapsed() >= tick && ui.advance_typewriter() {
                last_tick = Instant::now();
            }

            let timeout = tick.saturating_sub(last_tick.elapsed());
            if !event::poll(timeout).map_err(map_tui_io)? {
                continue;
            }

            if let Event::Key(key) = event::read().map_err(map_tui_io)? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match handle_key(key, report, &mut engine, &mut ui) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(error) => {
                        log::warn!("tui action failed: {}", error);
                        ui.status = error.message;
                    }
                }
            }
        }

        Ok(0)
    }
}

/// Full-screen player. Without a terminal on both ends, or with nothing to
/// pick, this is the line shell.
#[cfg(not(coverage))]
pub(super) fn run_tui_mode(report: &LoadReport) -> Result<i32, ScenarioError> {
    use std::io::IsTerminal;

    if report.is_empty() || !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        return super::run_line_mode(report);
    }
    rich::run_tui_mode(report)
}
