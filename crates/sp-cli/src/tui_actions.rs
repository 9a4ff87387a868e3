use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sp_api::{create_engine, LoadReport};
use sp_core::ScenarioError;
use sp_runtime::ScenarioEngine;

use crate::run_to_boundary;
use crate::tui_state::{TuiScreen, TuiUiState};

/// Applies one key press. Returns `true` when the player asked to quit.
pub(crate) fn handle_key(
    key: KeyEvent,
    report: &LoadReport,
    engine: &mut Option<ScenarioEngine>,
    ui: &mut TuiUiState,
) -> Result<bool, ScenarioError> {
    if key.code == KeyCode::Esc || matches!(key.code, KeyCode::Char('q')) {
        return Ok(true);
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }
    if key.code == KeyCode::Char('h') {
        ui.help_visible = !ui.help_visible;
        return Ok(false);
    }

    match ui.screen {
        TuiScreen::Picker => handle_picker_key(key, report, engine, ui),
        TuiScreen::Playback => handle_playback_key(key, engine, ui),
    }
}

fn handle_picker_key(
    key: KeyEvent,
    report: &LoadReport,
    engine: &mut Option<ScenarioEngine>,
    ui: &mut TuiUiState,
) -> Result<bool, ScenarioError> {
    if report.is_empty() {
        ui.status = "no scenarios".to_string();
        return Ok(false);
    }

    match key.code {
        KeyCode::Up | KeyCode::Down => TuiUiState::step_selection(
            &mut ui.picker_index,
            &mut ui.picker_scroll_offset,
            report.scenarios.len(),
            key.code == KeyCode::Down,
        ),
        KeyCode::Enter => {
            let loaded = report.scenarios.get(ui.picker_index).ok_or_else(|| {
                ScenarioError::new("TUI_SCENARIO_INDEX", "No scenario is selected")
            })?;
            let mut next = create_engine(loaded);
            let boundary = run_to_boundary(&mut next)?;
            *engine = Some(next);
            ui.start_playback(ui.picker_index, boundary);
            ui.status = format!("playing {}", loaded.file_name);
        }
        _ => {}
    }
    Ok(false)
}

fn handle_playback_key(
    key: KeyEvent,
    engine: &mut Option<ScenarioEngine>,
    ui: &mut TuiUiState,
) -> Result<bool, ScenarioError> {
    if key.code == KeyCode::Char('b') {
        *engine = None;
        ui.back_to_picker();
        ui.status = "ready".to_string();
        return Ok(false);
    }

    let active = engine
        .as_mut()
        .ok_or_else(|| ScenarioError::new("TUI_NO_ENGINE", "No scenario is playing"))?;

    if key.code == KeyCode::Char('r') {
        active.restart();
        let boundary = run_to_boundary(active)?;
        ui.replace_boundary(boundary);
        ui.status = "restarted".to_string();
        return Ok(false);
    }

    if ui.typing_in_progress() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            ui.flush_typewriter();
        } else {
            ui.status = "text streaming...".to_string();
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Up | KeyCode::Down => {
            if ui.choices.is_empty() {
                ui.status = "no pending choice".to_string();
                return Ok(false);
            }
            TuiUiState::step_selection(
                &mut ui.selected_choice_index,
                &mut ui.choice_scroll_offset,
                ui.choices.len(),
                key.code == KeyCode::Down,
            );
        }
        KeyCode::Enter => {
            if ui.choices.is_empty() {
                ui.status = "no pending choice".to_string();
                return Ok(false);
            }
            let selected = ui.choices.get(ui.selected_choice_index).ok_or_else(|| {
                ScenarioError::new("TUI_CHOICE_PARSE", "No choices available")
            })?;
            let label = selected.text.clone();
            active.choose(selected.index)?;
            let boundary = run_to_boundary(active)?;
            ui.append_boundary(boundary);
            ui.status = format!("chose {}", label);
        }
        _ => {}
    }
    Ok(false)
}
