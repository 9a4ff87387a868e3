use sp_core::EndReason;

use crate::{BoundaryEvent, BoundaryResult};

pub(crate) const CHOICE_VIEWPORT_ROWS: usize = 5;
/// Story lines kept on screen; older ones scroll out for good.
pub(crate) const RENDERED_LINE_LIMIT: usize = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum TuiScreen {
    #[default]
    Picker,
    Playback,
}

#[derive(Debug, Clone)]
pub(crate) struct ChoiceRow {
    pub(crate) index: usize,
    pub(crate) text: String,
}

#[derive(Debug, Default)]
pub(crate) struct TuiUiState {
    pub(crate) screen: TuiScreen,
    pub(crate) picker_index: usize,
    pub(crate) picker_scroll_offset: usize,
    pub(crate) active_scenario: Option<usize>,
    pub(crate) rendered_lines: Vec<String>,
    pub(crate) pending_lines: Vec<String>,
    pub(crate) typing_line: Option<String>,
    pub(crate) typing_chars: usize,
    pub(crate) choices: Vec<ChoiceRow>,
    pub(crate) selected_choice_index: usize,
    pub(crate) choice_scroll_offset: usize,
    pub(crate) end_reason: Option<EndReason>,
    pub(crate) help_visible: bool,
    pub(crate) status: String,
}

impl TuiUiState {
    pub(crate) fn typing_in_progress(&self) -> bool {
        self.typing_line.is_some() || !self.pending_lines.is_empty()
    }

    pub(crate) fn ended(&self) -> bool {
        self.end_reason.is_some()
    }

    pub(crate) fn set_boundary_state(&mut self, boundary: BoundaryResult) {
        match boundary.event {
            BoundaryEvent::Choices => {
                self.choices = boundary
                    .choices
                    .into_iter()
                    .map(|(index, text)| ChoiceRow { index, text })
                    .collect();
                self.end_reason = None;
            }
            BoundaryEvent::End => {
                self.choices.clear();
                self.end_reason = boundary.end_reason;
            }
        }
        self.selected_choice_index = 0;
        self.choice_scroll_offset = 0;
    }

    pub(crate) fn append_boundary(&mut self, boundary: BoundaryResult) {
        self.pending_lines.extend(boundary.texts.iter().cloned());
        self.set_boundary_state(boundary);
    }

    pub(crate) fn replace_boundary(&mut self, boundary: BoundaryResult) {
        self.rendered_lines.clear();
        self.pending_lines = boundary.texts.clone();
        self.typing_line = None;
        self.typing_chars = 0;
        self.set_boundary_state(boundary);
    }

    pub(crate) fn start_playback(&mut self, scenario_index: usize, boundary: BoundaryResult) {
        self.screen = TuiScreen::Playback;
        self.active_scenario = Some(scenario_index);
        self.replace_boundary(boundary);
    }

    pub(crate) fn back_to_picker(&mut self) {
        self.screen = TuiScreen::Picker;
        self.active_scenario = None;
        self.rendered_lines.clear();
        self.pending_lines.clear();
        self.typing_line = None;
        self.typing_chars = 0;
        self.choices.clear();
        self.selected_choice_index = 0;
        self.choice_scroll_offset = 0;
        self.end_reason = None;
    }

    /// Moves a highlighted row by one step inside a list of `len` rows,
    /// keeping it inside a viewport of `CHOICE_VIEWPORT_ROWS`.
    pub(crate) fn step_selection(
        selected: &mut usize,
        scroll_offset: &mut usize,
        len: usize,
        down: bool,
    ) {
        if down {
            let last = len.saturating_sub(1);
            *selected = (*selected + 1).min(last);
            if len > CHOICE_VIEWPORT_ROWS && *selected >= *scroll_offset + CHOICE_VIEWPORT_ROWS {
                *scroll_offset = *selected - CHOICE_VIEWPORT_ROWS + 1;
            }
        } else {
            *selected = selected.saturating_sub(1);
            if *selected < *scroll_offset {
                *scroll_offset = *selected;
            }
        }
    }

    pub(crate) fn advance_typewriter(&mut self) -> bool {
        let Some(line) = self.typing_line.take() else {
            if self.pending_lines.is_empty() {
                return false;
            }
            let next_line = self.pending_lines.remove(0);
            if next_line.is_empty() {
                self.push_rendered(next_line);
            } else {
                self.typing_line = Some(next_line);
                self.typing_chars = 1;
            }
            return true;
        };

        if self.typing_chars >= line.chars().count() {
            self.push_rendered(line);
            self.typing_chars = 0;
            return true;
        }
        self.typing_line = Some(line);
        self.typing_chars += 1;
        true
    }

    /// Shows everything still queued for the typewriter at once.
    pub(crate) fn flush_typewriter(&mut self) {
        if let Some(line) = self.typing_line.take() {
            self.rendered_lines.push(line);
        }
        self.rendered_lines.append(&mut self.pending_lines);
        self.trim_rendered();
        self.typing_chars = 0;
    }

    fn push_rendered(&mut self, line: String) {
        self.rendered_lines.push(line);
        self.trim_rendered();
    }

    fn trim_rendered(&mut self) {
        if self.rendered_lines.len() > RENDERED_LINE_LIMIT {
            let excess = self.rendered_lines.len() - RENDERED_LINE_LIMIT;
            self.rendered_lines.drain(..excess);
        }
    }
}
