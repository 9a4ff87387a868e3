#![cfg(not(coverage))]

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use sp_api::LoadReport;
use sp_core::EndReason;

use crate::tui_state::{TuiScreen, TuiUiState, CHOICE_VIEWPORT_ROWS};
use crate::END_OF_SCENARIO_MESSAGE;

const ELLIPSIS: &str = "…";

pub(crate) fn render_tui(frame: &mut Frame<'_>, ui: &TuiUiState, report: &LoadReport) {
    let width = frame.area().width as usize;
    let rows = frame.area().height as usize;
    let lines = match ui.screen {
        TuiScreen::Picker => picker_lines(ui, report, width, rows),
        TuiScreen::Playback => playback_lines(ui, report, width, rows),
    };
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, frame.area());
}

fn content_width(terminal_width: usize) -> usize {
    terminal_width.saturating_sub(2).max(16)
}

fn gray(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
}

pub(crate) fn picker_lines(
    ui: &TuiUiState,
    report: &LoadReport,
    terminal_width: usize,
    terminal_rows: usize,
) -> Vec<Line<'static>> {
    let width = content_width(terminal_width);
    let mut out = vec![
        Line::from(truncate_to_width("Available scenarios:", width)),
        gray(truncate_to_width(&format!("status: {}", ui.status), width)),
    ];

    let warning_rows = terminal_rows
        .saturating_sub(CHOICE_VIEWPORT_ROWS + 6)
        .min(report.diagnostics.len());
    for diagnostic in report.diagnostics.iter().take(warning_rows) {
        out.push(Line::from(Span::styled(
            truncate_to_width(&format!("! {}", diagnostic.reason), width),
            Style::default().fg(Color::Yellow),
        )));
    }
    out.push(gray("─".repeat(width)));

    if report.is_empty() {
        out.push(Line::from("No scenarios found."));
    }
    for row_index in 0..CHOICE_VIEWPORT_ROWS {
        let absolute_index = ui.picker_scroll_offset + row_index;
        let Some(loaded) = report.scenarios.get(absolute_index) else {
            break;
        };
        let selected = absolute_index == ui.picker_index;
        out.push(choice_line(
            &format!("{}: {}", absolute_index + 1, loaded.scenario.title),
            selected,
            width,
        ));
    }
    if report.scenarios.len() > CHOICE_VIEWPORT_ROWS {
        out.push(gray(window_text(
            ui.picker_scroll_offset,
            report.scenarios.len(),
            width,
        )));
    }

    out.push(Line::from(Span::styled(
        truncate_to_width("keys: up/down move | enter play | h help | q quit", width),
        Style::default().fg(Color::Yellow),
    )));
    if ui.help_visible {
        out.push(help_line(width));
    }
    out
}

pub(crate) fn playback_lines(
    ui: &TuiUiState,
    report: &LoadReport,
    terminal_width: usize,
    terminal_rows: usize,
) -> Vec<Line<'static>> {
    let width = content_width(terminal_width);
    let typing_in_progress = ui.typing_in_progress();

    let mut text_lines = ui.rendered_lines.clone();
    if let Some(typing) = &ui.typing_line {
        text_lines.push(typing.chars().take(ui.typing_chars).collect());
    }
    let wrapped_text_rows = text_lines
        .iter()
        .flat_map(|line| wrap_line_to_width(line, width))
        .collect::<Vec<_>>();

    let choices_visible = !typing_in_progress && !ui.choices.is_empty();
    let end_visible = !typing_in_progress && ui.ended();

    let mut reserved_rows = 2 + 1 + CHOICE_VIEWPORT_ROWS + 1 + 1;
    if choices_visible || end_visible {
        reserved_rows += 1;
    }
    if ui.help_visible {
        reserved_rows += 1;
    }
    let visible_text_rows = terminal_rows.saturating_sub(reserved_rows).max(1);
    let skipped = wrapped_text_rows.len().saturating_sub(visible_text_rows);

    let title = ui
        .active_scenario
        .and_then(|index| report.scenarios.get(index))
        .map(|loaded| format!("{} | {}", loaded.file_name, loaded.scenario.title))
        .unwrap_or_default();

    let mut out = vec![
        Line::from(truncate_to_width(&title, width)),
        gray(truncate_to_width(&format!("status: {}", ui.status), width)),
    ];
    out.extend(wrapped_text_rows.into_iter().skip(skipped).map(Line::from));
    out.push(gray("─".repeat(width)));

    if choices_visible {
        out.push(Line::from(Span::styled(
            truncate_to_width("choices (up/down + enter):", width),
            Style::default().fg(Color::Cyan),
        )));
        for row_index in 0..CHOICE_VIEWPORT_ROWS {
            let absolute_index = ui.choice_scroll_offset + row_index;
            match ui.choices.get(absolute_index) {
                Some(choice) => out.push(choice_line(
                    &format!("{}: {}", absolute_index + 1, choice.text),
                    absolute_index == ui.selected_choice_index,
                    width,
                )),
                None => out.push(Line::from(" ")),
            }
        }
        if ui.choices.len() > CHOICE_VIEWPORT_ROWS {
            out.push(gray(window_text(
                ui.choice_scroll_offset,
                ui.choices.len(),
                width,
            )));
        }
    }

    if end_visible {
        out.push(Line::from(Span::styled(
            truncate_to_width(&end_text(ui.end_reason.as_ref()), width),
            Style::default().fg(Color::Green),
        )));
    }

    out.push(Line::from(Span::styled(
        truncate_to_width(
            "keys: up/down move | enter choose/skip | r restart | b back | h help | q quit",
            width,
        ),
        Style::default().fg(Color::Yellow),
    )));
    if ui.help_visible {
        out.push(help_line(width));
    }
    out
}

fn end_text(reason: Option<&EndReason>) -> String {
    match reason {
        Some(EndReason::TerminalBranch { .. }) => format!("[end] {}", END_OF_SCENARIO_MESSAGE),
        Some(EndReason::OutOfRange { index }) => format!("[end] no branch {}", index),
        Some(EndReason::NoBranches) => "[end] scenario has no branches".to_string(),
        None => "[end]".to_string(),
    }
}

fn choice_line(text: &str, selected: bool, width: usize) -> Line<'static> {
    let text_width = width.saturating_sub(2).max(8);
    let prefix = if selected { "> " } else { "  " };
    let style = if selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    Line::from(Span::styled(
        format!("{}{}", prefix, truncate_to_width(text, text_width)),
        style,
    ))
}

fn window_text(scroll_offset: usize, len: usize, width: usize) -> String {
    let end = (scroll_offset + CHOICE_VIEWPORT_ROWS).min(len);
    truncate_to_width(
        &format!("window {}-{} / {}", scroll_offset + 1, end, len),
        width,
    )
}

fn help_line(width: usize) -> Line<'static> {
    Line::from(Span::styled(
        truncate_to_width(
            "enter or space shows streaming text at once. options jumping outside the scenario end it.",
            width,
        ),
        Style::default().fg(Color::Magenta),
    ))
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width == 1 {
        return ELLIPSIS.to_string();
    }
    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push_str(ELLIPSIS);
    out
}

pub(crate) fn wrap_line_to_width(value: &str, width: usize) -> Vec<String> {
    let chars = value.chars().collect::<Vec<_>>();
    if width == 0 || chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
