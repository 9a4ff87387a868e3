use sp_core::{
    Branch, BranchOption, Diagnostic, DiagnosticKind, Scenario, ScenarioError,
};

pub const BRANCH_SEPARATOR: &str = "->";
pub const OPTION_SEPARATOR: &str = ",";
pub const TARGET_SEPARATOR: &str = ":";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScenario {
    pub scenario: Scenario,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBranch {
    pub branch: Option<Branch>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses one scenario from its lines. The first line is the title; every
/// following line yields at most one branch. Malformed lines and option
/// fragments are dropped and reported as diagnostics.
pub fn parse_scenario<S: AsRef<str>>(lines: &[S]) -> Result<ParsedScenario, ScenarioError> {
    parse_lines(None, lines)
}

/// Splits raw file content into lines and parses it, tagging diagnostics
/// with `source_name`.
pub fn parse_scenario_text(source_name: &str, text: &str) -> Result<ParsedScenario, ScenarioError> {
    let lines = split_source_lines(text);
    parse_lines(Some(source_name), &lines)
}

/// Breaks on `\n`, `\r\n` and a lone `\r`. A terminator at the very end does
/// not open an extra empty line.
pub fn split_source_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(&text[start..index]);
                index += 1;
                start = index;
            }
            b'\r' => {
                lines.push(&text[start..index]);
                index += if bytes.get(index + 1) == Some(&b'\n') { 2 } else { 1 };
                start = index;
            }
            _ => index += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn parse_lines<S: AsRef<str>>(
    source_name: Option<&str>,
    lines: &[S],
) -> Result<ParsedScenario, ScenarioError> {
    let Some((title, body)) = lines.split_first() else {
        return Err(ScenarioError::new(
            "PARSE_EMPTY_FILE",
            match source_name {
                Some(name) => format!("Scenario file {} is empty.", name),
                None => "Scenario source has no lines.".to_string(),
            },
        ));
    };

    let mut branches = Vec::with_capacity(body.len());
    let mut diagnostics = Vec::new();
    for (offset, line) in body.iter().enumerate() {
        // title is line 1
        let line_number = offset + 2;
        let parsed = parse_branch_line(line.as_ref());
        for diagnostic in parsed.diagnostics {
            let diagnostic = match source_name {
                Some(name) => diagnostic.with_file(name),
                None => diagnostic,
            }
            .with_line(line_number);
            log::warn!("{}", diagnostic);
            diagnostics.push(diagnostic);
        }
        if let Some(branch) = parsed.branch {
            branches.push(branch);
        }
    }

    Ok(ParsedScenario {
        scenario: Scenario {
            title: title.as_ref().to_string(),
            branches,
        },
        diagnostics,
    })
}

pub fn parse_branch_line(line: &str) -> ParsedBranch {
    let parts = split_dropping_trailing_empty(line, BRANCH_SEPARATOR);
    let Some(description) = parts.first() else {
        return ParsedBranch {
            branch: None,
            diagnostics: vec![Diagnostic::new(
                DiagnosticKind::MalformedLine,
                format!("Invalid line format: {}", line),
            )],
        };
    };

    // Anything after a second separator is ignored.
    let (options, diagnostics) = match parts.get(1) {
        Some(options_part) => parse_options(options_part),
        None => (Vec::new(), Vec::new()),
    };

    ParsedBranch {
        branch: Some(Branch {
            description: description.to_string(),
            options,
        }),
        diagnostics,
    }
}

/// Parses `label:target[,label:target...]`. A repeated label keeps its first
/// position and takes the last target.
pub fn parse_options(options_part: &str) -> (Vec<BranchOption>, Vec<Diagnostic>) {
    let mut options: Vec<BranchOption> = Vec::new();
    let mut diagnostics = Vec::new();

    for fragment in split_dropping_trailing_empty(options_part, OPTION_SEPARATOR) {
        let detail = split_dropping_trailing_empty(fragment, TARGET_SEPARATOR);
        let [label, target] = detail.as_slice() else {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::MalformedOption,
                format!("Invalid option format: {}", fragment),
            ));
            continue;
        };

        let Ok(target) = target.parse::<i32>() else {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::MalformedOption,
                format!("Invalid number format in options: {}", fragment),
            ));
            continue;
        };

        match options.iter_mut().find(|option| option.label == *label) {
            Some(existing) => existing.target = target,
            None => options.push(BranchOption {
                label: label.to_string(),
                target,
            }),
        }
    }

    (options, diagnostics)
}

/// Splits on a literal separator and drops trailing empty segments. Input
/// without any separator comes back whole, even when it is empty.
fn split_dropping_trailing_empty<'a>(value: &'a str, separator: &str) -> Vec<&'a str> {
    if !value.contains(separator) {
        return vec![value];
    }
    let mut parts = value.split(separator).collect::<Vec<_>>();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}
