use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    DirectoryNotFound,
    EmptyFile,
    ReadFailure,
    MalformedLine,
    MalformedOption,
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DirectoryNotFound => "DIRECTORY_NOT_FOUND",
            Self::EmptyFile => "EMPTY_FILE",
            Self::ReadFailure => "READ_FAILURE",
            Self::MalformedLine => "MALFORMED_LINE",
            Self::MalformedOption => "MALFORMED_OPTION",
        }
    }
}

/// A non-fatal problem found while loading or parsing scenarios. The
/// offending file, line or option fragment contributes nothing and loading
/// carries on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub file: Option<String>,
    pub line: Option<usize>,
    pub reason: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            file: None,
            line: None,
            reason: reason.into(),
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn location(&self) -> String {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => format!("{}:{}", file, line),
            (Some(file), None) => file.clone(),
            (None, Some(line)) => format!("line {}", line),
            (None, None) => "-".to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.kind.code(), self.location(), self.reason)
    }
}
