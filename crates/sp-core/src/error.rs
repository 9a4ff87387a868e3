use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ScenarioError {
    pub code: String,
    pub message: String,
}

impl ScenarioError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_code_and_message() {
        let error = ScenarioError::new("PARSE_EMPTY_FILE", "Scenario source has no lines.");
        assert_eq!(
            error.to_string(),
            "PARSE_EMPTY_FILE: Scenario source has no lines."
        );
        assert_eq!(error.code, "PARSE_EMPTY_FILE");
    }
}
