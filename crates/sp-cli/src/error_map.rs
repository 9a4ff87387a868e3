use sp_core::ScenarioError;
use std::fmt::Display;

fn map_error(code: &'static str, error: impl Display) -> ScenarioError {
    ScenarioError::new(code, error.to_string())
}

pub(crate) fn json_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
}

pub(crate) fn emit_error(error: ScenarioError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    println!("ERROR_MSG_JSON:{}", json_string(&error.message));
    1
}

pub(crate) fn map_shell_io(error: std::io::Error) -> ScenarioError {
    map_error("SHELL_IO", error)
}

pub(crate) fn map_tui_io(error: std::io::Error) -> ScenarioError {
    map_error("TUI_IO", error)
}
