use sg_core::ScaffoldError;
use std::fmt::Display;

fn map_error(code: &'static str, error: impl Display) -> ScaffoldError {
    ScaffoldError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: ScaffoldError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.message).unwrap_or_else(|_| "\"\"".to_string())
    );
    1
}

pub(crate) fn map_cli_project_path(error: std::io::Error) -> ScaffoldError {
    map_error("CLI_PROJECT_PATH", error)
}

pub(crate) fn map_cli_project_read(error: std::io::Error) -> ScaffoldError {
    map_error("CLI_PROJECT_READ", error)
}

pub(crate) fn map_cli_project_invalid(error: serde_json::Error) -> ScaffoldError {
    map_error("CLI_PROJECT_INVALID", error)
}

pub(crate) fn map_cli_file_read(error: std::io::Error) -> ScaffoldError {
    map_error("CLI_FILE_READ", error)
}

pub(crate) fn map_cli_file_write(error: std::io::Error) -> ScaffoldError {
    map_error("CLI_FILE_WRITE", error)
}

pub(crate) fn map_cli_pom_read(error: std::io::Error) -> ScaffoldError {
    map_error("CLI_POM_READ", error)
}

pub(crate) fn map_cli_pom_invalid(error: roxmltree::Error) -> ScaffoldError {
    map_error("CLI_POM_INVALID", error)
}

pub(crate) fn map_cli_pom_write(error: std::io::Error) -> ScaffoldError {
    map_error("CLI_POM_WRITE", error)
}

pub(crate) fn map_cli_menu_read(error: std::io::Error) -> ScaffoldError {
    map_error("CLI_MENU_READ", error)
}

pub(crate) fn map_cli_menu_invalid(error: serde_json::Error) -> ScaffoldError {
    map_error("CLI_MENU_INVALID", error)
}

pub(crate) fn map_cli_menu_write(error: std::io::Error) -> ScaffoldError {
    map_error("CLI_MENU_WRITE", error)
}

pub(crate) fn map_cli_now_invalid(error: chrono::ParseError) -> ScaffoldError {
    map_error("CLI_NOW_INVALID", error)
}
