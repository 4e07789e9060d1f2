use crate::error::CliResult;

use serde_json::Value;

/// Render a command result as JSON
pub fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
