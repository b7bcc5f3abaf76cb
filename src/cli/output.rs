//! Output formatting for CLI commands

use serde::Serialize;

use crate::notification::time_resolver::FireTime;

/// Serialize data as pretty JSON for --json output
pub fn format_output<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

/// Status message echoed after a schedule, built from the resolved time
/// so blank input fields still show what was chosen
pub fn status_message(fire: &FireTime) -> String {
    format!("notification set to {}:{}", fire.hour, fire.minute)
}
