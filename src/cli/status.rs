//! Status command implementation

use crate::cli::output::format_status_line;
use crate::cli::StatusArgs;
use crate::controller::Controller;

/// Handle `kvtest status` command
///
/// A backend that cannot be reached is reported as disconnected, not as an error.
pub async fn handle_status(
    args: &StatusArgs,
    controller: &Controller,
) -> Result<String, Box<dyn std::error::Error>> {
    let status = controller.refresh_status().await;

    if args.json {
        Ok(serde_json::to_string_pretty(&controller.page().snapshot())?)
    } else {
        Ok(format_status_line(&status))
    }
}
