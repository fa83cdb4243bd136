//! Run command implementation

use crate::cli::output::format_run_summary;
use crate::cli::RunArgs;
use crate::controller::{Controller, RunOutcome};
use crate::page::ElementId;

/// Handle `kvtest run <type>` command
///
/// Returns the rendered output together with the outcome so the caller can
/// pick the exit code.
pub async fn handle_run(
    args: &RunArgs,
    controller: &Controller,
) -> Result<(String, RunOutcome), Box<dyn std::error::Error>> {
    let outcome = controller.run_test(args.test_type.clone()).await;
    let page = controller.page();

    let output = if args.json {
        serde_json::to_string_pretty(&page.snapshot())?
    } else if args.html {
        page.element(ElementId::ResultsContainer).inner_html
    } else {
        format_run_summary(&outcome)
    };

    Ok((output, outcome))
}
