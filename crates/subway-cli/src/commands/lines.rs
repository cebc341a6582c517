//! Lines command handler for listing the loaded network.

use std::path::Path;

use anyhow::Result;

use subway_cli::output::OutputFormat;

use super::load_selected_network;

/// Handle the lines subcommand.
pub fn handle_lines_command(target_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let network = load_selected_network(target_path)?;
    format.print_lines(network.lines())
}
