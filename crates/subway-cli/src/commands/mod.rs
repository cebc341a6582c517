// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

mod lines;
mod path;

pub use lines::handle_lines_command;
pub use path::handle_path_command;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use subway_lib::{load_network, resolve_network_path, Network};

/// Resolve and load the network definition shared by all subcommands.
fn load_selected_network(target: Option<&Path>) -> Result<Network> {
    let path = resolve_network_path(target).context("failed to resolve the network file")?;
    debug!(path = %path.display(), "resolved network file");
    load_network(&path).with_context(|| format!("failed to load network from {}", path.display()))
}
