//! Path command handler for computing the shortest path between stations.

use std::path::Path;

use anyhow::Result;

use subway_cli::output::OutputFormat;
use subway_lib::{Error as PathError, PathSummary, Station};

use super::load_selected_network;

/// Handle the path subcommand.
///
/// Loads the network, builds a path finder over all of its lines and prints
/// the shortest path between `from` and `to`.
pub fn handle_path_command(
    target_path: Option<&Path>,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let network = load_selected_network(target_path)?;
    let finder = network.path_finder();

    let path = finder
        .find_path(&Station::new(from), &Station::new(to))
        .map_err(handle_path_failure)?;

    format.print_path(&PathSummary::from_path(&path))
}

fn handle_path_failure(err: PathError) -> anyhow::Error {
    match err {
        PathError::SameStation { station } => anyhow::anyhow!(
            "Source and target are both '{}'. Choose two different stations.",
            station
        ),
        PathError::StationNotFound { name, suggestions } => {
            anyhow::anyhow!(format_unknown_station_message(&name, &suggestions))
        }
        PathError::StationsNotConnected { start, goal } => anyhow::anyhow!(
            "No path found between {} and {}. No line or chain of lines connects them.",
            start,
            goal
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_station_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown station '{}'.", name);
    match suggestions {
        [] => {}
        [only] => {
            message.push_str(&format!(" Did you mean '{}'?", only));
        }
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}
