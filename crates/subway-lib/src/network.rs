use std::collections::{BTreeSet, HashSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::finder::PathFinder;
use crate::line::Line;
use crate::section::{Distance, Section};
use crate::station::Station;

/// Default filename for the network definition.
const NETWORK_FILENAME: &str = "network.json";

/// Environment variable that overrides the network file location.
pub const NETWORK_ENV_VAR: &str = "SUBWAY_NETWORK";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NetworkFile {
    lines: Vec<LineRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LineRecord {
    name: String,
    color: String,
    sections: Vec<SectionRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionRecord {
    upstream: String,
    downstream: String,
    distance: Distance,
}

/// Validated set of lines loaded from a network definition.
#[derive(Debug, Clone, Default)]
pub struct Network {
    lines: Vec<Line>,
}

impl Network {
    /// Build a network from lines, rejecting duplicate line names.
    pub fn new(lines: Vec<Line>) -> Result<Self> {
        let mut names = HashSet::new();
        for line in &lines {
            if !names.insert(line.name()) {
                return Err(Error::DuplicateLine {
                    name: line.name().to_string(),
                });
            }
        }
        Ok(Self { lines })
    }

    /// Parse and validate a JSON network definition.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let file: NetworkFile = serde_json::from_str(source)?;
        let lines = file
            .lines
            .into_iter()
            .map(LineRecord::into_line)
            .collect::<Result<Vec<_>>>()?;
        Self::new(lines)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lookup a line by its case-sensitive name.
    pub fn line(&self, name: &str) -> Option<&Line> {
        self.lines.iter().find(|line| line.name() == name)
    }

    /// Every station served by at least one line, sorted by name.
    pub fn stations(&self) -> Vec<&Station> {
        let stations: BTreeSet<&Station> =
            self.lines.iter().flat_map(|line| line.stations()).collect();
        stations.into_iter().collect()
    }

    /// Build a path finder over the current set of lines.
    pub fn path_finder(&self) -> PathFinder {
        PathFinder::new(&self.lines)
    }
}

impl LineRecord {
    fn into_line(self) -> Result<Line> {
        let sections = self
            .sections
            .into_iter()
            .map(|record| {
                Section::new(
                    Station::new(record.upstream),
                    Station::new(record.downstream),
                    record.distance,
                )
            })
            .collect::<Result<Vec<_>>>()?;
        Line::from_sections(self.name, self.color, sections)
    }
}

/// Load and validate the network definition stored at `path`.
pub fn load_network(path: &Path) -> Result<Network> {
    if !path.exists() {
        return Err(Error::NetworkNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loading network");
    let contents = fs::read_to_string(path)?;
    let network = Network::from_json_str(&contents)?;
    info!(
        path = %path.display(),
        lines = network.lines().len(),
        stations = network.stations().len(),
        "loaded network"
    );
    Ok(network)
}

/// Resolve the default network location using platform-specific project directories.
pub fn default_network_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "subway", "subway").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(NETWORK_FILENAME))
}

/// Resolve which network file to use.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `SUBWAY_NETWORK` environment variable.
/// 3. Platform-specific project data directory.
///
/// Directories resolve to the `network.json` file inside them.
pub fn resolve_network_path(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(canonical_network_path(explicit));
    }

    if let Some(env_path) = env::var_os(NETWORK_ENV_VAR) {
        return Ok(canonical_network_path(Path::new(&env_path)));
    }

    default_network_path()
}

fn canonical_network_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.join(NETWORK_FILENAME);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_resolve_to_network_file() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_network_path(Some(dir.path())).unwrap();
        assert_eq!(resolved, dir.path().join(NETWORK_FILENAME));
    }

    #[test]
    fn explicit_files_are_kept() {
        let resolved = resolve_network_path(Some(Path::new("lines/custom.json"))).unwrap();
        assert_eq!(resolved, PathBuf::from("lines/custom.json"));
    }

    #[test]
    fn rejects_duplicate_line_names() {
        let json = r#"{"lines": [
            {"name": "Line 1", "color": "navy", "sections": [{"upstream": "A", "downstream": "B", "distance": 1}]},
            {"name": "Line 1", "color": "navy", "sections": [{"upstream": "C", "downstream": "D", "distance": 1}]}
        ]}"#;
        let error = Network::from_json_str(json).unwrap_err();
        assert!(matches!(error, Error::DuplicateLine { ref name } if name == "Line 1"));
    }
}
