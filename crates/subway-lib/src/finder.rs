//! Shortest-path queries over a snapshot of the subway network.
//!
//! A [`PathFinder`] builds its [`Graph`] once from the lines it is given and
//! answers any number of independent queries against it. Queries only borrow
//! the finder, so one instance can be shared between threads.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{build_graph, Edge, Graph, StationId};
use crate::line::Line;
use crate::path::shortest_path;
use crate::section::Distance;
use crate::station::Station;

/// Number of similar station names attached to a not-found error.
const MAX_SUGGESTIONS: usize = 3;

/// One traversed section of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathLeg {
    pub from: Station,
    pub to: Station,
    pub distance: Distance,
    pub line: String,
}

/// Result of a successful path query.
///
/// Always holds at least two distinct stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    stations: Vec<Station>,
    legs: Vec<PathLeg>,
    weight: Distance,
}

impl Path {
    /// Stations from source to target, inclusive.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn legs(&self) -> &[PathLeg] {
        &self.legs
    }

    /// Total distance travelled.
    pub fn weight(&self) -> Distance {
        self.weight
    }

    /// Number of sections traversed.
    pub fn length(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    pub fn source(&self) -> &Station {
        &self.stations[0]
    }

    pub fn target(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }
}

/// Answers shortest-path queries for a fixed set of lines.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    graph: Graph,
}

impl PathFinder {
    /// Build the graph for `lines` and bind a finder to it.
    pub fn new(lines: &[Line]) -> Self {
        Self::from_graph(build_graph(lines))
    }

    pub fn from_graph(graph: Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Find the shortest path between two stations.
    ///
    /// Checks run in a fixed order: identical endpoints fail with
    /// [`Error::SameStation`] before the graph is consulted, then unknown
    /// stations fail with [`Error::StationNotFound`] (source first), and
    /// finally an unreachable target fails with
    /// [`Error::StationsNotConnected`].
    pub fn find_path(&self, source: &Station, target: &Station) -> Result<Path> {
        if source == target {
            return Err(Error::SameStation {
                station: source.name().to_string(),
            });
        }

        let start = self.resolve(source)?;
        let goal = self.resolve(target)?;

        let Some(found) = shortest_path(&self.graph, start, goal) else {
            debug!(%source, %target, "stations are not connected");
            return Err(Error::StationsNotConnected {
                start: source.name().to_string(),
                goal: target.name().to_string(),
            });
        };

        let path = self.materialize(&found.nodes, &found.edges, found.weight);
        debug!(
            %source,
            %target,
            length = path.length(),
            weight = path.weight(),
            "found shortest path"
        );
        Ok(path)
    }

    fn resolve(&self, station: &Station) -> Result<StationId> {
        self.graph.station_id(station).ok_or_else(|| {
            debug!(%station, "station is not part of the network");
            Error::StationNotFound {
                name: station.name().to_string(),
                suggestions: self
                    .graph
                    .fuzzy_station_matches(station.name(), MAX_SUGGESTIONS),
            }
        })
    }

    fn materialize(
        &self,
        nodes: &[StationId],
        edges: &[Edge],
        weight: Distance,
    ) -> Path {
        let stations: Vec<Station> = nodes
            .iter()
            .filter_map(|&id| self.graph.station(id).cloned())
            .collect();

        let legs = stations
            .windows(2)
            .zip(edges)
            .map(|(pair, edge)| PathLeg {
                from: pair[0].clone(),
                to: pair[1].clone(),
                distance: edge.distance,
                line: self
                    .graph
                    .line_name(edge.line)
                    .unwrap_or("<unknown>")
                    .to_string(),
            })
            .collect();

        Path {
            stations,
            legs,
            weight,
        }
    }
}
