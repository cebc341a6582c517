use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::line::Line;
use crate::section::Distance;
use crate::station::Station;

/// Arena index of a station inside a [`Graph`].
pub type StationId = usize;

/// Index of the line that contributed an edge.
pub type LineId = usize;

/// Minimum similarity for a station name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Directed half of a section within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: StationId,
    pub distance: Distance,
    pub line: LineId,
}

/// Weighted station graph used by path queries.
///
/// Stations are interned into dense ids in first-seen order. The adjacency
/// lists sit behind an [`Arc`] so clones of a built graph share storage.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    stations: Vec<Station>,
    index: HashMap<Station, StationId>,
    lines: Vec<String>,
    adjacency: Arc<Vec<Vec<Edge>>>,
    section_count: usize,
}

impl Graph {
    /// Look up the arena id of a station.
    pub fn station_id(&self, station: &Station) -> Option<StationId> {
        self.index.get(station).copied()
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    pub fn contains(&self, station: &Station) -> bool {
        self.index.contains_key(station)
    }

    /// All stations in id order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Return the neighbours for a given station identifier.
    pub fn neighbours(&self, station: StationId) -> &[Edge] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Name of the line that contributed an edge.
    pub fn line_name(&self, line: LineId) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of sections in the graph; each is traversable both ways.
    pub fn edge_count(&self) -> usize {
        self.section_count
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Rank known station names by similarity to `name`.
    ///
    /// Exact matches come first, then names above a Jaro-Winkler threshold in
    /// descending similarity. At most `limit` names are returned.
    pub fn fuzzy_station_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .stations
            .iter()
            .map(|station| {
                let score = strsim::jaro_winkler(&needle, &station.name().to_lowercase());
                (score, station.name())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    fn intern(&mut self, station: &Station, adjacency: &mut Vec<Vec<Edge>>) -> StationId {
        if let Some(&id) = self.index.get(station) {
            return id;
        }
        let id = self.stations.len();
        self.stations.push(station.clone());
        self.index.insert(station.clone(), id);
        adjacency.push(Vec::new());
        id
    }
}

/// Build the routing graph for a set of lines.
///
/// Every section becomes an edge in both directions weighted by its distance.
/// Sections from different lines joining the same pair of stations are kept
/// as parallel edges.
pub fn build_graph(lines: &[Line]) -> Graph {
    let mut graph = Graph::default();
    let mut adjacency: Vec<Vec<Edge>> = Vec::new();

    for (line_id, line) in lines.iter().enumerate() {
        graph.lines.push(line.name().to_string());
        for section in line.sections() {
            let upstream = graph.intern(section.upstream(), &mut adjacency);
            let downstream = graph.intern(section.downstream(), &mut adjacency);

            adjacency[upstream].push(Edge {
                target: downstream,
                distance: section.distance(),
                line: line_id,
            });
            adjacency[downstream].push(Edge {
                target: upstream,
                distance: section.distance(),
                line: line_id,
            });
            graph.section_count += 1;
        }
    }

    graph.adjacency = Arc::new(adjacency);
    debug!(
        lines = lines.len(),
        stations = graph.station_count(),
        sections = graph.edge_count(),
        "built subway graph"
    );
    graph
}
