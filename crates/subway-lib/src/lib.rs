//! Subway network library entry points.
//!
//! This crate models a subway network as stations joined by weighted
//! sections, builds a graph from a set of lines, and answers shortest-path
//! queries between two stations. Higher-level consumers (the CLI) should only
//! depend on the items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod finder;
pub mod graph;
pub mod line;
pub mod network;
pub mod output;
pub mod path;
pub mod section;
pub mod station;

pub use error::{Error, ErrorKind, Result};
pub use finder::{Path, PathFinder, PathLeg};
pub use graph::{build_graph, Edge, Graph, LineId, StationId};
pub use line::Line;
pub use network::{default_network_path, load_network, resolve_network_path, Network};
pub use output::{PathStep, PathSummary};
pub use path::{shortest_path, SearchPath};
pub use section::{Distance, Section, MAX_DISTANCE};
pub use station::Station;
