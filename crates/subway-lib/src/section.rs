use serde::Serialize;

use crate::error::{Error, Result};
use crate::station::Station;

/// Distance between two adjacent stations, also the edge weight in the graph.
pub type Distance = u64;

/// Largest distance a single section may carry.
///
/// Any simple path has fewer than `u32::MAX` sections, so its total distance
/// always fits in a [`Distance`].
pub const MAX_DISTANCE: Distance = u32::MAX as Distance;

/// Weighted link between two adjacent stations on a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    upstream: Station,
    downstream: Station,
    distance: Distance,
}

impl Section {
    /// Create a section, rejecting self-loops and distances outside
    /// `1..=MAX_DISTANCE`.
    pub fn new(upstream: Station, downstream: Station, distance: Distance) -> Result<Self> {
        if upstream == downstream {
            return Err(Error::SectionLoop {
                station: upstream.name().to_string(),
            });
        }
        if distance == 0 || distance > MAX_DISTANCE {
            return Err(Error::InvalidDistance {
                upstream: upstream.name().to_string(),
                downstream: downstream.name().to_string(),
                distance,
            });
        }

        Ok(Self {
            upstream,
            downstream,
            distance,
        })
    }

    pub fn upstream(&self) -> &Station {
        &self.upstream
    }

    pub fn downstream(&self) -> &Station {
        &self.downstream
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Whether `station` is either endpoint of this section.
    pub fn contains(&self, station: &Station) -> bool {
        self.upstream == *station || self.downstream == *station
    }
}
