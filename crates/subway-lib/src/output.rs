use serde::Serialize;

use crate::finder::Path;
use crate::section::Distance;

/// Stop along a summarised path.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathStep {
    pub index: usize,
    pub station: String,
    /// Line used to arrive at this stop; absent for the origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    /// Distance of the section used to arrive at this stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,
    pub cumulative: Distance,
}

/// Structured representation of a path that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathSummary {
    pub source: String,
    pub target: String,
    pub distance: Distance,
    pub length: usize,
    pub steps: Vec<PathStep>,
}

impl PathSummary {
    /// Convert a [`Path`] into a summary with per-stop running totals.
    pub fn from_path(path: &Path) -> Self {
        let mut steps = Vec::with_capacity(path.stations().len());
        steps.push(PathStep {
            index: 0,
            station: path.source().name().to_string(),
            line: None,
            distance: None,
            cumulative: 0,
        });

        let mut cumulative: Distance = 0;
        for (offset, leg) in path.legs().iter().enumerate() {
            cumulative = cumulative.saturating_add(leg.distance);
            steps.push(PathStep {
                index: offset + 1,
                station: leg.to.name().to_string(),
                line: Some(leg.line.clone()),
                distance: Some(leg.distance),
                cumulative,
            });
        }

        Self {
            source: path.source().name().to_string(),
            target: path.target().name().to_string(),
            distance: path.weight(),
            length: path.length(),
            steps,
        }
    }

    /// Names of the lines used, in travel order, without consecutive repeats.
    pub fn lines_used(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = Vec::new();
        for line in self.steps.iter().filter_map(|step| step.line.as_deref()) {
            if lines.last() != Some(&line) {
                lines.push(line);
            }
        }
        lines
    }

    /// Number of times the traveller changes line.
    pub fn transfers(&self) -> usize {
        self.lines_used().len().saturating_sub(1)
    }
}
