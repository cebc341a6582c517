use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::section::Distance;

/// Convenient result alias for the subway library.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`], used by callers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The query itself is malformed (for example, identical endpoints).
    InvalidRequest,
    /// No path can be produced for otherwise well-formed input.
    PathNotFound,
    /// Line or section data violates a network invariant.
    InvalidNetwork,
    /// The surrounding environment failed (files, directories, parsing).
    Environment,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::PathNotFound => "path_not_found",
            ErrorKind::InvalidNetwork => "invalid_network",
            ErrorKind::Environment => "environment",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a path query names the same station at both ends.
    #[error("source and target must be different stations: {station}")]
    SameStation { station: String },

    /// Raised when a queried station is not part of any line in the graph.
    #[error("station not found: {name}{}", format_suggestions(.suggestions))]
    StationNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when both stations exist but no chain of sections joins them.
    #[error("stations are not connected: {start} and {goal}")]
    StationsNotConnected { start: String, goal: String },

    /// Section distances must lie in `1..=MAX_DISTANCE`.
    #[error("section {upstream} -> {downstream} has invalid distance {distance}")]
    InvalidDistance {
        upstream: String,
        downstream: String,
        distance: Distance,
    },

    /// A section cannot start and end at the same station.
    #[error("section cannot connect station {station} to itself")]
    SectionLoop { station: String },

    /// Both stations of a new section are already on the line.
    #[error("section {upstream} -> {downstream} is already registered on line {line}")]
    SectionAlreadyRegistered {
        line: String,
        upstream: String,
        downstream: String,
    },

    /// Neither station of a new section is on the line.
    #[error("section {upstream} -> {downstream} does not touch any station of line {line}")]
    SectionNotConnected {
        line: String,
        upstream: String,
        downstream: String,
    },

    /// A section inserted between two stations must be shorter than the one it splits.
    #[error("section distance {distance} must be shorter than existing distance {existing} on line {line}")]
    SectionTooLong {
        line: String,
        distance: Distance,
        existing: Distance,
    },

    /// A line needs at least one section.
    #[error("line {line} has no sections")]
    EmptyLine { line: String },

    /// Consecutive sections must share their boundary station.
    #[error("line {line} is not a connected chain: {previous} is followed by a section starting at {next}")]
    BrokenSectionChain {
        line: String,
        previous: String,
        next: String,
    },

    /// A station may appear at most once per line.
    #[error("station {station} appears more than once on line {line}")]
    DuplicateStation { line: String, station: String },

    /// Line names are unique within a network.
    #[error("line {name} is defined more than once")]
    DuplicateLine { name: String },

    /// Network definition file could not be located at the resolved path.
    #[error("network file not found at {path}")]
    NetworkNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the network file")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Classify the error for callers that map failures to responses.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SameStation { .. } => ErrorKind::InvalidRequest,
            Error::StationNotFound { .. } | Error::StationsNotConnected { .. } => {
                ErrorKind::PathNotFound
            }
            Error::InvalidDistance { .. }
            | Error::SectionLoop { .. }
            | Error::SectionAlreadyRegistered { .. }
            | Error::SectionNotConnected { .. }
            | Error::SectionTooLong { .. }
            | Error::EmptyLine { .. }
            | Error::BrokenSectionChain { .. }
            | Error::DuplicateStation { .. }
            | Error::DuplicateLine { .. } => ErrorKind::InvalidNetwork,
            Error::NetworkNotFound { .. }
            | Error::ProjectDirsUnavailable
            | Error::Io(_)
            | Error::Json(_) => ErrorKind::Environment,
        }
    }

    /// Stable machine-readable code naming the rule that fired.
    pub fn code(&self) -> &'static str {
        match self {
            Error::SameStation { .. } => "CAN_NOT_SAME_STATION",
            Error::StationNotFound { .. } => "NOT_FOUND_STATION",
            Error::StationsNotConnected { .. } => "IS_NOT_CONNECTED_STATION",
            Error::InvalidDistance { .. } => "INVALID_DISTANCE",
            Error::SectionLoop { .. } => "SECTION_LOOP",
            Error::SectionAlreadyRegistered { .. } => "SECTION_ALREADY_REGISTERED",
            Error::SectionNotConnected { .. } => "SECTION_NOT_CONNECTED",
            Error::SectionTooLong { .. } => "SECTION_TOO_LONG",
            Error::EmptyLine { .. } => "EMPTY_LINE",
            Error::BrokenSectionChain { .. } => "BROKEN_SECTION_CHAIN",
            Error::DuplicateStation { .. } => "DUPLICATE_STATION",
            Error::DuplicateLine { .. } => "DUPLICATE_LINE",
            Error::NetworkNotFound { .. } => "NETWORK_NOT_FOUND",
            Error::ProjectDirsUnavailable => "PROJECT_DIRS_UNAVAILABLE",
            Error::Io(_) => "IO",
            Error::Json(_) => "JSON",
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
