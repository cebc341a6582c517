use std::fmt;

use serde::{Deserialize, Serialize};

/// A named stop in the subway network.
///
/// Stations are compared, hashed and ordered by name, so two values built from
/// the same name denote the same vertex regardless of which line produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Station {
    name: String,
}

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Station::new(name)
    }
}
