//! Shared fixtures for `subway-lib` integration tests.

use std::path::PathBuf;

use subway_lib::{Distance, Line, Station};

/// Path to the sample network used across tests and benches.
#[allow(dead_code)]
pub fn fixture_network_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_network.json")
}

/// Build a line from `(upstream, downstream, distance)` triples in chain order.
#[allow(dead_code)]
pub fn line(name: &str, color: &str, sections: &[(&str, &str, Distance)]) -> Line {
    let (first, rest) = sections
        .split_first()
        .expect("fixture lines need at least one section");
    let mut line = Line::of(
        name,
        color,
        Station::new(first.0),
        Station::new(first.1),
        first.2,
    )
    .expect("valid first section");
    for (upstream, downstream, distance) in rest {
        line.register_section(Station::new(*upstream), Station::new(*downstream), *distance)
            .expect("valid fixture section");
    }
    line
}

#[allow(dead_code)]
pub fn station(name: &str) -> Station {
    Station::new(name)
}

#[allow(dead_code)]
pub fn names(stations: &[Station]) -> Vec<&str> {
    stations.iter().map(Station::name).collect()
}
