// Test utilities used across `subway-cli` unit tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use subway_lib::{Line, PathFinder, PathSummary, Station};

use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

/// Line 2 (Daerim - Sindaebang - Sindorim) and Line 1 (Sindorim - Guro).
pub fn sample_lines() -> Vec<Line> {
    let mut line_2 = Line::of(
        "Line 2",
        "green",
        Station::new("Daerim"),
        Station::new("Sindaebang"),
        10,
    )
    .expect("valid section");
    line_2
        .register_section(Station::new("Sindaebang"), Station::new("Sindorim"), 5)
        .expect("valid section");
    let line_1 = Line::of(
        "Line 1",
        "navy",
        Station::new("Sindorim"),
        Station::new("Guro"),
        4,
    )
    .expect("valid section");
    vec![line_2, line_1]
}

/// Summary of the Daerim to Guro path over [`sample_lines`].
pub fn sample_summary() -> PathSummary {
    let path = PathFinder::new(&sample_lines())
        .find_path(&Station::new("Daerim"), &Station::new("Guro"))
        .expect("route exists");
    PathSummary::from_path(&path)
}

/// Render a path without colors and return the output as a string.
pub fn render_path(format: OutputFormat, summary: &PathSummary) -> String {
    let mut buffer = Vec::new();
    format
        .write_path(&mut buffer, summary, ColorPalette::plain())
        .expect("render path");
    String::from_utf8(buffer).expect("utf-8 output")
}
