//! Output formatting for path and line rendering.
//!
//! Renderers write to any [`Write`] sink so they can be exercised without a
//! terminal; the `print_*` helpers target stdout.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use subway_lib::{Line, PathSummary};

use crate::terminal::ColorPalette;

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly listing with distances and lines.
    #[default]
    Text,
    /// Station names only, with start/middle/end markers.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Serialize)]
struct LinesDocument<'a> {
    lines: &'a [Line],
}

impl OutputFormat {
    /// Print a path summary to stdout.
    pub fn print_path(self, summary: &PathSummary) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_path(&mut out, summary, ColorPalette::detect())
    }

    /// Print the lines of a network to stdout.
    pub fn print_lines(self, lines: &[Line]) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_lines(&mut out, lines, ColorPalette::detect())
    }

    pub fn write_path<W: Write>(
        self,
        out: &mut W,
        summary: &PathSummary,
        palette: ColorPalette,
    ) -> anyhow::Result<()> {
        match self {
            OutputFormat::Text => write_path_text(out, summary, palette)?,
            OutputFormat::Basic => write_path_basic(out, summary)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, summary)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    pub fn write_lines<W: Write>(
        self,
        out: &mut W,
        lines: &[Line],
        palette: ColorPalette,
    ) -> anyhow::Result<()> {
        match self {
            OutputFormat::Text => write_lines_text(out, lines, palette)?,
            OutputFormat::Basic => {
                for line in lines {
                    writeln!(out, "{}", line.name())?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &LinesDocument { lines })?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

fn step_marker(index: usize, last: usize) -> &'static str {
    if index == 0 {
        "+ "
    } else if index == last {
        "- "
    } else {
        "| "
    }
}

fn write_path_text<W: Write>(
    out: &mut W,
    summary: &PathSummary,
    palette: ColorPalette,
) -> io::Result<()> {
    let transfers = summary.transfers();
    writeln!(
        out,
        "Path from {} to {} ({} sections; {} transfer{}):",
        summary.source,
        summary.target,
        summary.length,
        transfers,
        if transfers == 1 { "" } else { "s" }
    )?;

    let last = summary.steps.len().saturating_sub(1);
    for step in &summary.steps {
        let marker = step_marker(step.index, last);
        match (step.distance, step.line.as_deref()) {
            (Some(distance), Some(line)) => writeln!(
                out,
                "{marker_color}{marker}{reset}{station_color}{name}{reset} ({distance_color}{distance}{reset} via {line_color}{line}{reset})",
                marker_color = palette.marker,
                reset = palette.reset,
                station_color = palette.station,
                distance_color = palette.distance,
                line_color = palette.line,
                name = step.station,
            )?,
            _ => writeln!(
                out,
                "{marker_color}{marker}{reset}{station_color}{name}{reset}",
                marker_color = palette.marker,
                reset = palette.reset,
                station_color = palette.station,
                name = step.station,
            )?,
        }
    }

    writeln!(out, "\nTotal distance: {}", summary.distance)?;
    writeln!(out, "Lines: {}", summary.lines_used().join(" -> "))
}

fn write_path_basic<W: Write>(out: &mut W, summary: &PathSummary) -> io::Result<()> {
    let last = summary.steps.len().saturating_sub(1);
    for step in &summary.steps {
        writeln!(out, "{}{}", step_marker(step.index, last), step.station)?;
    }
    Ok(())
}

fn write_lines_text<W: Write>(out: &mut W, lines: &[Line], palette: ColorPalette) -> io::Result<()> {
    if lines.is_empty() {
        return writeln!(out, "No lines defined.");
    }
    for line in lines {
        let stations = line
            .stations()
            .iter()
            .map(|station| station.name())
            .collect::<Vec<_>>()
            .join(" - ");
        writeln!(
            out,
            "{line_color}{name}{reset} ({color}): {stations} [{distance_color}{total}{reset}]",
            line_color = palette.line,
            reset = palette.reset,
            distance_color = palette.distance,
            name = line.name(),
            color = line.color(),
            total = line.total_distance(),
        )?;
    }
    Ok(())
}
