use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::section::{Distance, Section};
use crate::station::Station;

/// A named, coloured route made of an ordered chain of sections.
///
/// Sections are stored first-to-last so that each section's downstream
/// station is the next section's upstream station, and no station repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    name: String,
    color: String,
    sections: Vec<Section>,
}

impl Line {
    /// Create a line consisting of a single section.
    pub fn of(
        name: impl Into<String>,
        color: impl Into<String>,
        upstream: Station,
        downstream: Station,
        distance: Distance,
    ) -> Result<Self> {
        let section = Section::new(upstream, downstream, distance)?;
        Ok(Self {
            name: name.into(),
            color: color.into(),
            sections: vec![section],
        })
    }

    /// Create a line from sections already listed in chain order.
    pub fn from_sections(
        name: impl Into<String>,
        color: impl Into<String>,
        sections: Vec<Section>,
    ) -> Result<Self> {
        let name = name.into();
        let Some(first) = sections.first() else {
            return Err(Error::EmptyLine { line: name });
        };

        let mut seen: HashSet<&Station> = HashSet::new();
        seen.insert(first.upstream());
        for (index, section) in sections.iter().enumerate() {
            if index > 0 {
                let previous = sections[index - 1].downstream();
                if previous != section.upstream() {
                    return Err(Error::BrokenSectionChain {
                        line: name,
                        previous: previous.name().to_string(),
                        next: section.upstream().name().to_string(),
                    });
                }
            }
            if !seen.insert(section.downstream()) {
                return Err(Error::DuplicateStation {
                    line: name,
                    station: section.downstream().name().to_string(),
                });
            }
        }

        Ok(Self {
            name,
            color: color.into(),
            sections,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Sections in chain order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Stations from the first terminus to the last.
    pub fn stations(&self) -> Vec<&Station> {
        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        if let Some(first) = self.sections.first() {
            stations.push(first.upstream());
        }
        stations.extend(self.sections.iter().map(Section::downstream));
        stations
    }

    pub fn contains(&self, station: &Station) -> bool {
        self.sections.iter().any(|section| section.contains(station))
    }

    /// Sum of all section distances, saturating at `Distance::MAX`.
    pub fn total_distance(&self) -> Distance {
        self.sections
            .iter()
            .fold(0, |total: Distance, section| total.saturating_add(section.distance()))
    }

    /// Extend the line with a new section.
    ///
    /// Exactly one of the two stations must already be on the line. A section
    /// attached to a terminus extends the line; otherwise it splits the
    /// existing section that shares its anchor station, and must be strictly
    /// shorter than the section it splits.
    pub fn register_section(
        &mut self,
        upstream: Station,
        downstream: Station,
        distance: Distance,
    ) -> Result<()> {
        let section = Section::new(upstream, downstream, distance)?;
        let has_upstream = self.contains(section.upstream());
        let has_downstream = self.contains(section.downstream());

        match (has_upstream, has_downstream) {
            (true, true) => Err(Error::SectionAlreadyRegistered {
                line: self.name.clone(),
                upstream: section.upstream().name().to_string(),
                downstream: section.downstream().name().to_string(),
            }),
            (false, false) => Err(Error::SectionNotConnected {
                line: self.name.clone(),
                upstream: section.upstream().name().to_string(),
                downstream: section.downstream().name().to_string(),
            }),
            (true, false) => self.attach_downstream(section),
            (false, true) => self.attach_upstream(section),
        }?;

        debug!(
            line = %self.name,
            sections = self.sections.len(),
            "registered section"
        );
        Ok(())
    }

    /// The new section's upstream station is already on the line.
    fn attach_downstream(&mut self, section: Section) -> Result<()> {
        let Some(index) = self
            .sections
            .iter()
            .position(|existing| existing.upstream() == section.upstream())
        else {
            self.sections.push(section);
            return Ok(());
        };

        let existing = &self.sections[index];
        let remaining = self.remaining_distance(existing.distance(), section.distance())?;
        let tail = Section::new(
            section.downstream().clone(),
            existing.downstream().clone(),
            remaining,
        )?;
        self.sections[index] = section;
        self.sections.insert(index + 1, tail);
        Ok(())
    }

    /// The new section's downstream station is already on the line.
    fn attach_upstream(&mut self, section: Section) -> Result<()> {
        let Some(index) = self
            .sections
            .iter()
            .position(|existing| existing.downstream() == section.downstream())
        else {
            self.sections.insert(0, section);
            return Ok(());
        };

        let existing = &self.sections[index];
        let remaining = self.remaining_distance(existing.distance(), section.distance())?;
        let head = Section::new(
            existing.upstream().clone(),
            section.upstream().clone(),
            remaining,
        )?;
        self.sections[index] = head;
        self.sections.insert(index + 1, section);
        Ok(())
    }

    fn remaining_distance(&self, existing: Distance, distance: Distance) -> Result<Distance> {
        if distance >= existing {
            return Err(Error::SectionTooLong {
                line: self.name.clone(),
                distance,
                existing,
            });
        }
        Ok(existing - distance)
    }
}
