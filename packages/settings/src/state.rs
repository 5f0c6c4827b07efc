// ABOUTME: Per-section save lifecycle tracking
// ABOUTME: Generation counters let the newest commit of a section own its status

use std::collections::BTreeMap;
use std::fmt;

use sitepanel_core::Section;

/// Save status of one section as seen by the operator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SectionSaveState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl SectionSaveState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SectionSaveState::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SectionSaveState::Failed(_))
    }
}

impl fmt::Display for SectionSaveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionSaveState::Idle => f.write_str("idle"),
            SectionSaveState::Pending => f.write_str("pending"),
            SectionSaveState::Succeeded => f.write_str("succeeded"),
            SectionSaveState::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

#[derive(Debug, Default)]
struct Entry {
    state: SectionSaveState,
    generation: u64,
}

/// Exactly one entry per section, created up front
#[derive(Debug)]
pub(crate) struct SectionTracker {
    entries: BTreeMap<Section, Entry>,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self {
            entries: Section::ALL
                .into_iter()
                .map(|section| (section, Entry::default()))
                .collect(),
        }
    }
}

impl SectionTracker {
    /// Mark `section` pending and return the generation owning its next status
    pub(crate) fn begin(&mut self, section: Section) -> u64 {
        let entry = self.entries.entry(section).or_default();
        entry.generation += 1;
        entry.state = SectionSaveState::Pending;
        entry.generation
    }

    /// Record an outcome; returns false when a newer commit has superseded `generation`
    pub(crate) fn finish(
        &mut self,
        section: Section,
        generation: u64,
        state: SectionSaveState,
    ) -> bool {
        let entry = self.entries.entry(section).or_default();
        if entry.generation != generation {
            return false;
        }
        entry.state = state;
        true
    }

    pub(crate) fn get(&self, section: Section) -> SectionSaveState {
        self.entries
            .get(&section)
            .map(|entry| entry.state.clone())
            .unwrap_or_default()
    }

    pub(crate) fn snapshot(&self) -> Vec<(Section, SectionSaveState)> {
        self.entries
            .iter()
            .map(|(section, entry)| (*section, entry.state.clone()))
            .collect()
    }

    /// Back to idle; in-flight completions from before the reset are ignored
    pub(crate) fn reset(&mut self) {
        for entry in self.entries.values_mut() {
            entry.generation += 1;
            entry.state = SectionSaveState::Idle;
        }
    }
}
