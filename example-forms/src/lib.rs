//! Example questionnaire sections built on gridform.
//!
//! A job-analysis questionnaire is a sequence of sections, each owning one
//! grid. Sections persist their snapshots through an injected
//! [`Store`](gridform_store::Store) and aggregate validation before the
//! questionnaire is treated as submittable.

pub mod mobility;
pub use mobility::MobilityDemands;

pub mod environment;
pub use environment::WorkEnvironment;

use gridform::{ConfigError, Grid, Snapshot, ValidationReport};
use gridform_store::{Store, StoreError};
use tracing::warn;

/// Error type for section persistence.
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("snapshot serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// One questionnaire section owning a configured grid.
///
/// The section is the grid's only collaborator: it configures the grid once
/// at construction, round-trips snapshots through a [`Store`], and checks
/// validation before the section counts as submittable.
pub trait Section {
    /// Stable storage key for this section's snapshot.
    fn key(&self) -> &'static str;

    /// Human-readable section title.
    fn title(&self) -> &str;

    /// The section's grid.
    fn grid(&self) -> &Grid;

    /// The section's grid, mutably.
    fn grid_mut(&mut self) -> &mut Grid;

    /// Persist the current snapshot under [`key`](Section::key).
    fn save(&self, store: &mut dyn Store) -> Result<(), SectionError> {
        let json = serde_json::to_string(&self.grid().get_data())?;
        store.set(self.key(), &json)?;
        Ok(())
    }

    /// Restore a previously saved snapshot, if one exists.
    ///
    /// Returns whether anything was restored. A corrupt stored snapshot is
    /// skipped with a warning rather than failing the load; partial data is
    /// better than none on a form the user is about to re-fill anyway.
    fn load(&mut self, store: &dyn Store) -> Result<bool, SectionError> {
        let Some(json) = store.get(self.key())? else {
            return Ok(false);
        };
        match serde_json::from_str::<Snapshot>(&json) {
            Ok(snapshot) => {
                self.grid_mut().set_data(&snapshot);
                Ok(true)
            }
            Err(err) => {
                warn!(key = self.key(), %err, "stored snapshot is corrupt, skipping restore");
                Ok(false)
            }
        }
    }

    /// Validate the section's grid.
    fn validate(&mut self) -> ValidationReport {
        self.grid_mut().validate()
    }
}

/// A multi-section questionnaire with aggregate save/load/validate.
pub struct Questionnaire {
    sections: Vec<Box<dyn Section>>,
}

impl Questionnaire {
    /// The full job-analysis questionnaire.
    pub fn job_analysis() -> Result<Self, ConfigError> {
        Ok(Self {
            sections: vec![
                Box::new(MobilityDemands::new()?),
                Box::new(WorkEnvironment::new()?),
            ],
        })
    }

    /// Compose a questionnaire from arbitrary sections.
    pub fn from_sections(sections: Vec<Box<dyn Section>>) -> Self {
        Self { sections }
    }

    /// The sections, in display order.
    pub fn sections(&self) -> &[Box<dyn Section>] {
        &self.sections
    }

    /// The sections, mutably.
    pub fn sections_mut(&mut self) -> &mut [Box<dyn Section>] {
        &mut self.sections
    }

    /// Persist every section.
    pub fn save_all(&self, store: &mut dyn Store) -> Result<(), SectionError> {
        for section in &self.sections {
            section.save(store)?;
        }
        Ok(())
    }

    /// Restore every section that has a stored snapshot. Returns how many
    /// sections were restored.
    pub fn load_all(&mut self, store: &dyn Store) -> Result<usize, SectionError> {
        let mut restored = 0;
        for section in &mut self.sections {
            if section.load(store)? {
                restored += 1;
            }
        }
        Ok(restored)
    }

    /// Validate every section, keyed by section storage key.
    pub fn validate_all(&mut self) -> Vec<(&'static str, ValidationReport)> {
        self.sections
            .iter_mut()
            .map(|section| (section.key(), section.validate()))
            .collect()
    }

    /// Whether every section currently validates.
    pub fn is_submittable(&mut self) -> bool {
        self.validate_all()
            .iter()
            .all(|(_, report)| report.is_valid())
    }
}

impl std::fmt::Debug for Questionnaire {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<&str> = self.sections.iter().map(|s| s.key()).collect();
        f.debug_struct("Questionnaire").field("sections", &keys).finish()
    }
}
