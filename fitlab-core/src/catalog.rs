//! Catalog: the bundle of read-only fixture collections.
//!
//! Built from the in-code fixtures or loaded from a JSON document with the same
//! shape. Loading validates that every collection keys its records uniquely.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    Athlete, Equipment, Keyed, PeriodizationModel, Session, SkillComponent, SubModule,
    TestBattery,
};
use crate::fixtures;

/// Errors from loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate id '{id}' in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },
}

/// Every fixture collection the dashboard reads from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Date the snapshot was taken, used as "today" when nothing overrides it.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    #[serde(default)]
    pub athletes: Vec<Athlete>,
    #[serde(default)]
    pub sub_modules: Vec<SubModule>,
    #[serde(default)]
    pub batteries: Vec<TestBattery>,
    #[serde(default)]
    pub skill_components: Vec<SkillComponent>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub periodization_models: Vec<PeriodizationModel>,
}

impl Catalog {
    /// The in-code fixture snapshot.
    pub fn builtin() -> Self {
        Self {
            as_of: Some(fixtures::snapshot_date()),
            athletes: fixtures::athletes(),
            sub_modules: fixtures::sub_modules(),
            batteries: fixtures::batteries(),
            skill_components: fixtures::skill_components(),
            equipment: fixtures::equipment(),
            sessions: fixtures::sessions(),
            periodization_models: fixtures::periodization_models(),
        }
    }

    /// Load and validate a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            athletes = catalog.athletes.len(),
            sub_modules = catalog.sub_modules.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that ids are unique within each collection.
    ///
    /// Children are checked within their parent only, matching how the
    /// drill-down resolves leaves.
    pub fn validate(&self) -> Result<(), CatalogError> {
        unique("athletes", &self.athletes)?;
        unique("sub_modules", &self.sub_modules)?;
        unique("batteries", &self.batteries)?;
        unique("skill_components", &self.skill_components)?;
        unique("equipment", &self.equipment)?;
        unique("sessions", &self.sessions)?;
        unique("periodization_models", &self.periodization_models)?;
        for athlete in &self.athletes {
            unique("assessments", &athlete.assessments)?;
        }
        for module in &self.sub_modules {
            unique("screens", &module.screens)?;
        }
        for battery in &self.batteries {
            unique("battery tests", &battery.tests)?;
        }
        for component in &self.skill_components {
            unique("skill tests", &component.tests)?;
        }
        Ok(())
    }

    /// Reference date for date-relative queries.
    pub fn reference_date(&self) -> NaiveDate {
        self.as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Number of performance tests across batteries and skill components.
    pub fn test_count(&self) -> usize {
        self.batteries.iter().map(|b| b.tests.len()).sum::<usize>()
            + self
                .skill_components
                .iter()
                .map(|c| c.tests.len())
                .sum::<usize>()
    }

    /// Number of screens across all assessment sub-modules.
    pub fn screen_count(&self) -> usize {
        self.sub_modules.iter().map(|m| m.screens.len()).sum()
    }
}

fn unique<T: Keyed>(collection: &'static str, items: &[T]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id()) {
            return Err(CatalogError::DuplicateId {
                collection,
                id: item.id().to_string(),
            });
        }
    }
    Ok(())
}
