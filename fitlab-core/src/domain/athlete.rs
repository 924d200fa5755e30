//! Athletes and their recorded assessment results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sport an athlete is rostered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Soccer,
    Basketball,
    Swimming,
    Track,
    Rugby,
    Volleyball,
}

impl Sport {
    pub const ALL: [Sport; 6] = [
        Sport::Soccer,
        Sport::Basketball,
        Sport::Swimming,
        Sport::Track,
        Sport::Rugby,
        Sport::Volleyball,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Sport::Soccer => "Soccer",
            Sport::Basketball => "Basketball",
            Sport::Swimming => "Swimming",
            Sport::Track => "Track & Field",
            Sport::Rugby => "Rugby",
            Sport::Volleyball => "Volleyball",
        }
    }
}

/// Availability of an athlete for testing and training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AthleteStatus {
    Active,
    Injured,
    Recovering,
    Inactive,
}

impl AthleteStatus {
    pub const ALL: [AthleteStatus; 4] = [
        AthleteStatus::Active,
        AthleteStatus::Injured,
        AthleteStatus::Recovering,
        AthleteStatus::Inactive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AthleteStatus::Active => "Active",
            AthleteStatus::Injured => "Injured",
            AthleteStatus::Recovering => "Recovering",
            AthleteStatus::Inactive => "Inactive",
        }
    }
}

/// A single recorded test outcome for an athlete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub id: String,
    pub test_name: String,
    pub date: NaiveDate,
    pub value: f64,
    pub unit: String,
    /// Percentile against the squad norm (0–100).
    pub percentile: u8,
    #[serde(default)]
    pub notes: String,
}

/// An athlete on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: String,
    pub name: String,
    pub sport: Sport,
    pub status: AthleteStatus,
    pub age: u8,
    pub position: String,
    /// Readiness score (0–100) from the latest wellness check.
    pub readiness: u8,
    pub last_assessed: NaiveDate,
    #[serde(default)]
    pub assessments: Vec<AssessmentResult>,
}

impl Athlete {
    /// Mean percentile across recorded assessments.
    pub fn mean_percentile(&self) -> Option<f64> {
        if self.assessments.is_empty() {
            return None;
        }
        let total: f64 = self.assessments.iter().map(|a| a.percentile as f64).sum();
        Some(total / self.assessments.len() as f64)
    }
}
