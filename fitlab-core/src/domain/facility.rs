//! Equipment, scheduled sessions and periodization models.

use chrono::{Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Operational,
    Maintenance,
    OutOfService,
}

impl EquipmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            EquipmentStatus::Operational => "Operational",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::OutOfService => "Out of service",
        }
    }
}

/// A piece of testing equipment with a calibration cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub location: String,
    pub status: EquipmentStatus,
    pub last_calibrated: NaiveDate,
    pub calibration_interval_days: u32,
}

impl Equipment {
    /// Date the next calibration falls due.
    pub fn calibration_due(&self) -> NaiveDate {
        self.last_calibrated
            .checked_add_days(Days::new(self.calibration_interval_days as u64))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// A scheduled testing or training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub duration_min: u16,
    pub location: String,
    #[serde(default)]
    pub athlete_ids: Vec<String>,
    /// Test battery run during the session, if any.
    #[serde(default)]
    pub battery_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodizationKind {
    Linear,
    Undulating,
    Block,
    Conjugate,
}

impl PeriodizationKind {
    pub fn label(self) -> &'static str {
        match self {
            PeriodizationKind::Linear => "Linear",
            PeriodizationKind::Undulating => "Daily Undulating",
            PeriodizationKind::Block => "Block",
            PeriodizationKind::Conjugate => "Conjugate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Volume {
    Low,
    Moderate,
    High,
}

impl Volume {
    pub fn label(self) -> &'static str {
        match self {
            Volume::Low => "Low",
            Volume::Moderate => "Moderate",
            Volume::High => "High",
        }
    }
}

/// One phase (mesocycle) of a periodization model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub weeks: u8,
    pub focus: String,
    /// Target intensity as % of 1RM.
    pub intensity_pct: u8,
    pub volume: Volume,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationModel {
    pub id: String,
    pub name: String,
    pub kind: PeriodizationKind,
    pub description: String,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl PeriodizationModel {
    pub fn total_weeks(&self) -> u32 {
        self.phases.iter().map(|p| p.weeks as u32).sum()
    }
}
