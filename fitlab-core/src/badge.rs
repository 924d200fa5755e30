//! Static badge tables: enum → glyph, label and tone.
//!
//! Every mapping is an exhaustive `match`, so adding a variant without a badge
//! fails to compile. Shells map [`Tone`] to concrete colours.

use crate::domain::{AthleteStatus, Category, EquipmentStatus, PeriodizationKind, SkillKind};
use crate::query::CalibrationState;
use crate::tabs::Tab;

/// Semantic colour role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Accent,
    Positive,
    Negative,
    Warning,
    Neutral,
    Muted,
}

/// Render descriptor for an enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub glyph: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

impl Badge {
    const fn new(glyph: &'static str, label: &'static str, tone: Tone) -> Self {
        Self { glyph, label, tone }
    }
}

/// Types with a static badge.
pub trait Badged {
    fn badge(&self) -> Badge;
}

impl Badged for Category {
    fn badge(&self) -> Badge {
        match self {
            Category::Strength => Badge::new("▲", "Strength", Tone::Accent),
            Category::Endurance => Badge::new("♥", "Endurance", Tone::Negative),
            Category::Flexibility => Badge::new("~", "Flexibility", Tone::Neutral),
            Category::BodyComposition => Badge::new("◉", "Body Composition", Tone::Muted),
            Category::Movement => Badge::new("⟳", "Movement Quality", Tone::Positive),
            Category::Power => Badge::new("⚡", "Power", Tone::Warning),
        }
    }
}

impl Badged for SkillKind {
    fn badge(&self) -> Badge {
        match self {
            SkillKind::Agility => Badge::new("↯", "Agility", Tone::Accent),
            SkillKind::Balance => Badge::new("⚖", "Balance", Tone::Neutral),
            SkillKind::Coordination => Badge::new("✣", "Coordination", Tone::Positive),
            SkillKind::Power => Badge::new("⚡", "Power", Tone::Warning),
            SkillKind::ReactionTime => Badge::new("◷", "Reaction Time", Tone::Muted),
            SkillKind::Speed => Badge::new("»", "Speed", Tone::Negative),
        }
    }
}

impl Badged for AthleteStatus {
    fn badge(&self) -> Badge {
        match self {
            AthleteStatus::Active => Badge::new("●", "Active", Tone::Positive),
            AthleteStatus::Injured => Badge::new("✚", "Injured", Tone::Negative),
            AthleteStatus::Recovering => Badge::new("◐", "Recovering", Tone::Warning),
            AthleteStatus::Inactive => Badge::new("○", "Inactive", Tone::Muted),
        }
    }
}

impl Badged for EquipmentStatus {
    fn badge(&self) -> Badge {
        match self {
            EquipmentStatus::Operational => Badge::new("●", "Operational", Tone::Positive),
            EquipmentStatus::Maintenance => Badge::new("⚙", "Maintenance", Tone::Warning),
            EquipmentStatus::OutOfService => Badge::new("✖", "Out of service", Tone::Negative),
        }
    }
}

impl Badged for PeriodizationKind {
    fn badge(&self) -> Badge {
        match self {
            PeriodizationKind::Linear => Badge::new("╱", "Linear", Tone::Accent),
            PeriodizationKind::Undulating => Badge::new("∿", "Daily Undulating", Tone::Neutral),
            PeriodizationKind::Block => Badge::new("▦", "Block", Tone::Warning),
            PeriodizationKind::Conjugate => Badge::new("⇄", "Conjugate", Tone::Positive),
        }
    }
}

impl Badged for CalibrationState {
    fn badge(&self) -> Badge {
        match self {
            CalibrationState::Overdue => Badge::new("!", "Overdue", Tone::Negative),
            CalibrationState::DueSoon => Badge::new("◔", "Due soon", Tone::Warning),
            CalibrationState::Ok => Badge::new("✓", "OK", Tone::Positive),
            CalibrationState::Excluded => Badge::new("–", "Out of service", Tone::Muted),
        }
    }
}

impl Badged for Tab {
    fn badge(&self) -> Badge {
        match self {
            Tab::Dashboard => Badge::new("⌂", "Dashboard", Tone::Accent),
            Tab::Athletes => Badge::new("☺", "Athletes", Tone::Accent),
            Tab::Assessment => Badge::new("✎", "Assessment", Tone::Accent),
            Tab::IntegratedTesting => Badge::new("⧉", "Integrated Testing", Tone::Accent),
            Tab::SkillPerformance => Badge::new("↯", "Skill Performance", Tone::Accent),
            Tab::Equipment => Badge::new("⚙", "Equipment", Tone::Accent),
            Tab::Schedule => Badge::new("▤", "Schedule", Tone::Accent),
            Tab::Periodization => Badge::new("∿", "Periodization", Tone::Accent),
        }
    }
}
