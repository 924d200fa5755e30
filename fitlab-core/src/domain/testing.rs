//! Assessment modules, test batteries and skill-related performance tests.

use serde::{Deserialize, Serialize};

/// Fitness domain an assessment sub-module or battery belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Strength,
    Endurance,
    Flexibility,
    BodyComposition,
    Movement,
    Power,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Endurance => "Endurance",
            Category::Flexibility => "Flexibility",
            Category::BodyComposition => "Body Composition",
            Category::Movement => "Movement Quality",
            Category::Power => "Power",
        }
    }
}

/// Skill-related fitness component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Agility,
    Balance,
    Coordination,
    Power,
    ReactionTime,
    Speed,
}

impl SkillKind {
    pub fn label(self) -> &'static str {
        match self {
            SkillKind::Agility => "Agility",
            SkillKind::Balance => "Balance",
            SkillKind::Coordination => "Coordination",
            SkillKind::Power => "Power",
            SkillKind::ReactionTime => "Reaction Time",
            SkillKind::Speed => "Speed",
        }
    }
}

/// Whether a larger raw score is better (jump height) or worse (sprint time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    HigherIsBetter,
    LowerIsBetter,
}

/// A labelled band of raw scores, e.g. "Excellent: 60–70 cm".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormBand {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl NormBand {
    /// Inclusive at `min`, exclusive at `max`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// A standardized performance test inside a battery or skill component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceTest {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub protocol: Vec<String>,
    pub unit: String,
    pub scoring: Scoring,
    #[serde(default)]
    pub norms: Vec<NormBand>,
}

impl PerformanceTest {
    /// Label of the norm band a raw score falls in.
    pub fn classify(&self, value: f64) -> Option<&str> {
        self.norms
            .iter()
            .find(|band| band.contains(value))
            .map(|band| band.label.as_str())
    }
}

/// A single screen (test station) within an assessment sub-module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub protocol: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
    pub duration_min: u16,
    /// Ids into the equipment collection.
    #[serde(default)]
    pub equipment: Vec<String>,
}

/// A sub-module of the assessment module, grouping related screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubModule {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub summary: String,
    #[serde(default)]
    pub screens: Vec<Screen>,
}

impl SubModule {
    /// Total station time for running every screen back to back.
    pub fn total_minutes(&self) -> u32 {
        self.screens.iter().map(|s| s.duration_min as u32).sum()
    }
}

/// An integrated test battery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestBattery {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub summary: String,
    #[serde(default)]
    pub tests: Vec<PerformanceTest>,
}

/// A skill-related fitness component and its tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillComponent {
    pub id: String,
    pub name: String,
    pub kind: SkillKind,
    pub description: String,
    #[serde(default)]
    pub tests: Vec<PerformanceTest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprint() -> PerformanceTest {
        PerformanceTest {
            id: "t_sprint".into(),
            name: "10 m Sprint".into(),
            description: "Flying start".into(),
            protocol: vec![],
            unit: "s".into(),
            scoring: Scoring::LowerIsBetter,
            norms: vec![
                NormBand { label: "Excellent".into(), min: 0.0, max: 1.7 },
                NormBand { label: "Average".into(), min: 1.7, max: 1.9 },
                NormBand { label: "Poor".into(), min: 1.9, max: 10.0 },
            ],
        }
    }

    #[test]
    fn classify_uses_half_open_bands() {
        let test = sprint();
        assert_eq!(test.classify(1.65), Some("Excellent"));
        assert_eq!(test.classify(1.7), Some("Average"));
        assert_eq!(test.classify(2.4), Some("Poor"));
        assert_eq!(test.classify(12.0), None);
    }

    #[test]
    fn total_minutes_sums_screens() {
        let module = SubModule {
            id: "sm".into(),
            name: "Mobility".into(),
            category: Category::Flexibility,
            summary: String::new(),
            screens: vec![
                Screen {
                    id: "a".into(),
                    name: "A".into(),
                    description: String::new(),
                    protocol: vec![],
                    metrics: vec![],
                    duration_min: 5,
                    equipment: vec![],
                },
                Screen {
                    id: "b".into(),
                    name: "B".into(),
                    description: String::new(),
                    protocol: vec![],
                    metrics: vec![],
                    duration_min: 12,
                    equipment: vec![],
                },
            ],
        };
        assert_eq!(module.total_minutes(), 17);
    }
}
