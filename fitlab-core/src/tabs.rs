//! Top-level dashboard tabs.

use serde::{Deserialize, Serialize};

/// Which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Dashboard,
    Athletes,
    Assessment,
    IntegratedTesting,
    SkillPerformance,
    Equipment,
    Schedule,
    Periodization,
}

impl Tab {
    pub const COUNT: usize = 8;

    pub const ALL: [Tab; Tab::COUNT] = [
        Tab::Dashboard,
        Tab::Athletes,
        Tab::Assessment,
        Tab::IntegratedTesting,
        Tab::SkillPerformance,
        Tab::Equipment,
        Tab::Schedule,
        Tab::Periodization,
    ];

    pub fn index(self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::Athletes => 1,
            Tab::Assessment => 2,
            Tab::IntegratedTesting => 3,
            Tab::SkillPerformance => 4,
            Tab::Equipment => 5,
            Tab::Schedule => 6,
            Tab::Periodization => 7,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Tab::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Athletes => "Athletes",
            Tab::Assessment => "Assessment",
            Tab::IntegratedTesting => "Integrated Testing",
            Tab::SkillPerformance => "Skill Performance",
            Tab::Equipment => "Equipment",
            Tab::Schedule => "Schedule",
            Tab::Periodization => "Periodization",
        }
    }

    /// Tabs whose body is a drill-down view.
    pub fn is_drill_down(self) -> bool {
        matches!(
            self,
            Tab::Athletes | Tab::Assessment | Tab::IntegratedTesting | Tab::SkillPerformance
        )
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::COUNT]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::COUNT - 1) % Tab::COUNT]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle() {
        assert_eq!(Tab::Dashboard.next(), Tab::Athletes);
        assert_eq!(Tab::Periodization.next(), Tab::Dashboard);
        assert_eq!(Tab::Dashboard.prev(), Tab::Periodization);
        assert_eq!(Tab::Athletes.prev(), Tab::Dashboard);
    }

    #[test]
    fn tab_from_index() {
        for i in 0..Tab::COUNT {
            let tab = Tab::from_index(i).unwrap();
            assert_eq!(tab.index(), i);
        }
        assert!(Tab::from_index(Tab::COUNT).is_none());
    }

    #[test]
    fn four_drill_down_tabs() {
        let count = Tab::ALL.iter().filter(|t| t.is_drill_down()).count();
        assert_eq!(count, 4);
    }
}
