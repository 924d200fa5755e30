//! Dashboard aggregates over the catalog.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::domain::AthleteStatus;

use super::calibration::{calibration_queue, due_count};
use super::schedule::sessions_within;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub as_of: NaiveDate,
    pub athletes: usize,
    /// Athlete count per status, in `AthleteStatus::ALL` order.
    pub by_status: Vec<(AthleteStatus, usize)>,
    /// `None` when the roster is empty.
    pub mean_readiness: Option<f64>,
    pub sub_modules: usize,
    pub screens: usize,
    pub tests: usize,
    pub sessions_next_7_days: usize,
    pub equipment_total: usize,
    pub equipment_due: usize,
}

impl DashboardSummary {
    pub fn compute(catalog: &Catalog, today: NaiveDate, warning_days: u32) -> Self {
        let by_status = AthleteStatus::ALL
            .iter()
            .map(|status| {
                let count = catalog
                    .athletes
                    .iter()
                    .filter(|a| a.status == *status)
                    .count();
                (*status, count)
            })
            .collect();

        let mean_readiness = if catalog.athletes.is_empty() {
            None
        } else {
            let total: f64 = catalog.athletes.iter().map(|a| a.readiness as f64).sum();
            Some(total / catalog.athletes.len() as f64)
        };

        let queue = calibration_queue(&catalog.equipment, today, warning_days);

        Self {
            as_of: today,
            athletes: catalog.athletes.len(),
            by_status,
            mean_readiness,
            sub_modules: catalog.sub_modules.len(),
            screens: catalog.screen_count(),
            tests: catalog.test_count(),
            sessions_next_7_days: sessions_within(&catalog.sessions, today, 7),
            equipment_total: catalog.equipment.len(),
            equipment_due: due_count(&queue),
        }
    }

    pub fn status_count(&self, status: AthleteStatus) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn builtin_summary() {
        let catalog = Catalog::builtin();
        let summary = DashboardSummary::compute(&catalog, fixtures::snapshot_date(), 14);
        assert_eq!(summary.athletes, 8);
        assert_eq!(summary.status_count(AthleteStatus::Active), 5);
        assert_eq!(summary.status_count(AthleteStatus::Injured), 1);
        assert_eq!(summary.status_count(AthleteStatus::Recovering), 1);
        assert_eq!(summary.status_count(AthleteStatus::Inactive), 1);
        // (88 + 42 + 91 + 67 + 79 + 84 + 58 + 73) / 8
        assert_eq!(summary.mean_readiness, Some(72.75));
        assert_eq!(summary.screens, 12);
        assert_eq!(summary.tests, 18);
        assert_eq!(summary.sessions_next_7_days, 4);
    }

    #[test]
    fn empty_catalog_has_no_mean() {
        let catalog = Catalog::default();
        let today = fixtures::snapshot_date();
        let summary = DashboardSummary::compute(&catalog, today, 14);
        assert_eq!(summary.athletes, 0);
        assert_eq!(summary.mean_readiness, None);
        assert_eq!(summary.equipment_due, 0);
        assert_eq!(summary.status_count(AthleteStatus::Active), 0);
    }
}
