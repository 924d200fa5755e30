//! Calibration queue: equipment ordered by next calibration due date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Equipment, EquipmentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationState {
    Overdue,
    DueSoon,
    Ok,
    /// Out of service; listed but never counted as due.
    Excluded,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalibrationEntry<'a> {
    pub equipment: &'a Equipment,
    pub due: NaiveDate,
    /// Negative when overdue.
    pub days_remaining: i64,
    pub state: CalibrationState,
}

impl CalibrationEntry<'_> {
    pub fn is_due(&self) -> bool {
        matches!(
            self.state,
            CalibrationState::Overdue | CalibrationState::DueSoon
        )
    }
}

/// Build the queue: in-service items by due date then name, excluded items last.
pub fn calibration_queue(
    items: &[Equipment],
    today: NaiveDate,
    warning_days: u32,
) -> Vec<CalibrationEntry<'_>> {
    let mut queue: Vec<CalibrationEntry<'_>> = items
        .iter()
        .map(|equipment| {
            let due = equipment.calibration_due();
            let days_remaining = (due - today).num_days();
            let state = if equipment.status == EquipmentStatus::OutOfService {
                CalibrationState::Excluded
            } else if days_remaining < 0 {
                CalibrationState::Overdue
            } else if days_remaining <= warning_days as i64 {
                CalibrationState::DueSoon
            } else {
                CalibrationState::Ok
            };
            CalibrationEntry {
                equipment,
                due,
                days_remaining,
                state,
            }
        })
        .collect();

    queue.sort_by(|a, b| {
        let a_excluded = a.state == CalibrationState::Excluded;
        let b_excluded = b.state == CalibrationState::Excluded;
        a_excluded
            .cmp(&b_excluded)
            .then(a.due.cmp(&b.due))
            .then_with(|| a.equipment.name.cmp(&b.equipment.name))
    });
    queue
}

/// Items overdue or due within the warning window.
pub fn due_count(queue: &[CalibrationEntry<'_>]) -> usize {
    queue.iter().filter(|e| e.is_due()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn item(id: &str, name: &str, status: EquipmentStatus, last: NaiveDate, interval: u32) -> Equipment {
        Equipment {
            id: id.into(),
            name: name.into(),
            kind: "kind".into(),
            location: "lab".into(),
            status,
            last_calibrated: last,
            calibration_interval_days: interval,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn states_follow_due_date() {
        let today = d(2025, 3, 10);
        let items = vec![
            item("a", "Late", EquipmentStatus::Operational, d(2025, 1, 1), 30),
            item("b", "Soon", EquipmentStatus::Operational, d(2025, 2, 15), 30),
            item("c", "Fine", EquipmentStatus::Operational, d(2025, 3, 1), 365),
            item("e", "Edge", EquipmentStatus::Maintenance, d(2025, 2, 22), 30),
        ];
        let queue = calibration_queue(&items, today, 14);
        let states: Vec<_> = queue.iter().map(|e| (e.equipment.id.as_str(), e.state)).collect();
        assert_eq!(
            states,
            vec![
                ("a", CalibrationState::Overdue),
                ("b", CalibrationState::DueSoon),
                ("e", CalibrationState::DueSoon),
                ("c", CalibrationState::Ok),
            ]
        );
        assert_eq!(queue[0].days_remaining, -38);
        assert_eq!(queue[2].days_remaining, 14);
        assert_eq!(due_count(&queue), 3);
    }

    #[test]
    fn out_of_service_is_listed_last_and_not_due() {
        let today = d(2025, 3, 10);
        let items = vec![
            item("x", "Broken", EquipmentStatus::OutOfService, d(2024, 1, 1), 30),
            item("y", "Working", EquipmentStatus::Operational, d(2025, 3, 1), 365),
        ];
        let queue = calibration_queue(&items, today, 14);
        assert_eq!(queue[0].equipment.id, "y");
        assert_eq!(queue[1].state, CalibrationState::Excluded);
        assert_eq!(due_count(&queue), 0);
    }

    #[test]
    fn equal_due_dates_sort_by_name() {
        let today = d(2025, 3, 10);
        let items = vec![
            item("1", "Zeta", EquipmentStatus::Operational, d(2025, 1, 1), 100),
            item("2", "Alpha", EquipmentStatus::Operational, d(2025, 1, 1), 100),
        ];
        let queue = calibration_queue(&items, today, 14);
        assert_eq!(queue[0].equipment.name, "Alpha");
    }

    #[test]
    fn builtin_queue_is_sorted() {
        let items = fixtures::equipment();
        let queue = calibration_queue(&items, fixtures::snapshot_date(), 14);
        assert_eq!(queue.len(), items.len());
        let in_service: Vec<_> = queue
            .iter()
            .filter(|e| e.state != CalibrationState::Excluded)
            .collect();
        assert!(in_service.windows(2).all(|w| w[0].due <= w[1].due));
        assert_eq!(queue.last().unwrap().state, CalibrationState::Excluded);
    }
}
