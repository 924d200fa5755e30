//! Athlete filtering by sport, status and search term.

use crate::domain::{Athlete, AthleteStatus, Sport};

/// Criteria for the athlete list. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AthleteFilter {
    pub sport: Option<Sport>,
    pub status: Option<AthleteStatus>,
    /// Case-insensitive substring over name and position.
    pub search: String,
}

impl AthleteFilter {
    pub fn is_empty(&self) -> bool {
        self.sport.is_none() && self.status.is_none() && self.search.trim().is_empty()
    }

    /// All criteria must hold.
    pub fn matches(&self, athlete: &Athlete) -> bool {
        if self.sport.is_some_and(|sport| athlete.sport != sport) {
            return false;
        }
        if self.status.is_some_and(|status| athlete.status != status) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || athlete.name.to_lowercase().contains(&needle)
            || athlete.position.to_lowercase().contains(&needle)
    }

    /// Matching athletes in their original order.
    pub fn apply<'a>(&self, athletes: &'a [Athlete]) -> Vec<&'a Athlete> {
        athletes.iter().filter(|a| self.matches(a)).collect()
    }

    /// Step the sport criterion: any → each sport in turn → any.
    pub fn cycle_sport(&mut self) {
        self.sport = cycle(self.sport, &Sport::ALL);
    }

    /// Step the status criterion: any → each status in turn → any.
    pub fn cycle_status(&mut self) {
        self.status = cycle(self.status, &AthleteStatus::ALL);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Short description of the active criteria.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(sport) = self.sport {
            parts.push(format!("sport={}", sport.label()));
        }
        if let Some(status) = self.status {
            parts.push(format!("status={}", status.label()));
        }
        if !self.search.trim().is_empty() {
            parts.push(format!("search=\"{}\"", self.search.trim()));
        }
        if parts.is_empty() {
            "all".to_string()
        } else {
            parts.join(" ")
        }
    }
}

fn cycle<T: Copy + PartialEq>(current: Option<T>, all: &[T]) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => {
            let pos = all.iter().position(|v| *v == value)?;
            all.get(pos + 1).copied()
        }
    }
}
