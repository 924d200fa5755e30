//! Session schedule queries.

use chrono::{Days, NaiveDate};

use crate::domain::Session;

/// Sessions on or after `today`, ordered by date then start time.
pub fn upcoming_sessions(sessions: &[Session], today: NaiveDate) -> Vec<&Session> {
    let mut upcoming: Vec<&Session> = sessions.iter().filter(|s| s.date >= today).collect();
    upcoming.sort_by_key(|s| (s.date, s.start));
    upcoming
}

/// Number of sessions in `[today, today + days)`.
pub fn sessions_within(sessions: &[Session], today: NaiveDate, days: u64) -> usize {
    let end = today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    sessions
        .iter()
        .filter(|s| s.date >= today && s.date < end)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn upcoming_excludes_past_and_sorts_by_start() {
        let sessions = fixtures::sessions();
        let upcoming = upcoming_sessions(&sessions, fixtures::snapshot_date());
        let ids: Vec<&str> = upcoming.iter().map(|s| s.id.as_str()).collect();
        // Two sessions on 2025-03-11: the 06:45 conditioning check comes first.
        assert_eq!(
            ids,
            vec!["ses_004", "ses_002", "ses_003", "ses_005", "ses_006", "ses_007"]
        );
    }

    #[test]
    fn sessions_within_a_week() {
        let sessions = fixtures::sessions();
        // 03-11 (x2), 03-12, 03-14 fall in [03-10, 03-17).
        assert_eq!(sessions_within(&sessions, fixtures::snapshot_date(), 7), 4);
        assert_eq!(sessions_within(&sessions, fixtures::snapshot_date(), 0), 0);
    }
}
