//! Tab 7: Schedule of upcoming sessions.

use chrono::Duration;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

use fitlab_core::domain::{find, Session};
use fitlab_core::query::upcoming_sessions;

use crate::app::AppState;
use crate::theme;
use crate::ui::drill::Body;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let sessions = upcoming_sessions(&app.catalog.sessions, app.today);
    let mut body = Body::new();

    body.breadcrumb(&["Schedule", "Upcoming"]);
    body.blank();

    if sessions.is_empty() {
        body.empty("Nothing scheduled.");
    }
    for (i, session) in sessions.iter().enumerate() {
        let style = if session.date == app.today {
            theme::positive()
        } else {
            theme::muted()
        };
        body.row(
            i == app.schedule_cursor,
            vec![Span::styled(
                format!("{} {} ", session.date.format("%a %d %b"), time_range(session)),
                style,
            )],
            format!("{:<30}", session.title),
            vec![Span::styled(
                format!(" {:<14} {} athletes", session.location, session.athlete_ids.len()),
                theme::text_secondary(),
            )],
        );
    }

    if let Some(session) = sessions.get(app.schedule_cursor) {
        body.blank();
        body.section(&session.title);
        body.field("When", format!("{} {}", session.date.format("%A %d %B %Y"), time_range(session)));
        body.field("Where", session.location.clone());
        let battery = session
            .battery_id
            .as_deref()
            .map(|id| {
                find(&app.catalog.batteries, id)
                    .map(|battery| battery.name.clone())
                    .unwrap_or_else(|| id.to_string())
            })
            .unwrap_or_else(|| "none".to_string());
        body.field("Battery", battery);
        body.section("Athletes");
        for id in &session.athlete_ids {
            let name = find(&app.catalog.athletes, id)
                .map(|athlete| athlete.name.clone())
                .unwrap_or_else(|| format!("{id} (unknown)"));
            body.paragraph(&format!("  • {name}"));
        }
    }

    body.render(f, area);
}

/// `07:30–08:45`.
fn time_range(session: &Session) -> String {
    let end = session.start + Duration::minutes(i64::from(session.duration_min));
    format!("{}–{}", session.start.format("%H:%M"), end.format("%H:%M"))
}
