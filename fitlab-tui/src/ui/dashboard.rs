//! Tab 1: Dashboard aggregates.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use fitlab_core::badge::Badged;
use fitlab_core::domain::AthleteStatus;
use fitlab_core::query::{calibration_queue, upcoming_sessions, DashboardSummary};

use crate::app::AppState;
use crate::theme;
use crate::ui::drill::Body;

/// Rows in each "next up" list.
const PREVIEW: usize = 3;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let summary = DashboardSummary::compute(&app.catalog, app.today, app.warning_days);
    let mut body = Body::new();

    let as_of = summary.as_of.format("%A %d %B %Y").to_string();
    body.breadcrumb(&["Dashboard", as_of.as_str()]);
    body.blank();

    body.section("Roster");
    body.field("Athletes", summary.athletes.to_string());
    let mut spans = vec![Span::raw("  ")];
    for status in AthleteStatus::ALL {
        let badge = status.badge();
        spans.push(theme::badge(badge));
        spans.push(Span::styled(
            format!(" {}   ", summary.status_count(status)),
            theme::text(),
        ));
    }
    body.push(Line::from(spans));
    match summary.mean_readiness {
        Some(mean) => body.field_span(
            "Mean readiness",
            Span::styled(format!("{mean:.1}"), theme::readiness(mean.round() as u8)),
        ),
        None => body.field("Mean readiness", "n/a"),
    }
    body.blank();

    body.section("Catalog");
    body.field("Assessment modules", summary.sub_modules.to_string());
    body.field("Screens", summary.screens.to_string());
    body.field("Performance tests", summary.tests.to_string());
    body.blank();

    body.section("Next 7 days");
    body.field("Sessions", summary.sessions_next_7_days.to_string());
    for session in upcoming_sessions(&app.catalog.sessions, app.today)
        .into_iter()
        .take(PREVIEW)
    {
        body.push(Line::from(vec![
            Span::styled(
                format!("  {} {} ", session.date.format("%a %d %b"), session.start.format("%H:%M")),
                theme::muted(),
            ),
            Span::styled(session.title.clone(), theme::text()),
        ]));
    }
    body.blank();

    body.section("Calibration");
    body.field_span(
        "Due or overdue",
        Span::styled(
            format!("{} of {}", summary.equipment_due, summary.equipment_total),
            if summary.equipment_due > 0 {
                theme::warning()
            } else {
                theme::positive()
            },
        ),
    );
    let queue = calibration_queue(&app.catalog.equipment, app.today, app.warning_days);
    for entry in queue.iter().filter(|e| e.is_due()).take(PREVIEW) {
        body.push(Line::from(vec![
            Span::raw("  "),
            theme::badge_glyph(entry.state.badge()),
            Span::styled(format!(" {}", entry.equipment.name), theme::text()),
            Span::styled(format!("  due {}", entry.due.format("%Y-%m-%d")), theme::muted()),
        ]));
    }

    body.render(f, area);
}
