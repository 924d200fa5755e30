//! Tab 6: Equipment, ordered as a calibration queue.

use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

use fitlab_core::badge::Badged;
use fitlab_core::query::{calibration_queue, due_count, CalibrationEntry};

use crate::app::AppState;
use crate::theme;
use crate::ui::drill::Body;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let queue = calibration_queue(&app.catalog.equipment, app.today, app.warning_days);
    let mut body = Body::new();

    body.breadcrumb(&["Equipment", "Calibration queue"]);
    body.field_span(
        "Due",
        Span::styled(
            format!(
                "{} of {} within {} days of {}",
                due_count(&queue),
                queue.len(),
                app.warning_days,
                app.today.format("%Y-%m-%d")
            ),
            theme::warning(),
        ),
    );
    body.blank();

    if queue.is_empty() {
        body.empty("No equipment registered.");
    }
    for (i, entry) in queue.iter().enumerate() {
        let item = entry.equipment;
        body.row(
            i == app.equipment_cursor,
            vec![theme::badge_glyph(entry.state.badge()), Span::raw(" ")],
            format!("{:<24}", item.name),
            vec![
                Span::styled(format!(" {:<16}", item.location), theme::text_secondary()),
                Span::styled(
                    format!(" due {} ", entry.due.format("%Y-%m-%d")),
                    theme::muted(),
                ),
                Span::styled(due_phrase(entry), theme::tone(entry.state.badge().tone)),
            ],
        );
    }

    if let Some(entry) = queue.get(app.equipment_cursor) {
        let item = entry.equipment;
        body.blank();
        body.section(&item.name);
        body.field("Type", item.kind.clone());
        body.field_span("Status", theme::badge(item.status.badge()));
        body.field(
            "Last calibrated",
            item.last_calibrated.format("%Y-%m-%d").to_string(),
        );
        body.field(
            "Interval",
            format!("{} days", item.calibration_interval_days),
        );
        body.field_span("Calibration", theme::badge(entry.state.badge()));
    }

    body.render(f, area);
}

/// "in 5d", "today", "12d overdue".
fn due_phrase(entry: &CalibrationEntry<'_>) -> String {
    match entry.days_remaining {
        0 => "today".to_string(),
        d if d < 0 => format!("{}d overdue", -d),
        d => format!("in {d}d"),
    }
}
