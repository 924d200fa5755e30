//! Tab 2: Athletes. Filtered roster → profile with results → result detail.

use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

use fitlab_core::badge::Badged;
use fitlab_core::drill::views;
use fitlab_core::{DrillScreen, Level};

use crate::app::AppState;
use crate::theme;
use crate::ui::drill::Body;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let state = &app.athletes;
    let mut body = Body::new();

    match views::athletes(&app.catalog).render(&state.stack) {
        // The roster honours the filter; the controller's root list is the full roster.
        DrillScreen::Root { items } => {
            let shown = app.filtered_athletes();
            body.breadcrumb(&["Athletes"]);
            body.hints(Level::Root, "[/]search [s]port [a]status [x]clear");
            body.field_span(
                "Filter",
                Span::styled(
                    format!(
                        "{}  ({}/{})",
                        app.athlete_filter.describe(),
                        shown.len(),
                        items.len()
                    ),
                    theme::neutral(),
                ),
            );
            body.blank();
            if shown.is_empty() {
                body.empty("No athletes match the filter.");
            }
            for (i, athlete) in shown.iter().enumerate() {
                body.row(
                    i == state.cursor,
                    vec![theme::badge_glyph(athlete.status.badge()), Span::raw(" ")],
                    format!("{:<18}", athlete.name),
                    vec![
                        Span::styled(
                            format!(" {:<14} {:<16}", athlete.sport.label(), athlete.position),
                            theme::text_secondary(),
                        ),
                        Span::styled(
                            format!(" readiness {:>3}", athlete.readiness),
                            theme::readiness(athlete.readiness),
                        ),
                    ],
                );
            }
        }
        DrillScreen::Mid {
            entity, children, ..
        } => {
            body.breadcrumb(&["Athletes", entity.name.as_str()]);
            body.hints(Level::Mid, "");
            body.blank();
            body.field("Sport", entity.sport.label());
            body.field("Position", entity.position.clone());
            body.field("Age", entity.age.to_string());
            body.field_span("Status", theme::badge(entity.status.badge()));
            body.field_span(
                "Readiness",
                Span::styled(
                    entity.readiness.to_string(),
                    theme::readiness(entity.readiness),
                ),
            );
            body.field("Last assessed", entity.last_assessed.format("%Y-%m-%d").to_string());
            if let Some(mean) = entity.mean_percentile() {
                body.field("Mean percentile", format!("{mean:.0}"));
            }
            body.blank();
            body.section("Assessments");
            if children.is_empty() {
                body.empty("No assessments recorded.");
            }
            for (i, result) in children.iter().enumerate() {
                body.row(
                    i == state.cursor,
                    vec![Span::styled(
                        format!("{} ", result.date.format("%Y-%m-%d")),
                        theme::muted(),
                    )],
                    format!("{:<28}", result.test_name),
                    vec![
                        Span::styled(
                            format!(" {} {}", result.value, result.unit),
                            theme::text_secondary(),
                        ),
                        Span::styled(
                            format!("  P{}", result.percentile),
                            theme::percentile(result.percentile),
                        ),
                    ],
                );
            }
        }
        DrillScreen::Leaf { parent, entity, .. } => {
            body.breadcrumb(&["Athletes", parent.name.as_str(), entity.test_name.as_str()]);
            body.hints(Level::Leaf, "");
            body.blank();
            body.field("Date", entity.date.format("%A %d %B %Y").to_string());
            body.field("Result", format!("{} {}", entity.value, entity.unit));
            body.field_span(
                "Percentile",
                Span::styled(
                    format!("P{}", entity.percentile),
                    theme::percentile(entity.percentile),
                ),
            );
            if !entity.notes.is_empty() {
                body.blank();
                body.section("Notes");
                body.paragraph(&entity.notes);
            }
        }
        DrillScreen::NotFound { level, id, .. } => {
            body.breadcrumb(&["Athletes"]);
            body.not_found(level, &id);
        }
    }

    body.render(f, area);
}
