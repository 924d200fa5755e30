//! Tab 3: Assessment. Sub-modules → screens → screen protocol.

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
    let state = &app.assessment;
    let mut body = Body::new();

    match views::assessment(&app.catalog).render(&state.stack) {
        DrillScreen::Root { items } => {
            body.breadcrumb(&["Assessment"]);
            body.hints(Level::Root, "");
            body.blank();
            if items.is_empty() {
                body.empty("No assessment modules.");
            }
            for (i, module) in items.iter().enumerate() {
                body.row(
                    i == state.cursor,
                    vec![theme::badge_glyph(module.category.badge()), Span::raw(" ")],
                    module.name.clone(),
                    vec![Span::styled(
                        format!(
                            "  {} screens · {} min",
                            module.screens.len(),
                            module.total_minutes()
                        ),
                        theme::muted(),
                    )],
                );
            }
        }
        DrillScreen::Mid {
            entity, children, ..
        } => {
            body.breadcrumb(&["Assessment", entity.name.as_str()]);
            body.hints(Level::Mid, "");
            body.blank();
            body.field_span("Category", theme::badge(entity.category.badge()));
            body.paragraph(&entity.summary);
            body.blank();
            body.section("Screens");
            if children.is_empty() {
                body.empty("No screens in this module.");
            }
            for (i, screen) in children.iter().enumerate() {
                body.row(
                    i == state.cursor,
                    vec![],
                    screen.name.clone(),
                    vec![Span::styled(
                        format!("  {} min", screen.duration_min),
                        theme::muted(),
                    )],
                );
            }
        }
        DrillScreen::Leaf { parent, entity, .. } => {
            body.breadcrumb(&["Assessment", parent.name.as_str(), entity.name.as_str()]);
            body.hints(Level::Leaf, "");
            body.blank();
            body.paragraph(&entity.description);
            body.blank();
            body.field("Duration", format!("{} min", entity.duration_min));
            body.field("Equipment", equipment_names(app, &entity.equipment));
            body.blank();
            body.section("Protocol");
            for (n, step) in entity.protocol.iter().enumerate() {
                body.field(&format!("  {}", n + 1), step.clone());
            }
            body.blank();
            body.section("Metrics");
            for metric in &entity.metrics {
                body.paragraph(&format!("  • {metric}"));
            }
        }
        DrillScreen::NotFound { level, id, .. } => {
            body.breadcrumb(&["Assessment"]);
            body.not_found(level, &id);
        }
    }

    body.render(f, area);
}

/// Equipment ids resolved to names; unknown ids are shown as-is.
fn equipment_names(app: &AppState, ids: &[String]) -> String {
    if ids.is_empty() {
        return "none".to_string();
    }
    ids.iter()
        .map(|id| {
            fitlab_core::domain::find(&app.catalog.equipment, id)
                .map(|item| item.name.clone())
                .unwrap_or_else(|| id.clone())
        })
        .collect::<Vec<_>>()
        .join(", ")
}
