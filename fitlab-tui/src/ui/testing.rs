//! Tabs 4 and 5: Integrated Testing and Skill Performance.
//!
//! Both drill into `PerformanceTest` leaves, so they share the test rows and
//! the test detail.

use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

use fitlab_core::badge::Badged;
use fitlab_core::domain::{PerformanceTest, Scoring};
use fitlab_core::drill::views;
use fitlab_core::{DrillScreen, Level};

use crate::app::AppState;
use crate::theme;
use crate::ui::drill::Body;

const INTEGRATED: &str = "Integrated Testing";
const SKILLS: &str = "Skill Performance";

pub fn render_integrated(f: &mut Frame, area: Rect, app: &AppState) {
    let state = &app.integrated;
    let mut body = Body::new();

    match views::integrated_testing(&app.catalog).render(&state.stack) {
        DrillScreen::Root { items } => {
            body.breadcrumb(&[INTEGRATED]);
            body.hints(Level::Root, "");
            body.blank();
            if items.is_empty() {
                body.empty("No test batteries.");
            }
            for (i, battery) in items.iter().enumerate() {
                body.row(
                    i == state.cursor,
                    vec![theme::badge_glyph(battery.category.badge()), Span::raw(" ")],
                    battery.name.clone(),
                    vec![Span::styled(
                        format!("  {} tests", battery.tests.len()),
                        theme::muted(),
                    )],
                );
            }
        }
        DrillScreen::Mid {
            entity, children, ..
        } => {
            body.breadcrumb(&[INTEGRATED, entity.name.as_str()]);
            body.hints(Level::Mid, "");
            body.blank();
            body.field_span("Category", theme::badge(entity.category.badge()));
            body.paragraph(&entity.summary);
            body.blank();
            test_rows(&mut body, children, state.cursor);
        }
        DrillScreen::Leaf { parent, entity, .. } => {
            body.breadcrumb(&[INTEGRATED, parent.name.as_str(), entity.name.as_str()]);
            body.hints(Level::Leaf, "");
            body.blank();
            test_detail(&mut body, entity);
        }
        DrillScreen::NotFound { level, id, .. } => {
            body.breadcrumb(&[INTEGRATED]);
            body.not_found(level, &id);
        }
    }

    body.render(f, area);
}

pub fn render_skills(f: &mut Frame, area: Rect, app: &AppState) {
    let state = &app.skills;
    let mut body = Body::new();

    match views::skill_performance(&app.catalog).render(&state.stack) {
        DrillScreen::Root { items } => {
            body.breadcrumb(&[SKILLS]);
            body.hints(Level::Root, "");
            body.blank();
            if items.is_empty() {
                body.empty("No skill components.");
            }
            for (i, component) in items.iter().enumerate() {
                body.row(
                    i == state.cursor,
                    vec![theme::badge_glyph(component.kind.badge()), Span::raw(" ")],
                    component.name.clone(),
                    vec![Span::styled(
                        format!("  {} tests", component.tests.len()),
                        theme::muted(),
                    )],
                );
            }
        }
        DrillScreen::Mid {
            entity, children, ..
        } => {
            body.breadcrumb(&[SKILLS, entity.name.as_str()]);
            body.hints(Level::Mid, "");
            body.blank();
            body.field_span("Component", theme::badge(entity.kind.badge()));
            body.paragraph(&entity.description);
            body.blank();
            test_rows(&mut body, children, state.cursor);
        }
        DrillScreen::Leaf { parent, entity, .. } => {
            body.breadcrumb(&[SKILLS, parent.name.as_str(), entity.name.as_str()]);
            body.hints(Level::Leaf, "");
            body.blank();
            test_detail(&mut body, entity);
        }
        DrillScreen::NotFound { level, id, .. } => {
            body.breadcrumb(&[SKILLS]);
            body.not_found(level, &id);
        }
    }

    body.render(f, area);
}

fn scoring_label(scoring: Scoring) -> &'static str {
    match scoring {
        Scoring::HigherIsBetter => "higher is better",
        Scoring::LowerIsBetter => "lower is better",
    }
}

fn test_rows(body: &mut Body, tests: &[PerformanceTest], cursor: usize) {
    body.section("Tests");
    if tests.is_empty() {
        body.empty("No tests defined.");
    }
    for (i, test) in tests.iter().enumerate() {
        body.row(
            i == cursor,
            vec![],
            test.name.clone(),
            vec![Span::styled(format!("  [{}]", test.unit), theme::muted())],
        );
    }
}

fn test_detail(body: &mut Body, test: &PerformanceTest) {
    body.paragraph(&test.description);
    body.blank();
    body.field("Unit", test.unit.clone());
    body.field("Scoring", scoring_label(test.scoring));

    if !test.protocol.is_empty() {
        body.blank();
        body.section("Protocol");
        for (n, step) in test.protocol.iter().enumerate() {
            body.field(&format!("  {}", n + 1), step.clone());
        }
    }

    body.blank();
    body.section("Norms");
    if test.norms.is_empty() {
        body.empty("No norm bands.");
    }
    for band in &test.norms {
        body.field_span(
            &format!("  {:<12}", band.label),
            Span::styled(
                format!("{} – {} {}", band.min, band.max, test.unit),
                theme::neutral(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_labels() {
        assert_eq!(scoring_label(Scoring::LowerIsBetter), "lower is better");
        assert_eq!(scoring_label(Scoring::HigherIsBetter), "higher is better");
    }
}
