//! Tab 8: Periodization models and the selected model's phase table.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use fitlab_core::badge::Badged;
use fitlab_core::domain::{Phase, Volume};

use crate::app::AppState;
use crate::theme;
use crate::ui::drill::Body;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let models = &app.catalog.periodization_models;
    let mut body = Body::new();

    body.breadcrumb(&["Periodization"]);
    body.blank();

    if models.is_empty() {
        body.empty("No periodization models.");
    }
    for (i, model) in models.iter().enumerate() {
        body.row(
            i == app.periodization_cursor,
            vec![theme::badge_glyph(model.kind.badge()), Span::raw(" ")],
            format!("{:<28}", model.name),
            vec![Span::styled(
                format!(" {} phases · {} weeks", model.phases.len(), model.total_weeks()),
                theme::muted(),
            )],
        );
    }

    if let Some(model) = models.get(app.periodization_cursor) {
        body.blank();
        body.section(&model.name);
        body.field_span("Type", theme::badge(model.kind.badge()));
        body.paragraph(&model.description);
        body.blank();
        body.push(Line::from(Span::styled(
            format!(
                "  {:<20} {:>5}  {:>9}  {:<8}  {}",
                "Phase", "Weeks", "Intensity", "Volume", "Focus"
            ),
            theme::muted(),
        )));
        for phase in &model.phases {
            body.push(phase_line(phase));
        }
    }

    body.render(f, area);
}

fn volume_style(volume: Volume) -> ratatui::style::Style {
    match volume {
        Volume::Low => theme::positive(),
        Volume::Moderate => theme::accent(),
        Volume::High => theme::warning(),
    }
}

fn phase_line(phase: &Phase) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<20}", phase.name), theme::text()),
        Span::styled(format!(" {:>5}", phase.weeks), theme::text_secondary()),
        Span::styled(format!("  {:>8}%", phase.intensity_pct), theme::neutral()),
        Span::styled(format!("  {:<8}", phase.volume.label()), volume_style(phase.volume)),
        Span::styled(format!("  {}", phase.focus), theme::text_secondary()),
    ])
}
