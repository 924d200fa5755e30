//! Top-level UI layout: tab strip, active tab frame, status bar.

pub mod assessment;
pub mod athletes;
pub mod dashboard;
pub mod drill;
pub mod equipment;
pub mod overlays;
pub mod periodization;
pub mod schedule;
pub mod status_bar;
pub mod testing;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use fitlab_core::badge::Badged;
use fitlab_core::Tab;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: tab strip + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let tab_area = chunks[0];
    let main_area = chunks[1];
    let status_area = chunks[2];

    draw_tab_strip(f, tab_area, app);
    draw_tab(f, main_area, app);
    status_bar::render(f, status_area, app);

    // Draw overlays on top.
    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area, app),
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::Route(input) => overlays::render_route_prompt(f, main_area, input),
        Overlay::Search => overlays::render_search(f, main_area, &app.athlete_filter.search),
        Overlay::None => {}
    }
}

fn draw_tab_strip(f: &mut Frame, area: Rect, app: &AppState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            let badge = tab.badge();
            Line::from(vec![
                Span::styled(format!("{} ", tab.index() + 1), theme::muted()),
                Span::raw(format!("{} {}", badge.glyph, badge.label)),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(theme::text_secondary())
        .highlight_style(theme::accent_bold())
        .divider(Span::styled("│", theme::muted()));
    f.render_widget(tabs, area);
}

/// Draw the active tab with its border.
fn draw_tab(f: &mut Frame, area: Rect, app: &AppState) {
    let tab = app.active_tab;
    let is_active = true; // one tab is shown at a time

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(is_active))
        .title(format!(" {} [{}] ", tab.label(), tab.index() + 1))
        .title_style(theme::panel_title(is_active));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match tab {
        Tab::Dashboard => dashboard::render(f, inner, app),
        Tab::Athletes => athletes::render(f, inner, app),
        Tab::Assessment => assessment::render(f, inner, app),
        Tab::IntegratedTesting => testing::render_integrated(f, inner, app),
        Tab::SkillPerformance => testing::render_skills(f, inner, app),
        Tab::Equipment => equipment::render(f, inner, app),
        Tab::Schedule => schedule::render(f, inner, app),
        Tab::Periodization => periodization::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
