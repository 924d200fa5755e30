//! Overlay widgets: welcome, help, route prompt, athlete search.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use fitlab_core::routing::ROUTES;

use crate::app::AppState;
use crate::input::key_bindings;
use crate::theme;
use crate::ui::centered_rect;

/// Start-up welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to FitLab ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} athletes · {} screens · {} tests",
                app.catalog.athletes.len(),
                app.catalog.screen_count(),
                app.catalog.test_count()
            ),
            theme::neutral(),
        )),
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Press 2 to browse athletes and their results",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Enter drills into a row, Esc goes back",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Press # and type a route such as #schedule",
            theme::muted(),
        )),
        Line::from(Span::styled("  4. Press ? for all keys", theme::muted())),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Key bindings and known routes.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keyboard [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines = vec![Line::from("")];
    for (keys, action) in key_bindings() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<26}"), theme::accent()),
            Span::styled(*action, theme::text_secondary()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Routes", theme::accent_bold())));
    for (fragment, tab) in ROUTES {
        lines.push(Line::from(vec![
            Span::styled(format!("  {fragment:<28}"), theme::neutral()),
            Span::styled(tab.label(), theme::text_secondary()),
        ]));
    }

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

/// `#` prompt.
pub fn render_route_prompt(f: &mut Frame, area: Rect, input: &str) {
    render_prompt(f, area, " Go to route [Enter]go [Esc]cancel ", input);
}

/// Athlete search prompt, edited live.
pub fn render_search(f: &mut Frame, area: Rect, input: &str) {
    render_prompt(f, area, " Search athletes [Enter]done [Esc]clear ", input);
}

fn render_prompt(f: &mut Frame, area: Rect, title: &str, input: &str) {
    let popup = centered_rect(50, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(title.to_string())
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" > ", theme::accent()),
            Span::styled(input.to_string(), theme::text()),
            Span::styled("_", theme::accent()),
        ]),
    ];

    let para = Paragraph::new(text).block(block);
    f.render_widget(para, popup);
}
