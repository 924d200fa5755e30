//! Shared building blocks for list and drill-down tabs.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use fitlab_core::Level;

use crate::theme;

/// Lines of a tab body plus the line the cursor sits on.
#[derive(Default)]
pub struct Body {
    lines: Vec<Line<'static>>,
    cursor_line: Option<usize>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    /// `a › b › c` path of the current screen.
    pub fn breadcrumb(&mut self, parts: &[&str]) {
        let mut spans = Vec::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" › ", theme::muted()));
            }
            let style = if i + 1 == parts.len() {
                theme::accent_bold()
            } else {
                theme::neutral()
            };
            spans.push(Span::styled(part.to_string(), style));
        }
        self.lines.push(Line::from(spans));
    }

    /// Key hints for a drill level.
    pub fn hints(&mut self, level: Level, extra: &str) {
        let keys = match level {
            Level::Root => "[j/k]move [Enter]open",
            Level::Mid => "[j/k]move [Enter]open [Esc]back",
            Level::Leaf => "[Esc]back",
        };
        let text = if extra.is_empty() {
            keys.to_string()
        } else {
            format!("{keys} {extra}")
        };
        self.lines.push(Line::from(Span::styled(text, theme::muted())));
    }

    pub fn section(&mut self, title: &str) {
        self.lines
            .push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
    }

    /// `label: value` pair.
    pub fn field(&mut self, label: &str, value: impl Into<String>) {
        self.lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), theme::muted()),
            Span::styled(value.into(), theme::text()),
        ]));
    }

    /// `label: <span>` pair with a styled value.
    pub fn field_span(&mut self, label: &str, value: Span<'static>) {
        self.lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), theme::muted()),
            value,
        ]));
    }

    /// Wrapped prose in the secondary text colour.
    pub fn paragraph(&mut self, text: &str) {
        self.lines
            .push(Line::from(Span::styled(text.to_string(), theme::text_secondary())));
    }

    /// Selectable row. `lead` and `tail` frame the label.
    pub fn row(
        &mut self,
        selected: bool,
        lead: Vec<Span<'static>>,
        label: impl Into<String>,
        tail: Vec<Span<'static>>,
    ) {
        if selected {
            self.cursor_line = Some(self.lines.len());
        }
        let marker = if selected { "▸ " } else { "  " };
        let label_style = if selected {
            theme::highlight()
        } else {
            theme::text()
        };
        let mut spans = vec![Span::styled(marker, theme::accent())];
        spans.extend(lead);
        spans.push(Span::styled(label.into(), label_style));
        spans.extend(tail);
        self.lines.push(Line::from(spans));
    }

    /// Placeholder for an empty list.
    pub fn empty(&mut self, text: &str) {
        self.lines
            .push(Line::from(Span::styled(format!("  {text}"), theme::muted())));
    }

    /// A selected id that did not resolve.
    pub fn not_found(&mut self, level: Level, id: &str) {
        let what = match level {
            Level::Root | Level::Mid => "Selection",
            Level::Leaf => "Item",
        };
        self.lines.push(Line::from(vec![
            Span::styled("⚠ ", theme::warning()),
            Span::styled(format!("{what} '{id}' not found"), theme::warning()),
        ]));
        self.blank();
        self.paragraph("It is not part of the current catalog.");
        self.blank();
        self.lines
            .push(Line::from(Span::styled("[Esc]back", theme::muted())));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rows to scroll so the cursor row is the last visible one, counting
    /// wrapped rows rather than logical lines.
    fn scroll_offset(&self, area: Rect) -> u16 {
        let Some(cursor) = self.cursor_line else {
            return 0;
        };
        if area.height == 0 || area.width == 0 {
            return 0;
        }
        let through_cursor = self.lines.iter().take(cursor + 1).cloned().collect::<Vec<_>>();
        let rows = Paragraph::new(through_cursor)
            .wrap(Wrap { trim: false })
            .line_count(area.width);
        let offset = rows.saturating_sub(area.height as usize);
        u16::try_from(offset).unwrap_or(u16::MAX)
    }

    /// Draw, scrolled so the cursor row stays visible.
    pub fn render(self, f: &mut Frame, area: Rect) {
        let offset = self.scroll_offset(area);
        let para = Paragraph::new(self.lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0));
        f.render_widget(para, area);
    }
}
