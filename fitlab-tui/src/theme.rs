//! Parrot/neon theme tokens for the FitLab TUI
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (primary highlights, focus)
//! - **Positive**: Neon green (active, operational, on schedule)
//! - **Negative**: Hot pink (injured, overdue, out of service)
//! - **Warning**: Neon orange (due soon, recovering, maintenance)
//! - **Neutral**: Cool purple (secondary info, neutral states)
//! - **Muted**: Steel blue (hints, secondary text)

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use fitlab_core::badge::{Badge, Tone};

/// Parrot/neon theme
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (good states)
    pub positive: Color,
    /// Hot pink (bad states)
    pub negative: Color,
    /// Neon orange (warnings, alerts)
    pub warning: Color,
    /// Cool purple (neutral info, secondary)
    pub neutral: Color,
    /// Steel blue (muted text, disabled)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub const fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Concrete colour for a semantic tone.
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Accent => self.accent,
            Tone::Positive => self.positive,
            Tone::Negative => self.negative,
            Tone::Warning => self.warning,
            Tone::Neutral => self.neutral,
            Tone::Muted => self.muted,
        }
    }

    /// Readiness score colour: 80+ green, 60+ cyan, 45+ orange, else pink.
    pub fn readiness_color(&self, readiness: u8) -> Color {
        match readiness {
            r if r >= 80 => self.positive,
            r if r >= 60 => self.accent,
            r if r >= 45 => self.warning,
            _ => self.negative,
        }
    }

    /// Percentile colour, same bands shifted for population norms.
    pub fn percentile_color(&self, percentile: u8) -> Color {
        match percentile {
            p if p >= 75 => self.positive,
            p if p >= 50 => self.accent,
            p if p >= 25 => self.neutral,
            _ => self.warning,
        }
    }
}

const THEME: Theme = Theme::parrot_neon();

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn text_secondary() -> Style {
    Style::default().fg(THEME.text_secondary)
}

/// Cursor row.
pub fn highlight() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

pub fn tone(tone: Tone) -> Style {
    Style::default().fg(THEME.tone_color(tone))
}

pub fn readiness(value: u8) -> Style {
    Style::default().fg(THEME.readiness_color(value))
}

pub fn percentile(value: u8) -> Style {
    Style::default().fg(THEME.percentile_color(value))
}

/// `glyph label` in the badge's tone.
pub fn badge(badge: Badge) -> Span<'static> {
    Span::styled(format!("{} {}", badge.glyph, badge.label), tone(badge.tone))
}

/// Glyph only, for dense rows.
pub fn badge_glyph(badge: Badge) -> Span<'static> {
    Span::styled(badge.glyph, tone(badge.tone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitlab_core::badge::Badged;
    use fitlab_core::domain::AthleteStatus;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_tone_color() {
        let theme = Theme::default();
        assert_eq!(theme.tone_color(Tone::Positive), theme.positive);
        assert_eq!(theme.tone_color(Tone::Negative), theme.negative);
        assert_eq!(theme.tone_color(Tone::Muted), theme.muted);
    }

    #[test]
    fn test_readiness_color() {
        let theme = Theme::default();
        assert_eq!(theme.readiness_color(91), theme.positive);
        assert_eq!(theme.readiness_color(67), theme.accent);
        assert_eq!(theme.readiness_color(58), theme.warning);
        assert_eq!(theme.readiness_color(42), theme.negative);
    }

    #[test]
    fn test_percentile_color() {
        let theme = Theme::default();
        assert_eq!(theme.percentile_color(90), theme.positive);
        assert_eq!(theme.percentile_color(50), theme.accent);
        assert_eq!(theme.percentile_color(30), theme.neutral);
        assert_eq!(theme.percentile_color(10), theme.warning);
    }

    #[test]
    fn test_badge_span() {
        let span = badge(AthleteStatus::Injured.badge());
        assert_eq!(span.content, "✚ Injured");
        assert_eq!(span.style.fg, Some(THEME.negative));
    }
}
