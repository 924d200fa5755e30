//! Keyboard input dispatch: overlays → global keys → navigation → tab-specific keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use fitlab_core::Tab;

use crate::app::{AppState, Overlay};

/// Key bindings shown in the help overlay.
pub fn key_bindings() -> &'static [(&'static str, &'static str)] {
    &[
        ("q", "Quit"),
        ("1-8", "Jump to tab"),
        ("Tab / Shift+Tab", "Next / previous tab"),
        ("j / k / ↓ / ↑", "Move cursor"),
        ("Enter / l / →", "Open selected row"),
        ("Esc / Backspace / h / ←", "Back one level"),
        ("#", "Go to a #fragment route"),
        ("/", "Search athletes (Athletes tab)"),
        ("s / a", "Cycle sport / status filter (Athletes tab)"),
        ("x", "Clear athlete filters (Athletes tab)"),
        ("?", "Toggle this help"),
    ]
}

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
            ) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::Route(_) => {
            handle_route_prompt(app, key);
            return;
        }
        Overlay::Search => {
            handle_search(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(index) {
                app.switch_tab(tab);
            }
            return;
        }
        KeyCode::Tab => {
            let tab = if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_tab.prev()
            } else {
                app.active_tab.next()
            };
            app.switch_tab(tab);
            return;
        }
        KeyCode::BackTab => {
            app.switch_tab(app.active_tab.prev());
            return;
        }
        KeyCode::Char('#') => {
            app.overlay = Overlay::Route(String::from("#"));
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 3. Cursor and drill navigation.
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.cursor_down();
            return;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor_up();
            return;
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            app.enter();
            return;
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            app.back();
            return;
        }
        _ => {}
    }

    // 4. Tab-specific keys.
    if app.active_tab == Tab::Athletes {
        handle_athletes_key(app, key);
    }
}

fn handle_route_prompt(app: &mut AppState, key: KeyEvent) {
    let Overlay::Route(input) = &mut app.overlay else {
        return;
    };
    match key.code {
        KeyCode::Esc => app.overlay = Overlay::None,
        KeyCode::Enter => {
            let fragment = std::mem::take(input);
            app.overlay = Overlay::None;
            if !fragment.trim().trim_start_matches('#').is_empty() {
                app.submit_route(&fragment);
            }
        }
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(c) => input.push(c),
        _ => {}
    }
}

fn handle_search(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.athlete_filter.search.clear();
            app.overlay = Overlay::None;
            app.filter_changed();
        }
        KeyCode::Enter => app.overlay = Overlay::None,
        KeyCode::Backspace => {
            app.athlete_filter.search.pop();
            app.filter_changed();
        }
        KeyCode::Char(c) => {
            app.athlete_filter.search.push(c);
            app.filter_changed();
        }
        _ => {}
    }
}

fn handle_athletes_key(app: &mut AppState, key: KeyEvent) {
    // Filters only shape the roster list.
    if !app.athletes.stack.is_root() {
        return;
    }
    match key.code {
        KeyCode::Char('/') => app.overlay = Overlay::Search,
        KeyCode::Char('s') => {
            app.athlete_filter.cycle_sport();
            app.filter_changed();
        }
        KeyCode::Char('a') => {
            app.athlete_filter.cycle_status();
            app.filter_changed();
        }
        KeyCode::Char('x') => {
            app.athlete_filter.clear();
            app.filter_changed();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crossterm::event::KeyEventState;
    use fitlab_core::domain::Sport;

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    fn type_str(app: &mut AppState, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_welcome_swallows_first_key() {
        let mut app = test_app();
        app.overlay = Overlay::Welcome;
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = test_app();
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, key);
        assert!(app.running);
    }

    #[test]
    fn test_digit_and_tab_switching() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.active_tab, Tab::Equipment);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Schedule);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab, Tab::Equipment);
        handle_key(&mut app, KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT));
        assert_eq!(app.active_tab, Tab::SkillPerformance);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.active_tab, Tab::SkillPerformance);
    }

    #[test]
    fn test_vim_style_drill_navigation() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.integrated.stack.level0(), Some("bat_strength"));
        press(&mut app, KeyCode::Char('l'));
        assert!(app.integrated.stack.level1().is_some());
        press(&mut app, KeyCode::Esc);
        assert!(app.integrated.stack.level1().is_none());
        press(&mut app, KeyCode::Backspace);
        assert!(app.integrated.stack.is_root());
        assert_eq!(app.integrated.cursor, 1);
    }

    #[test]
    fn test_route_prompt() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('#'));
        assert_eq!(app.overlay, Overlay::Route("#".into()));
        type_str(&mut app, "schedulx");
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "e");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.overlay, Overlay::None);

        // Routing happens when the frame loop drains the channel.
        assert_eq!(app.active_tab, Tab::Dashboard);
        app.drain_fragments();
        assert_eq!(app.active_tab, Tab::Schedule);
    }

    #[test]
    fn test_route_prompt_escape_sends_nothing() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('#'));
        type_str(&mut app, "equipment");
        press(&mut app, KeyCode::Esc);
        app.drain_fragments();
        assert_eq!(app.active_tab, Tab::Dashboard);
        assert_eq!(app.current_fragment(), None);
    }

    #[test]
    fn test_prompt_keys_do_not_leak_to_globals() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('#'));
        type_str(&mut app, "q3");
        assert!(app.running);
        assert_eq!(app.active_tab, Tab::Dashboard);
    }

    #[test]
    fn test_athlete_filters() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.athlete_filter.sport, Some(Sport::ALL[0]));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.athlete_filter.is_empty());

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.overlay, Overlay::Search);
        type_str(&mut app, "priya");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.row_count(), 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.athletes.stack.level0(), Some("ath_003"));

        // Filter keys are inert below the roster.
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.athlete_filter.sport, None);
    }

    #[test]
    fn test_search_escape_clears_term() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "zzz");
        assert_eq!(app.row_count(), 0);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.row_count(), app.catalog.athletes.len());
    }

    #[test]
    fn test_help_toggle() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.overlay, Overlay::Help);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.overlay, Overlay::Help);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn test_key_bindings_help() {
        let bindings = key_bindings();
        assert!(!bindings.is_empty());
        assert_eq!(bindings[0].0, "q");
    }
}
