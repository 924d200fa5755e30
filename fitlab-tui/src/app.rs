//! Application state: single-owner, main-thread only.
//!
//! All TUI state lives here. The only other input besides the keyboard is the
//! fragment channel, drained once per frame.

use chrono::NaiveDate;

use fitlab_core::domain::{Athlete, Keyed};
use fitlab_core::drill::views;
use fitlab_core::query::AthleteFilter;
use fitlab_core::routing::{FragmentListener, FragmentSender, HashRouter};
use fitlab_core::{BackAction, Catalog, DashboardConfig, DrillDown, DrillEvent, SelectionStack, Tab};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Help,
    /// `#` prompt; holds the typed fragment.
    Route(String),
    /// Editing the athlete search term in place.
    Search,
}

/// Selection stack plus cursor memory for one drill-down tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrillTabState {
    pub stack: SelectionStack,
    /// Row under the cursor on the current screen.
    pub cursor: usize,
    /// Cursor rows of the screens above this one, restored on back.
    trail: Vec<usize>,
}

impl DrillTabState {
    /// Apply a select or back event, remembering or restoring the cursor.
    pub fn apply(&mut self, event: DrillEvent) {
        match event {
            DrillEvent::SelectRoot(_) => {
                self.trail.clear();
                self.trail.push(self.cursor);
                self.cursor = 0;
            }
            DrillEvent::SelectMid(_) => {
                self.trail.push(self.cursor);
                self.cursor = 0;
            }
            DrillEvent::Back => self.cursor = self.trail.pop().unwrap_or(0),
        }
        self.stack.apply(event);
    }

    /// Run a rendered screen's back action.
    pub fn apply_back(&mut self, action: BackAction) {
        self.cursor = match action {
            BackAction::ClearLeaf => self.trail.pop().unwrap_or(0),
            BackAction::ClearAll => self.trail.first().copied().unwrap_or(0),
        };
        if action == BackAction::ClearAll {
            self.trail.clear();
        }
        self.stack.apply_back(action);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Select the row under the cursor on a drill screen.
fn drill_enter<R: Keyed, C: Keyed>(
    drill: DrillDown<'_, R, C>,
    state: &mut DrillTabState,
) -> Option<DrillEvent> {
    let event = drill.render(&state.stack).select(state.cursor)?;
    state.apply(event.clone());
    Some(event)
}

/// Run the back action of the current drill screen.
fn drill_back<R: Keyed, C: Keyed>(
    drill: DrillDown<'_, R, C>,
    state: &mut DrillTabState,
) -> Option<BackAction> {
    let action = drill.render(&state.stack).back()?;
    state.apply_back(action);
    Some(action)
}

fn drill_rows<R: Keyed, C: Keyed>(drill: DrillDown<'_, R, C>, state: &DrillTabState) -> usize {
    drill.render(&state.stack).len()
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_tab: Tab,
    pub running: bool,

    // Data
    pub catalog: Catalog,
    pub today: NaiveDate,
    pub warning_days: u32,

    // Drill-down tabs
    pub athletes: DrillTabState,
    pub athlete_filter: AthleteFilter,
    pub assessment: DrillTabState,
    pub integrated: DrillTabState,
    pub skills: DrillTabState,

    // Flat list tabs
    pub equipment_cursor: usize,
    pub schedule_cursor: usize,
    pub periodization_cursor: usize,

    // Cross-cutting
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,

    // Fragment routing
    fragments: FragmentSender,
    router: FragmentListener,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &DashboardConfig, today: NaiveDate) -> Self {
        let (fragments, router) = HashRouter::subscribe();
        Self {
            active_tab: config.start_tab,
            running: true,
            catalog,
            today,
            warning_days: config.calibration_warning_days,
            athletes: DrillTabState::default(),
            athlete_filter: AthleteFilter::default(),
            assessment: DrillTabState::default(),
            integrated: DrillTabState::default(),
            skills: DrillTabState::default(),
            equipment_cursor: 0,
            schedule_cursor: 0,
            periodization_cursor: 0,
            overlay: Overlay::Welcome,
            status_message: None,
            fragments,
            router,
        }
    }

    /// Handle for external fragment sources (the `--route` flag, the `#` prompt).
    pub fn fragment_sender(&self) -> FragmentSender {
        self.fragments.clone()
    }

    /// The location fragment last seen by the router.
    pub fn current_fragment(&self) -> Option<&str> {
        self.router.current()
    }

    pub fn drill_state(&self, tab: Tab) -> Option<&DrillTabState> {
        match tab {
            Tab::Athletes => Some(&self.athletes),
            Tab::Assessment => Some(&self.assessment),
            Tab::IntegratedTesting => Some(&self.integrated),
            Tab::SkillPerformance => Some(&self.skills),
            Tab::Dashboard | Tab::Equipment | Tab::Schedule | Tab::Periodization => None,
        }
    }

    fn drill_state_mut(&mut self, tab: Tab) -> Option<&mut DrillTabState> {
        match tab {
            Tab::Athletes => Some(&mut self.athletes),
            Tab::Assessment => Some(&mut self.assessment),
            Tab::IntegratedTesting => Some(&mut self.integrated),
            Tab::SkillPerformance => Some(&mut self.skills),
            Tab::Dashboard | Tab::Equipment | Tab::Schedule | Tab::Periodization => None,
        }
    }

    /// Make `tab` active. Leaving a drill-down tab discards its selection,
    /// and leaving Athletes also drops the roster filter.
    pub fn switch_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        let left = self.active_tab;
        if let Some(state) = self.drill_state_mut(left) {
            state.reset();
        }
        if left == Tab::Athletes {
            self.athlete_filter.clear();
        }
        tracing::debug!(from = left.label(), to = tab.label(), "switch tab");
        self.active_tab = tab;
    }

    /// Athletes passing the current filter, in roster order.
    pub fn filtered_athletes(&self) -> Vec<&Athlete> {
        self.athlete_filter.apply(&self.catalog.athletes)
    }

    /// Selectable rows on the active tab.
    pub fn row_count(&self) -> usize {
        match self.active_tab {
            Tab::Dashboard => 0,
            Tab::Athletes if self.athletes.stack.is_root() => self.filtered_athletes().len(),
            Tab::Athletes => drill_rows(views::athletes(&self.catalog), &self.athletes),
            Tab::Assessment => drill_rows(views::assessment(&self.catalog), &self.assessment),
            Tab::IntegratedTesting => {
                drill_rows(views::integrated_testing(&self.catalog), &self.integrated)
            }
            Tab::SkillPerformance => {
                drill_rows(views::skill_performance(&self.catalog), &self.skills)
            }
            Tab::Equipment => self.catalog.equipment.len(),
            Tab::Schedule => {
                fitlab_core::query::upcoming_sessions(&self.catalog.sessions, self.today).len()
            }
            Tab::Periodization => self.catalog.periodization_models.len(),
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.active_tab {
            Tab::Dashboard => None,
            Tab::Equipment => Some(&mut self.equipment_cursor),
            Tab::Schedule => Some(&mut self.schedule_cursor),
            Tab::Periodization => Some(&mut self.periodization_cursor),
            tab => self.drill_state_mut(tab).map(|state| &mut state.cursor),
        }
    }

    pub fn cursor_down(&mut self) {
        let rows = self.row_count();
        if let Some(cursor) = self.cursor_mut() {
            if *cursor + 1 < rows {
                *cursor += 1;
            }
        }
    }

    pub fn cursor_up(&mut self) {
        if let Some(cursor) = self.cursor_mut() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Drill one level deeper from the row under the cursor.
    pub fn enter(&mut self) {
        let event = match self.active_tab {
            Tab::Athletes if self.athletes.stack.is_root() => {
                let id = self
                    .filtered_athletes()
                    .get(self.athletes.cursor)
                    .map(|athlete| athlete.id.clone());
                id.map(|id| {
                    let event = DrillEvent::SelectRoot(id);
                    self.athletes.apply(event.clone());
                    event
                })
            }
            Tab::Athletes => drill_enter(views::athletes(&self.catalog), &mut self.athletes),
            Tab::Assessment => drill_enter(views::assessment(&self.catalog), &mut self.assessment),
            Tab::IntegratedTesting => {
                drill_enter(views::integrated_testing(&self.catalog), &mut self.integrated)
            }
            Tab::SkillPerformance => {
                drill_enter(views::skill_performance(&self.catalog), &mut self.skills)
            }
            Tab::Dashboard | Tab::Equipment | Tab::Schedule | Tab::Periodization => None,
        };
        if let Some(event) = event {
            tracing::debug!(tab = self.active_tab.label(), ?event, "drill");
        }
    }

    /// Run the back control of the current drill screen. No-op at the root list.
    pub fn back(&mut self) {
        let action = match self.active_tab {
            Tab::Athletes => drill_back(views::athletes(&self.catalog), &mut self.athletes),
            Tab::Assessment => drill_back(views::assessment(&self.catalog), &mut self.assessment),
            Tab::IntegratedTesting => {
                drill_back(views::integrated_testing(&self.catalog), &mut self.integrated)
            }
            Tab::SkillPerformance => {
                drill_back(views::skill_performance(&self.catalog), &mut self.skills)
            }
            Tab::Dashboard | Tab::Equipment | Tab::Schedule | Tab::Periodization => None,
        };
        if let Some(action) = action {
            tracing::debug!(tab = self.active_tab.label(), ?action, "drill back");
        }
    }

    /// Send a fragment typed at the `#` prompt.
    pub fn submit_route(&mut self, input: &str) {
        let fragment = input.trim();
        let fragment = if fragment.starts_with('#') {
            fragment.to_string()
        } else {
            format!("#{fragment}")
        };

        if self.router.current() == Some(fragment.as_str()) {
            self.set_status(format!("Location is already {fragment}"));
        } else if HashRouter::resolve(&fragment).is_none() {
            self.set_warning(format!("No route for {fragment}"));
        }
        if !self.fragments.navigate(fragment) {
            self.set_warning("Fragment router is closed");
        }
    }

    /// Apply fragment changes received since the last frame.
    pub fn drain_fragments(&mut self) {
        for tab in self.router.poll() {
            self.switch_tab(tab);
            if let Some(fragment) = HashRouter::fragment_for(tab) {
                self.set_status(format!("Routed {fragment} → {}", tab.label()));
            }
        }
    }

    /// Athlete filter changed: the row set changed, so start from the top.
    pub fn filter_changed(&mut self) {
        self.athletes.cursor = 0;
        let shown = self.filtered_athletes().len();
        if shown == 0 {
            self.set_warning(format!("No athletes match {}", self.athlete_filter.describe()));
        } else {
            self.set_status(format!(
                "{shown}/{} athletes ({})",
                self.catalog.athletes.len(),
                self.athlete_filter.describe()
            ));
        }
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use fitlab_core::fixtures;
    use fitlab_core::Level;

    pub(crate) fn test_app() -> AppState {
        let mut app = AppState::new(
            Catalog::builtin(),
            &DashboardConfig::default(),
            fixtures::snapshot_date(),
        );
        app.overlay = Overlay::None;
        app
    }

    fn assessment_level(app: &AppState) -> Level {
        views::assessment(&app.catalog)
            .render(&app.assessment.stack)
            .level()
    }

    #[test]
    fn starts_on_configured_tab_with_welcome() {
        let config = DashboardConfig {
            start_tab: Tab::Schedule,
            ..Default::default()
        };
        let app = AppState::new(Catalog::builtin(), &config, fixtures::snapshot_date());
        assert_eq!(app.active_tab, Tab::Schedule);
        assert_eq!(app.overlay, Overlay::Welcome);
        assert_eq!(app.warning_days, 14);
    }

    #[test]
    fn enter_and_back_walk_the_assessment_tree() {
        let mut app = test_app();
        app.switch_tab(Tab::Assessment);
        app.cursor_down();
        app.enter();
        assert_eq!(app.assessment.stack.level0(), Some("sm_strength"));
        assert_eq!(assessment_level(&app), Level::Mid);

        app.cursor_down();
        app.cursor_down();
        app.enter();
        assert_eq!(app.assessment.stack.level1(), Some("scr_imtp"));
        assert_eq!(assessment_level(&app), Level::Leaf);

        // Leaf has no rows: Enter does nothing.
        app.enter();
        assert_eq!(app.assessment.stack.level1(), Some("scr_imtp"));

        app.back();
        assert_eq!(assessment_level(&app), Level::Mid);
        assert_eq!(app.assessment.cursor, 2);

        app.back();
        assert!(app.assessment.stack.is_root());
        assert_eq!(app.assessment.cursor, 1);

        // Root has no back control.
        app.back();
        assert!(app.assessment.stack.is_root());
    }

    #[test]
    fn leaving_a_tab_discards_its_drill_state() {
        let mut app = test_app();
        app.switch_tab(Tab::IntegratedTesting);
        app.enter();
        assert!(!app.integrated.stack.is_root());

        app.switch_tab(Tab::Equipment);
        assert!(app.integrated.stack.is_root());
        assert_eq!(app.integrated.cursor, 0);

        app.switch_tab(Tab::IntegratedTesting);
        assert!(app.integrated.stack.is_root());
    }

    #[test]
    fn switching_to_same_tab_keeps_state() {
        let mut app = test_app();
        app.switch_tab(Tab::SkillPerformance);
        app.enter();
        app.switch_tab(Tab::SkillPerformance);
        assert!(!app.skills.stack.is_root());
    }

    #[test]
    fn cursor_is_clamped_to_rows() {
        let mut app = test_app();
        app.switch_tab(Tab::Periodization);
        for _ in 0..20 {
            app.cursor_down();
        }
        assert_eq!(app.periodization_cursor, app.catalog.periodization_models.len() - 1);
        for _ in 0..20 {
            app.cursor_up();
        }
        assert_eq!(app.periodization_cursor, 0);
    }

    #[test]
    fn athlete_enter_uses_filtered_rows() {
        let mut app = test_app();
        app.switch_tab(Tab::Athletes);
        app.athlete_filter.search = "kwame".into();
        app.filter_changed();
        assert_eq!(app.row_count(), 1);
        app.enter();
        assert_eq!(app.athletes.stack.level0(), Some("ath_006"));
    }

    #[test]
    fn leaving_athletes_drops_the_filter() {
        let mut app = test_app();
        app.switch_tab(Tab::Athletes);
        app.athlete_filter.search = "kwame".into();
        app.filter_changed();
        app.enter();

        app.switch_tab(Tab::Equipment);
        assert!(app.athlete_filter.is_empty());
        assert!(app.athletes.stack.is_root());

        app.switch_tab(Tab::Athletes);
        assert_eq!(app.row_count(), app.catalog.athletes.len());
    }

    #[test]
    fn empty_filter_result_warns_and_enter_is_noop() {
        let mut app = test_app();
        app.switch_tab(Tab::Athletes);
        app.athlete_filter.search = "nobody".into();
        app.filter_changed();
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
        app.enter();
        assert!(app.athletes.stack.is_root());
    }

    #[test]
    fn route_prompt_switches_tab_on_next_drain() {
        let mut app = test_app();
        app.switch_tab(Tab::Assessment);
        app.enter();
        app.submit_route("#schedule");
        assert_eq!(app.active_tab, Tab::Assessment);

        app.drain_fragments();
        assert_eq!(app.active_tab, Tab::Schedule);
        assert_eq!(app.current_fragment(), Some("#schedule"));
        assert!(app.assessment.stack.is_root());
    }

    #[test]
    fn route_without_hash_is_prefixed() {
        let mut app = test_app();
        app.submit_route("equipment");
        app.drain_fragments();
        assert_eq!(app.active_tab, Tab::Equipment);
    }

    #[test]
    fn unknown_route_warns_and_stays() {
        let mut app = test_app();
        app.submit_route("#reports");
        app.drain_fragments();
        assert_eq!(app.active_tab, Tab::Dashboard);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
        assert_eq!(app.current_fragment(), Some("#reports"));
    }

    #[test]
    fn unchanged_fragment_does_not_reroute() {
        let mut app = test_app();
        app.submit_route("#periodization");
        app.drain_fragments();
        app.switch_tab(Tab::Dashboard);

        // Keyboard switching does not touch the location fragment.
        app.submit_route("#periodization");
        app.drain_fragments();
        assert_eq!(app.active_tab, Tab::Dashboard);
        assert!(matches!(app.status_message, Some((ref msg, StatusLevel::Info)) if msg.contains("already")));
    }

    #[test]
    fn routing_into_a_drill_tab_starts_at_root() {
        let mut app = test_app();
        app.fragment_sender().navigate("#integrated-testing");
        app.drain_fragments();
        assert_eq!(app.active_tab, Tab::IntegratedTesting);
        assert!(app.integrated.stack.is_root());
    }

    #[test]
    fn drill_tab_state_restores_cursor_through_events() {
        let mut state = DrillTabState::default();
        state.cursor = 3;
        state.apply(DrillEvent::SelectRoot("a".into()));
        state.cursor = 1;
        state.apply(DrillEvent::SelectMid("x".into()));
        assert_eq!(state.cursor, 0);
        state.apply(DrillEvent::Back);
        assert_eq!(state.cursor, 1);
        state.apply(DrillEvent::Back);
        assert_eq!(state.cursor, 3);
        assert!(state.stack.is_root());
    }

    #[test]
    fn clear_all_from_leaf_restores_root_cursor() {
        let mut state = DrillTabState::default();
        state.cursor = 2;
        state.apply(DrillEvent::SelectRoot("a".into()));
        state.apply(DrillEvent::SelectMid("x".into()));
        state.apply_back(BackAction::ClearAll);
        assert_eq!(state.cursor, 2);
        assert!(state.stack.is_root());
    }
}
