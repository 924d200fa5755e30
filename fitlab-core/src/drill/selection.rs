//! Selection stack: the state half of the drill-down state machine.
//!
//! Holds up to two levels of selection for one view instance. Every operation
//! is total: ids are never validated here, and the renderer tolerates whatever
//! state results.

use serde::{Deserialize, Serialize};

/// Depth of a drill-down screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// All top-level entities.
    Root,
    /// Children of the selected root entity.
    Mid,
    /// Full detail of one child.
    Leaf,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Root => "root",
            Level::Mid => "list",
            Level::Leaf => "detail",
        }
    }
}

/// Back transition wired to a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackAction {
    /// Clear the leaf selection only (`go_back_from_level1`).
    ClearLeaf,
    /// Clear both selections (`go_back_from_level0`).
    ClearAll,
}

/// Events the shell wires to concrete controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "id", rename_all = "snake_case")]
pub enum DrillEvent {
    SelectRoot(String),
    SelectMid(String),
    Back,
}

/// Current selection for one drill-down view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStack {
    level0: Option<String>,
    level1: Option<String>,
}

impl SelectionStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level0(&self) -> Option<&str> {
        self.level0.as_deref()
    }

    pub fn level1(&self) -> Option<&str> {
        self.level1.as_deref()
    }

    /// Nothing selected: the root list is showing.
    pub fn is_root(&self) -> bool {
        self.level0.is_none() && self.level1.is_none()
    }

    /// Number of levels currently set.
    pub fn depth(&self) -> usize {
        self.level0.is_some() as usize + self.level1.is_some() as usize
    }

    /// Select a root entity. Always clears the leaf selection.
    pub fn select_level0(&mut self, id: impl Into<String>) {
        self.level0 = Some(id.into());
        self.level1 = None;
    }

    /// Select a leaf entity.
    ///
    /// Callers are expected to have selected a root first; if they have not,
    /// the stack holds a leaf without a parent and renders as not-found.
    pub fn select_level1(&mut self, id: impl Into<String>) {
        self.level1 = Some(id.into());
    }

    /// Clear the leaf selection; the root selection is untouched.
    pub fn go_back_from_level1(&mut self) {
        self.level1 = None;
    }

    /// Clear both selections, returning to the root list.
    pub fn go_back_from_level0(&mut self) {
        self.level0 = None;
        self.level1 = None;
    }

    /// Pop the deepest set level. Returns the id that was cleared.
    pub fn back(&mut self) -> Option<String> {
        if let Some(id) = self.level1.take() {
            return Some(id);
        }
        self.level0.take()
    }

    /// Run a screen's back action.
    pub fn apply_back(&mut self, action: BackAction) {
        match action {
            BackAction::ClearLeaf => self.go_back_from_level1(),
            BackAction::ClearAll => self.go_back_from_level0(),
        }
    }

    /// Dispatch a shell event.
    pub fn apply(&mut self, event: DrillEvent) {
        match event {
            DrillEvent::SelectRoot(id) => self.select_level0(id),
            DrillEvent::SelectMid(id) => self.select_level1(id),
            DrillEvent::Back => {
                self.back();
            }
        }
    }

    /// `level1 ⇒ level0`, which every UI path maintains.
    pub fn is_consistent(&self) -> bool {
        self.level1.is_none() || self.level0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_level0_clears_level1() {
        let mut stack = SelectionStack::new();
        stack.select_level0("a");
        stack.select_level1("x");
        stack.select_level0("b");
        assert_eq!(stack.level0(), Some("b"));
        assert_eq!(stack.level1(), None);
    }

    #[test]
    fn go_back_from_level1_keeps_level0() {
        let mut stack = SelectionStack::new();
        stack.select_level0("a");
        stack.select_level1("x");
        stack.go_back_from_level1();
        assert_eq!(stack.level0(), Some("a"));
        assert_eq!(stack.level1(), None);
    }

    #[test]
    fn go_back_from_level0_resets_everything() {
        let mut stack = SelectionStack::new();
        stack.select_level0("a");
        stack.select_level1("x");
        stack.go_back_from_level0();
        assert!(stack.is_root());
    }

    #[test]
    fn back_pops_deepest_level() {
        let mut stack = SelectionStack::new();
        stack.select_level0("a");
        stack.select_level1("x");
        assert_eq!(stack.back(), Some("x".to_string()));
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.back(), Some("a".to_string()));
        assert_eq!(stack.back(), None);
        assert!(stack.is_root());
    }

    #[test]
    fn level1_without_level0_is_tolerated() {
        let mut stack = SelectionStack::new();
        stack.select_level1("c");
        assert!(!stack.is_consistent());
        assert_eq!(stack.depth(), 1);
        stack.apply(DrillEvent::Back);
        assert!(stack.is_root());
    }

    #[test]
    fn apply_dispatches_events() {
        let mut stack = SelectionStack::new();
        stack.apply(DrillEvent::SelectRoot("a".into()));
        stack.apply(DrillEvent::SelectMid("x".into()));
        assert_eq!(stack.level1(), Some("x"));
        stack.apply_back(BackAction::ClearAll);
        assert!(stack.is_root());
    }

    #[test]
    fn event_serializes_tagged() {
        let json = serde_json::to_string(&DrillEvent::SelectRoot("a".into())).unwrap();
        assert_eq!(json, r#"{"event":"select_root","id":"a"}"#);
        let json = serde_json::to_string(&DrillEvent::Back).unwrap();
        assert_eq!(json, r#"{"event":"back"}"#);
    }
}
