//! Generic drill-down controller.
//!
//! One controller per view, parameterized by the root collection and a child
//! accessor. `render` is a pure function of the selection stack: it resolves ids
//! by linear scan and decides which of root / mid / leaf / not-found to show.

use crate::domain::{find, Keyed};

use super::selection::{BackAction, DrillEvent, Level, SelectionStack};

/// What a drill-down view shows for a given selection.
#[derive(Debug, PartialEq)]
pub enum DrillScreen<'a, R, C> {
    /// Every root entity; selecting one fires `SelectRoot`.
    Root { items: &'a [R] },
    /// Children of the selected root; selecting one fires `SelectMid`.
    Mid {
        entity: &'a R,
        children: &'a [C],
        back: BackAction,
    },
    /// Detail of one child within its parent.
    Leaf {
        parent: &'a R,
        entity: &'a C,
        back: BackAction,
    },
    /// A selected id did not resolve at `level`.
    NotFound {
        level: Level,
        id: String,
        back: BackAction,
    },
}

impl<'a, R: Keyed, C: Keyed> DrillScreen<'a, R, C> {
    pub fn level(&self) -> Level {
        match self {
            DrillScreen::Root { .. } => Level::Root,
            DrillScreen::Mid { .. } => Level::Mid,
            DrillScreen::Leaf { .. } => Level::Leaf,
            DrillScreen::NotFound { level, .. } => *level,
        }
    }

    /// Back action for this screen; the root list has none.
    pub fn back(&self) -> Option<BackAction> {
        match self {
            DrillScreen::Root { .. } => None,
            DrillScreen::Mid { back, .. }
            | DrillScreen::Leaf { back, .. }
            | DrillScreen::NotFound { back, .. } => Some(*back),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DrillScreen::NotFound { .. })
    }

    /// Number of selectable rows on this screen.
    pub fn len(&self) -> usize {
        match *self {
            DrillScreen::Root { items } => items.len(),
            DrillScreen::Mid { children, .. } => children.len(),
            DrillScreen::Leaf { .. } | DrillScreen::NotFound { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of the selectable rows, in display order.
    pub fn row_ids(&self) -> Vec<&'a str> {
        match *self {
            DrillScreen::Root { items } => items.iter().map(Keyed::id).collect(),
            DrillScreen::Mid { children, .. } => children.iter().map(Keyed::id).collect(),
            DrillScreen::Leaf { .. } | DrillScreen::NotFound { .. } => Vec::new(),
        }
    }

    /// Event fired by selecting row `index`. Leaf and not-found screens have no rows.
    pub fn select(&self, index: usize) -> Option<DrillEvent> {
        match *self {
            DrillScreen::Root { items } => items
                .get(index)
                .map(|item| DrillEvent::SelectRoot(item.id().to_string())),
            DrillScreen::Mid { children, .. } => children
                .get(index)
                .map(|child| DrillEvent::SelectMid(child.id().to_string())),
            DrillScreen::Leaf { .. } | DrillScreen::NotFound { .. } => None,
        }
    }
}

/// Drill-down controller over a root collection.
pub struct DrillDown<'a, R, C> {
    roots: &'a [R],
    children: fn(&R) -> &[C],
}

// Manual impls: the fields are a slice and a fn pointer, both `Copy`.
impl<R, C> Clone for DrillDown<'_, R, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, C> Copy for DrillDown<'_, R, C> {}

impl<'a, R: Keyed, C: Keyed> DrillDown<'a, R, C> {
    pub fn new(roots: &'a [R], children: fn(&R) -> &[C]) -> Self {
        Self { roots, children }
    }

    pub fn roots(&self) -> &'a [R] {
        self.roots
    }

    pub fn children_of(&self, root: &'a R) -> &'a [C] {
        (self.children)(root)
    }

    /// Resolve a root id by linear scan.
    pub fn resolve_root(&self, id: &str) -> Option<&'a R> {
        find(self.roots, id)
    }

    /// Resolve a child id within one parent only.
    pub fn resolve_child(&self, parent: &'a R, id: &str) -> Option<&'a C> {
        find(self.children_of(parent), id)
    }

    /// Decide which screen the current selection shows.
    pub fn render(&self, stack: &SelectionStack) -> DrillScreen<'a, R, C> {
        match (stack.level0(), stack.level1()) {
            (Some(root_id), Some(leaf_id)) => match self.resolve_root(root_id) {
                Some(parent) => match self.resolve_child(parent, leaf_id) {
                    Some(entity) => DrillScreen::Leaf {
                        parent,
                        entity,
                        back: BackAction::ClearLeaf,
                    },
                    None => not_found(Level::Leaf, leaf_id, BackAction::ClearLeaf),
                },
                None => not_found(Level::Mid, root_id, BackAction::ClearAll),
            },
            // No parent context to resolve the leaf against.
            (None, Some(leaf_id)) => not_found(Level::Leaf, leaf_id, BackAction::ClearLeaf),
            (Some(root_id), None) => match self.resolve_root(root_id) {
                Some(entity) => DrillScreen::Mid {
                    entity,
                    children: self.children_of(entity),
                    back: BackAction::ClearAll,
                },
                None => not_found(Level::Mid, root_id, BackAction::ClearAll),
            },
            (None, None) => DrillScreen::Root { items: self.roots },
        }
    }
}

fn not_found<'a, R, C>(level: Level, id: &str, back: BackAction) -> DrillScreen<'a, R, C> {
    tracing::debug!(level = level.label(), id, "dangling drill-down selection");
    DrillScreen::NotFound {
        level,
        id: id.to_string(),
        back,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Node {
        id: &'static str,
        kids: Vec<Leaf>,
    }

    #[derive(Debug, PartialEq)]
    struct Leaf {
        id: &'static str,
    }

    impl Keyed for Node {
        fn id(&self) -> &str {
            self.id
        }
    }

    impl Keyed for Leaf {
        fn id(&self) -> &str {
            self.id
        }
    }

    fn kids(node: &Node) -> &[Leaf] {
        &node.kids
    }

    fn tree() -> Vec<Node> {
        vec![
            Node {
                id: "a",
                kids: vec![Leaf { id: "a1" }, Leaf { id: "a2" }],
            },
            Node {
                id: "b",
                kids: vec![Leaf { id: "b1" }],
            },
        ]
    }

    #[test]
    fn empty_stack_renders_root() {
        let roots = tree();
        let drill = DrillDown::new(&roots, kids);
        let screen = drill.render(&SelectionStack::new());
        assert_eq!(screen.level(), Level::Root);
        assert_eq!(screen.row_ids(), vec!["a", "b"]);
        assert_eq!(screen.back(), None);
    }

    #[test]
    fn level0_renders_mid_with_children() {
        let roots = tree();
        let drill = DrillDown::new(&roots, kids);
        let mut stack = SelectionStack::new();
        stack.select_level0("a");
        match drill.render(&stack) {
            DrillScreen::Mid {
                entity,
                children,
                back,
            } => {
                assert_eq!(entity.id, "a");
                assert_eq!(children.len(), 2);
                assert_eq!(back, BackAction::ClearAll);
            }
            other => panic!("expected Mid, got {other:?}"),
        }
    }

    #[test]
    fn level1_renders_leaf_within_parent() {
        let roots = tree();
        let drill = DrillDown::new(&roots, kids);
        let mut stack = SelectionStack::new();
        stack.select_level0("a");
        stack.select_level1("a2");
        match drill.render(&stack) {
            DrillScreen::Leaf {
                parent,
                entity,
                back,
            } => {
                assert_eq!(parent.id, "a");
                assert_eq!(entity.id, "a2");
                assert_eq!(back, BackAction::ClearLeaf);
            }
            other => panic!("expected Leaf, got {other:?}"),
        }
    }

    #[test]
    fn child_of_other_parent_is_not_found() {
        let roots = tree();
        let drill = DrillDown::new(&roots, kids);
        let mut stack = SelectionStack::new();
        stack.select_level0("b");
        stack.select_level1("a1");
        assert_eq!(
            drill.render(&stack),
            DrillScreen::NotFound {
                level: Level::Leaf,
                id: "a1".into(),
                back: BackAction::ClearLeaf,
            }
        );
    }

    #[test]
    fn dangling_root_is_not_found_at_mid() {
        let roots = tree();
        let drill = DrillDown::new(&roots, kids);
        let mut stack = SelectionStack::new();
        stack.select_level0("zz");
        let screen = drill.render(&stack);
        assert_eq!(screen.level(), Level::Mid);
        assert!(screen.is_not_found());
        assert_eq!(screen.back(), Some(BackAction::ClearAll));

        stack.select_level1("a1");
        let screen = drill.render(&stack);
        assert_eq!(screen.level(), Level::Mid);
        assert!(screen.is_not_found());
    }

    #[test]
    fn select_maps_rows_to_events() {
        let roots = tree();
        let drill = DrillDown::new(&roots, kids);
        let mut stack = SelectionStack::new();
        let root = drill.render(&stack);
        assert_eq!(root.select(1), Some(DrillEvent::SelectRoot("b".into())));
        assert_eq!(root.select(2), None);

        stack.select_level0("a");
        let mid = drill.render(&stack);
        assert_eq!(mid.select(0), Some(DrillEvent::SelectMid("a1".into())));

        stack.select_level1("a1");
        assert_eq!(drill.render(&stack).select(0), None);
    }

    #[test]
    fn empty_roots_render_empty_root_screen() {
        let roots: Vec<Node> = Vec::new();
        let drill = DrillDown::new(&roots, kids);
        let screen = drill.render(&SelectionStack::new());
        assert!(screen.is_empty());
        assert_eq!(screen.select(0), None);
    }
}
