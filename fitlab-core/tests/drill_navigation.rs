//! End-to-end drill-down and routing scenarios.

use fitlab_core::domain::Keyed;
use fitlab_core::drill::views;
use fitlab_core::{
    BackAction, Catalog, DrillDown, DrillEvent, DrillScreen, HashRouter, Level, SelectionStack, Tab,
};

#[derive(Debug, PartialEq)]
struct Group {
    id: &'static str,
    members: Vec<Member>,
}

#[derive(Debug, PartialEq)]
struct Member {
    id: &'static str,
}

impl Keyed for Group {
    fn id(&self) -> &str {
        self.id
    }
}

impl Keyed for Member {
    fn id(&self) -> &str {
        self.id
    }
}

fn members(group: &Group) -> &[Member] {
    &group.members
}

fn groups() -> Vec<Group> {
    vec![
        Group {
            id: "a",
            members: vec![Member { id: "x" }],
        },
        Group {
            id: "b",
            members: vec![Member { id: "y" }, Member { id: "z" }],
        },
    ]
}

#[test]
fn child_from_wrong_parent_then_back_then_reset() {
    let roots = groups();
    let drill = DrillDown::new(&roots, members);
    let mut stack = SelectionStack::new();

    stack.apply(DrillEvent::SelectRoot("b".into()));
    assert_eq!(drill.render(&stack).row_ids(), vec!["y", "z"]);

    // "x" belongs to "a"; lookup is scoped to "b".
    stack.apply(DrillEvent::SelectMid("x".into()));
    let screen = drill.render(&stack);
    assert_eq!(
        screen,
        DrillScreen::NotFound {
            level: Level::Leaf,
            id: "x".into(),
            back: BackAction::ClearLeaf,
        }
    );

    stack.apply_back(BackAction::ClearLeaf);
    match drill.render(&stack) {
        DrillScreen::Mid { entity, back, .. } => {
            assert_eq!(entity.id, "b");
            assert_eq!(back, BackAction::ClearAll);
        }
        other => panic!("expected Mid, got {other:?}"),
    }

    stack.apply_back(BackAction::ClearAll);
    assert_eq!(drill.render(&stack).level(), Level::Root);
}

#[test]
fn orphan_leaf_selection_is_not_found() {
    let roots = groups();
    let drill = DrillDown::new(&roots, members);
    let mut stack = SelectionStack::new();
    stack.select_level1("y");

    let screen = drill.render(&stack);
    assert!(screen.is_not_found());
    assert_eq!(screen.level(), Level::Leaf);

    // The back control of that screen clears only the leaf, which is enough.
    if let Some(back) = screen.back() {
        stack.apply_back(back);
    }
    assert!(stack.is_root());
}

#[test]
fn reselecting_root_discards_leaf() {
    let roots = groups();
    let drill = DrillDown::new(&roots, members);
    let mut stack = SelectionStack::new();
    stack.select_level0("b");
    stack.select_level1("z");
    assert_eq!(drill.render(&stack).level(), Level::Leaf);

    stack.select_level0("a");
    assert_eq!(stack.level1(), None);
    assert_eq!(drill.render(&stack).row_ids(), vec!["x"]);
}

#[test]
fn walk_every_builtin_view_through_its_rows() {
    let catalog = Catalog::builtin();

    fn walk<R: Keyed, C: Keyed>(drill: DrillDown<'_, R, C>) -> usize {
        let mut leaves = 0;
        let mut stack = SelectionStack::new();
        let root_rows = drill.render(&stack).len();
        for r in 0..root_rows {
            if let Some(event) = drill.render(&stack).select(r) {
                stack.apply(event);
            }
            let mid_rows = drill.render(&stack).len();
            for c in 0..mid_rows {
                if let Some(event) = drill.render(&stack).select(c) {
                    stack.apply(event);
                }
                let leaf = drill.render(&stack);
                assert_eq!(leaf.level(), Level::Leaf);
                assert!(!leaf.is_not_found());
                leaves += 1;
                stack.apply(DrillEvent::Back);
            }
            stack.apply(DrillEvent::Back);
            assert!(stack.is_root());
        }
        leaves
    }

    assert_eq!(walk(views::assessment(&catalog)), catalog.screen_count());
    let battery_tests: usize = catalog.batteries.iter().map(|b| b.tests.len()).sum();
    assert_eq!(walk(views::integrated_testing(&catalog)), battery_tests);
    let skill_tests: usize = catalog
        .skill_components
        .iter()
        .map(|s| s.tests.len())
        .sum();
    assert_eq!(walk(views::skill_performance(&catalog)), skill_tests);
    assert_eq!(battery_tests + skill_tests, catalog.test_count());
    let results: usize = catalog.athletes.iter().map(|a| a.assessments.len()).sum();
    assert_eq!(walk(views::athletes(&catalog)), results);
}

#[test]
fn routing_does_not_touch_selection() {
    let catalog = Catalog::builtin();
    let drill = views::integrated_testing(&catalog);
    let mut stack = SelectionStack::new();
    stack.select_level0("bat_strength");

    let (tx, mut rx) = HashRouter::subscribe();
    tx.navigate("#integrated-testing");
    assert_eq!(rx.poll(), vec![Tab::IntegratedTesting]);

    // The fragment only names a tab; the selection is the view's own business.
    assert_eq!(stack.level0(), Some("bat_strength"));
    assert_eq!(drill.render(&stack).level(), Level::Mid);
}
