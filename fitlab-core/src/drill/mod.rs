//! Drill-down navigation and state management
//!
//! Provides:
//! - `SelectionStack` (two-level selection state with back/reset transitions)
//! - `DrillDown` (generic level renderer over a root collection and a child accessor)
//! - `DrillScreen` (which screen to show, bound entity, back action)
//! - Per-view instantiations for the four drill-down tabs

mod controller;
mod selection;
pub mod views;

pub use controller::{DrillDown, DrillScreen};
pub use selection::{BackAction, DrillEvent, Level, SelectionStack};
