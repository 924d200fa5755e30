//! FitLab TUI: eight-tab terminal dashboard with vim-style navigation.
//!
//! Tabs:
//! 1. Dashboard: roster, catalog and calendar aggregates
//! 2. Athletes: roster → profile with results → result detail
//! 3. Assessment: sub-modules → screens → screen protocol
//! 4. Integrated Testing: batteries → tests → norms
//! 5. Skill Performance: skill components → tests → norms
//! 6. Equipment: calibration queue
//! 7. Schedule: upcoming sessions
//! 8. Periodization: models and their phases
//!
//! Tabs 4 to 8 are also reachable through `#fragment` routes.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
