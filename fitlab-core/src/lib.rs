//! FitLab Core: fixtures, navigation and queries behind the fitness-assessment dashboard.
//!
//! This crate contains everything the shells render:
//! - Domain records (athletes, assessment modules, test batteries, equipment, sessions,
//!   periodization models) and the `Catalog` that bundles them
//! - The generic drill-down controller (selection stack + level renderer)
//! - Fragment routing from literal `#fragment` strings to top-level tabs
//! - Local queries: athlete filtering, calibration queue, schedule, dashboard summary
//! - Static badge tables (enum → glyph/label/tone)
//! - TOML configuration and `tracing` setup

pub mod badge;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod drill;
pub mod fixtures;
pub mod logging;
pub mod query;
pub mod routing;
pub mod tabs;

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, DashboardConfig};
pub use drill::{BackAction, DrillDown, DrillEvent, DrillScreen, Level, SelectionStack};
pub use routing::{FragmentListener, FragmentSender, HashRouter};
pub use tabs::Tab;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: fixture and navigation types can cross threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Catalog>();
        require_sync::<Catalog>();
        require_send::<SelectionStack>();
        require_sync::<SelectionStack>();
        require_send::<DashboardConfig>();
        require_sync::<DashboardConfig>();
        require_send::<FragmentSender>();
    }
}
