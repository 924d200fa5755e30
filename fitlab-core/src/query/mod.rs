//! Local queries over fixture collections: filtering, sorting and aggregates.

mod calibration;
mod filter;
mod schedule;
mod summary;

pub use calibration::{calibration_queue, due_count, CalibrationEntry, CalibrationState};
pub use filter::AthleteFilter;
pub use schedule::{sessions_within, upcoming_sessions};
pub use summary::DashboardSummary;
