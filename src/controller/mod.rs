pub use dashboard::HandicapDashboard;
pub use differential::compute_differential;
pub use handicap::{counting_differentials, HandicapEngine, MINIMUM_DIFFERENTIALS, WINDOW_SIZE};
pub use projection::{project_potential, project_potential_today};
pub use trend::{classify_trend, classify_trend_with_threshold, Trend};

mod dashboard;
mod differential;
mod handicap;
mod projection;
mod trend;
