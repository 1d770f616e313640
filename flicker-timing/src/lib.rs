pub mod duration;
pub mod plan;

pub use duration::{TRAILING_MARGIN_SECS, total_duration};
pub use plan::{PlanWarning, RunPlan};
