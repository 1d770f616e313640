pub mod app;
pub mod cli;

pub use app::{App, RunOutcome};
pub use cli::{Cli, CollectError, LaunchSettings, collect};
