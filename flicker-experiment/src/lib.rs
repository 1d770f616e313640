pub mod command;
pub mod invoke;
pub use command::{CommandVector, DEFAULT_RENDERER, RendererTarget, build_command};
pub use invoke::{Launcher, ProcessLauncher};
