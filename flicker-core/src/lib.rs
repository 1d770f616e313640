pub mod config;
pub mod error;
pub mod mode;

pub use config::{
    DEFAULT_EXPONENT, DEFAULT_FLICKER_HZ, DEFAULT_LUMINANCE, DEFAULT_OFFSET_SECS, Experiment,
    ExperimentConfig,
};
pub use error::{FlickerError, Result};
pub use mode::{Blocked, ModeKind, Oscillatory, StimulusMode};
