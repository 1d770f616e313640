use crate::mode::{Blocked, ModeKind, Oscillatory, StimulusMode};

pub const DEFAULT_LUMINANCE: f64 = 0.8;
pub const DEFAULT_FLICKER_HZ: u32 = 12;
pub const DEFAULT_OFFSET_SECS: i64 = 14;
pub const DEFAULT_EXPONENT: i64 = 1;

/// Validated parameters for one run, shared fields plus the mode payload `M`
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig<M: StimulusMode> {
    /// Subject ID as registered at the scanner.
    pub sub_id: String,
    /// Run ID, named after the task in the protocol.
    pub run_id: String,
    /// Maximum stimulus luminance.
    pub luminance: f64,
    /// Checkerboard flicker frequency in Hz.
    pub flicker: u32,
    /// Seconds after the first trigger before stimulus onset.
    pub offset: i64,
    /// Scaled noise instead of a flickering checkerboard.
    pub scalednoise: bool,
    /// Repetition time in seconds.
    pub tr: f64,
    pub n_volumes: i64,
    pub mode: M,
}

impl<M: StimulusMode> ExperimentConfig<M> {
    /// Config with every optional field at its default.
    pub fn new(
        sub_id: impl Into<String>,
        run_id: impl Into<String>,
        tr: f64,
        n_volumes: i64,
        mode: M,
    ) -> Self {
        Self {
            sub_id: sub_id.into(),
            run_id: run_id.into(),
            luminance: DEFAULT_LUMINANCE,
            flicker: DEFAULT_FLICKER_HZ,
            offset: DEFAULT_OFFSET_SECS,
            scalednoise: false,
            tr,
            n_volumes,
            mode,
        }
    }
}

/// One run, tagged by presentation mode
#[derive(Debug, Clone, PartialEq)]
pub enum Experiment {
    Blocked(ExperimentConfig<Blocked>),
    Oscillatory(ExperimentConfig<Oscillatory>),
}

impl Experiment {
    pub fn kind(&self) -> ModeKind {
        match self {
            Experiment::Blocked(c) => c.mode.kind(),
            Experiment::Oscillatory(c) => c.mode.kind(),
        }
    }

    pub fn stimulus_name(&self) -> &'static str {
        match self {
            Experiment::Blocked(c) => c.mode.stimulus_name(),
            Experiment::Oscillatory(c) => c.mode.stimulus_name(),
        }
    }

    pub fn tr(&self) -> f64 {
        match self {
            Experiment::Blocked(c) => c.tr,
            Experiment::Oscillatory(c) => c.tr,
        }
    }

    pub fn n_volumes(&self) -> i64 {
        match self {
            Experiment::Blocked(c) => c.n_volumes,
            Experiment::Oscillatory(c) => c.n_volumes,
        }
    }

    pub fn offset(&self) -> i64 {
        match self {
            Experiment::Blocked(c) => c.offset,
            Experiment::Oscillatory(c) => c.offset,
        }
    }

    pub fn sub_id(&self) -> &str {
        match self {
            Experiment::Blocked(c) => &c.sub_id,
            Experiment::Oscillatory(c) => &c.sub_id,
        }
    }

    pub fn run_id(&self) -> &str {
        match self {
            Experiment::Blocked(c) => &c.run_id,
            Experiment::Oscillatory(c) => &c.run_id,
        }
    }
}

impl From<ExperimentConfig<Blocked>> for Experiment {
    fn from(config: ExperimentConfig<Blocked>) -> Self {
        Experiment::Blocked(config)
    }
}

impl From<ExperimentConfig<Oscillatory>> for Experiment {
    fn from(config: ExperimentConfig<Oscillatory>) -> Self {
        Experiment::Oscillatory(config)
    }
}
