/// Defines a presentation mode and the renderer resource it drives
pub trait StimulusMode: Clone + PartialEq + Send + Sync + std::fmt::Debug {
    /// Name of the stimulus definition the renderer loads for this mode.
    fn stimulus_name(&self) -> &'static str;
    fn kind(&self) -> ModeKind;
}

#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub enum ModeKind {
    Blocked,
    Oscillatory,
}

impl std::fmt::Display for ModeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeKind::Blocked => f.write_str("blocked"),
            ModeKind::Oscillatory => f.write_str("oscillatory"),
        }
    }
}

/// ON/OFF block timing, in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct Blocked {
    pub on_blocksize: f64,
    pub off_blocksize: f64,
}

impl Blocked {
    /// Length of one ON+OFF cycle.
    pub fn cycle_secs(&self) -> f64 {
        self.on_blocksize + self.off_blocksize
    }
}

/// Contrast modulation at `frequency` Hz
///
/// `blocked` switches the oscillatory renderer between ON/OFF and sinusoidal
/// modulation at the same frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Oscillatory {
    pub frequency: f64,
    pub exponent: i64,
    pub blocked: bool,
}

impl StimulusMode for Blocked {
    fn stimulus_name(&self) -> &'static str {
        "blocked-flicker"
    }
    fn kind(&self) -> ModeKind {
        ModeKind::Blocked
    }
}

impl StimulusMode for Oscillatory {
    fn stimulus_name(&self) -> &'static str {
        "oscillatory-flicker"
    }
    fn kind(&self) -> ModeKind {
        ModeKind::Oscillatory
    }
}
