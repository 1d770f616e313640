use flicker_core::{Experiment, ModeKind};
use tracing::{info, warn};

/// Timing summary of a resolved run, logged before launch
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub kind: ModeKind,
    pub total_duration: f64,
    pub offset_secs: i64,
    /// Seconds of stimulation left after the onset offset.
    pub stimulus_window: f64,
    /// ON+OFF cycles (blocked) or modulation periods (oscillatory) in the window.
    pub cycles: f64,
    pub warnings: Vec<PlanWarning>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanWarning {
    OffsetSwallowsRun { offset_secs: i64, total_duration: f64 },
    PartialBlockCycle { window: f64, cycle_secs: f64 },
    SubCycleOscillation { cycles: f64 },
}

impl std::fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanWarning::OffsetSwallowsRun {
                offset_secs,
                total_duration,
            } => write!(
                f,
                "offset of {offset_secs} s leaves no stimulation within {total_duration} s"
            ),
            PlanWarning::PartialBlockCycle { window, cycle_secs } => write!(
                f,
                "stimulus window of {window:.3} s is not a whole number of {cycle_secs} s ON/OFF cycles"
            ),
            PlanWarning::SubCycleOscillation { cycles } => {
                write!(f, "only {cycles:.3} modulation cycles fit in the run")
            }
        }
    }
}

const CYCLE_EPSILON: f64 = 1e-6;

impl RunPlan {
    pub fn new(experiment: &Experiment, total_duration: f64) -> Self {
        let offset_secs = experiment.offset();
        let stimulus_window = total_duration - offset_secs as f64;
        let mut warnings = Vec::new();

        if stimulus_window <= 0.0 {
            warnings.push(PlanWarning::OffsetSwallowsRun {
                offset_secs,
                total_duration,
            });
            return Self {
                kind: experiment.kind(),
                total_duration,
                offset_secs,
                stimulus_window,
                cycles: 0.0,
                warnings,
            };
        }

        let cycles = match experiment {
            Experiment::Blocked(config) => {
                let cycle_secs = config.mode.cycle_secs();
                let cycles = stimulus_window / cycle_secs;
                if (cycles - cycles.round()).abs() > CYCLE_EPSILON {
                    warnings.push(PlanWarning::PartialBlockCycle {
                        window: stimulus_window,
                        cycle_secs,
                    });
                }
                cycles
            }
            Experiment::Oscillatory(config) => {
                let cycles = config.mode.frequency * stimulus_window;
                if cycles < 1.0 {
                    warnings.push(PlanWarning::SubCycleOscillation { cycles });
                }
                cycles
            }
        };

        Self {
            kind: experiment.kind(),
            total_duration,
            offset_secs,
            stimulus_window,
            cycles,
            warnings,
        }
    }

    pub fn log(&self) {
        info!(
            mode = %self.kind,
            total_duration = self.total_duration,
            offset = self.offset_secs,
            window = self.stimulus_window,
            cycles = %format!("{:.2}", self.cycles),
            "run plan"
        );
        for warning in &self.warnings {
            warn!("{warning}");
        }
    }
}
