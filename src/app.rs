use anyhow::{Context, Result};
use flicker_core::Experiment;
use flicker_experiment::{CommandVector, Launcher, ProcessLauncher, build_command};
use flicker_timing::{RunPlan, total_duration};
use tracing::{info, warn};

use crate::cli::LaunchSettings;

/// What a run ended with
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Built but not launched (`--dry-run`).
    DryRun(CommandVector),
    /// Renderer exit code, forwarded untouched.
    Exited(i32),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::DryRun(_) => 0,
            RunOutcome::Exited(code) => *code,
        }
    }
}

pub struct App<L: Launcher = ProcessLauncher> {
    settings: LaunchSettings,
    launcher: L,
}

impl App {
    pub fn new(settings: LaunchSettings) -> Self {
        Self::with_launcher(settings, ProcessLauncher)
    }
}

impl<L: Launcher> App<L> {
    pub fn with_launcher(settings: LaunchSettings, launcher: L) -> Self {
        Self { settings, launcher }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Resolves the duration and builds the renderer command. Nothing is spawned.
    pub fn prepare(&self, experiment: &Experiment) -> Result<CommandVector> {
        let duration = total_duration(experiment.tr(), experiment.n_volumes())
            .context("cannot derive run duration")?;
        info!(
            sub_id = experiment.sub_id(),
            run_id = experiment.run_id(),
            tr = experiment.tr(),
            n_volumes = experiment.n_volumes(),
            total_duration = duration,
            "resolved run duration"
        );
        RunPlan::new(experiment, duration).log();
        Ok(build_command(experiment, duration, &self.settings.target))
    }

    pub fn run(&self, experiment: &Experiment) -> Result<RunOutcome> {
        let command = self.prepare(experiment)?;
        if self.settings.dry_run {
            info!(argv = %command, "dry run, renderer not launched");
            return Ok(RunOutcome::DryRun(command));
        }

        let code = self
            .launcher
            .launch(&command)
            .with_context(|| format!("{} run aborted", experiment.kind()))?;
        if code == 0 {
            info!("renderer finished");
        } else {
            warn!(code, "renderer exited with nonzero status");
        }
        Ok(RunOutcome::Exited(code))
    }
}
