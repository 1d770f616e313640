//! Positional argument vector handed to the renderer.
//!
//! The renderer reads its parameters by position only and performs no
//! validation of its own, so the order produced here is the wire contract.

use std::path::PathBuf;

use flicker_core::{Blocked, Experiment, ExperimentConfig, Oscillatory};
use serde::Serialize;

pub const DEFAULT_RENDERER: &str = "love";

/// Renderer executable and the directory holding its stimulus definitions
#[derive(Debug, Clone, PartialEq)]
pub struct RendererTarget {
    pub program: String,
    pub stimulus_dir: PathBuf,
}

impl RendererTarget {
    pub fn new(program: impl Into<String>, stimulus_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            stimulus_dir: stimulus_dir.into(),
        }
    }

    pub fn stimulus_path(&self, stimulus_name: &str) -> String {
        self.stimulus_dir
            .join(stimulus_name)
            .to_string_lossy()
            .into_owned()
    }
}

/// Ordered renderer invocation: program, stimulus path, positional args
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandVector(Vec<String>);

impl CommandVector {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn program(&self) -> &str {
        &self.0[0]
    }

    /// Everything after the program token.
    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for CommandVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Builds the renderer invocation for `experiment`. Total over validated input.
pub fn build_command(
    experiment: &Experiment,
    total_duration: f64,
    target: &RendererTarget,
) -> CommandVector {
    let stimulus_path = target.stimulus_path(experiment.stimulus_name());
    let mut argv = vec![target.program.clone(), stimulus_path];
    match experiment {
        Experiment::Blocked(config) => push_blocked(&mut argv, config, total_duration),
        Experiment::Oscillatory(config) => push_oscillatory(&mut argv, config, total_duration),
    }
    CommandVector(argv)
}

fn push_blocked(argv: &mut Vec<String>, config: &ExperimentConfig<Blocked>, total_duration: f64) {
    argv.extend([
        config.sub_id.clone(),
        config.run_id.clone(),
        float_arg(config.mode.on_blocksize),
        float_arg(config.mode.off_blocksize),
        float_arg(config.luminance),
        config.offset.to_string(),
        float_arg(total_duration),
        config.flicker.to_string(),
        flag_arg(config.scalednoise),
    ]);
}

fn push_oscillatory(
    argv: &mut Vec<String>,
    config: &ExperimentConfig<Oscillatory>,
    total_duration: f64,
) {
    argv.extend([
        config.sub_id.clone(),
        config.run_id.clone(),
        float_arg(config.mode.frequency),
        config.mode.exponent.to_string(),
        float_arg(config.luminance),
        flag_arg(config.mode.blocked),
        config.offset.to_string(),
        float_arg(total_duration),
        config.flicker.to_string(),
        flag_arg(config.scalednoise),
    ]);
}

/// Plain decimal, keeping `.0` on integral values (`20.0`, `0.8`, `303.0`).
fn float_arg(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn flag_arg(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}
