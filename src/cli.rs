use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Args, Parser, Subcommand};
use flicker_core::{
    Blocked, DEFAULT_EXPONENT, DEFAULT_FLICKER_HZ, DEFAULT_LUMINANCE, Experiment,
    ExperimentConfig, FlickerError, Oscillatory, StimulusMode,
};
use flicker_experiment::{DEFAULT_RENDERER, RendererTarget};
use thiserror::Error;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Cli {
    /// Renderer executable invoked with the positional arguments
    #[arg(long, global = true, env = "FLICKER_RENDERER", default_value = DEFAULT_RENDERER)]
    pub renderer: String,

    /// Directory holding the renderer's stimulus definitions (defaults to this executable's directory)
    #[arg(long = "stimulus-dir", global = true, env = "FLICKER_STIMULUS_DIR")]
    pub stimulus_dir: Option<PathBuf>,

    /// Print the renderer command as JSON instead of launching it
    #[arg(long, global = true, default_value_t = false)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub mode: ModeCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ModeCommand {
    /// Blocked ON/OFF flickering checkerboard
    Blocked(BlockedArgs),
    /// Oscillatory contrast-modulated flickering checkerboard
    Oscillatory(OscillatoryArgs),
}

/// Parameters common to both presentation modes
#[derive(Args, Debug, Clone)]
pub struct SharedArgs {
    /// The subject ID. USE SAME AS IN SCANNER REGISTRATION.
    #[arg(long = "sub_id")]
    pub sub_id: String,

    /// The run ID. Use same name as the task in the protocol.
    #[arg(long = "run_id")]
    pub run_id: String,

    /// The TR in seconds
    #[arg(long, allow_negative_numbers = true)]
    pub tr: f64,

    /// The number of repetitions
    #[arg(long = "n_volumes", allow_negative_numbers = true)]
    pub n_volumes: i64,

    /// Offset in seconds to start experiment after 1st trigger (usually 14)
    #[arg(long, allow_negative_numbers = true)]
    pub offset: i64,

    /// Maximum luminance for stimulus
    #[arg(long, default_value_t = DEFAULT_LUMINANCE, allow_negative_numbers = true)]
    pub luminance: f64,

    /// The flicker frequency in Hz
    #[arg(long, default_value_t = DEFAULT_FLICKER_HZ)]
    pub flicker: u32,

    /// Whether to use scaled noise instead of a flickering checkerboard
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub scalednoise: u8,
}

#[derive(Args, Debug, Clone)]
pub struct BlockedArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    /// Duration of the ON block
    #[arg(long = "on_blocksize", value_parser = positive_number)]
    pub on_blocksize: f64,

    /// Duration of the OFF block
    #[arg(long = "off_blocksize", value_parser = positive_number)]
    pub off_blocksize: f64,
}

#[derive(Args, Debug, Clone)]
pub struct OscillatoryArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    /// The stimulus oscillatory frequency
    #[arg(long, value_parser = positive_number)]
    pub frequency: f64,

    /// Exponent of contrast modulation
    #[arg(long, default_value_t = DEFAULT_EXPONENT, allow_negative_numbers = true)]
    pub exponent: i64,

    /// Whether to have ON/OFF instead of sinusoidal modulation (passing the flag clears it)
    #[arg(long, action = ArgAction::SetFalse)]
    pub blocked: bool,
}

/// Where and how the built command goes
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchSettings {
    pub target: RendererTarget,
    pub dry_run: bool,
}

#[derive(Debug, Error)]
pub enum CollectError {
    /// Help, version and malformed command lines, rendered by clap.
    #[error(transparent)]
    Usage(clap::Error),
    #[error(transparent)]
    Invalid(#[from] FlickerError),
}

/// Parses raw command-line tokens (program name first) into a validated run.
pub fn collect<I, T>(tokens: I) -> Result<(Experiment, LaunchSettings), CollectError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(tokens).map_err(classify)?;
    cli.into_run()
}

impl Cli {
    pub fn into_run(self) -> Result<(Experiment, LaunchSettings), CollectError> {
        let experiment = match self.mode {
            ModeCommand::Blocked(args) => Experiment::Blocked(args.shared.into_config(Blocked {
                on_blocksize: args.on_blocksize,
                off_blocksize: args.off_blocksize,
            })?),
            ModeCommand::Oscillatory(args) => {
                Experiment::Oscillatory(args.shared.into_config(Oscillatory {
                    frequency: args.frequency,
                    exponent: args.exponent,
                    blocked: args.blocked,
                })?)
            }
        };
        let stimulus_dir = self.stimulus_dir.unwrap_or_else(executable_dir);
        let settings = LaunchSettings {
            target: RendererTarget::new(self.renderer, stimulus_dir),
            dry_run: self.dry_run,
        };
        Ok((experiment, settings))
    }
}

impl SharedArgs {
    fn into_config<M: StimulusMode>(self, mode: M) -> Result<ExperimentConfig<M>, FlickerError> {
        if self.sub_id.trim().is_empty() {
            return Err(FlickerError::missing("--sub_id"));
        }
        if self.run_id.trim().is_empty() {
            return Err(FlickerError::missing("--run_id"));
        }
        Ok(ExperimentConfig {
            sub_id: self.sub_id,
            run_id: self.run_id,
            luminance: self.luminance,
            flicker: self.flicker,
            offset: self.offset,
            scalednoise: self.scalednoise == 1,
            tr: self.tr,
            n_volumes: self.n_volumes,
            mode,
        })
    }
}

fn positive_number(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("`{raw}` must be a positive number"))
    }
}

fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
}

/// Maps clap failures onto the parameter taxonomy; everything else stays usage.
fn classify(err: clap::Error) -> CollectError {
    match err.kind() {
        ErrorKind::MissingRequiredArgument => {
            let params = context_strings(&err, ContextKind::InvalidArg)
                .iter()
                .map(|arg| flag_name(arg))
                .collect::<Vec<_>>();
            if params.is_empty() {
                return CollectError::Usage(err);
            }
            FlickerError::missing(params.join(", ")).into()
        }
        ErrorKind::MissingSubcommand => FlickerError::missing("<blocked|oscillatory>").into(),
        ErrorKind::ValueValidation | ErrorKind::InvalidValue | ErrorKind::InvalidUtf8 => {
            let Some(param) = context_strings(&err, ContextKind::InvalidArg)
                .first()
                .map(|arg| flag_name(arg))
            else {
                return CollectError::Usage(err);
            };
            let value = context_strings(&err, ContextKind::InvalidValue)
                .into_iter()
                .next()
                .unwrap_or_default();
            let expected = expected_type(&param);
            FlickerError::invalid(param, value, expected).into()
        }
        _ => CollectError::Usage(err),
    }
}

fn context_strings(err: &clap::Error, kind: ContextKind) -> Vec<String> {
    match err.get(kind) {
        Some(ContextValue::String(s)) => vec![s.clone()],
        Some(ContextValue::Strings(v)) => v.clone(),
        _ => Vec::new(),
    }
}

/// `--sub_id <SUB_ID>` -> `--sub_id`
fn flag_name(rendered: &str) -> String {
    rendered
        .split_whitespace()
        .next()
        .unwrap_or(rendered)
        .to_string()
}

fn expected_type(param: &str) -> &'static str {
    match param {
        "--tr" | "--luminance" => "a floating point number",
        "--on_blocksize" | "--off_blocksize" | "--frequency" => "a positive number",
        "--n_volumes" | "--offset" | "--exponent" => "an integer",
        "--flicker" => "a non-negative integer",
        "--scalednoise" => "0 or 1",
        _ => "a valid value",
    }
}
