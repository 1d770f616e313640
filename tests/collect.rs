use flicker_core::{Experiment, FlickerError};
use flicker_launch::{CollectError, collect};

fn tokens(args: &[&str]) -> Vec<String> {
    std::iter::once("flicker-launch")
        .chain(["--stimulus-dir", "/stim"])
        .chain(args.iter().copied())
        .map(String::from)
        .collect()
}

const BLOCKED: &[&str] = &[
    "blocked",
    "--sub_id",
    "01",
    "--run_id",
    "flicker1",
    "--tr",
    "2.0",
    "--n_volumes",
    "150",
    "--on_blocksize",
    "20",
    "--off_blocksize",
    "20",
    "--offset",
    "14",
];

fn without(args: &[&str], flag: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut skip = false;
    for arg in args {
        if skip {
            skip = false;
            continue;
        }
        if *arg == flag {
            skip = true;
            continue;
        }
        out.push(arg.to_string());
    }
    out
}

fn missing_param(err: CollectError) -> String {
    match err {
        CollectError::Invalid(FlickerError::MissingRequiredParameter { param }) => param,
        other => panic!("expected MissingRequiredParameter, got {other:?}"),
    }
}

fn invalid_param(err: CollectError) -> (String, String) {
    match err {
        CollectError::Invalid(FlickerError::InvalidParameterType { param, value, .. }) => {
            (param, value)
        }
        other => panic!("expected InvalidParameterType, got {other:?}"),
    }
}

#[test]
fn blocked_defaults_are_applied() {
    let (experiment, settings) = collect(tokens(BLOCKED)).unwrap();
    let Experiment::Blocked(config) = experiment else {
        panic!("expected blocked experiment");
    };
    assert_eq!(config.sub_id, "01");
    assert_eq!(config.run_id, "flicker1");
    assert_eq!(config.tr, 2.0);
    assert_eq!(config.n_volumes, 150);
    assert_eq!(config.mode.on_blocksize, 20.0);
    assert_eq!(config.mode.off_blocksize, 20.0);
    assert_eq!(config.luminance, 0.8);
    assert_eq!(config.flicker, 12);
    assert_eq!(config.offset, 14);
    assert!(!config.scalednoise);
    assert!(!settings.dry_run);
    assert_eq!(settings.target.stimulus_dir, std::path::PathBuf::from("/stim"));
}

#[test]
fn oscillatory_blocked_flag_clears_when_passed() {
    let base = [
        "oscillatory",
        "--sub_id",
        "01",
        "--run_id",
        "osc1",
        "--tr",
        "2.0",
        "--n_volumes",
        "100",
        "--frequency",
        "0.2",
        "--offset",
        "14",
    ];

    let (experiment, _) = collect(tokens(&base)).unwrap();
    let Experiment::Oscillatory(config) = experiment else {
        panic!("expected oscillatory experiment");
    };
    assert!(config.mode.blocked);
    assert_eq!(config.mode.exponent, 1);
    assert_eq!(config.mode.frequency, 0.2);

    let mut args = base.to_vec();
    args.push("--blocked");
    let (experiment, _) = collect(tokens(&args)).unwrap();
    let Experiment::Oscillatory(config) = experiment else {
        panic!("expected oscillatory experiment");
    };
    assert!(!config.mode.blocked);
}

#[test]
fn overrides_replace_defaults() {
    let args = without(BLOCKED, "--offset");
    let mut args: Vec<&str> = args.iter().map(String::as_str).collect();
    args.extend([
        "--luminance",
        "0.5",
        "--flicker",
        "8",
        "--offset",
        "10",
        "--scalednoise",
        "1",
    ]);
    let (experiment, _) = collect(tokens(&args)).unwrap();
    let Experiment::Blocked(config) = experiment else {
        panic!("expected blocked experiment");
    };
    assert_eq!(config.luminance, 0.5);
    assert_eq!(config.flicker, 8);
    assert_eq!(config.offset, 10);
    assert!(config.scalednoise);
}

#[test]
fn each_required_blocked_flag_is_reported() {
    for flag in [
        "--sub_id",
        "--run_id",
        "--tr",
        "--n_volumes",
        "--on_blocksize",
        "--off_blocksize",
        "--offset",
    ] {
        let args = without(BLOCKED, flag);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let err = collect(tokens(&args)).unwrap_err();
        assert_eq!(missing_param(err), flag);
    }
}

#[test]
fn frequency_is_required_for_oscillatory() {
    let args = [
        "oscillatory",
        "--sub_id",
        "01",
        "--run_id",
        "osc1",
        "--tr",
        "2.0",
        "--n_volumes",
        "100",
        "--offset",
        "14",
    ];
    let err = collect(tokens(&args)).unwrap_err();
    assert_eq!(missing_param(err), "--frequency");
}

#[test]
fn empty_identifiers_count_as_missing() {
    let mut args = without(BLOCKED, "--sub_id");
    args.extend(["--sub_id".to_string(), String::new()]);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let err = collect(tokens(&args)).unwrap_err();
    assert_eq!(missing_param(err), "--sub_id");
}

#[test]
fn uncoercible_values_are_type_errors() {
    let cases: [(&str, &str); 5] = [
        ("--tr", "two"),
        ("--n_volumes", "2.5"),
        ("--luminance", "bright"),
        ("--flicker", "fast"),
        ("--scalednoise", "2"),
    ];
    for (flag, value) in cases {
        let mut args = without(BLOCKED, flag);
        args.extend([flag.to_string(), value.to_string()]);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let (param, seen) = invalid_param(collect(tokens(&args)).unwrap_err());
        assert_eq!(param, flag);
        assert_eq!(seen, value);
    }
}

#[test]
fn non_positive_block_sizes_are_rejected() {
    let mut args = without(BLOCKED, "--on_blocksize");
    args.extend(["--on_blocksize".to_string(), "0".to_string()]);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let (param, _) = invalid_param(collect(tokens(&args)).unwrap_err());
    assert_eq!(param, "--on_blocksize");
}

#[test]
fn zero_volumes_pass_collection_for_the_resolver() {
    let mut args = without(BLOCKED, "--n_volumes");
    args.extend(["--n_volumes".to_string(), "0".to_string()]);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let (experiment, _) = collect(tokens(&args)).unwrap();
    assert_eq!(experiment.n_volumes(), 0);
}

#[test]
fn global_options_work_after_the_subcommand() {
    let mut args = BLOCKED.to_vec();
    args.extend(["--dry-run", "--renderer", "/usr/local/bin/love"]);
    let (_, settings) = collect(tokens(&args)).unwrap();
    assert!(settings.dry_run);
    assert_eq!(settings.target.program, "/usr/local/bin/love");
}

#[test]
fn help_is_a_usage_outcome() {
    let err = collect(["flicker-launch", "blocked", "--help"]).unwrap_err();
    assert!(matches!(err, CollectError::Usage(_)));
}
