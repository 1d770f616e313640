use flicker_launch::{App, CollectError, RunOutcome, collect};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let (experiment, settings) = match collect(std::env::args_os()) {
        Ok(run) => run,
        Err(CollectError::Usage(err)) => err.exit(),
        Err(CollectError::Invalid(err)) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let app = App::new(settings);
    match app.run(&experiment) {
        Ok(outcome) => {
            if let RunOutcome::DryRun(command) = &outcome {
                match command.to_json() {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        eprintln!("error: cannot encode command: {err}");
                        std::process::exit(1);
                    }
                }
            }
            std::process::exit(outcome.exit_code());
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so `--dry-run` output stays machine readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
