//! Proposal Linter CLI
//!
//! A command-line tool for validating proposal documents in CI.

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::config::{ExitCode, ValidatedConfig};
use cli::output::{GithubOutput, HumanOutput, JsonOutput};
use cli::{Args, OutputFormat};
use proposal_lint_core::{Linter, RuleRunner};

fn main() -> StdExitCode {
    let args = Args::parse();

    init_tracing(args.verbose, args.is_machine_output());

    let exit_code = run(&args);
    StdExitCode::from(u8::from(exit_code))
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, machine_output: bool) {
    // Keep stdout parseable in JSON mode
    if machine_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the linter with the given arguments.
fn run(args: &Args) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let use_colors = args.format == OutputFormat::Human && io::stdout().is_terminal();

    if args.list_rules {
        let mut output = HumanOutput::new(&mut stdout, use_colors);
        if let Err(e) = output.write_rules(&RuleRunner::with_all_rules()) {
            error!("Failed to write output: {}", e);
            return ExitCode::StartupFailure;
        }
        return ExitCode::Success;
    }

    // Validate configuration
    let config = match ValidatedConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    debug!("Validated configuration: {:?}", config);
    info!("Rules: {}", config.rules.join(", "));
    info!("Proposals to lint: {}", config.files.len());

    if config.files.is_empty() {
        warn!("No proposals found in {}", args.proposals_dir.display());
    }

    let linter = Linter::with_runner(config.template.clone(), config.runner());
    let report = match linter.lint_files(&config.files) {
        Ok(report) => report,
        Err(e) => {
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    // Output results
    let written = match config.format {
        OutputFormat::Human => HumanOutput::new(&mut stdout, use_colors).write_report(&report),
        OutputFormat::Json => JsonOutput::from_report(&report).write(&mut stdout),
        OutputFormat::Github => GithubOutput::new(&mut stdout).write_report(&report),
    };
    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    config.exit_code_for_report(&report)
}

/// Write an error message to the writer.
fn write_error<W: Write>(writer: &mut W, message: &str, use_colors: bool) {
    if use_colors {
        let _ = writeln!(writer, "\x1b[1;31mError:\x1b[0m {}", message);
    } else {
        let _ = writeln!(writer, "Error: {}", message);
    }
}
