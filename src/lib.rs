//! Tripwire: deliberate bug triggers for exercising fuzzer fault detection.
//!
//! Tripwire is a box of fixtures for testing the tool that tests your code:
//! each trigger manufactures exactly one class of fault (heap overflow,
//! use-after-free, hang, runaway allocation, ...) so that a fuzzing
//! harness's detection and reporting can be verified end to end. The
//! triggers are the system under *negative* test: they exist to crash, and
//! a harness that fails to notice has a bug.
//!
//! # Modules
//!
//! - [`trigger`]: the fault fixtures and their registry
//! - [`provider`]: deterministic fuzz-input decoding (FuzzedDataProvider
//!   conventions)
//! - [`error`]: error types for the CLI surface
//!
//! The `fuzz/` subcrate wires one libFuzzer target to each trigger; the
//! `tripwire` binary replays recorded inputs against a trigger outside the
//! fuzzing engine.

pub mod error;
pub mod provider;
pub mod trigger;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::TripwireError;

/// The tripwire CLI application.
#[derive(Parser)]
#[command(name = "tripwire")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the available triggers and their expected findings.
    List(ListArgs),

    /// Feed an input to a trigger. Faults, hangs, or aborts by design.
    Run(RunArgs),
}

/// Arguments for the list subcommand.
#[derive(clap::Args)]
struct ListArgs {
    /// Output format for the listing ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the run subcommand.
#[derive(clap::Args)]
struct RunArgs {
    /// Trigger to fire (see 'tripwire list').
    trigger: String,

    /// File holding the input bytes; omitted means empty input, which is
    /// a no-op for every trigger.
    input: Option<PathBuf>,
}

/// Run the tripwire CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), TripwireError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List(args)) => run_list(args),
        Some(Commands::Run(args)) => run_run(args),
        None => {
            // No subcommand: print a short orientation and exit successfully
            println!("tripwire {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Deliberate bug triggers for exercising fuzzer fault detection.");
            println!();
            println!("Run 'tripwire --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the list subcommand.
fn run_list(args: ListArgs) -> Result<(), TripwireError> {
    match args.output.as_str() {
        "json" => {
            let infos: Vec<_> = trigger::ALL.into_iter().map(|kind| kind.info()).collect();
            let json =
                serde_json::to_string_pretty(&infos).map_err(TripwireError::ListingEncode)?;
            println!("{json}");
        }
        _ => {
            for kind in trigger::ALL {
                println!(
                    "{:<22} {:<45} {}",
                    kind.name(),
                    kind.expected_finding(),
                    kind.summary()
                );
            }
        }
    }
    Ok(())
}

/// Execute the run subcommand.
fn run_run(args: RunArgs) -> Result<(), TripwireError> {
    let kind = trigger::TriggerKind::from_name(&args.trigger)?;

    let input = match args.input {
        Some(path) => fs::read(path)?,
        None => Vec::new(),
    };

    eprintln!(
        "tripwire: firing '{}' with {} byte(s); expected finding: {}",
        kind.name(),
        input.len(),
        kind.expected_finding()
    );

    kind.fire(&input);

    // Reached when the empty-input guard declined to fire, or after
    // slow_input finishes its delay.
    eprintln!("tripwire: '{}' returned without fault", kind.name());
    Ok(())
}
