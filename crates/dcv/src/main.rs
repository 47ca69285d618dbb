//! DCV - Entry Point
//!
//! Binary entry point for the dependency injection configuration
//! verifier. Loads a scenario file describing the injectable type
//! population, the profile option catalog, and the live graph, then
//! runs both verification phases and prints the report.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dcv verify --scenario world.toml` | Run both phases, print report |
//! | `dcv verify --scenario world.toml --json` | Same, JSON output for CI |
//! | `dcv list-types` | List statically registered injectable types |

use anyhow::Context;
use clap::{Parser, Subcommand};
use dcv::{verify_world, Reporter, Scenario};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command line interface for the dependency configuration verifier
#[derive(Parser, Debug)]
#[command(name = "dcv")]
#[command(about = "DCV - Dependency Injection Configuration Verifier")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify a scenario's dependency configuration
    Verify {
        /// Path to the scenario TOML file
        #[arg(short, long)]
        scenario: PathBuf,

        /// Emit the report as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
    /// List injectable types registered at compile time
    ListTypes,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Verify { scenario, json } => {
            let scenario = Scenario::from_path(&scenario)
                .with_context(|| format!("failed to load scenario {}", scenario.display()))?;
            let world = scenario.build().context("failed to assemble scenario")?;
            let report = verify_world(world).context("verification run aborted")?;

            if json {
                println!("{}", Reporter::to_json(&report));
            } else {
                println!("{}", Reporter::to_human_readable(&report));
            }

            if !report.summary.passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::ListTypes => {
            let types = dcv::list_injectable_types();
            if types.is_empty() {
                println!("no injectable types registered");
            } else {
                for (name, description) in types {
                    println!("{name}  -  {description}");
                }
            }
            Ok(())
        }
    }
}
