mod client;
mod config;
mod reconcile;
mod render;
mod replay;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{miette, IntoDiagnostic};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{client::SubgraphClient, config::Package};

#[derive(Parser, Debug)]
#[command(version, about = "Render, replay and reconcile the subgraph packages")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a package's manifest and constants file for one network
    Render {
        /// Package to render
        #[arg(long, value_enum)]
        package: Package,

        /// Key of the package's networks.yaml
        #[arg(long, default_value = "bsc")]
        network: String,
    },
    /// Replay recorded blocks through a fresh store and print the resulting snapshot
    Replay {
        /// Replay fixture YAML
        fixture: PathBuf,

        /// Write the snapshot here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also reconcile the counters of the snapshot
        #[arg(long, default_value_t = false)]
        reconcile: bool,

        /// Disable colors in snapshot diffs
        #[arg(long, default_value_t = false)]
        no_color: bool,
    },
    /// Check the counters served by a live index against the records they count
    Reconcile {
        /// Package whose counters are checked
        #[arg(long, value_enum)]
        package: Package,

        /// Query endpoint of the deployed subgraph
        #[arg(long)]
        url: String,
    },
}

fn report(mismatches: Vec<reconcile::Mismatch>) -> miette::Result<()> {
    if mismatches.is_empty() {
        info!("✅ All counters reconcile.");
        return Ok(());
    }
    for mismatch in &mismatches {
        info!("❗️ {}", mismatch);
    }
    Err(miette!("{} counters do not reconcile", mismatches.len()))
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Render { package, network } => render::render_package(&package.path(), &network),
        Command::Replay { fixture, output, reconcile: check_counters, no_color } => {
            let (package, outcome) = replay::run_fixture(&fixture, !no_color)?;

            let snapshot = serde_json::to_string_pretty(&outcome.snapshot).into_diagnostic()?;
            match output {
                Some(path) => std::fs::write(path, snapshot).into_diagnostic()?,
                None => println!("{}", snapshot),
            }

            if outcome.failed() > 0 {
                info!("{} events were abandoned by their handlers", outcome.failed());
            }
            if check_counters {
                report(reconcile::reconcile_snapshot(package, &outcome.snapshot)?)?;
            }
            Ok(())
        }
        Command::Reconcile { package, url } => {
            let runtime = tokio::runtime::Runtime::new().into_diagnostic()?;
            let client = SubgraphClient::new(&url);
            let mismatches = runtime.block_on(reconcile::reconcile_remote(&client, package))?;
            report(mismatches)
        }
    }
}
