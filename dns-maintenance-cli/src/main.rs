//! Maintenance-mode switch for weighted Route 53 alias records.
//!
//! Walks the environment's hosted zone, shows the allow-listed alias records,
//! and after a confirmation flips their routing weights in one atomic batch:
//! `--mode on` sends traffic to the maintenance target, `--mode off` sends it
//! back to the load balancers.
//!
//! # Usage
//! ```bash
//! # Put staging into maintenance
//! dns-maintenance --mode on --profile staging
//!
//! # Bring it back
//! dns-maintenance --mode off --profile staging
//! ```
//!
//! Exits 0 on success or user abort, 1 on any configuration, network or API
//! error.

mod context;
mod pipeline;
mod table;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use dns_maintenance_route53::{ChangeBatch, Route53Client, Route53Error, ZoneRecordStore};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use context::{EnvContext, Mode};
use pipeline::{WeightPlanner, fetch_switchable_records};

#[derive(Parser)]
#[command(name = "dns-maintenance")]
#[command(about = "Toggle weighted-routing maintenance mode for an environment", long_about = None)]
#[command(version)]
struct Cli {
    /// Maintenance mode to apply
    #[arg(long, value_enum, default_value_t = Mode::Off)]
    mode: Mode,

    /// Environment to change; doubles as the AWS credentials profile
    #[arg(long, default_value = "invalid")]
    profile: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<Route53Error>() {
                Some(api) if api.is_expected() => tracing::warn!("{err:#}"),
                _ => tracing::error!("{err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = EnvContext::resolve(&cli.profile)?;
    tracing::debug!("environment {} uses zone {}", ctx.profile, ctx.zone_id);

    let client =
        Route53Client::from_profile(&ctx.profile).context("failed to resolve AWS credentials")?;

    let records = fetch_switchable_records(&client, &ctx)
        .await
        .context("failed to list record sets")?;

    table::print_records(&records, &ctx.profile);

    if !confirm()? {
        println!("No changes made, goodbye");
        return Ok(());
    }

    let planner = WeightPlanner::new(cli.mode, &ctx)?;
    let batch = ChangeBatch::new(planner.plan(&records))
        .with_comment(format!("maintenance mode {}", cli.mode));

    let info = client
        .change_record_sets(&ctx.zone_id, &batch)
        .await
        .context("failed to submit change batch")?;
    tracing::info!("change {} is {}", info.id, info.status);

    println!("Changes made, it may take more than a minute for changes to propagate");
    table::print_changes(&batch.changes.items, &ctx.profile);

    Ok(())
}

/// Prompt on stdout and read one line; only a literal `yes` proceeds.
fn confirm() -> io::Result<bool> {
    print!("Do you wish to continue? (yes/no): ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim() == "yes"
}

/// Tracing to stderr so pipeline output owns stdout. `RUST_LOG` overrides
/// the default `info` filter; library `log` records ride the bridge.
fn init_tracing() {
    let _ = tracing_log::LogTracer::init();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();
}
