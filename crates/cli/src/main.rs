//! Serverless Footprint Estimator CLI
//!
//! A command-line tool for estimating the energy, carbon and cost footprint
//! of a serverless workload, either through the estimator API or locally.

mod client;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{estimate, health, regions};
use footprint_lib::EstimateInput;

const DEFAULT_API_URL: &str = "http://localhost:8080";

const DEFAULT_REGION: &str = "asia-south1";

/// Serverless Footprint Estimator CLI
#[derive(Parser)]
#[command(name = "fpe")]
#[command(author, version, about = "CLI for the Serverless Footprint Estimator", long_about = None)]
pub struct Cli {
    /// API endpoint URL (can also be set via FPE_API_URL env var)
    #[arg(long, env = "FPE_API_URL")]
    pub api_url: Option<String>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate energy, CO2 and cost for a workload
    Estimate(EstimateArgs),

    /// List known regions and their grid carbon intensity
    Regions,

    /// Show estimator service health
    Health,
}

#[derive(Args)]
pub struct EstimateArgs {
    /// vCPUs per instance
    #[arg(long, default_value_t = 1.0)]
    pub vcpu: f64,

    /// Memory per instance in GB
    #[arg(long, default_value_t = 1.0)]
    pub memory_gb: f64,

    /// Requests served simultaneously per instance
    #[arg(long, default_value_t = 80)]
    pub concurrency: i64,

    /// Average request duration in milliseconds
    #[arg(long, default_value_t = 200)]
    pub avg_duration_ms: i64,

    /// Steady traffic in requests per minute
    #[arg(long, default_value_t = 600)]
    pub requests_per_min: i64,

    /// Deployment region (defaults to the configured region, then asia-south1)
    #[arg(long, short)]
    pub region: Option<String>,

    #[arg(long, default_value_t = 0)]
    pub min_instances: i64,

    #[arg(long, default_value_t = 5)]
    pub max_instances: i64,

    /// CPU utilization of warm idle instances, in percent
    #[arg(long, default_value_t = 10.0)]
    pub idle_utilization_pc: f64,

    /// Compute in-process instead of calling the API
    #[arg(long)]
    pub local: bool,
}

impl EstimateArgs {
    fn into_input(self, default_region: Option<String>) -> (EstimateInput, bool) {
        let region = self
            .region
            .or(default_region)
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let input = EstimateInput {
            vcpu: self.vcpu,
            memory_gb: self.memory_gb,
            concurrency: self.concurrency,
            avg_duration_ms: self.avg_duration_ms,
            requests_per_min: self.requests_per_min,
            region,
            min_instances: self.min_instances,
            max_instances: self.max_instances,
            idle_utilization_pc: self.idle_utilization_pc,
        };
        (input, self.local)
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::Config::load()?;

    let api_url = cli
        .api_url
        .or(config.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let client = client::ApiClient::new(&api_url)?;

    match cli.command {
        Commands::Estimate(args) => {
            let (input, local) = args.into_input(config.default_region);
            estimate::run_estimate(&client, input, local, cli.format).await?;
        }
        Commands::Regions => {
            regions::list_regions(cli.format)?;
        }
        Commands::Health => {
            health::show_health(&client, cli.format).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        output::print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
