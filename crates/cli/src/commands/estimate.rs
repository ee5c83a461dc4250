//! Estimate command

use anyhow::Result;
use colored::Colorize;
use footprint_lib::{EstimateInput, EstimateResult, Footprint};
use tabled::Tabled;

use crate::client::ApiClient;
use crate::output::{
    color_intensity, color_risk_score, format_co2_grams, format_kwh, format_usd, print_info,
    print_success, OutputFormat,
};

/// Row for the per-1k / per-hour footprint table
#[derive(Tabled)]
struct FootprintRow {
    #[tabled(rename = "Basis")]
    basis: String,
    #[tabled(rename = "Energy")]
    energy: String,
    #[tabled(rename = "CO2")]
    co2: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

impl FootprintRow {
    fn new(basis: &str, footprint: &Footprint) -> Self {
        Self {
            basis: basis.to_string(),
            energy: format_kwh(footprint.energy_kwh),
            co2: format_co2_grams(footprint.co2_g),
            cost: format_usd(footprint.cost_usd),
        }
    }
}

/// Estimate through the API, or in-process when `local` is set
pub async fn run_estimate(
    client: &ApiClient,
    input: EstimateInput,
    local: bool,
    format: OutputFormat,
) -> Result<()> {
    let result = if local {
        footprint_lib::estimate(input)
    } else {
        client.estimate(&input).await?
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)?;
            println!("{}", json);
        }
        OutputFormat::Table => print_result(&result, local),
    }

    Ok(())
}

fn print_result(result: &EstimateResult, local: bool) {
    let assumptions = &result.assumptions;

    println!("{}", "Footprint Estimate".bold());
    println!("{}", "=".repeat(50));
    println!("Region:                 {}", assumptions.region.cyan());
    println!(
        "Grid intensity:         {}",
        color_intensity(assumptions.grid_intensity_g_per_kwh)
    );
    println!("Active instances:       {}", assumptions.active_instances);
    println!("Idle instances:         {}", assumptions.idle_instances);
    println!("CPU utilization:        {:.1}%", assumptions.cpu_utilization_est);
    println!("Seconds per request:    {}", assumptions.seconds_per_request);
    println!();

    let rows = vec![
        FootprintRow::new("per 1k requests", &result.per_1k_requests),
        FootprintRow::new("per hour", &result.per_hour),
    ];
    let table = tabled::Table::new(rows)
        .with(tabled::settings::Style::rounded())
        .to_string();
    println!("{}", table);
    println!();

    let forecast = &result.monthly_forecast;
    println!("{}", "Monthly Forecast".bold());
    println!("{}", "-".repeat(50));
    println!("Requests:               {}", forecast.requests);
    println!("Cost:                   {}", format_usd(forecast.cost_usd));
    println!("CO2:                    {:.2} kg", forecast.co2_kg);
    println!("Energy:                 {:.2} kWh", forecast.energy_kwh);
    println!("Assumption:             {}", forecast.assumption.dimmed());
    println!();

    println!(
        "{} {}",
        "Risk Score:".bold(),
        color_risk_score(result.risk_score)
    );
    println!();

    println!("{}", "Advice".bold());
    println!("{}", "-".repeat(50));
    for line in &result.advice {
        println!("  • {}", line);
    }
    println!();

    println!("{}", "Suggested Config".bold());
    println!("{}", "-".repeat(50));
    print!("{}", result.suggested_yaml);
    println!();

    if local {
        print_info("Computed locally; the API was not contacted");
    } else {
        print_success("Estimate received from API");
    }
}
