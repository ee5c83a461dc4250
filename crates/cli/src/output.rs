//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format a USD amount; sub-cent figures keep four decimals
pub fn format_usd(amount: f64) -> String {
    if amount != 0.0 && amount.abs() < 0.01 {
        format!("${:.4}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn format_kwh(kwh: f64) -> String {
    format!("{:.5} kWh", kwh)
}

/// Format grams of CO2, switching to kilograms above 1000 g
pub fn format_co2_grams(grams: f64) -> String {
    if grams >= 1000.0 {
        format!("{:.2} kg", grams / 1000.0)
    } else {
        format!("{:.2} g", grams)
    }
}

/// Colour band for a risk score: >= 90 good, >= 70 warning, otherwise bad
pub fn color_risk_score(score: u8) -> String {
    let formatted = format!("{}/100", score);
    if score >= 90 {
        formatted.green().bold().to_string()
    } else if score >= 70 {
        formatted.yellow().bold().to_string()
    } else {
        formatted.red().bold().to_string()
    }
}

/// Colour a grid intensity relative to the risk thresholds
pub fn color_intensity(intensity: f64) -> String {
    let formatted = format!("{:.0} g/kWh", intensity);
    if intensity > 500.0 {
        formatted.red().to_string()
    } else if intensity > 350.0 {
        formatted.yellow().to_string()
    } else {
        formatted.green().to_string()
    }
}

/// Color status based on value
pub fn color_status(status: &str) -> String {
    match status.to_lowercase().as_str() {
        "healthy" | "ready" => status.green().to_string(),
        "draining" | "not ready" => status.yellow().to_string(),
        _ => status.red().to_string(),
    }
}
