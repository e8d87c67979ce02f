//! Command-line front end for the drug review analyzer.
//!
//! Runs the same pipeline as the web service and prints the result to the
//! terminal.
//!
//! # Usage
//!
//! ```bash
//! # Full analysis (prompts for the drug name when omitted)
//! cargo run --bin analyze -- analyze aspirin
//!
//! # Machine-readable output
//! cargo run --bin analyze -- analyze aspirin --json
//!
//! # Only resolve the drug page and its resource links
//! cargo run --bin analyze -- resolve "co-codamol"
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `drug_review_analyzer::config`. Logging defaults
//! to `warn` so progress output stays readable.

use drug_review_analyzer::api::dto::analyze::AnalyzeResponse;
use drug_review_analyzer::application::services::AnalysisError;
use drug_review_analyzer::domain::entities::{
    AnalysisResult, ResourceLink, RunStage, SentimentTally,
};
use drug_review_analyzer::{config, server, telemetry};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::process::ExitCode;

const BAR_WIDTH: usize = 40;

/// Analyze patient reviews and side effects of a drug.
#[derive(Parser)]
#[command(name = "analyze")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis for a drug
    Analyze {
        /// Drug name (prompted for when omitted)
        drug: Option<String>,

        /// Print the result as JSON instead of a chart
        #[arg(long)]
        json: bool,
    },

    /// Find the drug page and its review / side-effect links
    Resolve {
        /// Drug name
        drug: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    telemetry::init("warn", &config.log_format)?;
    let service = server::build_analysis_service(&config)?;

    let outcome = match cli.command {
        Commands::Analyze { drug, json } => {
            let drug = match drug {
                Some(d) => d,
                None => Input::new().with_prompt("Drug name").interact_text()?,
            };

            let progress = |stage: RunStage| {
                if !json {
                    println!("{} {}", "…".bright_black(), stage.description().bright_black());
                }
            };

            service
                .run_with_progress(&drug, progress)
                .await
                .map(|result| print_analysis(result, json))
        }
        Commands::Resolve { drug } => service.locate(&drug).await.map(|(query, url, links)| {
            println!("{} {}", "💊".bright_blue(), query.to_string().bold());
            println!("  Page:         {}", url.as_str().cyan());
            println!("  Reviews:      {}", describe_link(&links.reviews));
            println!("  Side effects: {}", describe_link(&links.side_effects));
        }),
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(AnalysisError::DrugNotFound(drug)) => {
            eprintln!("{} Drug '{}' not found", "❌".red(), drug.yellow());
            Ok(ExitCode::from(2))
        }
    }
}

fn print_analysis(result: AnalysisResult, json: bool) {
    if json {
        match serde_json::to_string_pretty(&AnalyzeResponse::from(result)) {
            Ok(body) => println!("{body}"),
            Err(e) => eprintln!("{} Failed to encode result: {e}", "❌".red()),
        }
        return;
    }

    println!();
    println!("{}", format!("📊 {}", result.query).bright_blue().bold());
    println!("  Page: {}", result.drug_url.as_str().bright_black());
    println!();

    print_tally(&result.tally, &result.links.reviews);

    println!();
    println!("{}", "Side effects".bright_white().bold());
    println!("  {}", result.side_effect_summary);
    println!();
}

/// Positive / negative bars scaled to [`BAR_WIDTH`].
fn print_tally(tally: &SentimentTally, reviews: &ResourceLink) {
    println!(
        "{} ({} reviews scraped)",
        "Review sentiment".bright_white().bold(),
        tally.reviewed
    );

    let Some(ratio) = tally.positive_ratio() else {
        let reason = if reviews.is_found() {
            "no review could be classified"
        } else {
            "no reviews page found"
        };
        println!("  {}", reason.yellow());
        return;
    };

    let positive_width = (ratio * BAR_WIDTH as f64).round() as usize;
    let negative_width = BAR_WIDTH - positive_width;

    println!(
        "  Positive {:>4} {} {:.1}%",
        tally.positive,
        "█".repeat(positive_width).green(),
        ratio * 100.0
    );
    println!(
        "  Negative {:>4} {} {:.1}%",
        tally.negative,
        "█".repeat(negative_width).red(),
        (1.0 - ratio) * 100.0
    );
}

fn describe_link(link: &ResourceLink) -> ColoredString {
    match link.url() {
        Some(url) => url.as_str().cyan(),
        None => "not found".yellow(),
    }
}
