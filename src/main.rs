use clap::Parser;
use market_scout::analysis::{AnalysisClient, HuggingFaceClient};
use market_scout::report::{validate_input, MarketReport, MISSING_INPUT};
use market_scout::server::{self, AppState};
use market_scout::{logging, Config, Pipeline};
use std::process::ExitCode;
use std::sync::Arc;

/// Market Scout: nearby businesses and a market analysis for any place.
///
/// Examples:
///   scout "Banjara Hills, Hyderabad" cafe
///   scout "Ameerpet, Hyderabad" bank --skip-analysis
///   scout --serve --port 8080
#[derive(Parser)]
#[command(name = "scout", version, about, long_about = None)]
struct Cli {
    /// Place to search around, e.g. "Ameerpet, Hyderabad".
    #[arg(index = 1)]
    location: Option<String>,

    /// Business type, matched against amenity/shop/craft tags, e.g. "cafe".
    #[arg(index = 2)]
    category: Option<String>,

    /// Only list businesses; skip the text-generation step.
    #[arg(long)]
    skip_analysis: bool,

    /// Debug-level logging.
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Run the HTTP server instead of a single lookup.
    #[arg(long)]
    serve: bool,

    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, default_value_t = 3000)]
    port: u16,

    #[command(flatten)]
    config: Config,
}

fn main() -> ExitCode {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = cli.config.validate() {
        eprintln!("Error: invalid configuration: {}", e);
        return ExitCode::from(1);
    }

    let pipeline = Pipeline::from_config(&cli.config);
    let analyst: Arc<dyn AnalysisClient> = Arc::new(HuggingFaceClient::new(&cli.config));

    if cli.serve {
        return serve(AppState { pipeline, analyst }, &cli.host, cli.port);
    }

    let location = cli.location.as_deref().unwrap_or("");
    let category = cli.category.as_deref().unwrap_or("");
    let Some((location, category)) = validate_input(location, category) else {
        eprintln!("Error: {}", MISSING_INPUT);
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  scout \"Banjara Hills, Hyderabad\" cafe");
        eprintln!("  scout --serve");
        return ExitCode::from(1);
    };

    eprintln!("  Analyzing the market for '{}' in '{}'...", category, location);
    let analyst_ref = (!cli.skip_analysis).then_some(analyst.as_ref());
    let report = MarketReport::generate(&pipeline, analyst_ref, location, category);
    print_summary(&report);

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: cannot serialize report: {}", e);
            return ExitCode::from(1);
        }
    }

    if report.is_error() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}

fn serve(state: AppState, host: &str, port: u16) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: cannot start runtime: {}", e);
            return ExitCode::from(1);
        }
    };
    match runtime.block_on(server::start(state, host, port)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_summary(report: &MarketReport) {
    match report.status {
        "success" => {
            let count = report.data.as_ref().map_or(0, Vec::len);
            eprintln!("  Found {} businesses.", count);
            if let Some(ref analysis) = report.analysis {
                eprintln!();
                eprintln!("{}", analysis);
                eprintln!();
            }
        }
        "no_results" => {
            eprintln!("  No businesses of that type were found in OpenStreetMap for this area.");
            eprintln!("  Try a broader location or a different business type.");
        }
        _ => {
            eprintln!(
                "  An error occurred: {}",
                report.analysis.as_deref().unwrap_or("unknown error")
            );
        }
    }
}
