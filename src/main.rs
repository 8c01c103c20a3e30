use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;

use lielens::analyzer::heuristic::HeuristicAnalyzer;
use lielens::analyzer::traits::ContentAnalyzer;
use lielens::config::Config;
use lielens::input::normalize_content;
use lielens::report::templates::DEMO_CONTENT;
use lielens::report::AnalysisReport;

/// LieLens: spot manipulation tactics and cognitive-bias exploitation in text.
///
/// Scores content for emotional manipulation and explains which biases it
/// leans on, with questions to ask before believing or sharing it.
#[derive(Parser)]
#[command(name = "lielens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Port to listen on (default: LIELENS_PORT, PORT, or 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: LIELENS_BIND or 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Analyze a piece of text locally
    Analyze {
        /// The text to analyze
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the raw JSON report
        #[arg(long)]
        json: bool,
    },

    /// Analyze the built-in sample text
    Demo {
        /// Print the raw JSON report
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lielens=info")),
        )
        .init();

    let cli = Cli::parse();
    let analyzer: Arc<dyn ContentAnalyzer> = Arc::new(HeuristicAnalyzer::default());

    match cli.command {
        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            lielens::web::run_server(&config, analyzer).await?;
        }

        Commands::Analyze { text, file, json } => {
            let raw = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, None) => anyhow::bail!("Provide TEXT or --file <PATH>"),
            };
            let content = normalize_content(&raw)?;
            info!("Analyzing content ({} chars)", content.chars().count());
            print_report(analyzer.as_ref(), &content, json).await?;
        }

        Commands::Demo { json } => {
            let content = normalize_content(DEMO_CONTENT)?;
            print_report(analyzer.as_ref(), &content, json).await?;
        }
    }

    Ok(())
}

async fn print_report(analyzer: &dyn ContentAnalyzer, content: &str, json: bool) -> Result<()> {
    let report = AnalysisReport::analyze(analyzer, content, Utc::now()).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        lielens::output::terminal::display_report(&report);
    }
    Ok(())
}
