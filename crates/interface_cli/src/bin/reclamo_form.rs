//! Claim Form - Command-Line Binary
//!
//! # Usage
//!
//! ```bash
//! # Browse the selectors for a department
//! cargo run --bin reclamo-form -- options --department Lima
//!
//! # Submit a draft file
//! RECLAMOS_BASE_URL=http://localhost:8080 cargo run --bin reclamo-form -- submit draft.json
//! ```
//!
//! # Environment Variables
//!
//! * `RECLAMOS_BASE_URL` - Backend base URL (default: http://localhost:8080)
//! * `RECLAMOS_TIMEOUT_SECS` - Per-request timeout in seconds (default: none)
//! * `RECLAMOS_STRICT_VALIDATION` - Validate before sending (default: true)
//! * `RECLAMOS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_claims::ClaimFormSession;
use infra_http::HttpClaimsBackend;
use interface_cli::config::CliConfig;
use interface_cli::{draft_file, render, show_options, submit_draft};

#[derive(Parser)]
#[command(name = "reclamo-form")]
#[command(about = "Citizen claim form for the reclamos backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show document types and location selectors
    Options {
        /// Department to select
        #[arg(long)]
        department: Option<String>,
        /// Province to select (requires --department)
        #[arg(long, requires = "department")]
        province: Option<String>,
    },
    /// Submit a claim from a JSON draft file
    Submit {
        /// Path to the draft file
        draft: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_env().context("invalid RECLAMOS_* configuration")?;
    init_tracing(&config.log_level);

    tracing::info!(base_url = %config.base_url, "Starting claim form");

    let backend = HttpClaimsBackend::new(config.backend())?;
    let mut session = ClaimFormSession::new(backend, config.session());

    match cli.command {
        Commands::Options {
            department,
            province,
        } => {
            print!("{}", show_options(&mut session, department, province).await);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Submit { draft } => {
            let events = draft_file::load(&draft)?;
            let notice = submit_draft(&mut session, events).await;
            println!("{}", render::notice(&notice));
            Ok(if notice.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
