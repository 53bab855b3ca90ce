use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use invest_advisor::{
    api::{create_router, AppState},
    client::{HttpTransport, RecommendationRequestHandler, SubmitEvent, SubmitOutcome},
    terminal::TerminalView,
    Config,
};

/// Crypto investment advisor
#[derive(Parser)]
#[command(name = "invest-advisor")]
#[command(about = "Crypto allocation recommendations by risk level", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the recommendation server
    Serve,

    /// Submit the recommendation form once and print the result
    Recommend {
        /// Risk level, sent as typed (the server accepts low, medium or high)
        #[arg(long)]
        risk_level: String,

        /// Budget to allocate; must be a number greater than zero
        #[arg(long, allow_hyphen_values = true)]
        budget: String,

        /// Server base URL (defaults to ADVISOR_URL)
        #[arg(long)]
        server: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so `recommend` output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Recommend {
            risk_level,
            budget,
            server,
        } => {
            let base_url = server.unwrap_or(config.advisor_url);
            Ok(recommend(risk_level, budget, &base_url).await)
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    let app = create_router(AppState::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;

    tracing::info!(addr = %config.bind_addr(), "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
        })
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn recommend(risk_level: String, budget: String, base_url: &str) -> ExitCode {
    let view = Arc::new(TerminalView::stdio(risk_level, budget));
    let transport = Arc::new(HttpTransport::new(base_url));
    let handler = RecommendationRequestHandler::new(view, transport);

    match handler.on_submit(&mut SubmitEvent::new()).await {
        SubmitOutcome::Rendered => ExitCode::SUCCESS,
        SubmitOutcome::InvalidBudget => ExitCode::from(2),
        SubmitOutcome::Failed => ExitCode::FAILURE,
    }
}
