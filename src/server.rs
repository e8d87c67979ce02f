//! HTTP server initialization and runtime setup.
//!
//! Wires the live gateways (HTTP page fetcher, shared LLM chat client) into
//! the analysis pipeline and runs the Axum server until Ctrl-C / SIGTERM.

use crate::application::services::{AnalysisOptions, AnalysisService};
use crate::config::Config;
use crate::domain::entities::{SiteLayout, SourceSite};
use crate::infrastructure::http::HttpPageFetcher;
use crate::infrastructure::llm::{ChatClient, LlmSentimentClassifier, LlmSummarizer};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// The pipeline over production gateways.
pub type LiveAnalysisService =
    AnalysisService<HttpPageFetcher, LlmSentimentClassifier, LlmSummarizer>;

/// Builds the analysis pipeline from configuration.
///
/// One [`ChatClient`] is shared by the sentiment classifier and the
/// side-effect summarizer.
///
/// # Errors
///
/// Returns an error if the source base URL is invalid or an HTTP client
/// cannot be constructed.
pub fn build_analysis_service(config: &Config) -> Result<LiveAnalysisService> {
    let site = Arc::new(
        SourceSite::new(&config.source_base_url, SiteLayout::default())
            .context("Invalid SOURCE_BASE_URL")?,
    );
    tracing::info!(source = site.base_url(), "Source site ready");

    let fetcher = Arc::new(
        HttpPageFetcher::new(config.fetch_timeout(), config.fetch_retries)
            .context("Failed to build page fetcher")?,
    );

    let chat = Arc::new(
        ChatClient::new(config.chat_client_config()).context("Failed to build LLM client")?,
    );
    tracing::info!(model = chat.model(), "LLM client ready");

    let classifier = Arc::new(LlmSentimentClassifier::new(chat.clone()));
    let summarizer = Arc::new(LlmSummarizer::new(chat));

    Ok(AnalysisService::new(
        fetcher,
        classifier,
        summarizer,
        site,
        AnalysisOptions {
            classify_concurrency: config.classify_concurrency,
        },
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The pipeline cannot be built
/// - The listen address is invalid or bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let service = build_analysis_service(&config)?;
    let state = AppState::new(Arc::new(service));

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
