mod agent;
mod error;
mod keywords;
mod routes;
mod selection;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Non-fatal: grouping and selection still work without the keyword agent.
    let agent: Option<Arc<dyn agent::KeywordSource>> = match agent::AgentClient::from_env() {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), "keyword agent client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "keyword agent not configured, generation disabled");
            None
        }
    };

    let state = state::AppState::new(agent);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "keyword-agent listening");
    axum::serve(listener, app).await.expect("server failed");
}
