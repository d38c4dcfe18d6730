use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use work_timers::shell::config::AppConfig;
use work_timers::shell::graphql::build_schema;
use work_timers::shell::http::router;
use work_timers::shell::state::AppState;
use work_timers::shared::core::primitives::SystemClock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let state = AppState::in_memory(&config.outbox_topic, Arc::new(SystemClock));
    let schema = build_schema(state.clone());
    let app = router(state, schema, &config.graphql_path);

    tracing::info!(
        addr = %config.addr,
        graphql = %config.graphql_path,
        "work timer service listening"
    );
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
