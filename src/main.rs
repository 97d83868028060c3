use std::{net::SocketAddr, sync::Arc};

use timesheet::{
    clock::SystemClock, config::AppConfig, db::connection, logging::init_tracing, routes::app,
    services::ServiceContext, state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        eprintln!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging.rust_log);

    let db = connection::connect(&cfg.database()).await?;
    let state = AppState::new(cfg, db, Arc::new(SystemClock))?;

    ServiceContext::from_state(state.as_ref())
        .auth(&state.jwt, state.token_ttl_secs())
        .seed_admin(&state.auth)
        .await?;

    let addr: SocketAddr = format!(
        "{}:{}",
        state.config.general.host, state.config.general.port
    )
    .parse()?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
