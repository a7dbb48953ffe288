use std::net::SocketAddr;

use tokio::signal;

use katana_link::shared::config::resolver::ConfigResolver;
use katana_link::shared::infrastructure::database::DatabaseOptions;
use katana_link::shared::infrastructure::logging::setup_logging;
use katana_link::shell::http::router;
use katana_link::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let resolver = ConfigResolver::from_process();
    let settings = resolver.resolve();
    setup_logging(&settings.log_level)?;

    tracing::info!(
        project = %settings.project_name,
        version = %settings.version,
        env = %settings.env,
        debug = settings.debug,
        production = settings.is_production(),
        env_file = ?resolver.env_file(),
        "configuration resolved"
    );

    let database = DatabaseOptions::from_settings(&settings);
    tracing::info!(
        url = %database.redacted_url(),
        echo = database.echo,
        pooled = database.pool.is_some(),
        "database options prepared"
    );

    let app = router(AppState::in_memory(settings.clone()));

    let addr: SocketAddr = "0.0.0.0:8000".parse()?;
    tracing::info!("HTTP endpoint: http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
