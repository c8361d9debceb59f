use tracker_server::{AppState, Config, Server, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    init_logger();

    tracing::info!("Employee Performance Tracker starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize state (work dir, database, token service, seed admin)
    let state = AppState::initialize(&config).await?;

    // 4. Run the HTTP server
    let server = Server::with_state(config, state);
    server.run().await?;

    Ok(())
}
