use onboard_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    let _ = dotenv::dotenv();

    // 2. Configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // 3. Logging (console, plus daily-rolling file when LOG_DIR is set)
    init_logger_with_file(None, config.log_dir.as_deref());

    print_banner();
    tracing::info!(
        environment = %config.environment,
        "Zboost onboarding server starting..."
    );

    // 4. Services + HTTP server
    let state = ServerState::initialize(&config)?;
    let server = Server::with_state(config, state);
    server.run().await
}
