use till_gateway::{Config, Server, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let log_level = std::env::var("RUST_LOG").ok();
    let log_dir = std::env::var("POS_LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    // Print the banner
    print_banner();

    tracing::info!("Tillgate POS gateway starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Start the HTTP server (state is built inside run)
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
