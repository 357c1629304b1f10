/**
 * Restaurant Review Server Entry Point
 *
 * Parses the command line, initializes tracing, builds the runtime and
 * serves the Axum application until the process is stopped.
 */

use clap::Parser;
use restaurant_reviews::backend::server::{create_app, ServerArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let config = ServerArgs::parse().into_config()?;

    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_filter().to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::debug!("Tracing initialized with filter {}", env_filter);

    let runtime = if config.threaded {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
    } else {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
    };

    runtime.block_on(async move {
        let app = create_app(&config).await?;

        tracing::info!("Starting server on {}", config.addr);
        let listener = tokio::net::TcpListener::bind(config.addr).await?;
        tracing::info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app).await?;

        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
