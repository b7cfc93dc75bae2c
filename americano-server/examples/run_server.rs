//! Example to run the Americano server standalone
//!
//! Run with: cargo run -p americano-server --example run_server

use americano_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig { port: 8002 };

    println!("Starting Americano server on port {}", config.port);
    println!("Try: curl http://localhost:{}/api/status", config.port);

    run_server(config).await
}
