//! Interactive room administration client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin lakeside-client -- --base-url http://localhost:9192
//! ```

use clap::Parser;
use lakeside_client::config::Args;
use lakeside_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the client
    if let Err(e) = lakeside_client::run_client(args).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
