//! Planning Poker session-state server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin fuda-server
//! cargo run --bin fuda-server -- --host 127.0.0.1 --port 8080
//! PORT=8080 cargo run --bin fuda-server
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use fuda_server::{
    domain::UuidGenerator,
    infrastructure::repository::InMemoryRoomRepository,
    ui::{AppState, Server},
};
use fuda_shared::logger::setup_logger;
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "fuda-server")]
#[command(about = "Planning Poker session-state server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "3222")]
    port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Initialize dependencies in order:
    // 1. Repository
    // 2. IdGenerator
    // 3. UseCases (AppState)
    // 4. Server

    // 1. Create Repository (in-memory database, lives until the process exits)
    let rooms = Arc::new(Mutex::new(HashMap::new()));
    let repository = Arc::new(InMemoryRoomRepository::new(rooms));

    // 2. Create IdGenerator
    let id_generator = Arc::new(UuidGenerator);

    // 3. Create UseCases
    let app_state = AppState::new(repository, id_generator);

    // 4. Create and run the server
    let server = Server::new(app_state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
