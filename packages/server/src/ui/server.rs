//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    http::{Method, StatusCode},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{
    error::ApiError,
    handler::{
        create_room, delete_room, get_room, get_vote_options, health_check, join_room,
        reset_votes, reveal_votes, submit_vote,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Unmatched routes answer with the same `{message}` body as other errors
async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not Found")
}

/// Planning Poker HTTP server
///
/// This struct owns the application state and provides methods to build the
/// router and run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(AppState::new(repository, id_generator));
/// server.run("0.0.0.0".to_string(), 3222).await?;
/// ```
pub struct Server {
    /// Use cases shared by every handler
    state: Arc<AppState>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Build the router with every route and middleware attached
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any);

        Router::new()
            // ヘルスチェック
            .route("/health", get(health_check))
            .route("/health/startup", get(health_check))
            .route("/health/liveness", get(health_check))
            .route("/health/readiness", get(health_check))
            // Room API
            .route("/rooms", post(create_room))
            .route("/rooms/{room_id}", get(get_room).delete(delete_room))
            .route("/rooms/{room_id}/join", post(join_room))
            .route("/rooms/{room_id}/vote", post(submit_vote))
            .route("/rooms/{room_id}/vote-options", get(get_vote_options))
            .route("/rooms/{room_id}/reveal", post(reveal_votes))
            .route("/rooms/{room_id}/reset", post(reset_votes))
            .fallback(not_found)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Run the server until a shutdown signal arrives
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 3222)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "Planning Poker server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
