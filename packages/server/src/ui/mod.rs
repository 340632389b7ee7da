//! HTTP layer: routing, handlers, error responses and server bootstrap.

pub mod error;
mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
pub use state::AppState;
