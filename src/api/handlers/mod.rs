//! HTTP request handlers.

pub mod echo;
pub mod health;
pub mod ws;

pub use echo::{echo_handler, fail_handler};
pub use health::health_handler;
pub use ws::ws_handler;
