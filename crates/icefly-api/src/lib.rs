// icefly-api: Async Rust client for the Icecast admin interface

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::AdminClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig, USER_AGENT};
