//! Typed view of an Icecast server's admin interface.
//!
//! This crate sits between `icefly-api` and its consumers (the CLI, or any
//! program embedding the library):
//!
//! - **[`Admin`]**: Facade over the admin endpoints. Every call issues one
//!   request, translates the response, and returns fresh domain values.
//!   Nothing is cached between calls.
//!
//! - **Domain model** ([`model`]): Stable types ([`ServerSnapshot`],
//!   [`SourceSnapshot`], [`Mount`], [`Listener`], ...) independent of the
//!   quirks of whichever server version produced the XML.
//!
//! - **Translation** ([`convert`]): Pure conversions from the wire model:
//!   unit scaling, sentinel decoding, timestamp parsing, and the fallback
//!   rules that reconcile old and new field sets.

pub mod admin;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use admin::Admin;
pub use config::{AdminConfig, TlsVerification};
pub use error::CoreError;

pub use model::{
    AudioInfo, LegacyAudioInfo, Listener, Mount, ServerInfo, ServerSnapshot, ServerStatistics,
    SourceMetadataInfo, SourceSnapshot, SourceStatistics, TrackInfo, TrackMetadataUpdate,
};
