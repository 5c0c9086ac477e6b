// ── Domain model ──
//
// Canonical types handed to consumers. Built fresh from every response;
// never mutated afterwards.

pub mod metadata;
pub mod mount;
pub mod server;
pub mod source;

pub use metadata::TrackMetadataUpdate;
pub use mount::{Listener, Mount};
pub use server::{ServerInfo, ServerSnapshot, ServerStatistics};
pub use source::{
    AudioInfo, LegacyAudioInfo, SourceMetadataInfo, SourceSnapshot, SourceStatistics, TrackInfo,
};
