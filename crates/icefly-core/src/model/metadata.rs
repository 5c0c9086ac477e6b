// ── Outbound track metadata ──

use serde::{Deserialize, Serialize};

/// Track metadata pushed to a mount with `/admin/metadata`.
///
/// Empty fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadataUpdate {
    pub song: Option<String>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub url: Option<String>,
    pub artwork: Option<String>,
    pub charset: Option<String>,
    pub intro: Option<String>,
}

impl TrackMetadataUpdate {
    /// Metadata carrying a single combined `song` string.
    pub fn song(song: impl Into<String>) -> Self {
        Self {
            song: Some(song.into()),
            ..Default::default()
        }
    }

    /// Metadata carrying separate artist and title.
    pub fn track(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    /// `true` if no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Non-empty fields in the order the server expects them.
    fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("song", &self.song),
            ("title", &self.title),
            ("artist", &self.artist),
            ("url", &self.url),
            ("artwork", &self.artwork),
            ("charset", &self.charset),
            ("intro", &self.intro),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
    }

    /// Encode as an escaped query fragment: `song=...&title=...`.
    ///
    /// Field order is fixed (song, title, artist, url, artwork, charset,
    /// intro). With nothing set the result is `song=Unknown`, which the
    /// server requires to accept the update at all.
    pub fn to_query(&self) -> String {
        let encoded: Vec<String> = self
            .fields()
            .map(|(key, value)| {
                let escaped: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
                format!("{key}={escaped}")
            })
            .collect();

        if encoded.is_empty() {
            return "song=Unknown".into();
        }
        encoded.join("&")
    }
}
