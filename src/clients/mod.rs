/// Data entities for artists, tracks and track limits
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Shared HTTP client setup
pub mod http;
/// lyrics.ovh API client
pub mod lyrics_ovh;
/// MusicBrainz API client
pub mod musicbrainz;

#[cfg(test)]
mod test_server;

pub use lyrics_ovh::LyricsOvhClient;
pub use musicbrainz::MusicBrainzClient;

use entities::{ArtistRef, TrackLimit, TrackListing};
use errors::Result;

/// A catalog that knows artists and the titles of their recordings.
#[allow(async_fn_in_trait)]
pub trait TrackCatalog {
    /// Look up the best match for `name`.
    async fn resolve_artist(&self, name: &str) -> Result<ArtistRef>;

    /// List recording titles of `artist`, at most as many as `limit` allows.
    async fn list_track_titles(&self, artist: &ArtistRef, limit: TrackLimit)
    -> Result<TrackListing>;
}

/// A service serving the lyrics of a single track.
#[allow(async_fn_in_trait)]
pub trait LyricsSource {
    /// Returns `Ok(None)` when the service has no lyrics for the track.
    async fn fetch_lyrics(&self, artist: &str, title: &str) -> Result<Option<String>>;
}
