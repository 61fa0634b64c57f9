use log::debug;
use reqwest::{Client, StatusCode, Url, header::ACCEPT};
use serde::Deserialize;

use crate::clients::{
    TrackCatalog,
    entities::{ArtistRef, TrackLimit, TrackListing},
    errors::{Error, Result},
    http::{optional_env, parse_base_url, try_default_client},
};

/// Overrides the MusicBrainz web service base URL
pub const BASE_URL_ENV: &str = "LYRICSTATS_MUSICBRAINZ_URL";
/// Public MusicBrainz web service, version 2
pub const DEFAULT_BASE_URL: &str = "https://musicbrainz.org/ws/2/";

// The search endpoints return at most 100 records per request
const PAGE_SIZE: u32 = 100;

#[derive(Deserialize, Debug)]
struct ArtistSearchResponse {
    #[serde(default)]
    artists: Vec<MusicBrainzArtist>,
}

#[derive(Deserialize, Debug)]
struct MusicBrainzArtist {
    id: String,
    name: String,
}

#[derive(Deserialize, Debug)]
struct RecordingPage {
    #[serde(default)]
    count: u32,
    #[serde(default)]
    recordings: Vec<MusicBrainzRecording>,
}

#[derive(Deserialize, Debug)]
struct MusicBrainzRecording {
    title: String,
}

impl From<MusicBrainzArtist> for ArtistRef {
    fn from(a: MusicBrainzArtist) -> ArtistRef {
        ArtistRef {
            id: a.id,
            name: a.name,
        }
    }
}

/// Quote `value` as a Lucene phrase
fn lucene_phrase(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

fn parse_artist_search(body: &str) -> Result<Option<ArtistRef>> {
    let response: ArtistSearchResponse = serde_json::from_str(body)?;
    Ok(response.artists.into_iter().next().map(ArtistRef::from))
}

/// Walk the result set page by page until `count` records were seen or a
/// page comes back empty
async fn collect_all_pages<F>(mut fetch_page: F) -> Result<TrackListing>
where
    F: AsyncFnMut(u32) -> Result<RecordingPage>,
{
    let mut titles = Vec::new();
    let mut offset = 0u32;
    let mut available = 0u32;
    loop {
        let page = fetch_page(offset).await?;
        if offset == 0 {
            available = page.count;
        }
        let received = u32::try_from(page.recordings.len()).unwrap_or(u32::MAX);
        titles.extend(page.recordings.into_iter().map(|r| r.title));
        offset = offset.saturating_add(received);
        if received == 0 || offset >= page.count {
            break;
        }
    }
    Ok(TrackListing { available, titles })
}

/// Client for the MusicBrainz search API
pub struct MusicBrainzClient {
    client: Client,
    base_url: Url,
}

impl MusicBrainzClient {
    /// `base_url` must end with a slash
    pub fn new(client: Client, base_url: Url) -> Self {
        MusicBrainzClient { client, base_url }
    }

    /// Create a client from environment variables, falling back to the public MusicBrainz instance
    pub fn try_default(client: Option<Client>) -> Result<Self> {
        let raw = optional_env(BASE_URL_ENV)?.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(BASE_URL_ENV, &raw)?;
        let client = match client {
            Some(c) => c,
            None => try_default_client()?,
        };
        Ok(Self::new(client, base_url))
    }

    async fn search(&self, entity: &str, query: &str, limit: u32, offset: u32) -> Result<String> {
        let mut url = self.base_url.join(entity).map_err(|e| {
            Error::ConfigurationError(format!("Invalid MusicBrainz endpoint {entity}: {e}"))
        })?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string())
            .append_pair("fmt", "json");
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::UnexpectedResponse {
                service: "MusicBrainz",
                message: format!("{entity} search for {query:?} returned {status}"),
            });
        }
        Ok(response.text().await?)
    }

    async fn fetch_recordings(&self, artist: &ArtistRef, limit: u32, offset: u32) -> Result<RecordingPage> {
        let query = format!("arid:{}", artist.id);
        let body = self.search("recording", &query, limit, offset).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl TrackCatalog for MusicBrainzClient {
    async fn resolve_artist(&self, name: &str) -> Result<ArtistRef> {
        let query = format!("artist:{}", lucene_phrase(name));
        let body = self.search("artist", &query, 1, 0).await?;
        let artist = parse_artist_search(&body)?.ok_or_else(|| Error::ArtistNotFound(name.to_string()))?;
        debug!("Resolved {name:?} to {} ({})", artist.name, artist.id);
        Ok(artist)
    }

    async fn list_track_titles(&self, artist: &ArtistRef, limit: TrackLimit) -> Result<TrackListing> {
        let listing = match limit {
            TrackLimit::Count(n) => {
                let page = self.fetch_recordings(artist, n.min(PAGE_SIZE), 0).await?;
                TrackListing {
                    available: page.count,
                    titles: page.recordings.into_iter().map(|r| r.title).collect(),
                }
            }
            TrackLimit::All => {
                collect_all_pages(async |offset| {
                    self.fetch_recordings(artist, PAGE_SIZE, offset).await
                })
                .await?
            }
        };
        debug!(
            "Listed {} of {} recordings for {}",
            listing.titles.len(),
            listing.available,
            artist.name
        );
        Ok(listing)
    }
}
