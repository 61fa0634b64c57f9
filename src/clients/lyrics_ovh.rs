use log::{debug, warn};
use reqwest::{Client, StatusCode, Url, header::ACCEPT};
use serde::Deserialize;

use crate::clients::{
    LyricsSource,
    errors::{Error, Result},
    http::{optional_env, parse_base_url, try_default_client},
};

/// Overrides the lyrics.ovh base URL
pub const BASE_URL_ENV: &str = "LYRICSTATS_LYRICS_URL";
/// Public lyrics.ovh API
pub const DEFAULT_BASE_URL: &str = "https://api.lyrics.ovh/v1/";

#[derive(Deserialize, Debug)]
struct LyricsResponse {
    lyrics: String,
}

/// Client for the lyrics.ovh API
pub struct LyricsOvhClient {
    client: Client,
    base_url: Url,
}

impl LyricsOvhClient {
    /// `base_url` must end with a slash
    pub fn new(client: Client, base_url: Url) -> Self {
        LyricsOvhClient { client, base_url }
    }

    /// Base URL from `LYRICSTATS_LYRICS_URL`, HTTP client built from env unless given
    pub fn try_default(client: Option<Client>) -> Result<Self> {
        let raw = optional_env(BASE_URL_ENV)?.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(BASE_URL_ENV, &raw)?;
        let client = match client {
            Some(c) => c,
            None => try_default_client()?,
        };
        Ok(Self::new(client, base_url))
    }

    /// `{base}/{artist}/{title}` with both parts percent-encoded as path segments
    fn lyrics_url(&self, artist: &str, title: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::ConfigurationError(format!("{BASE_URL_ENV} cannot be used as a base URL"))
            })?
            .pop_if_empty()
            .extend([artist, title]);
        Ok(url)
    }
}

impl LyricsSource for LyricsOvhClient {
    async fn fetch_lyrics(&self, artist: &str, title: &str) -> Result<Option<String>> {
        let url = self.lyrics_url(artist, title)?;
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                let parsed: LyricsResponse = serde_json::from_str(&body)?;
                Ok(Some(parsed.lyrics))
            }
            StatusCode::NOT_FOUND => {
                debug!("No lyrics for {artist} - {title}");
                Ok(None)
            }
            status => {
                warn!("Skipping {artist} - {title}: lyrics service returned {status}");
                Ok(None)
            }
        }
    }
}
