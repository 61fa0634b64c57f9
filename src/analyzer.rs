use std::collections::HashSet;

use futures::stream::{self, StreamExt, TryStreamExt};
use log::{debug, info};
use lyricstats::clients::{
    LyricsOvhClient, LyricsSource, MusicBrainzClient, TrackCatalog,
    entities::{Artist, Track, TrackLimit},
    errors::{Error, Result},
    http::try_default_client,
};
use lyricstats::stats::{ArtistSummary, Comparison};

// Configuration for the Analyzer struct
pub struct Config<C = MusicBrainzClient, L = LyricsOvhClient> {
    pub catalog: C,
    pub lyrics: L,
    pub limit: TrackLimit,
}

pub struct ConfigBuilder {
    limit: Option<TrackLimit>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            limit: None, // 25 tracks unless told otherwise
        }
    }

    pub fn limit(mut self, limit: TrackLimit) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<Config> {
        // Both API clients share one connection pool
        let http = try_default_client()?;
        let catalog = MusicBrainzClient::try_default(Some(http.clone()))?;
        let lyrics = LyricsOvhClient::try_default(Some(http))?;
        Ok(Config {
            catalog,
            lyrics,
            limit: self.limit.unwrap_or_default(),
        })
    }
}

/// Shown before an unlimited analysis, which can take a long time
fn found_tracks_notice(limit: TrackLimit, available: u32) -> Option<String> {
    match limit {
        TrackLimit::All => Some(format!(
            "Found {available} tracks\nAnalysing, please wait this can take a while..."
        )),
        TrackLimit::Count(_) => None,
    }
}

/// Keep the first occurrence of every title
fn dedup_titles(titles: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    titles
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

// Fetches lyrics for an artist's tracks and turns them into statistics
pub struct Analyzer<C = MusicBrainzClient, L = LyricsOvhClient> {
    config: Config<C, L>,
}

impl<C: TrackCatalog, L: LyricsSource> Analyzer<C, L> {
    pub fn new(config: Config<C, L>) -> Self {
        Analyzer { config }
    }

    pub async fn analyze(&self, name: &str) -> Result<Artist> {
        info!("Resolving artist {name:?} ...");
        let artist = self.config.catalog.resolve_artist(name).await?;

        let listing = self
            .config
            .catalog
            .list_track_titles(&artist, self.config.limit)
            .await?;
        if let Some(notice) = found_tracks_notice(self.config.limit, listing.available) {
            println!("{notice}");
        }
        let titles = dedup_titles(listing.titles);
        if titles.is_empty() {
            return Err(Error::NoTracks(artist.name));
        }
        info!("Fetching lyrics for {} tracks by {} ...", titles.len(), artist.name);

        let lyrics = &self.config.lyrics;
        let artist_name = artist.name.as_str();

        // One request at a time, in title order; the first error stops the loop
        let fetched: Vec<Option<Track>> = stream::iter(titles)
            .then(|title| async move {
                let lyrics = lyrics.fetch_lyrics(artist_name, &title).await?;
                Ok::<_, Error>(lyrics.map(|l| Track::new(title, l)))
            })
            .try_collect()
            .await?;

        let tracks: Vec<Track> = fetched.into_iter().flatten().collect();
        debug!("Found lyrics for {} tracks by {}", tracks.len(), artist.name);

        if tracks.is_empty() {
            return Err(Error::NoLyrics(artist.name));
        }
        Ok(Artist {
            name: artist.name,
            tracks,
        })
    }

    pub async fn summarize(&self, name: &str) -> Result<ArtistSummary> {
        let artist = self.analyze(name).await?;
        ArtistSummary::from_artist(&artist).ok_or(Error::NoLyrics(artist.name))
    }

    pub async fn compare(&self, first: &str, second: &str) -> Result<Comparison> {
        let first = self.summarize(first).await?;
        let second = self.summarize(second).await?;
        Ok(Comparison::new(first, second))
    }
}
