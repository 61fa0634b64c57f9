use std::fmt;

use crate::stats::count_words;

/// Number of tracks analysed when no limit is given on the command line.
pub const DEFAULT_TRACK_LIMIT: u32 = 25;
/// Upper bound for a numeric track limit.
pub const MAX_TRACK_LIMIT: u32 = 100;

/// An artist as resolved in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRef {
    /// Catalog identifier (a MusicBrainz MBID)
    pub id: String,
    /// Canonical display name
    pub name: String,
}

/// Recording titles returned by the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackListing {
    /// Number of recordings the catalog knows for the artist
    pub available: u32,
    /// Titles in catalog order, possibly with duplicates
    pub titles: Vec<String>,
}

/// An artist together with the tracks that had lyrics
#[derive(Debug, Clone)]
pub struct Artist {
    /// Canonical display name
    pub name: String,
    /// Tracks in the order they were listed
    pub tracks: Vec<Track>,
}

/// One song and its lyrics
#[derive(Debug, Clone)]
pub struct Track {
    /// Song title
    pub title: String,
    /// Raw lyrics text
    pub lyrics: String,
    /// Whitespace separated words in `lyrics`
    pub word_count: usize,
}

impl Track {
    /// Builds a track and counts the words of its lyrics.
    pub fn new(title: impl Into<String>, lyrics: impl Into<String>) -> Self {
        let lyrics = lyrics.into();
        let word_count = count_words(&lyrics);
        Track {
            title: title.into(),
            lyrics,
            word_count,
        }
    }
}

/// How many tracks to analyse per artist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackLimit {
    /// At most this many tracks
    Count(u32),
    /// Every track the catalog has
    All,
}

impl TrackLimit {
    /// `all` overrides `limit`; a numeric limit is clamped to [`MAX_TRACK_LIMIT`].
    pub fn new(limit: u32, all: bool) -> Self {
        if all {
            TrackLimit::All
        } else {
            TrackLimit::Count(limit.clamp(1, MAX_TRACK_LIMIT))
        }
    }
}

impl Default for TrackLimit {
    fn default() -> Self {
        TrackLimit::Count(DEFAULT_TRACK_LIMIT)
    }
}

impl fmt::Display for TrackLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackLimit::Count(n) => write!(f, "{n}"),
            TrackLimit::All => f.write_str("all"),
        }
    }
}
