//! Lyricstats - word-count statistics for an artist's song lyrics
//!
//! This library resolves an artist on MusicBrainz, fetches lyrics for their
//! recordings from lyrics.ovh and summarizes how many words their songs have.

/// Client modules for interacting with the catalog and lyrics services
pub mod clients;
/// Console output for summaries and comparisons
pub mod report;
/// Word counting and per-artist statistics
pub mod stats;
