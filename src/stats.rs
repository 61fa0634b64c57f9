use crate::clients::entities::Artist;

/// Number of whitespace separated words in `text`
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Word-count statistics for one artist
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistSummary {
    /// Artist display name
    pub name: String,
    /// Tracks that had lyrics
    pub track_count: usize,
    /// Words across all tracks
    pub total_words: usize,
    /// `total_words / track_count`
    pub average: f64,
    /// Fewest words in a single track
    pub min: usize,
    /// Most words in a single track
    pub max: usize,
    /// Sample variance, `None` with fewer than two tracks
    pub variance: Option<f64>,
    /// Square root of `variance`
    pub standard_deviation: Option<f64>,
}

impl ArtistSummary {
    /// Returns `None` for an artist without tracks.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_artist(artist: &Artist) -> Option<Self> {
        let counts: Vec<usize> = artist.tracks.iter().map(|t| t.word_count).collect();
        let min = *counts.iter().min()?;
        let max = *counts.iter().max()?;
        let track_count = counts.len();
        let total_words: usize = counts.iter().sum();
        let average = total_words as f64 / track_count as f64;

        let variance = (track_count > 1).then(|| {
            let squares: f64 = counts
                .iter()
                .map(|&c| (c as f64 - average).powi(2))
                .sum();
            squares / (track_count - 1) as f64
        });

        Some(ArtistSummary {
            name: artist.name.clone(),
            track_count,
            total_words,
            average,
            min,
            max,
            variance,
            standard_deviation: variance.map(f64::sqrt),
        })
    }
}

/// Two artists side by side
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// The artist named first on the command line
    pub first: ArtistSummary,
    /// The artist given with `--compare`
    pub second: ArtistSummary,
}

/// All differences are absolute values.
impl Comparison {
    /// Pairs two summaries
    pub fn new(first: ArtistSummary, second: ArtistSummary) -> Self {
        Comparison { first, second }
    }

    /// Difference of the averages
    pub fn average_difference(&self) -> f64 {
        (self.first.average - self.second.average).abs()
    }

    /// Difference of the total word counts
    pub fn total_difference(&self) -> usize {
        self.first.total_words.abs_diff(self.second.total_words)
    }

    /// Difference in analysed tracks
    pub fn track_count_difference(&self) -> usize {
        self.first.track_count.abs_diff(self.second.track_count)
    }

    /// Difference of the longest songs
    pub fn max_difference(&self) -> usize {
        self.first.max.abs_diff(self.second.max)
    }

    /// Difference of the shortest songs
    pub fn min_difference(&self) -> usize {
        self.first.min.abs_diff(self.second.min)
    }

    /// `None` unless both artists have a variance
    pub fn variance_difference(&self) -> Option<f64> {
        Some((self.first.variance? - self.second.variance?).abs())
    }

    /// `None` unless both artists have a standard deviation
    pub fn standard_deviation_difference(&self) -> Option<f64> {
        Some((self.first.standard_deviation? - self.second.standard_deviation?).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::entities::Track;

    fn artist_with_counts(name: &str, counts: &[usize]) -> Artist {
        Artist {
            name: name.to_string(),
            tracks: counts
                .iter()
                .enumerate()
                .map(|(i, &n)| Track::new(format!("Song {i}"), vec!["la"; n].join(" ")))
                .collect(),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn words_are_split_on_any_whitespace() {
        assert_eq!(count_words("one two\nthree\tfour  five"), 5);
        assert_eq!(count_words("  leading and trailing  \n"), 3);
        assert_eq!(count_words("don't stop-me now!"), 3);
    }

    #[test]
    fn empty_lyrics_have_no_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words(" \n\r\n "), 0);
    }

    #[test]
    fn average_is_total_over_track_count() {
        let summary = ArtistSummary::from_artist(&artist_with_counts("A", &[10, 20, 33])).unwrap();
        assert_eq!(summary.track_count, 3);
        assert_eq!(summary.total_words, 63);
        assert!(approx(summary.average, 63.0 / 3.0));
        assert_eq!(summary.min, 10);
        assert_eq!(summary.max, 33);
    }

    #[test]
    fn variance_uses_sample_denominator() {
        let summary =
            ArtistSummary::from_artist(&artist_with_counts("A", &[2, 4, 4, 4, 5, 5, 7, 9]))
                .unwrap();
        assert!(approx(summary.average, 5.0));
        assert!(approx(summary.variance.unwrap(), 32.0 / 7.0));
        assert!(approx(summary.standard_deviation.unwrap(), (32.0f64 / 7.0).sqrt()));
    }

    #[test]
    fn single_track_has_no_variance() {
        let summary = ArtistSummary::from_artist(&artist_with_counts("A", &[42])).unwrap();
        assert!(approx(summary.average, 42.0));
        assert_eq!(summary.variance, None);
        assert_eq!(summary.standard_deviation, None);
    }

    #[test]
    fn artist_without_tracks_has_no_summary() {
        assert!(ArtistSummary::from_artist(&artist_with_counts("A", &[])).is_none());
    }

    #[test]
    fn comparison_differences_are_absolute() {
        let first = ArtistSummary::from_artist(&artist_with_counts("A", &[10, 20])).unwrap();
        let second = ArtistSummary::from_artist(&artist_with_counts("B", &[30, 40, 50])).unwrap();
        let comparison = Comparison::new(first, second);
        assert!(approx(comparison.average_difference(), 25.0));
        assert_eq!(comparison.total_difference(), 90);
        assert_eq!(comparison.track_count_difference(), 1);
        assert_eq!(comparison.max_difference(), 30);
        assert_eq!(comparison.min_difference(), 20);
        assert!(approx(comparison.variance_difference().unwrap(), 50.0));
    }

    #[test]
    fn variance_difference_needs_both_variances() {
        let first = ArtistSummary::from_artist(&artist_with_counts("A", &[10])).unwrap();
        let second = ArtistSummary::from_artist(&artist_with_counts("B", &[30, 40])).unwrap();
        let comparison = Comparison::new(first, second);
        assert_eq!(comparison.variance_difference(), None);
        assert_eq!(comparison.standard_deviation_difference(), None);
    }
}
