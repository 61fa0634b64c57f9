use std::io::Write;
use std::time::Instant;

use clap::Parser;
use log::info;
use lyricstats::clients::{
    entities::{DEFAULT_TRACK_LIMIT, MAX_TRACK_LIMIT, TrackLimit},
    errors::Result,
};
use lyricstats::report::{write_banner, write_comparison, write_summary};

use crate::analyzer;

const BANNER: &str = "Lyric word statistics";

#[derive(Parser, Debug)]
#[command(name = "lyricstats")]
#[command(
    version,
    about = "Produce the average, min and max number of words in an artist's songs, \
             along with the variance and standard deviation. \
             If a second artist is given the values are compared.",
    long_about = None
)]
struct Cli {
    /// The name of the artist you wish to examine
    artist: String,

    /// The name of the artist you wish to compare with
    #[arg(short, long, value_name = "ARTIST")]
    compare: Option<String>,

    /// The number of tracks you want to analyse (max: 100)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TRACK_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    limit: u32,

    /// Analyse all available tracks (overrides --limit)
    #[arg(short, long)]
    all: bool,
}

impl Cli {
    fn track_limit(&self) -> TrackLimit {
        TrackLimit::new(self.limit, self.all)
    }

    /// Tells the user their limit was lowered; `--all` ignores the limit altogether
    fn clamp_notice(&self) -> Option<String> {
        (!self.all && self.limit > MAX_TRACK_LIMIT).then(|| {
            format!(
                "The limit {} exceeds the maximum of {MAX_TRACK_LIMIT}, analysing {MAX_TRACK_LIMIT} tracks instead",
                self.limit
            )
        })
    }
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let started = Instant::now();
    let limit = cli.track_limit();
    if let Some(notice) = cli.clamp_notice() {
        eprintln!("{notice}");
    }

    let mut out = std::io::stdout();
    write_banner(&mut out, BANNER)?;
    match limit {
        TrackLimit::All => writeln!(out, "Collecting all tracks, this can take a while...")?,
        TrackLimit::Count(_) => writeln!(out, "Collecting {limit} tracks, please wait...")?,
    }
    out.flush()?;

    info!("Building config ...");
    let config = analyzer::ConfigBuilder::new().limit(limit).build()?;
    let analyzer = analyzer::Analyzer::new(config);

    match &cli.compare {
        Some(other) => {
            let comparison = analyzer.compare(&cli.artist, other).await?;
            write_comparison(&mut out, &comparison)?;
        }
        None => {
            let summary = analyzer.summarize(&cli.artist).await?;
            write_summary(&mut out, &summary)?;
        }
    }

    writeln!(
        out,
        "--- Finished in {:.2} seconds ---",
        started.elapsed().as_secs_f64()
    )?;
    Ok(())
}
