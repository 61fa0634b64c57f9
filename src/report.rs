use std::io::Write;

use crate::stats::{ArtistSummary, Comparison};

const NOT_AVAILABLE: &str = "n/a";

fn decimal(value: f64) -> String {
    format!("{value:.2}")
}

fn optional_decimal(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), decimal)
}

/// Title framed by dashed lines of the same width
pub fn write_banner(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    let line = "-".repeat(title.chars().count());
    writeln!(out, "{line}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{line}")
}

/// One line per statistic, decimals rounded to two places
pub fn write_summary(out: &mut impl Write, summary: &ArtistSummary) -> std::io::Result<()> {
    writeln!(out, "Artist name: {}", summary.name)?;
    writeln!(out, "Tracks analysed: {}", summary.track_count)?;
    writeln!(out, "Total words: {}", summary.total_words)?;
    writeln!(out, "Average words per song: {}", decimal(summary.average))?;
    writeln!(out, "Max words in single song: {}", summary.max)?;
    writeln!(out, "Min words in single song: {}", summary.min)?;
    writeln!(out, "Variance: {}", optional_decimal(summary.variance))?;
    writeln!(
        out,
        "Standard deviation: {}",
        optional_decimal(summary.standard_deviation)
    )
}

/// Side-by-side table with one column per artist and a difference column
pub fn write_comparison(out: &mut impl Write, comparison: &Comparison) -> std::io::Result<()> {
    let (a, b) = (&comparison.first, &comparison.second);
    let rows: [[String; 4]; 8] = [
        [
            "Statistic".into(),
            a.name.clone(),
            b.name.clone(),
            "Difference".into(),
        ],
        [
            "Tracks analysed".into(),
            a.track_count.to_string(),
            b.track_count.to_string(),
            comparison.track_count_difference().to_string(),
        ],
        [
            "Total words".into(),
            a.total_words.to_string(),
            b.total_words.to_string(),
            comparison.total_difference().to_string(),
        ],
        [
            "Average words per song".into(),
            decimal(a.average),
            decimal(b.average),
            decimal(comparison.average_difference()),
        ],
        [
            "Max words in single song".into(),
            a.max.to_string(),
            b.max.to_string(),
            comparison.max_difference().to_string(),
        ],
        [
            "Min words in single song".into(),
            a.min.to_string(),
            b.min.to_string(),
            comparison.min_difference().to_string(),
        ],
        [
            "Variance".into(),
            optional_decimal(a.variance),
            optional_decimal(b.variance),
            optional_decimal(comparison.variance_difference()),
        ],
        [
            "Standard deviation".into(),
            optional_decimal(a.standard_deviation),
            optional_decimal(b.standard_deviation),
            optional_decimal(comparison.standard_deviation_difference()),
        ],
    ];

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "Comparing artists: {} and {}", a.name, b.name)?;
    writeln!(out)?;
    for row in &rows {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
