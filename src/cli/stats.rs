use crate::error::Result;
use crate::stats::{
    index_of_coincidence, letter_frequencies, normalized_len, LetterFrequency, ENGLISH_IOC,
    UNIFORM_IOC,
};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct StatsOptions {
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub letters: usize,
    pub ioc: f64,
    pub frequencies: Vec<LetterFrequency>,
}

/// Frequency and coincidence statistics for a text file.
pub fn run_stats(path: &Path, options: &StatsOptions) -> Result<String> {
    let text = std::fs::read_to_string(path)?;
    let report = build_stats_report(&text);
    if options.json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(render_stats(path, &report))
}

pub fn build_stats_report(text: &str) -> StatsReport {
    let frequencies = letter_frequencies(text);
    let letters = normalized_len(text);
    StatsReport {
        letters,
        ioc: index_of_coincidence(text),
        frequencies,
    }
}

fn render_stats(path: &Path, report: &StatsReport) -> String {
    let mut output = String::new();
    output.push_str("Cipherlens Frequency Analysis\n");
    output.push_str("=============================\n\n");
    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Letters analyzed: {}\n", report.letters));
    output.push_str(&format!(
        "Index of Coincidence: {:.4} (English ≈ {:.3}, uniform ≈ {:.3})\n\n",
        report.ioc, ENGLISH_IOC, UNIFORM_IOC
    ));

    output.push_str("Letter  Frequency\n");
    output.push_str("------  ---------\n");
    for entry in &report.frequencies {
        let bar = "#".repeat((entry.frequency * 200.0).round() as usize);
        output.push_str(&format!(
            "{}       {:>7.4}  {}\n",
            entry.letter, entry.frequency, bar
        ));
    }
    output
}
