use crate::error::Result;
use crate::ngram::top_ngrams;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct NgramOptions {
    pub n: usize,
    pub limit: usize,
    pub json: bool,
}

impl Default for NgramOptions {
    fn default() -> Self {
        Self {
            n: 3,
            limit: 10,
            json: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NgramCount {
    pub ngram: String,
    pub count: usize,
}

/// Most frequent n-grams of a text file.
pub fn run_ngrams(path: &Path, options: &NgramOptions) -> Result<String> {
    let text = std::fs::read_to_string(path)?;
    let counts: Vec<NgramCount> = top_ngrams(&text, options.n, options.limit)
        .into_iter()
        .map(|(ngram, count)| NgramCount { ngram, count })
        .collect();

    if options.json {
        return Ok(serde_json::to_string_pretty(&counts)?);
    }

    let mut output = String::new();
    output.push_str(&format!("Cipherlens {}-gram Analysis\n", options.n));
    output.push_str("===========================\n\n");
    output.push_str(&format!("File: {}\n\n", path.display()));
    if counts.is_empty() {
        output.push_str("Text shorter than the window size; nothing to count.\n");
    }
    for entry in &counts {
        output.push_str(&format!("{}  {}\n", entry.ngram, entry.count));
    }
    Ok(output)
}
