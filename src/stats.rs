//! Single-text frequency statistics: letter-frequency tables and the
//! index of coincidence.

use crate::alphabet::LATIN;
use serde::Serialize;

/// IoC of English-like plaintext.
pub const ENGLISH_IOC: f64 = 0.067;

/// IoC of uniformly random letters over the Latin alphabet.
pub const UNIFORM_IOC: f64 = 1.0 / 26.0;

/// Relative frequency of one alphabet letter in a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterFrequency {
    pub letter: char,
    pub frequency: f64,
}

/// Upper-case `text` and map its Latin letters to alphabet positions,
/// dropping everything else.
pub(crate) fn latin_positions(text: &str) -> Vec<usize> {
    text.chars()
        .filter_map(|c| LATIN.position(c.to_ascii_uppercase()))
        .collect()
}

/// Number of Latin letters in `text` after normalization. This is the
/// letter count every report and guard measures against.
pub fn normalized_len(text: &str) -> usize {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .count()
}

/// Relative frequency of every Latin letter in `text`.
///
/// The table always carries all 26 letters: all-zero when the text has
/// no Latin letters, summing to 1.0 otherwise.
pub fn letter_frequencies(text: &str) -> Vec<LetterFrequency> {
    let positions = latin_positions(text);
    let mut counts = [0usize; 26];
    for &p in &positions {
        counts[p] += 1;
    }

    let total = positions.len();
    LATIN
        .letters()
        .iter()
        .zip(counts.iter())
        .map(|(&letter, &count)| LetterFrequency {
            letter,
            frequency: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect()
}

/// IoC over pre-normalized alphabet positions. Shared with the Kasiski
/// column sweep so columns are not re-normalized per key length.
pub(crate) fn ioc_of_positions(positions: &[usize]) -> f64 {
    let n = positions.len();
    if n < 2 {
        return 0.0;
    }
    let mut counts = [0usize; 26];
    for &p in positions {
        counts[p] += 1;
    }
    let numerator: usize = counts.iter().map(|&c| c * c.saturating_sub(1)).sum();
    numerator as f64 / (n * (n - 1)) as f64
}

/// Index of coincidence: Σ nᵢ(nᵢ−1) / (N(N−1)) over Latin letter counts.
///
/// Returns 0 when fewer than two Latin letters remain after
/// normalization. English-like text clusters near [`ENGLISH_IOC`],
/// uniformly substituted text near [`UNIFORM_IOC`].
pub fn index_of_coincidence(text: &str) -> f64 {
    ioc_of_positions(&latin_positions(text))
}
