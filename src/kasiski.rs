//! Kasiski examination: key-length estimation for polyalphabetic
//! ciphers from two independent signals.
//!
//! 1. Repeated-substring distances: a repeated fragment in the
//!    ciphertext usually means the same plaintext was enciphered under
//!    the same key offset, so the distance between occurrences is a
//!    multiple of the key length. Tallying the divisors of every
//!    distance builds a histogram whose peaks are key-length
//!    candidates.
//! 2. Column IoC: splitting the text into k columns by position mod k
//!    turns a correct k into simple substitutions per column, restoring
//!    natural-language coincidence rates.

use crate::stats::{ioc_of_positions, latin_positions};
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Minimum normalized text length for meaningful repeat statistics;
/// callers driving a full examination skip the sequence search below
/// this.
pub const MIN_TEXT_LEN: usize = 20;
/// Default repeated-substring length bounds.
pub const MIN_SEQ_LEN: usize = 3;
pub const MAX_SEQ_LEN: usize = 6;
/// Largest key length considered by the factor tally and IoC sweep.
pub const MAX_KEY_LEN: usize = 20;

/// A repeated substring with every position it occurs at and the
/// distance of each later occurrence from the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceMatch {
    pub sequence: String,
    pub positions: Vec<usize>,
    pub distances: Vec<usize>,
}

/// Factor tally plus per-sequence audit detail.
#[derive(Debug, Default, Serialize)]
pub struct DistanceAnalysis {
    /// Candidate key length (2..=20) to divisor-hit count.
    pub factors: BTreeMap<usize, usize>,
    pub sequences: Vec<SequenceMatch>,
}

/// Find every substring of length `max_len` down to `min_len` that
/// occurs at least twice in the normalized (upper-cased, letters-only)
/// text, with its zero-based positions.
///
/// Results are ordered longest sequence first, then by first
/// occurrence, so consumers preferring longer matches can rely on the
/// ordering.
pub fn find_repeated_sequences(
    text: &str,
    min_len: usize,
    max_len: usize,
) -> Vec<(String, Vec<usize>)> {
    let letters: Vec<char> = text
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if min_len == 0 {
        return Vec::new();
    }

    let mut order: Vec<String> = Vec::new();
    let mut positions: HashMap<String, Vec<usize>> = HashMap::new();
    for len in (min_len..=max_len).rev() {
        if letters.len() < len {
            continue;
        }
        for start in 0..=letters.len() - len {
            let seq: String = letters[start..start + len].iter().collect();
            positions
                .entry(seq.clone())
                .or_insert_with(|| {
                    order.push(seq);
                    Vec::new()
                })
                .push(start);
        }
    }

    order
        .into_iter()
        .filter_map(|seq| {
            let pos = positions.remove(&seq)?;
            (pos.len() > 1).then_some((seq, pos))
        })
        .collect()
}

/// All divisors of `n`, via trial division up to √n.
fn divisors(n: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut i = 1;
    while i * i <= n {
        if n % i == 0 {
            out.push(i);
            if i != n / i {
                out.push(n / i);
            }
        }
        i += 1;
    }
    out
}

/// Compute repeat distances and the key-length factor tally.
///
/// Distances are measured from the first recorded occurrence of each
/// sequence. Every divisor of every distance in (1, [`MAX_KEY_LEN`]]
/// increments the tally once per (sequence, distance, divisor) triple.
pub fn analyze_distances(matches: &[(String, Vec<usize>)]) -> DistanceAnalysis {
    let mut factors: BTreeMap<usize, usize> = BTreeMap::new();
    let mut sequences = Vec::with_capacity(matches.len());

    for (sequence, positions) in matches {
        let mut distances = Vec::new();
        if let Some((&first, rest)) = positions.split_first() {
            for &later in rest {
                let distance = later - first;
                distances.push(distance);
                for factor in divisors(distance) {
                    if factor > 1 && factor <= MAX_KEY_LEN {
                        *factors.entry(factor).or_insert(0) += 1;
                    }
                }
            }
        }
        sequences.push(SequenceMatch {
            sequence: sequence.clone(),
            positions: positions.clone(),
            distances,
        });
    }

    DistanceAnalysis { factors, sequences }
}

/// Mean IoC across the `key_length` columns of the normalized text
/// (column i holds every letter at position ≡ i mod `key_length`).
///
/// Returns 0 when `key_length` is 0 or exceeds the normalized length.
pub fn column_ioc(text: &str, key_length: usize) -> f64 {
    if key_length == 0 {
        return 0.0;
    }
    let positions = latin_positions(text);
    if positions.len() < key_length {
        return 0.0;
    }

    let mut columns: Vec<Vec<usize>> = vec![Vec::new(); key_length];
    for (i, &p) in positions.iter().enumerate() {
        columns[i % key_length].push(p);
    }
    let sum: f64 = columns.iter().map(|col| ioc_of_positions(col)).sum();
    sum / key_length as f64
}

/// Column-IoC sweep over key lengths 2..=min(`max_len`, N/2). The
/// length whose mean column IoC sits closest to English plaintext is
/// the strongest candidate.
pub fn sweep_key_lengths(text: &str, max_len: usize) -> Vec<(usize, f64)> {
    let n = latin_positions(text).len();
    let upper = max_len.min(MAX_KEY_LEN).min(n / 2);
    (2..=upper).map(|k| (k, column_ioc(text, k))).collect()
}
