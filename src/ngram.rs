//! Sliding-window n-gram counting.
//!
//! Unlike the frequency statistics, counting is case- and
//! script-preserving: the sample corpus includes Devanagari and Greek
//! texts where Latin upper-casing would be wrong or meaningless.

use std::collections::HashMap;

/// Characters removed before windowing: whitespace plus sentence
/// punctuation, including the Devanagari danda and curly quotes.
fn is_stripped(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '.' | '?' | '।' | '“' | '”')
}

/// Count every length-`n` substring of `text` after stripping
/// whitespace and punctuation. Returns an empty map when the cleaned
/// text is shorter than `n` (or `n` is 0).
pub fn count_ngrams(text: &str, n: usize) -> HashMap<String, usize> {
    let mut ngrams = HashMap::new();
    if n == 0 {
        return ngrams;
    }
    let cleaned: Vec<char> = text.chars().filter(|&c| !is_stripped(c)).collect();
    if cleaned.len() < n {
        return ngrams;
    }

    for window in cleaned.windows(n) {
        let ngram: String = window.iter().collect();
        *ngrams.entry(ngram).or_insert(0) += 1;
    }
    ngrams
}

/// The `limit` most frequent n-grams, count descending; ties break
/// lexicographically so the ordering is deterministic.
pub fn top_ngrams(text: &str, n: usize, limit: usize) -> Vec<(String, usize)> {
    let mut items: Vec<(String, usize)> = count_ngrams(text, n).into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_overlapping_windows() {
        let ngrams = count_ngrams("ABAB", 2);
        assert_eq!(ngrams.get("AB"), Some(&2));
        assert_eq!(ngrams.get("BA"), Some(&1));
        assert_eq!(ngrams.len(), 2);
    }

    #[test]
    fn test_strips_whitespace_and_punctuation() {
        let ngrams = count_ngrams("a b, c. d? e", 5);
        assert_eq!(ngrams.get("abcde"), Some(&1));
    }

    #[test]
    fn test_preserves_case_and_script() {
        let ngrams = count_ngrams("AbAb", 2);
        assert_eq!(ngrams.get("Ab"), Some(&2));
        assert!(ngrams.get("AB").is_none());

        // Devanagari danda and curly quotes are stripped, the script kept.
        let devanagari = count_ngrams("“धर्म। धर्म”", 4);
        assert_eq!(devanagari.get("धर्म"), Some(&2));
    }

    #[test]
    fn test_too_short_returns_empty() {
        assert!(count_ngrams("ab", 3).is_empty());
        assert!(count_ngrams("", 1).is_empty());
        assert!(count_ngrams("abc", 0).is_empty());
    }

    #[test]
    fn test_top_ngrams_ordering() {
        let top = top_ngrams("AABAABAB", 2, 2);
        assert_eq!(top[0], ("AB".to_string(), 3));
        assert_eq!(top.len(), 2);
    }
}
