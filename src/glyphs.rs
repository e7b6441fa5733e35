//! One-way name transliteration into Egyptian uniliteral hieroglyphs.
//!
//! Greedy longest-match scan: at each position a two-letter digraph is
//! tried before a single letter, and unmatched characters are skipped.
//! The mapping is many-to-one (I, Y and E all land on the flowering
//! reed), so there is no inverse.

use serde::Serialize;

/// A uniliteral sign with its conventional description and phonetic
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlyphEntry {
    pub glyph: char,
    pub name: &'static str,
    pub sound: &'static str,
}

const fn entry(glyph: char, name: &'static str, sound: &'static str) -> GlyphEntry {
    GlyphEntry { glyph, name, sound }
}

fn digraph(a: char, b: char) -> Option<GlyphEntry> {
    let e = match (a, b) {
        ('S', 'H') => entry('𓈙', "Pool of Water", "sh"),
        ('T', 'H') => entry('𓍿', "Tethering Rope", "tch"),
        ('D', 'J') => entry('𓆓', "Cobra", "dj"),
        _ => return None,
    };
    Some(e)
}

fn uniliteral(c: char) -> Option<GlyphEntry> {
    let e = match c {
        'A' => entry('𓄿', "Egyptian Vulture", "ah"),
        'I' | 'Y' | 'E' => entry('𓇋', "Flowering Reed", "i/y"),
        'U' | 'W' | 'O' => entry('𓅱', "Quail Chick", "w/u"),
        'B' => entry('𓃀', "Foot", "b"),
        'P' => entry('𓊪', "Stool", "p"),
        'F' => entry('𓆑', "Horned Viper", "f"),
        'M' => entry('𓅓', "Owl", "m"),
        'N' => entry('𓈖', "Water Ripple", "n"),
        'R' | 'L' => entry('𓂋', "Mouth", "r"),
        'H' => entry('𓉔', "Reed Shelter", "h"),
        'S' | 'Z' => entry('𓋴', "Folded Cloth", "s"),
        'Q' => entry('𓈎', "Hill Slope", "q"),
        'K' => entry('𓎡', "Basket with Handle", "k"),
        'G' => entry('𓎼', "Jar Stand", "g"),
        'T' => entry('𓏏', "Bread Loaf", "t"),
        'D' => entry('𓂧', "Hand", "d"),
        _ => return None,
    };
    Some(e)
}

/// Tokenize `text` into glyph entries: upper-case, then greedy
/// digraph-first scan. Unmatched characters consume one position and
/// emit nothing.
pub fn tokenize(text: &str) -> Vec<GlyphEntry> {
    let chars: Vec<char> = text.to_uppercase().chars().collect();
    let mut entries = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() {
            if let Some(e) = digraph(chars[i], chars[i + 1]) {
                entries.push(e);
                i += 2;
                continue;
            }
        }
        if let Some(e) = uniliteral(chars[i]) {
            entries.push(e);
        }
        i += 1;
    }
    entries
}

/// The glyph string for `text`; see [`tokenize`].
pub fn transliterate(text: &str) -> String {
    tokenize(text).iter().map(|e| e.glyph).collect()
}
