//! Numerological letter-value summation across six schemas and five
//! scripts. Characters missing from a schema's table contribute zero;
//! the functions never fail.

use crate::error::{CipherlensError, Result};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Gematria schema selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    Pythagorean,
    Chaldean,
    LatinRoman,
    Hebrew,
    Greek,
    SanskritKatapayadi,
}

impl Schema {
    pub const ALL: [Schema; 6] = [
        Schema::Pythagorean,
        Schema::Chaldean,
        Schema::LatinRoman,
        Schema::Hebrew,
        Schema::Greek,
        Schema::SanskritKatapayadi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Schema::Pythagorean => "pythagorean",
            Schema::Chaldean => "chaldean",
            Schema::LatinRoman => "latin_roman",
            Schema::Hebrew => "hebrew",
            Schema::Greek => "greek",
            Schema::SanskritKatapayadi => "sanskrit_katapayadi",
        }
    }

    /// Latin-script schemas are case-insensitive by convention and
    /// upper-case their input before lookup.
    fn folds_case(&self) -> bool {
        matches!(
            self,
            Schema::Pythagorean | Schema::Chaldean | Schema::LatinRoman
        )
    }

    fn value_of(&self, c: char) -> Option<u32> {
        match self {
            Schema::Pythagorean => pythagorean(c),
            Schema::Chaldean => chaldean(c),
            Schema::LatinRoman => latin_roman(c),
            Schema::Hebrew => hebrew(c),
            Schema::Greek => greek(c),
            Schema::SanskritKatapayadi => katapayadi(c),
        }
    }
}

impl std::str::FromStr for Schema {
    type Err = CipherlensError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "pythagorean" => Ok(Self::Pythagorean),
            "chaldean" => Ok(Self::Chaldean),
            "latin_roman" | "roman" => Ok(Self::LatinRoman),
            "hebrew" => Ok(Self::Hebrew),
            "greek" => Ok(Self::Greek),
            "sanskrit_katapayadi" | "katapayadi" => Ok(Self::SanskritKatapayadi),
            _ => Err(CipherlensError::UnknownSchema(s.to_string())),
        }
    }
}

/// Sum the schema's value for every character of `text`.
///
/// Katapayadi first applies Unicode canonical decomposition and strips
/// dependent vowel signs, virama, nukta, candrabindu, anusvara and
/// visarga, so a consonant carrying a vowel sign counts once with its
/// own value.
pub fn gematria_value(text: &str, schema: Schema) -> u64 {
    let lookup = |c: char| schema.value_of(c).map(u64::from).unwrap_or(0);

    match schema {
        Schema::SanskritKatapayadi => text
            .nfd()
            .filter(|&c| !is_devanagari_mark(c))
            .map(lookup)
            .sum(),
        _ if schema.folds_case() => text.chars().map(|c| lookup(c.to_ascii_uppercase())).sum(),
        _ => text.chars().map(lookup).sum(),
    }
}

/// Devanagari combining marks dropped before Katapayadi lookup:
/// candrabindu/anusvara/visarga, nukta, every dependent vowel sign,
/// and the virama.
fn is_devanagari_mark(c: char) -> bool {
    matches!(c,
        '\u{0900}'..='\u{0903}'
        | '\u{093A}'..='\u{093C}'
        | '\u{093E}'..='\u{094D}'
        | '\u{0955}'..='\u{0957}'
        | '\u{0962}'..='\u{0963}')
}

fn pythagorean(c: char) -> Option<u32> {
    let v = match c {
        'A' | 'J' | 'S' => 1,
        'B' | 'K' | 'T' => 2,
        'C' | 'L' | 'U' => 3,
        'D' | 'M' | 'V' => 4,
        'E' | 'N' | 'W' => 5,
        'F' | 'O' | 'X' => 6,
        'G' | 'P' | 'Y' => 7,
        'H' | 'Q' | 'Z' => 8,
        'I' | 'R' => 9,
        _ => return None,
    };
    Some(v)
}

fn chaldean(c: char) -> Option<u32> {
    let v = match c {
        'A' | 'I' | 'J' | 'Q' | 'Y' => 1,
        'B' | 'K' | 'R' => 2,
        'C' | 'G' | 'L' | 'S' => 3,
        'D' | 'M' | 'T' => 4,
        'E' | 'H' | 'N' | 'X' => 5,
        'U' | 'V' | 'W' => 6,
        'O' | 'Z' => 7,
        'F' | 'P' => 8,
        _ => return None,
    };
    Some(v)
}

// Face value per symbol, deliberately without subtractive pairs:
// "IX" sums to 11, not 9. Numerology sums symbols independently.
fn latin_roman(c: char) -> Option<u32> {
    let v = match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => return None,
    };
    Some(v)
}

fn hebrew(c: char) -> Option<u32> {
    let v = match c {
        'א' => 1,
        'ב' => 2,
        'ג' => 3,
        'ד' => 4,
        'ה' => 5,
        'ו' => 6,
        'ז' => 7,
        'ח' => 8,
        'ט' => 9,
        'י' => 10,
        'כ' | 'ך' => 20,
        'ל' => 30,
        'מ' | 'ם' => 40,
        'נ' | 'ן' => 50,
        'ס' => 60,
        'ע' => 70,
        'פ' | 'ף' => 80,
        'צ' | 'ץ' => 90,
        'ק' => 100,
        'ר' => 200,
        'ש' => 300,
        'ת' => 400,
        _ => return None,
    };
    Some(v)
}

// Isopsephy values for both cases, plus the numeral-only letters
// stigma (6), koppa (90), and sampi (900).
fn greek(c: char) -> Option<u32> {
    let v = match c {
        'α' | 'Α' => 1,
        'β' | 'Β' => 2,
        'γ' | 'Γ' => 3,
        'δ' | 'Δ' => 4,
        'ε' | 'Ε' => 5,
        'ϛ' | 'Ϛ' => 6,
        'ζ' | 'Ζ' => 7,
        'η' | 'Η' => 8,
        'θ' | 'Θ' => 9,
        'ι' | 'Ι' => 10,
        'κ' | 'Κ' => 20,
        'λ' | 'Λ' => 30,
        'μ' | 'Μ' => 40,
        'ν' | 'Ν' => 50,
        'ξ' | 'Ξ' => 60,
        'ο' | 'Ο' => 70,
        'π' | 'Π' => 80,
        'ϟ' | 'Ϟ' => 90,
        'ρ' | 'Ρ' => 100,
        'σ' | 'Σ' => 200,
        'τ' | 'Τ' => 300,
        'υ' | 'Υ' => 400,
        'φ' | 'Φ' => 500,
        'χ' | 'Χ' => 600,
        'ψ' | 'Ψ' => 700,
        'ω' | 'Ω' => 800,
        'ϡ' | 'Ϡ' => 900,
        _ => return None,
    };
    Some(v)
}

// Katapayadi: ka/ta/pa/ya varga consonants carry digits, independent
// vowels count as zero. Dependent vowel signs never reach this table.
fn katapayadi(c: char) -> Option<u32> {
    let v = match c {
        'क' | 'ट' | 'प' | 'य' => 1,
        'ख' | 'ठ' | 'फ' | 'र' => 2,
        'ग' | 'ड' | 'ब' | 'ल' => 3,
        'घ' | 'ढ' | 'भ' | 'व' => 4,
        'ङ' | 'ण' | 'म' | 'श' => 5,
        'च' | 'त' | 'ष' => 6,
        'छ' | 'थ' | 'स' => 7,
        'ज' | 'द' | 'ह' => 8,
        'झ' | 'ध' => 9,
        'ञ' | 'न' => 0,
        'अ' | 'आ' | 'इ' | 'ई' | 'उ' | 'ऊ' | 'ऋ' | 'ॠ' | 'ऌ' | 'ॡ' | 'ए' | 'ऐ' | 'ओ' | 'औ' => 0,
        _ => return None,
    };
    Some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pythagorean_abc() {
        assert_eq!(gematria_value("ABC", Schema::Pythagorean), 6);
        assert_eq!(gematria_value("abc", Schema::Pythagorean), 6);
    }

    #[test]
    fn test_chaldean_no_nine() {
        // Chaldean assigns no letter the value 9.
        for c in 'A'..='Z' {
            assert_ne!(chaldean(c), Some(9), "{} must not map to 9", c);
        }
        assert_eq!(gematria_value("AD", Schema::Chaldean), 5);
    }

    #[test]
    fn test_latin_roman_face_values() {
        // Face-value summation, no subtractive pairs.
        assert_eq!(gematria_value("IX", Schema::LatinRoman), 11);
        assert_eq!(gematria_value("IV", Schema::LatinRoman), 6);
        assert_eq!(gematria_value("mcm", Schema::LatinRoman), 2100);
    }

    #[test]
    fn test_hebrew_finals_share_values() {
        assert_eq!(gematria_value("כ", Schema::Hebrew), 20);
        assert_eq!(gematria_value("ך", Schema::Hebrew), 20);
        // chai: het 8 + yod 10
        assert_eq!(gematria_value("חי", Schema::Hebrew), 18);
    }

    #[test]
    fn test_greek_both_cases() {
        assert_eq!(gematria_value("αβγ", Schema::Greek), 6);
        assert_eq!(gematria_value("ΑΒΓ", Schema::Greek), 6);
        assert_eq!(gematria_value("ϡ", Schema::Greek), 900);
    }

    #[test]
    fn test_katapayadi_strips_vowel_signs() {
        // ga (ग) = 3 regardless of an attached vowel sign.
        assert_eq!(gematria_value("ग", Schema::SanskritKatapayadi), 3);
        assert_eq!(gematria_value("गा", Schema::SanskritKatapayadi), 3);
        assert_eq!(gematria_value("गं", Schema::SanskritKatapayadi), 3);
        // Conjunct with virama: both consonants count, the join does not.
        assert_eq!(gematria_value("क्ल", Schema::SanskritKatapayadi), 4);
    }

    #[test]
    fn test_katapayadi_independent_vowels_are_zero() {
        assert_eq!(gematria_value("अआइ", Schema::SanskritKatapayadi), 0);
    }

    #[test]
    fn test_unmapped_characters_contribute_zero() {
        assert_eq!(gematria_value("A1B2!", Schema::Pythagorean), 3);
        assert_eq!(gematria_value("", Schema::Hebrew), 0);
        assert_eq!(gematria_value("ABC", Schema::Hebrew), 0);
    }

    #[test]
    fn test_schema_from_str() {
        assert_eq!(
            "latin-roman".parse::<Schema>().unwrap(),
            Schema::LatinRoman
        );
        assert_eq!(
            "Sanskrit_Katapayadi".parse::<Schema>().unwrap(),
            Schema::SanskritKatapayadi
        );
        assert!("runic".parse::<Schema>().is_err());
    }
}
