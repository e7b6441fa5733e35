//! Classical letter-substitution transforms.
//!
//! All transforms are total: degenerate inputs (empty text, empty or
//! non-alphabetic key) return the input unchanged instead of failing.
//! Non-letters pass through and, for Vigenère, do not consume a key
//! position.

use crate::alphabet::{HEBREW, LATIN};
use crate::error::{CipherlensError, Result};
use serde::{Deserialize, Serialize};

/// Cipher family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cipher {
    #[default]
    Vigenere,
    Caesar,
    Atbash,
}

impl std::str::FromStr for Cipher {
    type Err = CipherlensError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "vigenere" | "vigenère" => Ok(Self::Vigenere),
            "caesar" => Ok(Self::Caesar),
            "atbash" => Ok(Self::Atbash),
            _ => Err(CipherlensError::UnknownCipher(s.to_string())),
        }
    }
}

/// Upper-case the key and keep only Latin letters, as shift amounts.
fn key_shifts(key: &str) -> Vec<usize> {
    key.chars()
        .filter_map(|c| LATIN.position(c.to_ascii_uppercase()))
        .collect()
}

fn vigenere(text: &str, key: &str, decrypt: bool) -> String {
    let shifts = key_shifts(key);
    if shifts.is_empty() {
        return text.to_string();
    }

    let modulus = LATIN.len();
    let mut out = String::with_capacity(text.len());
    let mut key_pos = 0;
    for c in text.chars() {
        let upper = c.to_ascii_uppercase();
        match LATIN.position(upper) {
            Some(index) => {
                let shift = shifts[key_pos % shifts.len()];
                let shifted = if decrypt {
                    (index + modulus - shift) % modulus
                } else {
                    (index + shift) % modulus
                };
                out.push(LATIN.char_at(shifted));
                key_pos += 1;
            }
            // Non-letters are copied through without advancing the key.
            None => out.push(upper),
        }
    }
    out
}

/// Decrypt Vigenère ciphertext. An empty or fully non-alphabetic key
/// returns the ciphertext unchanged.
pub fn vigenere_decrypt(ciphertext: &str, key: &str) -> String {
    vigenere(ciphertext, key, true)
}

/// Encrypt with Vigenère: the `+shift` mirror of [`vigenere_decrypt`].
pub fn vigenere_encrypt(plaintext: &str, key: &str) -> String {
    vigenere(plaintext, key, false)
}

fn caesar(text: &str, shift: u32, decrypt: bool) -> String {
    let modulus = LATIN.len();
    let shift = shift as usize % modulus;
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let upper = c.to_ascii_uppercase();
        match LATIN.position(upper) {
            Some(index) => {
                let shifted = if decrypt {
                    (index + modulus - shift) % modulus
                } else {
                    (index + shift) % modulus
                };
                out.push(LATIN.char_at(shifted));
            }
            None => out.push(upper),
        }
    }
    out
}

/// Decrypt a Caesar shift. The shift is taken modulo 26.
pub fn caesar_decrypt(ciphertext: &str, shift: u32) -> String {
    caesar(ciphertext, shift, true)
}

/// Encrypt with a Caesar shift; mirror of [`caesar_decrypt`].
pub fn caesar_encrypt(plaintext: &str, shift: u32) -> String {
    caesar(plaintext, shift, false)
}

/// Self-inverse Atbash substitution. Latin letters are upper-cased and
/// mirrored within the Latin alphabet; Hebrew letters are mirrored
/// within the Hebrew sequence as given; everything else passes through.
pub fn atbash(text: &str) -> String {
    text.chars()
        .map(|c| {
            if let Some(mirrored) = LATIN.mirror(c.to_ascii_uppercase()) {
                mirrored
            } else if let Some(mirrored) = HEBREW.mirror(c) {
                mirrored
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_shift_three() {
        assert_eq!(caesar_decrypt("KHOOR ZRUOG", 3), "HELLO WORLD");
        assert_eq!(caesar_encrypt("HELLO WORLD", 3), "KHOOR ZRUOG");
    }

    #[test]
    fn test_caesar_shift_wraps() {
        assert_eq!(caesar_decrypt("ABC", 26), "ABC");
        assert_eq!(caesar_decrypt("ABC", 27), caesar_decrypt("ABC", 1));
    }

    #[test]
    fn test_vigenere_roundtrip() {
        let plain = "ATTACKATDAWN";
        let encrypted = vigenere_encrypt(plain, "LEMON");
        assert_eq!(encrypted, "LXFOPVEFRNHR");
        assert_eq!(vigenere_decrypt(&encrypted, "LEMON"), plain);
    }

    #[test]
    fn test_vigenere_key_skips_non_letters() {
        // The key stream must not advance on spaces or punctuation.
        let with_spaces = vigenere_decrypt("LXFOP VEFRN HR!", "LEMON");
        assert_eq!(with_spaces, "ATTAC KATDA WN!");
    }

    #[test]
    fn test_vigenere_empty_key_is_identity() {
        assert_eq!(vigenere_decrypt("WHATEVER", ""), "WHATEVER");
        assert_eq!(vigenere_decrypt("WHATEVER", "123 !?"), "WHATEVER");
    }

    #[test]
    fn test_vigenere_key_case_and_symbols_stripped() {
        let a = vigenere_decrypt("LXFOPVEFRNHR", "lemon");
        let b = vigenere_decrypt("LXFOPVEFRNHR", "L-e.M o N");
        assert_eq!(a, b);
        assert_eq!(a, "ATTACKATDAWN");
    }

    #[test]
    fn test_atbash_involution() {
        assert_eq!(atbash("WIZARD"), "DRAZIW");
        assert_eq!(atbash(&atbash("Wizard of Oz")), "WIZARD OF OZ");
    }

    #[test]
    fn test_atbash_hebrew_branch() {
        assert_eq!(atbash("א"), "ת");
        assert_eq!(atbash(&atbash("תורה")), "תורה");
        let mixed = atbash("A א 1");
        assert_eq!(mixed, "Z ת 1");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(vigenere_decrypt("", "KEY"), "");
        assert_eq!(caesar_decrypt("", 5), "");
        assert_eq!(atbash(""), "");
    }

    #[test]
    fn test_cipher_from_str() {
        assert_eq!("vigenere".parse::<Cipher>().unwrap(), Cipher::Vigenere);
        assert_eq!("CAESAR".parse::<Cipher>().unwrap(), Cipher::Caesar);
        assert!("rot13".parse::<Cipher>().is_err());
    }
}
