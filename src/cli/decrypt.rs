use crate::cipher::{self, Cipher};
use crate::error::{CipherlensError, Result};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct DecryptOptions {
    pub cipher: Cipher,
    pub key: Option<String>,
    pub shift: Option<u32>,
}

/// Decrypt a ciphertext file with the selected transform.
pub fn run_decrypt(path: &Path, options: &DecryptOptions) -> Result<String> {
    let text = std::fs::read_to_string(path)?;
    decrypt_text(&text, options)
}

pub fn decrypt_text(text: &str, options: &DecryptOptions) -> Result<String> {
    match options.cipher {
        Cipher::Vigenere => {
            // An absent or non-alphabetic key degrades to identity.
            let key = options.key.as_deref().unwrap_or("");
            Ok(cipher::vigenere_decrypt(text, key))
        }
        Cipher::Caesar => {
            let shift = options.shift.ok_or(CipherlensError::MissingParameter {
                cipher: "caesar",
                param: "--shift",
            })?;
            Ok(cipher::caesar_decrypt(text, shift))
        }
        Cipher::Atbash => Ok(cipher::atbash(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_requires_shift() {
        let options = DecryptOptions {
            cipher: Cipher::Caesar,
            ..Default::default()
        };
        assert!(decrypt_text("KHOOR", &options).is_err());
    }

    #[test]
    fn test_caesar_end_to_end() {
        let options = DecryptOptions {
            cipher: Cipher::Caesar,
            shift: Some(3),
            ..Default::default()
        };
        assert_eq!(decrypt_text("KHOOR ZRUOG", &options).unwrap(), "HELLO WORLD");
    }

    #[test]
    fn test_vigenere_missing_key_is_identity() {
        let options = DecryptOptions {
            cipher: Cipher::Vigenere,
            ..Default::default()
        };
        assert_eq!(decrypt_text("KHOOR", &options).unwrap(), "KHOOR");
    }
}
