//! Cipherlens - Classical-Cryptanalysis Toolkit
//!
//! A library of pure, stateless functions for working on classical
//! ciphertext: reversible letter-substitution transforms, letter
//! statistics, key-length inference, and multi-script numerology.
//!
//! ## Components
//!
//! - **cipher**: Vigenère, Caesar, and Atbash transforms over the
//!   Latin (and, for Atbash, Hebrew) alphabet
//! - **stats**: letter-frequency tables and the index of coincidence
//! - **ngram**: case- and script-preserving sliding-window counts
//! - **kasiski**: repeated-substring distance factoring and the
//!   per-column IoC sweep for key-length estimation
//! - **gematria** / **glyphs**: letter-value summation over six
//!   schemas and uniliteral hieroglyph transliteration
//!
//! Every function is total: degenerate inputs (empty text, empty key,
//! too little data for a statistic) return documented neutral values
//! instead of errors. The only fallible surface is parsing cipher and
//! schema identifiers.
//!
//! ## Example
//!
//! ```
//! use cipherlens::cipher::caesar_decrypt;
//! use cipherlens::stats::index_of_coincidence;
//!
//! assert_eq!(caesar_decrypt("KHOOR ZRUOG", 3), "HELLO WORLD");
//! assert_eq!(index_of_coincidence("A"), 0.0);
//! ```

pub mod alphabet;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod gematria;
pub mod glyphs;
pub mod kasiski;
pub mod ngram;
pub mod stats;

pub use cipher::Cipher;
pub use error::{CipherlensError, Result};
pub use gematria::Schema;
