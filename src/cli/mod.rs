pub mod decrypt;
pub mod gematria;
pub mod keylen;
pub mod ngrams;
pub mod stats;
pub mod translit;

pub use decrypt::*;
pub use gematria::*;
pub use keylen::*;
pub use ngrams::*;
pub use stats::*;
pub use translit::*;
