use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherlensError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown cipher: {0}. Expected vigenere, caesar, or atbash")]
    UnknownCipher(String),

    #[error("Unknown gematria schema: {0}")]
    UnknownSchema(String),

    #[error("{cipher} requires {param}")]
    MissingParameter {
        cipher: &'static str,
        param: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CipherlensError>;
