use thiserror::Error;

#[derive(Error, Debug)]
pub enum BombeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Corpus Error: {0}")]
    Corpus(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("ciphertext too short to score: {len} letters (minimum {min})")]
    DegenerateInput { len: usize, min: usize },

    #[error("search cancelled before any candidate was evaluated")]
    Cancelled,
}

pub type BombeResult<T> = Result<T, BombeError>;
