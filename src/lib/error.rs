use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeesError {
    #[error("invalid date {value:?}: expected format {expected}")]
    InvalidDate { value: String, expected: &'static str },

    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FeesError>;
