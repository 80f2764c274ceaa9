use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Seq2GifError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("Failed to move finished file into place: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Not enough input: {0}")]
    InsufficientInput(String),

    #[error("File does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid output: {0}")]
    InvalidOutput(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Could not find a valid image sequence for pattern: {0}")]
    NoMatch(String),

    #[error("Invalid frame rate: {0}. Must be a positive number")]
    InvalidFrameRate(f64),

    #[error("Invalid encoder speed: {0}. Must be between {1} and {2}")]
    InvalidSpeed(i32, i32, i32),

    #[error("Aborted by user")]
    UserAbort,
}

impl Seq2GifError {
    /// A user abort ends the run early but is not a failure.
    pub fn is_user_abort(&self) -> bool {
        matches!(self, Seq2GifError::UserAbort)
    }
}

pub type Result<T> = std::result::Result<T, Seq2GifError>;
