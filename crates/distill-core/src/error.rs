use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistillError {
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
