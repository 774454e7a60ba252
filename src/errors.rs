use thiserror::Error;

/// Errors that can occur during an extraction run.
#[derive(Error, Debug)]
pub enum CmodError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("scan error: {message} (path: {path})")]
    Scan { message: String, path: String },

    #[error("copy error: {message} (path: {path})")]
    Copy { message: String, path: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results using `CmodError`.
pub type Result<T> = std::result::Result<T, CmodError>;
