/// Result alias carrying [`FolioError`].
pub type Result<T> = std::result::Result<T, FolioError>;

/// Errors surfaced by the core crate.
///
/// None of these are fatal for the stage: callers log them and fall back to
/// empty content or default configuration.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// The gallery content payload could not be decoded.
    #[error("malformed gallery content: {0}")]
    Content(#[from] serde_json::Error),
    /// A configuration override was rejected.
    #[error("invalid stage config: {0}")]
    Config(String),
}

impl FolioError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }
}
