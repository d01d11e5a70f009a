pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid chart data at {path}: {message}")]
    InvalidChartData { path: String, message: String },

    #[error("invalid style config at {path}: {message}")]
    InvalidStyleConfig { path: String, message: String },
}

impl Error {
    /// The address of the offending value (`$` for the root, otherwise
    /// zero-based bracket paths like `rows[1].segments[0].value`).
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidChartData { path, .. } | Self::InvalidStyleConfig { path, .. } => path,
        }
    }
}
