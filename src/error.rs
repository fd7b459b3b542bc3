use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to load data from `{origin}`: {reason}")]
    LoadFailure { origin: String, reason: String },
}

impl ChartError {
    pub(crate) fn load_failure(origin: impl Into<String>, reason: impl ToString) -> Self {
        Self::LoadFailure {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}
