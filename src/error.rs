#[derive(Debug, thiserror::Error)]
pub enum PricePaidError {
    #[error("Malformed sale record: {0}")]
    MalformedRecord(String),

    #[error("{service} is unavailable: {reason}")]
    DependencyUnavailable {
        service: &'static str,
        reason: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PricePaidError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        PricePaidError::MalformedRecord(reason.into())
    }

    pub(crate) fn unavailable(service: &'static str, reason: impl ToString) -> Self {
        PricePaidError::DependencyUnavailable {
            service,
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PricePaidError>;
