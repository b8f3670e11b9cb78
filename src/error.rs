use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the failure came from the storage layer.
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Database(_) | AppError::Pool(_))
    }
}

impl From<teloxide::RequestError> for AppError {
    fn from(err: teloxide::RequestError) -> Self {
        AppError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_is_storage() {
        let error = AppError::from(rusqlite::Error::QueryReturnedNoRows);

        assert!(error.is_storage());
        assert!(error.to_string().starts_with("Database error"));
    }

    #[test]
    fn test_transport_error_is_not_storage() {
        let error = AppError::Transport("connection reset".to_string());

        assert!(!error.is_storage());
        assert_eq!(error.to_string(), "Transport error: connection reset");
    }
}
