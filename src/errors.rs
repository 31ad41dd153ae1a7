use thiserror::Error;

/// Rejection reasons for an expense entry. Nothing is inserted when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("`{0}` is not a valid amount")]
    InvalidAmount(String),
    #[error("amount must be greater than zero (got {0})")]
    NonPositiveAmount(f64),
}

/// Storage and configuration failures. Entry validation stays in [`ValidationError`].
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_rejected_input() {
        assert_eq!(
            ValidationError::InvalidAmount("abc".into()).to_string(),
            "`abc` is not a valid amount"
        );
        assert_eq!(
            LedgerError::Config("bad key".into()).to_string(),
            "Configuration error: bad key"
        );
    }
}
