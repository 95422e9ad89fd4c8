use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesignError {
    #[error("Invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Thermochemistry analysis failed: {0}")]
    ThermoLookupFailed(String),

    #[error("Domain error in `{quantity}`: {reason}")]
    Domain {
        quantity: &'static str,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DesignResult<T> = Result<T, DesignError>;

impl DesignError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        DesignError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn domain(quantity: &'static str, reason: impl Into<String>) -> Self {
        DesignError::Domain {
            quantity,
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for DesignError {
    fn from(err: toml::de::Error) -> Self {
        DesignError::Config(err.to_string())
    }
}
