use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error(transparent)]
    EstimateError(#[from] EstimateError),
}

/// Validation failures of a single quote request. All of them are
/// user-correctable: the caller presents the kind as actionable guidance and
/// asks again. Checked in declaration order, first match wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    #[error("Missing field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid area '{value}': must be a finite number greater than zero")]
    InvalidArea { value: String },

    #[error("Unknown service category: '{category}'")]
    UnknownCategory { category: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// User-correctable input; ask again.
    Low,
    /// Configuration problem; fix the catalog file.
    Medium,
    /// Environment problem (file access).
    High,
    /// Internal failure.
    Critical,
}

impl QuoteError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            QuoteError::EstimateError(_) => ErrorSeverity::Low,
            QuoteError::ConfigValidationError { .. }
            | QuoteError::InvalidConfigValueError { .. }
            | QuoteError::MissingConfigError { .. } => ErrorSeverity::Medium,
            QuoteError::IoError(_) => ErrorSeverity::High,
            QuoteError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuoteError::EstimateError(e) => e.user_message(),
            QuoteError::ConfigValidationError { field, message } => {
                format!("The catalog configuration is invalid ({}): {}", field, message)
            }
            QuoteError::InvalidConfigValueError { field, value, reason } => {
                format!(
                    "The catalog configuration has an invalid value for {} ('{}'): {}",
                    field, value, reason
                )
            }
            QuoteError::MissingConfigError { field } => {
                format!("The catalog configuration is missing '{}'", field)
            }
            QuoteError::IoError(e) => format!("Could not read the catalog file: {}", e),
            QuoteError::SerializationError(e) => format!("Could not serialize the quote: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            QuoteError::EstimateError(e) => e.recovery_suggestion(),
            QuoteError::ConfigValidationError { .. }
            | QuoteError::InvalidConfigValueError { .. }
            | QuoteError::MissingConfigError { .. } => {
                "Fix the catalog file and try again".to_string()
            }
            QuoteError::IoError(_) => {
                "Check that the catalog file exists and is readable".to_string()
            }
            QuoteError::SerializationError(_) => "Re-run with --format text".to_string(),
        }
    }
}

impl EstimateError {
    pub fn user_message(&self) -> String {
        match self {
            EstimateError::MissingField { field } => {
                format!("Please fill in the {} field", field)
            }
            EstimateError::InvalidArea { .. } => {
                "The area must be a number greater than zero".to_string()
            }
            EstimateError::UnknownCategory { category } => {
                format!("'{}' is not an available service", category)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EstimateError::MissingField { field: "category" } => {
                "Choose a service category".to_string()
            }
            EstimateError::MissingField { .. } | EstimateError::InvalidArea { .. } => {
                "Enter the room area in square meters, e.g. 80".to_string()
            }
            EstimateError::UnknownCategory { .. } => {
                "Run with --list to see the available services".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
