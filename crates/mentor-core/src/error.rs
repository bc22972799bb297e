//! Error types for the mentor library.

use thiserror::Error;

/// Comprehensive error type for all mentor operations.
///
/// Roadmap generation itself is total and cannot fail; errors only arise at
/// the input boundary (questionnaire answers arriving as raw strings) and
/// when serializing a plan for machine output.
#[derive(Error, Debug)]
pub enum MentorError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> MentorError {
        MentorError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl MentorError {
    /// Creates a builder for input validation errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mentor_core::MentorError;
    ///
    /// let err = MentorError::invalid_input("background")
    ///     .with_reason("This field is required");
    /// assert!(err.to_string().contains("background"));
    /// ```
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Result type alias for mentor operations
pub type Result<T> = std::result::Result<T, MentorError>;
