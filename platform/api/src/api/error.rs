use std::sync::Arc;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// A database error occurred.
    #[error("database error: {0}")]
    Sqlx(Arc<sqlx::Error>),
    /// The input was invalid.
    #[error("invalid input for {fields:?}: {message}")]
    InvalidInput {
        fields: Vec<&'static str>,
        message: &'static str,
    },
    /// The acting user is not allowed to perform the operation.
    #[error("unauthorized to {action}")]
    Unauthorized { action: &'static str },
    /// Not Found
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Sqlx(Arc::new(err))
    }
}

impl ApiError {
    pub fn invalid_input(field: &'static str, message: &'static str) -> Self {
        Self::InvalidInput {
            fields: vec![field],
            message,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Sqlx(_) => "Sqlx",
            ApiError::InvalidInput { .. } => "InvalidInput",
            ApiError::Unauthorized { .. } => "Unauthorized",
            ApiError::NotFound(_) => "NotFound",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::InvalidInput { message, .. } => message.to_string(),
            _ => self.to_string(),
        }
    }

    /// The input fields a validation error applies to, for re-display next
    /// to the offending form fields.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            ApiError::InvalidInput { fields, .. } => fields.to_vec(),
            _ => Vec::new(),
        }
    }
}
