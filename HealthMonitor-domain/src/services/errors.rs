use thiserror::Error;
use validator::ValidationErrors;

use health_monitor_data::repository::RepositoryError;

/// Errors returned by the domain services
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request failed a presence check
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The write collided with an existing record
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The store could not complete the operation
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ServiceError {
    /// Flatten validator output into one message, fields in name order
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| *field);

        let message = fields
            .into_iter()
            .map(|(field, errors)| {
                let error_msgs: Vec<String> = errors
                    .iter()
                    .map(|err| match &err.message {
                        Some(msg) => msg.to_string(),
                        None => format!("Invalid {}", field),
                    })
                    .collect();
                format!("{}: {}", field, error_msgs.join(", "))
            })
            .collect::<Vec<String>>()
            .join("; ");

        ServiceError::ValidationError(message)
    }
}

/// Map repository errors to service errors
pub(crate) fn map_repo_error(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::Conflict(msg) => ServiceError::Conflict(msg),
        other => ServiceError::RepositoryError(other.to_string()),
    }
}
