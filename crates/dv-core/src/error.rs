//! Error types shared across the workspace

use thiserror::Error;

/// A layout that cannot be rendered as its chart type
///
/// The display text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please add at least one Series dimension")]
    MissingSeries,

    #[error("Please add at least one Category dimension")]
    MissingCategory,

    #[error("Please add at least one period as Series, Category or Filter")]
    MissingPeriod,

    #[error("Please add at least one Filter dimension")]
    MissingFilter,

    #[error("Please add at least one period as Category or Filter")]
    MissingPiePeriod,

    #[error("Please add at least one period as a Series dimension")]
    MissingSeriesPeriod,

    #[error("Please add at least one period as a Category dimension")]
    MissingCategoryPeriod,

    #[error("Please add Data as a filter dimension")]
    MissingData,
}

/// Failure of a backend call
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("API error (status {http_status_code:?}): {}", .message.as_deref().unwrap_or("no message"))]
pub struct ApiError {
    pub http_status_code: Option<u16>,
    pub error_code: Option<String>,
    pub message: Option<String>,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            http_status_code: Some(404),
            error_code: None,
            message: Some(message.into()),
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            http_status_code: Some(status),
            ..Default::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }
}

/// Error shown in place of a visualization that failed to load or save
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("The visualization couldn't be found")]
    NotFound,

    #[error("Something went wrong on the server")]
    GenericServer,

    #[error("{0}")]
    Message(String),
}

impl From<&ApiError> for LoadError {
    fn from(error: &ApiError) -> Self {
        if error.http_status_code == Some(404) {
            LoadError::NotFound
        } else if let Some(message) = error.message.as_ref().filter(|m| !m.is_empty()) {
            LoadError::Message(message.clone())
        } else {
            LoadError::GenericServer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_mapping() {
        let not_found = ApiError::not_found("object not found");
        assert_eq!(LoadError::from(&not_found), LoadError::NotFound);

        let with_message = ApiError::with_status(409).with_message("Conflict");
        assert_eq!(
            LoadError::from(&with_message),
            LoadError::Message("Conflict".to_string())
        );

        let bare = ApiError::with_status(500);
        assert_eq!(LoadError::from(&bare), LoadError::GenericServer);
        assert_eq!(LoadError::from(&ApiError::default()), LoadError::GenericServer);
    }
}
