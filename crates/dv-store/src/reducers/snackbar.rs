//! Transient notification shown to the user

use dv_core::ApiError;
use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Backend error code returned when a visualization is still on a dashboard
pub const ERROR_CODE_USED_ON_DASHBOARD: &str = "E4030";

/// How long success messages stay visible
pub const SUCCESS_DURATION_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnackbarVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl SnackbarVariant {
    /// Client errors are warnings, everything else is an error
    pub fn for_status_code(status: Option<u16>) -> Self {
        match status {
            Some(400..=499) => SnackbarVariant::Warning,
            _ => SnackbarVariant::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnackbarMessage {
    pub variant: SnackbarVariant,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl SnackbarMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            variant: SnackbarVariant::Success,
            message: message.into(),
            duration_ms: Some(SUCCESS_DURATION_MS),
        }
    }

    /// Message for a failed delete request
    pub fn for_delete_error(error: &ApiError) -> Self {
        let message = if error.error_code.as_deref() == Some(ERROR_CODE_USED_ON_DASHBOARD) {
            "This visualization can't be deleted because it is used on one or more dashboards"
                .to_string()
        } else {
            error.message.clone().unwrap_or_else(|| error.to_string())
        };

        Self {
            variant: SnackbarVariant::for_status_code(error.http_status_code),
            message,
            duration_ms: None,
        }
    }
}

pub fn reduce(state: &mut Option<SnackbarMessage>, action: &Action) {
    match action {
        Action::ReceivedSnackbarMessage(message) => *state = Some(message.clone()),
        Action::ClearSnackbar => *state = None,
        _ => {}
    }
}
