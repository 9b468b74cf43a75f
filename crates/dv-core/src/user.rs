//! Current user

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Authority granting every permission
pub const AUTHORITY_ALL: &str = "ALL";

/// User settings as sent by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalUserSettings {
    #[serde(default)]
    pub key_ui_locale: String,
}

/// User descriptor as sent by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUser {
    pub id: String,
    pub username: String,

    #[serde(default)]
    pub settings: ExternalUserSettings,

    #[serde(default)]
    pub authorities: HashSet<String>,
}

/// The signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub ui_locale: String,
    pub is_superuser: bool,
}

impl From<&ExternalUser> for User {
    fn from(user: &ExternalUser) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            ui_locale: user.settings.key_ui_locale.clone(),
            is_superuser: user.authorities.contains(AUTHORITY_ALL),
        }
    }
}
