//! System settings that seed a fresh visualization

use serde::{Deserialize, Serialize};

use crate::model::DigitGroupSeparator;

/// Relative period selected when a new visualization is started
pub const DEFAULT_RELATIVE_PERIOD: &str = "LAST_12_MONTHS";

/// A root organisation unit of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUnit {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Settings used to seed the UI of a new visualization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub root_organisation_units: Vec<OrgUnit>,
    pub relative_period: String,
    pub digit_group_separator: DigitGroupSeparator,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_organisation_units: Vec::new(),
            relative_period: DEFAULT_RELATIVE_PERIOD.to_string(),
            digit_group_separator: DigitGroupSeparator::default(),
        }
    }
}
