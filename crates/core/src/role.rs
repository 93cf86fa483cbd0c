//! Investigator role enumeration.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Role an investigator holds on a trial. Stored as TEXT in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestigatorRole {
    #[serde(rename = "Principal")]
    Principal,
    #[serde(rename = "Sub")]
    Sub,
    #[serde(rename = "Coordinator")]
    Coordinator,
}

/// All valid role strings.
const VALID_ROLE_STRINGS: &[&str] = &["Principal", "Sub", "Coordinator"];

impl InvestigatorRole {
    /// Return the role as its stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Principal => "Principal",
            Self::Sub => "Sub",
            Self::Coordinator => "Coordinator",
        }
    }

    /// Parse a role from its stored string form.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "Principal" => Ok(Self::Principal),
            "Sub" => Ok(Self::Sub),
            "Coordinator" => Ok(Self::Coordinator),
            _ => Err(CoreError::Validation(format!(
                "Invalid investigator role '{s}'. Must be one of: {}",
                VALID_ROLE_STRINGS.join(", ")
            ))),
        }
    }
}

impl Default for InvestigatorRole {
    fn default() -> Self {
        Self::Sub
    }
}
