//! Portfolio category enumeration.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Trial phase a portfolio belongs to. Stored as TEXT in the database
/// using the wire strings below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortfolioCategory {
    #[serde(rename = "Phase 1")]
    Phase1,
    #[serde(rename = "Phase 2")]
    Phase2,
    #[serde(rename = "Phase 3")]
    Phase3,
    #[serde(rename = "Other")]
    Other,
}

/// All valid category strings.
const VALID_CATEGORY_STRINGS: &[&str] = &["Phase 1", "Phase 2", "Phase 3", "Other"];

impl PortfolioCategory {
    /// Return the category as its stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phase1 => "Phase 1",
            Self::Phase2 => "Phase 2",
            Self::Phase3 => "Phase 3",
            Self::Other => "Other",
        }
    }

    /// Parse a category from its stored string form.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "Phase 1" => Ok(Self::Phase1),
            "Phase 2" => Ok(Self::Phase2),
            "Phase 3" => Ok(Self::Phase3),
            "Other" => Ok(Self::Other),
            _ => Err(CoreError::Validation(format!(
                "Invalid portfolio category '{s}'. Must be one of: {}",
                VALID_CATEGORY_STRINGS.join(", ")
            ))),
        }
    }
}

impl Default for PortfolioCategory {
    fn default() -> Self {
        Self::Other
    }
}
