//! Investigator entity model and DTOs.

use ctms_core::role::InvestigatorRole;
use ctms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::portfolio::Portfolio;

/// A row from the `investigators` table.
///
/// `role` holds the stored string form; parse it with
/// [`InvestigatorRole::from_str`] when the enum is needed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Investigator {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub is_active: bool,
    pub specialization: Option<String>,
    pub institution: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An investigator with its associated portfolios attached.
#[derive(Debug, Clone, Serialize)]
pub struct InvestigatorWithPortfolios {
    #[serde(flatten)]
    pub investigator: Investigator,
    pub portfolios: Vec<Portfolio>,
}

/// DTO for creating a new investigator.
#[derive(Debug, Deserialize)]
pub struct CreateInvestigator {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: Option<InvestigatorRole>,
    pub is_active: Option<bool>,
    pub specialization: Option<String>,
    pub institution: Option<String>,
}

/// DTO for updating an existing investigator. All fields are optional;
/// only populated fields are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateInvestigator {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<InvestigatorRole>,
    pub is_active: Option<bool>,
    pub specialization: Option<String>,
    pub institution: Option<String>,
}
