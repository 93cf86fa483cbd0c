//! Portfolio entity model and DTOs.

use ctms_core::category::PortfolioCategory;
use ctms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::investigator::Investigator;

/// A row from the `portfolios` table.
///
/// `category` holds the stored string form; parse it with
/// [`PortfolioCategory::from_str`] when the enum is needed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Portfolio {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub is_active: bool,
    pub progress: i32,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A portfolio with its associated investigators attached.
///
/// Returned by single-entity reads; bulk listings skip the join.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioWithInvestigators {
    #[serde(flatten)]
    pub portfolio: Portfolio,
    pub investigators: Vec<Investigator>,
}

/// DTO for creating a new portfolio.
#[derive(Debug, Deserialize)]
pub struct CreatePortfolio {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<PortfolioCategory>,
    pub is_active: Option<bool>,
    pub progress: Option<i32>,
    pub tags: Option<Vec<String>>,
}

/// DTO for updating an existing portfolio. All fields are optional;
/// only populated fields are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePortfolio {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<PortfolioCategory>,
    pub is_active: Option<bool>,
    pub progress: Option<i32>,
    pub tags: Option<Vec<String>>,
}
