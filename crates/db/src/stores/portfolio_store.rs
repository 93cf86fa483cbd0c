//! Portfolio store: CRUD, filtered listing, and assignment operations.

use ctms_core::category::PortfolioCategory;
use ctms_core::error::CoreError;
use ctms_core::types::DbId;
use ctms_core::validation::validate_progress;
use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};
use crate::models::portfolio::{
    CreatePortfolio, Portfolio, PortfolioWithInvestigators, UpdatePortfolio,
};
use crate::repositories::{AssignmentRepo, InvestigatorRepo, PortfolioRepo};

const DUPLICATE_TITLE_MSG: &str = "Portfolio with this title already exists";

/// Domain operations on portfolios.
pub struct PortfolioStore;

impl PortfolioStore {
    /// Create a portfolio.
    ///
    /// Fails with Conflict if the title is already taken. The pre-check
    /// gives a friendly error on the common path; `uq_portfolios_title`
    /// catches the race between two concurrent writers proposing the
    /// same title.
    pub async fn create(pool: &PgPool, input: &CreatePortfolio) -> StoreResult<Portfolio> {
        if let Some(progress) = input.progress {
            validate_progress(progress)?;
        }

        if PortfolioRepo::find_by_title(pool, &input.title)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(DUPLICATE_TITLE_MSG.to_string()).into());
        }

        let portfolio = PortfolioRepo::create(pool, input)
            .await
            .map_err(|e| StoreError::from_sqlx(e, DUPLICATE_TITLE_MSG))?;
        tracing::debug!(id = portfolio.id, title = %portfolio.title, "Created portfolio");
        Ok(portfolio)
    }

    /// Fetch a portfolio with its associated investigators attached.
    pub async fn get(pool: &PgPool, id: DbId) -> StoreResult<PortfolioWithInvestigators> {
        let portfolio = PortfolioRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Portfolio",
                id,
            })?;
        let investigators = InvestigatorRepo::list_by_portfolio(pool, id).await?;
        Ok(PortfolioWithInvestigators {
            portfolio,
            investigators,
        })
    }

    /// List all portfolios, most recently created first. No relations
    /// attached; bulk listings skip the join cost.
    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Portfolio>> {
        Ok(PortfolioRepo::list(pool).await?)
    }

    /// List active portfolios, most recently created first.
    pub async fn list_active(pool: &PgPool) -> StoreResult<Vec<Portfolio>> {
        Ok(PortfolioRepo::list_active(pool).await?)
    }

    /// List portfolios in the given category, most recently created first.
    pub async fn list_by_category(
        pool: &PgPool,
        category: PortfolioCategory,
    ) -> StoreResult<Vec<Portfolio>> {
        Ok(PortfolioRepo::list_by_category(pool, category.as_str()).await?)
    }

    /// Apply a partial update.
    ///
    /// The title uniqueness check runs only when the update proposes a
    /// title different from the current one. `id` and `created_at` never
    /// change; `updated_at` always advances.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePortfolio,
    ) -> StoreResult<Portfolio> {
        let current = PortfolioRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Portfolio",
                id,
            })?;

        if let Some(progress) = input.progress {
            validate_progress(progress)?;
        }

        if let Some(title) = &input.title {
            if *title != current.title
                && PortfolioRepo::find_by_title(pool, title).await?.is_some()
            {
                return Err(CoreError::Conflict(DUPLICATE_TITLE_MSG.to_string()).into());
            }
        }

        PortfolioRepo::update(pool, id, input)
            .await
            .map_err(|e| StoreError::from_sqlx(e, DUPLICATE_TITLE_MSG))?
            .ok_or_else(|| {
                // Row vanished between the read and the write.
                CoreError::NotFound {
                    entity: "Portfolio",
                    id,
                }
                .into()
            })
    }

    /// Delete a portfolio and every association row referencing it.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<()> {
        let deleted = PortfolioRepo::delete(pool, id).await?;
        if !deleted {
            return Err(CoreError::NotFound {
                entity: "Portfolio",
                id,
            }
            .into());
        }
        tracing::debug!(id, "Deleted portfolio");
        Ok(())
    }

    /// Link an investigator to a portfolio.
    ///
    /// Both sides must exist; linking an already-linked pair is a no-op.
    pub async fn assign_investigator(
        pool: &PgPool,
        portfolio_id: DbId,
        investigator_id: DbId,
    ) -> StoreResult<()> {
        if PortfolioRepo::find_by_id(pool, portfolio_id).await?.is_none() {
            return Err(CoreError::NotFound {
                entity: "Portfolio",
                id: portfolio_id,
            }
            .into());
        }
        if InvestigatorRepo::find_by_id(pool, investigator_id)
            .await?
            .is_none()
        {
            return Err(CoreError::NotFound {
                entity: "Investigator",
                id: investigator_id,
            }
            .into());
        }
        AssignmentRepo::link(pool, portfolio_id, investigator_id).await?;
        Ok(())
    }

    /// Remove the link between an investigator and a portfolio.
    ///
    /// Both sides must exist; unlinking a pair that was never linked is
    /// a no-op.
    pub async fn unassign_investigator(
        pool: &PgPool,
        portfolio_id: DbId,
        investigator_id: DbId,
    ) -> StoreResult<()> {
        if PortfolioRepo::find_by_id(pool, portfolio_id).await?.is_none() {
            return Err(CoreError::NotFound {
                entity: "Portfolio",
                id: portfolio_id,
            }
            .into());
        }
        if InvestigatorRepo::find_by_id(pool, investigator_id)
            .await?
            .is_none()
        {
            return Err(CoreError::NotFound {
                entity: "Investigator",
                id: investigator_id,
            }
            .into());
        }
        AssignmentRepo::unlink(pool, portfolio_id, investigator_id).await?;
        Ok(())
    }
}
