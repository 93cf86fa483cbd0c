//! Investigator store: CRUD, filtered listing, and portfolio-scoped lookup.

use ctms_core::error::CoreError;
use ctms_core::types::DbId;
use ctms_core::validation::validate_email;
use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};
use crate::models::investigator::{
    CreateInvestigator, Investigator, InvestigatorWithPortfolios, UpdateInvestigator,
};
use crate::repositories::{InvestigatorRepo, PortfolioRepo};

const DUPLICATE_EMAIL_MSG: &str = "Investigator with this email already exists";

/// Domain operations on investigators.
pub struct InvestigatorStore;

impl InvestigatorStore {
    /// Create an investigator.
    ///
    /// The email must pass the basic format rule and be unique. The
    /// pre-check gives a friendly error; `uq_investigators_email` is the
    /// authoritative guard under concurrent writers.
    pub async fn create(pool: &PgPool, input: &CreateInvestigator) -> StoreResult<Investigator> {
        validate_email(&input.email)?;

        if InvestigatorRepo::find_by_email(pool, &input.email)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(DUPLICATE_EMAIL_MSG.to_string()).into());
        }

        let investigator = InvestigatorRepo::create(pool, input)
            .await
            .map_err(|e| StoreError::from_sqlx(e, DUPLICATE_EMAIL_MSG))?;
        tracing::debug!(id = investigator.id, email = %investigator.email, "Created investigator");
        Ok(investigator)
    }

    /// Fetch an investigator with its associated portfolios attached.
    pub async fn get(pool: &PgPool, id: DbId) -> StoreResult<InvestigatorWithPortfolios> {
        let investigator =
            InvestigatorRepo::find_by_id(pool, id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Investigator",
                    id,
                })?;
        let portfolios = PortfolioRepo::list_by_investigator(pool, id).await?;
        Ok(InvestigatorWithPortfolios {
            investigator,
            portfolios,
        })
    }

    /// List all investigators ordered by last name then first name, each
    /// with its portfolios attached.
    pub async fn list(pool: &PgPool) -> StoreResult<Vec<InvestigatorWithPortfolios>> {
        let investigators = InvestigatorRepo::list(pool).await?;
        Self::attach_portfolios(pool, investigators).await
    }

    /// List active investigators, same shape and ordering as [`Self::list`].
    pub async fn list_active(pool: &PgPool) -> StoreResult<Vec<InvestigatorWithPortfolios>> {
        let investigators = InvestigatorRepo::list_active(pool).await?;
        Self::attach_portfolios(pool, investigators).await
    }

    /// List investigators linked to the given portfolio, ordered by last
    /// name then first name.
    ///
    /// An unknown portfolio id yields an empty vector, not NotFound;
    /// distinguishing the two is the caller's concern.
    pub async fn list_by_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> StoreResult<Vec<Investigator>> {
        Ok(InvestigatorRepo::list_by_portfolio(pool, portfolio_id).await?)
    }

    /// Look up an investigator by email. Absent is `None`, not an error.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> StoreResult<Option<Investigator>> {
        Ok(InvestigatorRepo::find_by_email(pool, email).await?)
    }

    /// Apply a partial update.
    ///
    /// The email uniqueness check runs only when the update proposes an
    /// email different from the current one. `id` and `created_at` never
    /// change; `updated_at` always advances.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvestigator,
    ) -> StoreResult<Investigator> {
        let current =
            InvestigatorRepo::find_by_id(pool, id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Investigator",
                    id,
                })?;

        if let Some(email) = &input.email {
            if *email != current.email {
                validate_email(email)?;
                if InvestigatorRepo::find_by_email(pool, email).await?.is_some() {
                    return Err(CoreError::Conflict(DUPLICATE_EMAIL_MSG.to_string()).into());
                }
            }
        }

        InvestigatorRepo::update(pool, id, input)
            .await
            .map_err(|e| StoreError::from_sqlx(e, DUPLICATE_EMAIL_MSG))?
            .ok_or_else(|| {
                // Row vanished between the read and the write.
                CoreError::NotFound {
                    entity: "Investigator",
                    id,
                }
                .into()
            })
    }

    /// Delete an investigator and every association row referencing it.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<()> {
        let deleted = InvestigatorRepo::delete(pool, id).await?;
        if !deleted {
            return Err(CoreError::NotFound {
                entity: "Investigator",
                id,
            }
            .into());
        }
        tracing::debug!(id, "Deleted investigator");
        Ok(())
    }

    async fn attach_portfolios(
        pool: &PgPool,
        investigators: Vec<Investigator>,
    ) -> StoreResult<Vec<InvestigatorWithPortfolios>> {
        let mut out = Vec::with_capacity(investigators.len());
        for investigator in investigators {
            let portfolios = PortfolioRepo::list_by_investigator(pool, investigator.id).await?;
            out.push(InvestigatorWithPortfolios {
                investigator,
                portfolios,
            });
        }
        Ok(out)
    }
}
