//! Repository for the `portfolio_investigators` junction table.
//!
//! Association rows have no identity of their own beyond the pair they
//! join. The pair is unique (`uq_portfolio_investigators_pair`), so
//! linking is idempotent by construction.

use ctms_core::types::DbId;
use sqlx::PgPool;

/// Provides link/unlink operations on the portfolio-investigator pair.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Link an investigator to a portfolio.
    ///
    /// Uses `INSERT ... ON CONFLICT DO NOTHING` against the pair
    /// constraint: linking an already-linked pair is a no-op. Returns
    /// `true` if a new row was inserted.
    pub async fn link(
        pool: &PgPool,
        portfolio_id: DbId,
        investigator_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO portfolio_investigators (portfolio_id, investigator_id) \
             VALUES ($1, $2) \
             ON CONFLICT (portfolio_id, investigator_id) DO NOTHING",
        )
        .bind(portfolio_id)
        .bind(investigator_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove the link between an investigator and a portfolio.
    ///
    /// Returns `true` if a row was removed; unlinking a pair that was
    /// never linked is a no-op.
    pub async fn unlink(
        pool: &PgPool,
        portfolio_id: DbId,
        investigator_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM portfolio_investigators \
             WHERE portfolio_id = $1 AND investigator_id = $2",
        )
        .bind(portfolio_id)
        .bind(investigator_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the given pair is currently linked.
    pub async fn is_linked(
        pool: &PgPool,
        portfolio_id: DbId,
        investigator_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS( \
                SELECT 1 FROM portfolio_investigators \
                WHERE portfolio_id = $1 AND investigator_id = $2)",
        )
        .bind(portfolio_id)
        .bind(investigator_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Count association rows referencing the given portfolio.
    pub async fn count_for_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM portfolio_investigators WHERE portfolio_id = $1")
                .bind(portfolio_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
