//! Repository for the `portfolios` table.

use ctms_core::types::DbId;
use sqlx::PgPool;

use crate::models::portfolio::{CreatePortfolio, Portfolio, UpdatePortfolio};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, category, is_active, progress, tags, created_at, updated_at";

/// Provides CRUD operations for portfolios.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// Insert a new portfolio, returning the created row.
    ///
    /// Omitted optional fields fall back to the column defaults:
    /// category `'Other'`, `is_active` true, `progress` 0, empty tags.
    pub async fn create(pool: &PgPool, input: &CreatePortfolio) -> Result<Portfolio, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolios (title, description, category, is_active, progress, tags)
             VALUES ($1, $2, COALESCE($3, 'Other'), COALESCE($4, true), COALESCE($5, 0),
                     COALESCE($6, '{{}}'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category.map(|c| c.as_str()))
            .bind(input.is_active)
            .bind(input.progress)
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    /// Find a portfolio by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Portfolio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolios WHERE id = $1");
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a portfolio by its exact title.
    pub async fn find_by_title(
        pool: &PgPool,
        title: &str,
    ) -> Result<Option<Portfolio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolios WHERE title = $1");
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List all portfolios ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Portfolio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolios ORDER BY created_at DESC");
        sqlx::query_as::<_, Portfolio>(&query).fetch_all(pool).await
    }

    /// List active portfolios, most recently created first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Portfolio>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolios WHERE is_active = true ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Portfolio>(&query).fetch_all(pool).await
    }

    /// List portfolios in the given category, most recently created first.
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<Portfolio>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM portfolios WHERE category = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// List portfolios linked to the given investigator, most recently
    /// created first. An investigator with no links yields an empty vector.
    pub async fn list_by_investigator(
        pool: &PgPool,
        investigator_id: DbId,
    ) -> Result<Vec<Portfolio>, sqlx::Error> {
        let query = format!(
            "SELECT p.id, p.title, p.description, p.category, p.is_active, p.progress, \
                    p.tags, p.created_at, p.updated_at
             FROM portfolios p
             JOIN portfolio_investigators pi ON pi.portfolio_id = p.id
             WHERE pi.investigator_id = $1
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(investigator_id)
            .fetch_all(pool)
            .await
    }

    /// Update a portfolio. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePortfolio,
    ) -> Result<Option<Portfolio>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolios SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                is_active = COALESCE($5, is_active),
                progress = COALESCE($6, progress),
                tags = COALESCE($7, tags),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category.map(|c| c.as_str()))
            .bind(input.is_active)
            .bind(input.progress)
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    /// Delete a portfolio and all of its association rows in one
    /// transaction. Returns `true` if the portfolio row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM portfolio_investigators WHERE portfolio_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM portfolios WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
