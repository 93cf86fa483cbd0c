//! Repository for the `investigators` table.

use ctms_core::types::DbId;
use sqlx::PgPool;

use crate::models::investigator::{CreateInvestigator, Investigator, UpdateInvestigator};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, phone, role, is_active, \
                       specialization, institution, created_at, updated_at";

/// Same columns qualified for joined queries against the junction table.
const QUALIFIED_COLUMNS: &str =
    "i.id, i.first_name, i.last_name, i.email, i.phone, i.role, i.is_active, \
     i.specialization, i.institution, i.created_at, i.updated_at";

/// Provides CRUD operations for investigators.
pub struct InvestigatorRepo;

impl InvestigatorRepo {
    /// Insert a new investigator, returning the created row.
    ///
    /// If `role` is `None` in the input, defaults to `'Sub'`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInvestigator,
    ) -> Result<Investigator, sqlx::Error> {
        let query = format!(
            "INSERT INTO investigators
                (first_name, last_name, email, phone, role, is_active, specialization, institution)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'Sub'), COALESCE($6, true), $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Investigator>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.role.map(|r| r.as_str()))
            .bind(input.is_active)
            .bind(&input.specialization)
            .bind(&input.institution)
            .fetch_one(pool)
            .await
    }

    /// Find an investigator by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Investigator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM investigators WHERE id = $1");
        sqlx::query_as::<_, Investigator>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an investigator by email (case-sensitive).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Investigator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM investigators WHERE email = $1");
        sqlx::query_as::<_, Investigator>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all investigators ordered by last name, then first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Investigator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM investigators ORDER BY last_name, first_name");
        sqlx::query_as::<_, Investigator>(&query)
            .fetch_all(pool)
            .await
    }

    /// List active investigators, same ordering as [`Self::list`].
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Investigator>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM investigators WHERE is_active = true \
             ORDER BY last_name, first_name"
        );
        sqlx::query_as::<_, Investigator>(&query)
            .fetch_all(pool)
            .await
    }

    /// List investigators linked to the given portfolio, ordered by last
    /// name then first name. A portfolio with no links (or an unknown id)
    /// yields an empty vector.
    pub async fn list_by_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<Vec<Investigator>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS}
             FROM investigators i
             JOIN portfolio_investigators pi ON pi.investigator_id = i.id
             WHERE pi.portfolio_id = $1
             ORDER BY i.last_name, i.first_name"
        );
        sqlx::query_as::<_, Investigator>(&query)
            .bind(portfolio_id)
            .fetch_all(pool)
            .await
    }

    /// Update an investigator. Only non-`None` fields in `input` are
    /// applied; `updated_at` is always bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvestigator,
    ) -> Result<Option<Investigator>, sqlx::Error> {
        let query = format!(
            "UPDATE investigators SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                role = COALESCE($6, role),
                is_active = COALESCE($7, is_active),
                specialization = COALESCE($8, specialization),
                institution = COALESCE($9, institution),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Investigator>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.role.map(|r| r.as_str()))
            .bind(input.is_active)
            .bind(&input.specialization)
            .bind(&input.institution)
            .fetch_optional(pool)
            .await
    }

    /// Delete an investigator and all of its association rows in one
    /// transaction. Returns `true` if the investigator row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM portfolio_investigators WHERE investigator_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM investigators WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
