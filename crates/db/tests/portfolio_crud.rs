//! Integration tests for portfolio store operations.
//!
//! Exercises create defaults, title uniqueness, filtered listing,
//! partial updates, and delete semantics against a real database.

use assert_matches::assert_matches;
use ctms_core::category::PortfolioCategory;
use ctms_core::error::CoreError;
use ctms_db::error::StoreError;
use ctms_db::models::portfolio::{CreatePortfolio, UpdatePortfolio};
use ctms_db::stores::PortfolioStore;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_portfolio(title: &str) -> CreatePortfolio {
    CreatePortfolio {
        title: title.to_string(),
        description: None,
        category: None,
        is_active: None,
        progress: None,
        tags: None,
    }
}

// ---------------------------------------------------------------------------
// Test: Create applies defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_applies_defaults(pool: PgPool) {
    let portfolio = PortfolioStore::create(&pool, &new_portfolio("Trial A"))
        .await
        .unwrap();

    assert_eq!(portfolio.title, "Trial A");
    assert_eq!(portfolio.category, "Other");
    assert!(portfolio.is_active);
    assert_eq!(portfolio.progress, 0);
    assert!(portfolio.tags.is_empty());
    assert_eq!(portfolio.description, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_explicit_fields(pool: PgPool) {
    let input = CreatePortfolio {
        title: "Trial B".to_string(),
        description: Some("A study of...".to_string()),
        category: Some(PortfolioCategory::Phase1),
        is_active: Some(false),
        progress: Some(50),
        tags: Some(vec!["oncology".to_string(), "phase-1".to_string()]),
    };
    let portfolio = PortfolioStore::create(&pool, &input).await.unwrap();

    assert_eq!(portfolio.category, "Phase 1");
    assert!(!portfolio.is_active);
    assert_eq!(portfolio.progress, 50);
    assert_eq!(portfolio.tags, vec!["oncology", "phase-1"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rejects_out_of_range_progress(pool: PgPool) {
    let mut input = new_portfolio("Trial C");
    input.progress = Some(101);

    let err = PortfolioStore::create(&pool, &input).await.unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::Validation(_)));
}

// ---------------------------------------------------------------------------
// Test: Title uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_title_conflicts_and_leaves_store_unchanged(pool: PgPool) {
    PortfolioStore::create(&pool, &new_portfolio("Trial A"))
        .await
        .unwrap();

    let err = PortfolioStore::create(&pool, &new_portfolio("Trial A"))
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::Conflict(_)));

    let all = PortfolioStore::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_to_taken_title_conflicts(pool: PgPool) {
    PortfolioStore::create(&pool, &new_portfolio("Trial A"))
        .await
        .unwrap();
    let second = PortfolioStore::create(&pool, &new_portfolio("Trial B"))
        .await
        .unwrap();

    let input = UpdatePortfolio {
        title: Some("Trial A".to_string()),
        ..Default::default()
    };
    let err = PortfolioStore::update(&pool, second.id, &input)
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::Conflict(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_keeping_own_title_is_not_a_conflict(pool: PgPool) {
    let portfolio = PortfolioStore::create(&pool, &new_portfolio("Trial A"))
        .await
        .unwrap();

    let input = UpdatePortfolio {
        title: Some("Trial A".to_string()),
        progress: Some(25),
        ..Default::default()
    };
    let updated = PortfolioStore::update(&pool, portfolio.id, &input)
        .await
        .unwrap();
    assert_eq!(updated.progress, 25);
}

// ---------------------------------------------------------------------------
// Test: Get and listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_portfolio_is_not_found(pool: PgPool) {
    let err = PortfolioStore::get(&pool, 9999).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::NotFound {
            entity: "Portfolio",
            id: 9999
        })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_orders_most_recent_first(pool: PgPool) {
    for title in ["First", "Second", "Third"] {
        PortfolioStore::create(&pool, &new_portfolio(title))
            .await
            .unwrap();
    }

    let all = PortfolioStore::list(&pool).await.unwrap();
    assert_eq!(all.len(), 3);
    for pair in all.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_active_filters_inactive(pool: PgPool) {
    PortfolioStore::create(&pool, &new_portfolio("Active"))
        .await
        .unwrap();
    let mut inactive = new_portfolio("Inactive");
    inactive.is_active = Some(false);
    PortfolioStore::create(&pool, &inactive).await.unwrap();

    let active = PortfolioStore::list_active(&pool).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Active");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_category(pool: PgPool) {
    let mut phase1 = new_portfolio("Phase 1 Trial");
    phase1.category = Some(PortfolioCategory::Phase1);
    PortfolioStore::create(&pool, &phase1).await.unwrap();
    PortfolioStore::create(&pool, &new_portfolio("Uncategorized"))
        .await
        .unwrap();

    let found = PortfolioStore::list_by_category(&pool, PortfolioCategory::Phase1)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Phase 1 Trial");

    let other = PortfolioStore::list_by_category(&pool, PortfolioCategory::Phase3)
        .await
        .unwrap();
    assert!(other.is_empty());
}

// ---------------------------------------------------------------------------
// Test: Update preserves identity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_preserves_id_and_created_at(pool: PgPool) {
    let portfolio = PortfolioStore::create(&pool, &new_portfolio("Trial A"))
        .await
        .unwrap();

    let input = UpdatePortfolio {
        description: Some("updated".to_string()),
        ..Default::default()
    };
    let updated = PortfolioStore::update(&pool, portfolio.id, &input)
        .await
        .unwrap();

    assert_eq!(updated.id, portfolio.id);
    assert_eq!(updated.created_at, portfolio.created_at);
    assert!(updated.updated_at > portfolio.updated_at);
    assert_eq!(updated.description.as_deref(), Some("updated"));
    // Untouched fields survive the partial update.
    assert_eq!(updated.title, "Trial A");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_portfolio_is_not_found(pool: PgPool) {
    let input = UpdatePortfolio {
        progress: Some(10),
        ..Default::default()
    };
    let err = PortfolioStore::update(&pool, 9999, &input).await.unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::NotFound { .. }));
}

// ---------------------------------------------------------------------------
// Test: Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_then_get_is_not_found(pool: PgPool) {
    let portfolio = PortfolioStore::create(&pool, &new_portfolio("Trial A"))
        .await
        .unwrap();

    PortfolioStore::delete(&pool, portfolio.id).await.unwrap();

    let err = PortfolioStore::get(&pool, portfolio.id).await.unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::NotFound { .. }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_portfolio_is_not_found(pool: PgPool) {
    let err = PortfolioStore::delete(&pool, 9999).await.unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::NotFound { .. }));
}
