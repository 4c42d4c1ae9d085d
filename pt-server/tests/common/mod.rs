#![allow(dead_code)]

//! Test infrastructure for pt-server API tests

use pt_config::CorsConfig;
use pt_server::AppState;

use axum::Router;
use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/pt-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Build the app with the default CORS allow-list
pub fn build_test_router(state: AppState) -> Router {
    pt_server::build_router(state, &CorsConfig::default())
}

/// Insert a project row directly, with an explicit creation instant
pub async fn seed_project(pool: &SqlitePool, name: &str, created_at_millis: i64) -> uuid::Uuid {
    let project_id = uuid::Uuid::new_v4();

    sqlx::query(
        r#"
            INSERT INTO projects (
                id, project_name, project_description, skill_set,
                no_of_members, is_active, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(project_id.to_string())
    .bind(name)
    .bind(format!("{} description", name))
    .bind(r#"["Java","MongoDB"]"#)
    .bind("2")
    .bind(false)
    .bind(created_at_millis)
    .bind(created_at_millis)
    .execute(pool)
    .await
    .expect("Failed to seed project");

    project_id
}
