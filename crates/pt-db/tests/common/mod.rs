#![allow(dead_code)]

use pt_core::{Project, ProjectDraft};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Builds a project from a valid draft
pub fn create_test_project(name: &str) -> Project {
    let draft = ProjectDraft {
        project_name: name.to_string(),
        project_description: format!("{} description", name),
        skill_set: vec!["Java".to_string(), "MongoDB".to_string()],
        no_of_members: "2".to_string(),
        is_active: false,
    };

    Project::new(draft.validate().expect("test draft must be valid"))
}

/// Builds a project with an explicit creation instant, for ordering tests
pub fn create_test_project_at(name: &str, created_at: DateTime<Utc>) -> Project {
    let mut project = create_test_project(name);
    project.created_at = created_at;
    project.updated_at = created_at;
    project
}
