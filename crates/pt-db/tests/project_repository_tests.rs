mod common;

use common::{create_test_pool, create_test_project, create_test_project_at};

use pt_core::TeamSize;
use pt_db::ProjectRepository;

use chrono::DateTime;
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_project_when_created_then_can_be_found_by_id() {
    // Given: An empty test database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());
    let project = create_test_project("Alpha");

    // When: Creating the project
    repo.create(&project).await.unwrap();

    // Then: Finding by ID returns an identical record
    let result = repo.find_by_id(project.id).await.unwrap();

    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found, eq(&project));
}

#[tokio::test]
async fn given_created_project_when_found_then_skill_set_order_is_preserved() {
    // Given: A project with several skills
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());
    let mut project = create_test_project("Alpha");
    project.skill_set = vec![
        "ReactJs".to_string(),
        "NodeJs".to_string(),
        "CSS".to_string(),
    ];

    // When: Creating and reloading it
    repo.create(&project).await.unwrap();
    let found = repo.find_by_id(project.id).await.unwrap().unwrap();

    // Then: Skills come back in submission order
    assert_that!(found.skill_set, eq(&project.skill_set));
}

#[tokio::test]
async fn given_empty_database_when_finding_nonexistent_id_then_returns_none() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    // When: Finding a project that doesn't exist
    let result = repo.find_by_id(Uuid::new_v4()).await.unwrap();

    // Then: Returns None
    assert_that!(result, none());
}

#[tokio::test]
async fn given_projects_created_at_distinct_times_when_listed_then_newest_first() {
    // Given: Three projects created at T1 < T2 < T3
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    let t1 = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
    let t2 = DateTime::from_timestamp_millis(1_700_000_001_000).unwrap();
    let t3 = DateTime::from_timestamp_millis(1_700_000_002_000).unwrap();

    // Insert out of order on purpose
    repo.create(&create_test_project_at("Second", t2)).await.unwrap();
    repo.create(&create_test_project_at("Third", t3)).await.unwrap();
    repo.create(&create_test_project_at("First", t1)).await.unwrap();

    // When: Listing all projects
    let projects = repo.find_all().await.unwrap();

    // Then: Order is T3, T2, T1
    let names: Vec<&str> = projects.iter().map(|p| p.project_name.as_str()).collect();
    assert_that!(names, eq(&vec!["Third", "Second", "First"]));
}

#[tokio::test]
async fn given_empty_database_when_listed_then_returns_empty_vec() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    let projects = repo.find_all().await.unwrap();

    assert_that!(projects, is_empty());
}

#[tokio::test]
async fn given_existing_project_when_updated_then_changes_are_persisted() {
    // Given: A project exists in the database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());
    let mut project = create_test_project("Alpha");
    repo.create(&project).await.unwrap();

    // When: Replacing its mutable fields
    project.project_name = "Alpha Renamed".to_string();
    project.project_description = "New description".to_string();
    project.skill_set = vec!["Flutter".to_string()];
    project.no_of_members = TeamSize::FivePlus;
    project.is_active = true;
    project.updated_at = project.updated_at + chrono::Duration::milliseconds(5);
    let updated = repo.update(&project).await.unwrap();

    // Then: The replacement is persisted in full
    assert_that!(updated, is_true());
    let found = repo.find_by_id(project.id).await.unwrap().unwrap();
    assert_that!(found, eq(&project));
}

#[tokio::test]
async fn given_update_on_nonexistent_id_then_no_row_matches() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);
    let project = create_test_project("Ghost");

    let updated = repo.update(&project).await.unwrap();

    assert_that!(updated, is_false());
}

#[tokio::test]
async fn given_existing_project_when_deleted_then_gone_for_good() {
    // Given: A project exists in the database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());
    let project = create_test_project("Alpha");
    repo.create(&project).await.unwrap();

    // When: Deleting it
    let deleted = repo.delete(project.id).await.unwrap();

    // Then: Hard delete, nothing left behind
    assert_that!(deleted, is_true());
    assert_that!(repo.find_by_id(project.id).await.unwrap(), none());

    // And: Deleting again matches no row
    assert_that!(repo.delete(project.id).await.unwrap(), is_false());
}
