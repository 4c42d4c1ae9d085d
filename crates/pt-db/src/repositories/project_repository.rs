//! Project repository for CRUD operations on the projects table.
//!
//! Every persisted row has already passed the pt-core validation rule set;
//! the repository never writes an unvalidated draft.

use crate::{DbError, Result as DbErrorResult};

use pt_core::{Project, TeamSize};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        let skill_set = serde_json::to_string(&project.skill_set).map_err(|e| {
            DbError::CorruptRow {
                message: format!("Failed to encode skill_set: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        sqlx::query(
            r#"
                INSERT INTO projects (
                    id, project_name, project_description, skill_set,
                    no_of_members, is_active, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.project_name)
        .bind(&project.project_description)
        .bind(skill_set)
        .bind(project.no_of_members.as_str())
        .bind(project.is_active)
        .bind(project.created_at.timestamp_millis())
        .bind(project.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(
            r#"
                SELECT id, project_name, project_description, skill_set,
                    no_of_members, is_active, created_at, updated_at
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_row).transpose()
    }

    /// All projects, newest first
    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(
            r#"
                SELECT id, project_name, project_description, skill_set,
                    no_of_members, is_active, created_at, updated_at
                FROM projects
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_row).collect()
    }

    /// Full replacement of the mutable fields. Returns false when no row
    /// matched the id.
    pub async fn update(&self, project: &Project) -> DbErrorResult<bool> {
        let skill_set = serde_json::to_string(&project.skill_set).map_err(|e| {
            DbError::CorruptRow {
                message: format!("Failed to encode skill_set: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let result = sqlx::query(
            r#"
                UPDATE projects
                SET project_name = ?, project_description = ?, skill_set = ?,
                    no_of_members = ?, is_active = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.project_name)
        .bind(&project.project_description)
        .bind(skill_set)
        .bind(project.no_of_members.as_str())
        .bind(project.is_active)
        .bind(project.updated_at.timestamp_millis())
        .bind(project.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns false when no row matched the id.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[track_caller]
fn corrupt(message: String) -> DbError {
    DbError::CorruptRow {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

fn map_row(row: SqliteRow) -> DbErrorResult<Project> {
    let id: String = row.try_get("id")?;
    let skill_set_json: String = row.try_get("skill_set")?;
    let no_of_members: String = row.try_get("no_of_members")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Project {
        id: Uuid::parse_str(&id)
            .map_err(|e| corrupt(format!("Invalid UUID in projects.id: {}", e)))?,
        project_name: row.try_get("project_name")?,
        project_description: row.try_get("project_description")?,
        skill_set: serde_json::from_str(&skill_set_json)
            .map_err(|e| corrupt(format!("Invalid JSON in projects.skill_set: {}", e)))?,
        no_of_members: TeamSize::from_str(&no_of_members)
            .map_err(|e| corrupt(format!("Invalid projects.no_of_members: {}", e)))?,
        is_active: row.try_get("is_active")?,
        created_at: DateTime::from_timestamp_millis(created_at)
            .ok_or_else(|| corrupt("Invalid timestamp in projects.created_at".to_string()))?,
        updated_at: DateTime::from_timestamp_millis(updated_at)
            .ok_or_else(|| corrupt("Invalid timestamp in projects.updated_at".to_string()))?,
    })
}
