use crate::Project;

use serde::{Deserialize, Serialize};

/// Project wire shape shared by server responses and the client.
/// Timestamps are unix-epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub project_name: String,
    pub project_description: String,
    pub skill_set: Vec<String>,
    pub no_of_members: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            project_name: p.project_name,
            project_description: p.project_description,
            skill_set: p.skill_set,
            no_of_members: p.no_of_members.as_str().to_string(),
            is_active: p.is_active,
            created_at: p.created_at.timestamp_millis(),
            updated_at: p.updated_at.timestamp_millis(),
        }
    }
}
