//! Project entity - the sole persisted record of the tracker.

use crate::TeamSize;
use crate::models::project_draft::ValidatedDraft;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked project: name, description, required skills, team size,
/// and an active flag. The id and created_at are assigned exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub project_name: String,
    pub project_description: String,
    /// Ordered, at least one element
    pub skill_set: Vec<String>,
    pub no_of_members: TeamSize,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project from a validated draft, assigning id and timestamps
    pub fn new(draft: ValidatedDraft) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4(),
            project_name: draft.project_name,
            project_description: draft.project_description,
            skill_set: draft.skill_set,
            no_of_members: draft.no_of_members,
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace all mutable fields from a validated draft and refresh
    /// updated_at. Every update is a full replacement; id and created_at
    /// never change.
    pub fn apply(&mut self, draft: ValidatedDraft) {
        self.project_name = draft.project_name;
        self.project_description = draft.project_description;
        self.skill_set = draft.skill_set;
        self.no_of_members = draft.no_of_members;
        self.is_active = draft.is_active;
        self.updated_at = now_millis();
    }
}

/// Current time truncated to millisecond precision, matching what the
/// store persists so records round-trip without drift.
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
