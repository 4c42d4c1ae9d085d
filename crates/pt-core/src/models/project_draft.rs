//! Input shape and validation rule set for create and update.
//!
//! The same rules run server-side before any write and client-side before
//! any submit. Fields are checked in a fixed order: projectName,
//! projectDescription, skillSet, noOfMembers.

use crate::{CoreError, Result as CoreErrorResult, TeamSize};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Mutable project fields as submitted by a caller, prior to validation.
/// Team size arrives as plain text so an out-of-range value surfaces as a
/// field-level validation error rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub project_description: String,
    #[serde(default)]
    pub skill_set: Vec<String>,
    #[serde(default)]
    pub no_of_members: String,
    #[serde(default)]
    pub is_active: bool,
}

/// A draft that passed the rule set: text fields trimmed, team size parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub project_name: String,
    pub project_description: String,
    pub skill_set: Vec<String>,
    pub no_of_members: TeamSize,
    pub is_active: bool,
}

/// A single failing rule, addressed by wire field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl ProjectDraft {
    /// Run every rule and collect one message per offending field,
    /// in check order. Empty means the draft is valid.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.project_name.trim().is_empty() {
            errors.push(FieldError {
                field: "projectName",
                message: "Project Name is required".to_string(),
            });
        }

        if self.project_description.trim().is_empty() {
            errors.push(FieldError {
                field: "projectDescription",
                message: "Project Description is required".to_string(),
            });
        }

        if self.skill_set.is_empty() {
            errors.push(FieldError {
                field: "skillSet",
                message: "At least one skill must be selected".to_string(),
            });
        }

        if self.no_of_members.is_empty() {
            errors.push(FieldError {
                field: "noOfMembers",
                message: "Number of Members is required".to_string(),
            });
        } else if TeamSize::from_str(&self.no_of_members).is_err() {
            errors.push(FieldError {
                field: "noOfMembers",
                message: format!(
                    "Number of Members must be one of: {}",
                    TeamSize::ALLOWED.join(", ")
                ),
            });
        }

        errors
    }

    /// Validate the draft, failing on the first offending field.
    /// On success returns the normalized fields ready to persist.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<ValidatedDraft> {
        if let Some(first) = self.field_errors().into_iter().next() {
            return Err(CoreError::Validation {
                field: first.field,
                message: first.message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // field_errors() guarantees the parse succeeds here
        let no_of_members =
            TeamSize::from_str(&self.no_of_members).map_err(|e| match e {
                CoreError::InvalidTeamSize { value, location } => CoreError::Validation {
                    field: "noOfMembers",
                    message: format!("Invalid team size: {}", value),
                    location,
                },
                other => other,
            })?;

        Ok(ValidatedDraft {
            project_name: self.project_name.trim().to_string(),
            project_description: self.project_description.trim().to_string(),
            skill_set: self.skill_set.clone(),
            no_of_members,
            is_active: self.is_active,
        })
    }
}
