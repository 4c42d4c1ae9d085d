//! Create/edit form state machine.
//!
//! `Editing -> Validating -> Submitting -> Saved`, or back to `Editing`
//! with error state. The same pt-core rule set the server enforces runs
//! before anything is sent, and a failing draft never leaves the form.
//! The full field set is always submitted; there is no partial update.

use crate::{Client, ClientError};

use pt_core::{FieldError, ProjectDraft, ProjectDto};

/// Where a successful submit goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Initial state; also where every failed attempt returns to
    Editing,
    Validating,
    Submitting,
}

/// Result of driving one submit attempt through the state machine
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Persisted; the caller navigates away from the form
    Saved(ProjectDto),
    /// Blocked client-side; per-field messages are on the form
    Rejected,
    /// The server said no; a generic notice is on the form and the
    /// draft is kept for manual retry
    Failed(ClientError),
    /// A submit was already in flight
    Ignored,
}

struct EditingGuard<'a> {
    state: &'a mut FormState,
}

impl Drop for EditingGuard<'_> {
    fn drop(&mut self) {
        *self.state = FormState::Editing;
    }
}

#[derive(Debug)]
pub struct ProjectForm {
    mode: FormMode,
    state: FormState,
    pub draft: ProjectDraft,
    field_errors: Vec<FieldError>,
    notice: Option<String>,
}

impl ProjectForm {
    /// Blank create form
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            state: FormState::Editing,
            draft: ProjectDraft::default(),
            field_errors: Vec::new(),
            notice: None,
        }
    }

    /// Edit form prefilled from an existing record. Skills are carried as
    /// plain strings, same as the create flow.
    pub fn edit(project: &ProjectDto) -> Self {
        Self {
            mode: FormMode::Edit(project.id.clone()),
            state: FormState::Editing,
            draft: ProjectDraft {
                project_name: project.project_name.clone(),
                project_description: project.project_description.clone(),
                skill_set: project.skill_set.clone(),
                no_of_members: project.no_of_members.clone(),
                is_active: project.is_active,
            },
            field_errors: Vec::new(),
            notice: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Per-field messages from the last validation pass
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Generic failure notice from the last submit, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Run the rule set against the current draft. Returns true when the
    /// draft is submittable; otherwise the form returns to Editing with
    /// one message per offending field.
    pub fn validate(&mut self) -> bool {
        self.state = FormState::Validating;
        self.field_errors = self.draft.field_errors();
        self.state = FormState::Editing;
        self.field_errors.is_empty()
    }

    /// Drive one submit attempt. Validation gates the network call; a
    /// submit already in flight is ignored (single in-flight request per
    /// form instance).
    pub async fn submit(&mut self, client: &Client) -> SubmitOutcome {
        if self.state == FormState::Submitting {
            return SubmitOutcome::Ignored;
        }

        if !self.validate() {
            return SubmitOutcome::Rejected;
        }

        self.state = FormState::Submitting;
        self.notice = None;

        let result = {
            // Restores Editing even when the future is dropped mid-await
            let _guard = EditingGuard {
                state: &mut self.state,
            };
            match &self.mode {
                FormMode::Create => client.create_project(&self.draft).await,
                FormMode::Edit(id) => client.update_project(id, &self.draft).await,
            }
        };

        match result {
            Ok(project) => SubmitOutcome::Saved(project),
            Err(e) => {
                // Draft stays populated so the user can retry
                self.notice = Some("Failed to save project. Please try again.".to_string());
                SubmitOutcome::Failed(e)
            }
        }
    }
}
