//! List view state: the last fetched projects plus a local filter term.
//!
//! Filtering never re-queries the server; it recomputes the visible subset
//! against the list fetched on load. A confirmed delete re-fetches the
//! full list. The state lives in this value, owned by whoever renders it.

use crate::{CliClientResult, Client};

use pt_core::ProjectDto;

#[derive(Debug, Default)]
pub struct ProjectListView {
    projects: Vec<ProjectDto>,
    filter: String,
}

#[cfg(test)]
impl ProjectListView {
    /// Test seam: a view over an already-fetched list
    pub(crate) fn with_projects(projects: Vec<ProjectDto>) -> Self {
        Self {
            projects,
            filter: String::new(),
        }
    }
}

impl ProjectListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the full list once, replacing any previous snapshot
    pub async fn load(&mut self, client: &Client) -> CliClientResult<()> {
        self.projects = client.list_projects().await?;
        Ok(())
    }

    /// Change the local filter term. No fetch happens.
    pub fn set_filter(&mut self, term: &str) {
        self.filter = term.to_string();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The full last-fetched list, unfiltered
    pub fn projects(&self) -> &[ProjectDto] {
        &self.projects
    }

    /// The subset matching the filter term: case-insensitive substring
    /// match over projectName and projectDescription
    pub fn visible(&self) -> Vec<&ProjectDto> {
        let term = self.filter.to_lowercase();
        self.projects
            .iter()
            .filter(|p| {
                term.is_empty()
                    || p.project_name.to_lowercase().contains(&term)
                    || p.project_description.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Delete a project, then re-fetch the full list.
    /// Returns the deleted record's prior state.
    pub async fn delete(&mut self, client: &Client, id: &str) -> CliClientResult<ProjectDto> {
        let deleted = client.delete_project(id).await?;
        self.load(client).await?;
        Ok(deleted)
    }
}
