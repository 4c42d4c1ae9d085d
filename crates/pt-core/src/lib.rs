pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::project::Project;
pub use models::project_draft::{FieldError, ProjectDraft, ValidatedDraft};
pub use models::project_dto::ProjectDto;
pub use models::team_size::TeamSize;

#[cfg(test)]
mod tests;
