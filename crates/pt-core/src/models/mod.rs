pub mod project;
pub mod project_draft;
pub mod project_dto;
pub mod team_size;
