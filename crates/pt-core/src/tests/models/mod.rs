mod project;
mod project_draft;
mod team_size;
