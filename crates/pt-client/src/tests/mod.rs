
use pt_core::ProjectDto;

pub(crate) fn project_dto(name: &str, description: &str) -> ProjectDto {
    ProjectDto {
        id: "00000000-0000-0000-0000-000000000001".to_string(),
        project_name: name.to_string(),
        project_description: description.to_string(),
        skill_set: vec!["Java".to_string()],
        no_of_members: "2".to_string(),
        is_active: false,
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_000_000,
    }
}
