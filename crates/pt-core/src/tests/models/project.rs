use crate::{Project, ProjectDraft, TeamSize};

fn valid_draft() -> ProjectDraft {
    ProjectDraft {
        project_name: "Alpha".to_string(),
        project_description: "First project".to_string(),
        skill_set: vec!["Java".to_string(), "SQL Server".to_string()],
        no_of_members: "3".to_string(),
        is_active: false,
    }
}

#[test]
fn test_project_new() {
    let project = Project::new(valid_draft().validate().unwrap());

    assert_eq!(project.project_name, "Alpha");
    assert_eq!(project.project_description, "First project");
    assert_eq!(project.skill_set, vec!["Java", "SQL Server"]);
    assert_eq!(project.no_of_members, TeamSize::Three);
    assert!(!project.is_active);
    assert_eq!(project.created_at, project.updated_at);
}

#[test]
fn test_project_new_trims_text_fields() {
    let mut draft = valid_draft();
    draft.project_name = " Alpha ".to_string();
    draft.project_description = "  Desc\t".to_string();

    let project = Project::new(draft.validate().unwrap());

    assert_eq!(project.project_name, "Alpha");
    assert_eq!(project.project_description, "Desc");
}

#[test]
fn test_project_apply_replaces_mutable_fields_only() {
    let mut project = Project::new(valid_draft().validate().unwrap());
    let id = project.id;
    let created_at = project.created_at;

    let mut draft = valid_draft();
    draft.project_name = "Beta".to_string();
    draft.skill_set = vec!["PHP".to_string()];
    draft.no_of_members = "5+".to_string();
    draft.is_active = true;

    project.apply(draft.validate().unwrap());

    assert_eq!(project.id, id);
    assert_eq!(project.created_at, created_at);
    assert_eq!(project.project_name, "Beta");
    assert_eq!(project.skill_set, vec!["PHP"]);
    assert_eq!(project.no_of_members, TeamSize::FivePlus);
    assert!(project.is_active);
    assert!(project.updated_at >= created_at);
}

#[test]
fn test_project_timestamps_are_millisecond_precision() {
    let project = Project::new(valid_draft().validate().unwrap());

    assert_eq!(project.created_at.timestamp_subsec_micros() % 1000, 0);
    assert_eq!(project.updated_at.timestamp_subsec_micros() % 1000, 0);
}
