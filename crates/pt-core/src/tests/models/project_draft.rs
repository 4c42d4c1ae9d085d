use crate::{CoreError, ProjectDraft, TeamSize};

fn valid_draft() -> ProjectDraft {
    ProjectDraft {
        project_name: "Alpha".to_string(),
        project_description: "Desc".to_string(),
        skill_set: vec!["Java".to_string()],
        no_of_members: "3".to_string(),
        is_active: false,
    }
}

fn assert_first_failing_field(draft: &ProjectDraft, expected: &str) {
    match draft.validate() {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field, expected),
        other => panic!("expected validation error on {}, got {:?}", expected, other),
    }
}

#[test]
fn test_valid_draft_passes() {
    let validated = valid_draft().validate().unwrap();

    assert_eq!(validated.project_name, "Alpha");
    assert_eq!(validated.no_of_members, TeamSize::Three);
    assert!(!validated.is_active);
}

#[test]
fn test_empty_name_fails_on_project_name() {
    let mut draft = valid_draft();
    draft.project_name = String::new();
    assert_first_failing_field(&draft, "projectName");
}

#[test]
fn test_whitespace_only_name_fails() {
    let mut draft = valid_draft();
    draft.project_name = "   ".to_string();
    assert_first_failing_field(&draft, "projectName");
}

#[test]
fn test_empty_description_fails_on_project_description() {
    let mut draft = valid_draft();
    draft.project_description = " ".to_string();
    assert_first_failing_field(&draft, "projectDescription");
}

#[test]
fn test_empty_skill_set_fails_on_skill_set() {
    let mut draft = valid_draft();
    draft.skill_set.clear();
    assert_first_failing_field(&draft, "skillSet");
}

#[test]
fn test_missing_members_fails_on_no_of_members() {
    let mut draft = valid_draft();
    draft.no_of_members = String::new();
    assert_first_failing_field(&draft, "noOfMembers");
}

#[test]
fn test_out_of_range_members_fails_on_no_of_members() {
    let mut draft = valid_draft();
    draft.no_of_members = "7".to_string();
    assert_first_failing_field(&draft, "noOfMembers");
}

#[test]
fn test_fields_are_checked_in_fixed_order() {
    // Everything is wrong; projectName must be reported first
    let draft = ProjectDraft::default();
    assert_first_failing_field(&draft, "projectName");
}

#[test]
fn test_field_errors_collects_every_offending_field() {
    let draft = ProjectDraft::default();
    let errors = draft.field_errors();

    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["projectName", "projectDescription", "skillSet", "noOfMembers"]
    );
}

#[test]
fn test_validation_error_message_names_the_field() {
    let mut draft = valid_draft();
    draft.project_name = String::new();

    let err = draft.validate().unwrap_err();
    assert!(err.to_string().contains("Project Name is required"));
}
