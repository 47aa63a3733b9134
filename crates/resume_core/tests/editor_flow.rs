use resume_core::service::skills::available_suggestions;
use resume_core::{
    render_preview, theme_options, EditError, EducationDraft, ExperienceDraft, PersonalInfo,
    PreviewBody, PreviewSection, RandomIdGenerator, ResumeSession, SequentialIdGenerator,
    SessionConfig, Theme,
};

fn session() -> ResumeSession {
    ResumeSession::open(&SessionConfig::default()).unwrap()
}

#[test]
fn form_flow_builds_previewable_resume() {
    let mut session = session();
    let mut editor = session.editor(SequentialIdGenerator::new("e"));

    editor.set_personal_info(PersonalInfo {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        location: "London".to_string(),
        ..PersonalInfo::default()
    });
    let experience_id = editor
        .add_experience(ExperienceDraft {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-01".to_string(),
            current: true,
            description: "Built things".to_string(),
            ..ExperienceDraft::default()
        })
        .unwrap();
    assert_eq!(experience_id, "e1");
    assert!(editor.add_skill("Rust"));
    assert!(editor.set_theme(Theme::Classic));

    let preview = session.preview();
    assert_eq!(preview.theme, Theme::Classic);
    let current = theme_options(preview.theme)
        .into_iter()
        .find(|option| option.selected)
        .map(|option| option.label);
    assert_eq!(current, Some("Classic"));
    let PreviewBody::Resume { header, sections } = &preview.body else {
        panic!("expected resume body");
    };
    assert_eq!(header.name, "Ada Lovelace");
    let contacts: Vec<&str> = header.contacts.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(contacts, vec!["ada@example.com", "London"]);

    let PreviewSection::Experience(items) = &sections[0] else {
        panic!("experience should be the first section");
    };
    assert_eq!(items[0].date_range, "Jan 2020 - Present");
    assert_eq!(items[0].description.as_deref(), Some("Built things"));

    let text = preview.to_plain_text();
    assert!(text.starts_with("Ada Lovelace\nada@example.com | London\n"));
    assert!(text.contains("\nSkills\nRust\n"));
}

#[test]
fn editing_an_entry_keeps_its_position() {
    let mut session = session();
    let mut editor = session.editor(SequentialIdGenerator::new("d"));

    let first = editor
        .add_education(EducationDraft {
            institution: "MIT".to_string(),
            degree: "BS".to_string(),
            gpa: "3.9".to_string(),
            ..EducationDraft::default()
        })
        .unwrap();
    editor
        .add_education(EducationDraft {
            institution: "ETH".to_string(),
            degree: "MS".to_string(),
            ..EducationDraft::default()
        })
        .unwrap();

    let mut draft = EducationDraft::from_entry(
        editor.store().snapshot().education_entry(&first).unwrap(),
    );
    draft.gpa = "4.0".to_string();
    editor.update_education(&first, draft).unwrap();

    let education = &session.store().snapshot().education;
    assert_eq!(education.len(), 2);
    assert_eq!(education[0].id, "d1");
    assert_eq!(education[0].gpa, "4.0");
    assert_eq!(education[1].institution, "ETH");
}

#[test]
fn update_of_deleted_entry_is_reported() {
    let mut session = session();
    let mut editor = session.editor(RandomIdGenerator);

    let id = editor
        .add_experience(ExperienceDraft {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            ..ExperienceDraft::default()
        })
        .unwrap();
    assert_eq!(id.len(), 9);
    assert!(editor.delete_experience(&id));
    assert!(!editor.delete_experience(&id));

    let err = editor
        .update_experience(
            &id,
            ExperienceDraft {
                company: "Acme".to_string(),
                position: "Lead".to_string(),
                ..ExperienceDraft::default()
            },
        )
        .unwrap_err();
    assert_eq!(err, EditError::EntryNotFound(id));
    assert!(session.store().snapshot().experiences.is_empty());
}

#[test]
fn suggestions_shrink_as_skills_are_added() {
    let mut session = session();
    let before = available_suggestions(&session.store().snapshot().skills).len();

    let mut editor = session.editor(SequentialIdGenerator::new("x"));
    assert!(editor.add_skill("Docker"));
    assert!(!editor.add_skill(" Docker "));

    let skills = &session.store().snapshot().skills;
    assert_eq!(skills, &vec!["Docker".to_string()]);
    assert_eq!(available_suggestions(skills).len(), before - 1);
}

#[test]
fn empty_session_renders_empty_state() {
    let session = session();
    let preview = render_preview(session.store().snapshot());

    assert_eq!(preview.body, PreviewBody::Empty);
    assert_eq!(preview, session.preview());
}
