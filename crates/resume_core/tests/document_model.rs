use resume_core::{
    reduce, EducationEntry, ExperienceEntry, PersonalInfo, ResumeCommand, ResumeDocument,
    ResumeStore, Theme,
};

fn experience(id: &str, company: &str) -> ExperienceEntry {
    ExperienceEntry {
        id: id.to_string(),
        company: company.to_string(),
        position: "Engineer".to_string(),
        start_date: "2020-01".to_string(),
        ..ExperienceEntry::default()
    }
}

fn ada() -> PersonalInfo {
    PersonalInfo {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        ..PersonalInfo::default()
    }
}

#[test]
fn experience_sequence_keeps_insertion_order_and_latest_form() {
    let mut store = ResumeStore::new();
    store.add_experience(experience("a", "A"));
    store.add_experience(experience("b", "B"));
    store.add_experience(experience("c", "C"));
    store.add_experience(experience("d", "D"));

    store.update_experience(experience("c", "C-updated"));
    store.delete_experience("b");
    store.update_experience(experience("a", "A-updated"));
    store.delete_experience("d");

    let entries: Vec<(&str, &str)> = store
        .snapshot()
        .experiences
        .iter()
        .map(|entry| (entry.id.as_str(), entry.company.as_str()))
        .collect();
    assert_eq!(entries, vec![("a", "A-updated"), ("c", "C-updated")]);
}

#[test]
fn delete_twice_equals_delete_once() {
    let mut once = ResumeStore::new();
    once.add_experience(experience("e1", "Acme"));
    once.add_experience(experience("e2", "Globex"));
    once.delete_experience("e1");

    let mut twice = ResumeStore::new();
    twice.add_experience(experience("e1", "Acme"));
    twice.add_experience(experience("e2", "Globex"));
    assert!(twice.delete_experience("e1"));
    assert!(!twice.delete_experience("e1"));

    assert_eq!(once.snapshot(), twice.snapshot());
}

#[test]
fn set_skills_stores_exact_sequence_without_dedup() {
    let mut store = ResumeStore::new();
    let skills = vec!["Go".to_string(), "Go".to_string()];

    store.set_skills(skills.clone());
    assert_eq!(store.snapshot().skills, skills);

    let ordered = vec!["Zig".to_string(), "Ada".to_string(), "C".to_string()];
    store.set_skills(ordered.clone());
    assert_eq!(store.snapshot().skills, ordered);
}

#[test]
fn set_theme_changes_only_theme() {
    let mut store = ResumeStore::new();
    store.set_personal_info(ada());
    store.add_experience(experience("e1", "Acme"));
    store.set_skills(vec!["Rust".to_string()]);
    let before = store.snapshot().clone();

    assert!(store.set_theme(Theme::Classic));

    let after = store.snapshot();
    assert_eq!(after.theme, Theme::Classic);
    assert_eq!(after.personal_info, before.personal_info);
    assert_eq!(after.experiences, before.experiences);
    assert_eq!(after.education, before.education);
    assert_eq!(after.skills, before.skills);
}

#[test]
fn personal_info_is_replaced_wholesale() {
    let mut store = ResumeStore::new();
    store.set_personal_info(PersonalInfo {
        phone: "+1 555 0100".to_string(),
        ..ada()
    });

    store.set_personal_info(PersonalInfo {
        full_name: "Grace Hopper".to_string(),
        ..PersonalInfo::default()
    });

    let info = &store.snapshot().personal_info;
    assert_eq!(info.full_name, "Grace Hopper");
    assert!(info.phone.is_empty());
    assert!(info.email.is_empty());
}

#[test]
fn ada_lovelace_scenario() {
    let mut store = ResumeStore::new();
    store.set_personal_info(ada());
    store.add_experience(ExperienceEntry {
        id: "e1".to_string(),
        company: "Acme".to_string(),
        position: "Engineer".to_string(),
        start_date: "2020-01".to_string(),
        end_date: String::new(),
        current: true,
        description: "Built things".to_string(),
    });

    let document = store.snapshot();
    assert_eq!(document.experiences.len(), 1);
    assert_eq!(document.experiences[0].id, "e1");
    assert_eq!(
        resume_core::format_date_range(
            &document.experiences[0].start_date,
            &document.experiences[0].end_date,
            document.experiences[0].current,
        ),
        "Jan 2020 - Present"
    );
}

#[test]
fn education_add_then_update_scenario() {
    let mut store = ResumeStore::new();
    let entry = EducationEntry {
        id: "d1".to_string(),
        institution: "MIT".to_string(),
        degree: "BS".to_string(),
        field: "CS".to_string(),
        start_date: "2016-09".to_string(),
        end_date: "2020-06".to_string(),
        gpa: "3.9".to_string(),
    };
    store.add_education(entry.clone());
    store.update_education(EducationEntry {
        gpa: "4.0".to_string(),
        ..entry
    });

    let education = &store.snapshot().education;
    assert_eq!(education.len(), 1);
    assert_eq!(education[0].gpa, "4.0");
    assert_eq!(education[0].institution, "MIT");
}

#[test]
fn load_document_replaces_everything() {
    let mut store = ResumeStore::new();
    store.add_experience(experience("old", "Old Co"));

    let mut replacement = ResumeDocument::default();
    replacement.personal_info = ada();
    replacement.theme = Theme::Minimal;
    assert!(store.load_document(replacement.clone()));

    assert_eq!(store.snapshot(), &replacement);
}

#[test]
fn reduce_matches_store_dispatch() {
    let commands = vec![
        ResumeCommand::SetPersonalInfo(ada()),
        ResumeCommand::AddExperience(experience("e1", "Acme")),
        ResumeCommand::AddExperience(experience("e1", "Duplicate")),
        ResumeCommand::UpdateExperience(experience("missing", "Nobody")),
        ResumeCommand::SetTheme(Theme::Classic),
        ResumeCommand::DeleteEducation("missing".to_string()),
    ];

    let mut folded = ResumeDocument::default();
    let mut store = ResumeStore::new();
    for command in commands {
        folded = reduce(&folded, command.clone());
        store.dispatch(command);
    }

    assert_eq!(store.snapshot(), &folded);
    assert_eq!(folded.experiences.len(), 1);
    assert_eq!(folded.experiences[0].company, "Acme");
    assert_eq!(store.revision(), 3);
}
