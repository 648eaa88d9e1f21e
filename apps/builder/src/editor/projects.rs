use crate::completion::SectionId;
use crate::editor::form::{EntryForm, FieldView, FormView, InputKind};
use crate::editor::{push_line, remove_line, replace_entry, set_line, CollectionEditor};
use crate::models::resume::{EntryId, Project};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectField {
    Name(String),
    Description(String),
    Technologies(Vec<String>),
    StartDate(String),
    /// Empty means ongoing.
    EndDate(String),
    Url(String),
    Github(String),
}

/// Splits the comma-delimited technologies input into trimmed, non-empty entries.
///
/// Lossy for entries that themselves contain a comma.
pub fn parse_technologies(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins technologies back into the single-line input representation.
pub fn technologies_text(technologies: &[String]) -> String {
    technologies.join(", ")
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

pub struct ProjectsEditor;

impl CollectionEditor for ProjectsEditor {
    type Item = Project;
    type Field = ProjectField;

    fn new_item() -> Project {
        Project::default()
    }

    fn apply_field(item: &Project, field: ProjectField) -> Project {
        let mut next = item.clone();
        match field {
            ProjectField::Name(v) => next.name = v,
            ProjectField::Description(v) => next.description = v,
            ProjectField::Technologies(v) => next.technologies = v,
            ProjectField::StartDate(v) => next.start_date = v,
            ProjectField::EndDate(v) => next.end_date = v,
            ProjectField::Url(v) => next.url = non_empty(v),
            ProjectField::Github(v) => next.github = non_empty(v),
        }
        next
    }

    fn form(items: &[Project]) -> FormView {
        FormView {
            section: SectionId::Projects,
            title: "Projects",
            add_label: Some("Add Project"),
            empty_hint: Some("No projects added yet. Click \"Add Project\" to showcase your work."),
            entries: items
                .iter()
                .enumerate()
                .map(|(i, project)| EntryForm {
                    id: Some(project.id),
                    heading: format!("Project #{}", i + 1),
                    fields: vec![
                        FieldView::new("name", "Project Name", &project.name).required(),
                        FieldView::new("description", "Description", &project.description)
                            .kind(InputKind::TextArea)
                            .required(),
                        FieldView::new(
                            "technologies",
                            "Technologies (comma-separated)",
                            technologies_text(&project.technologies),
                        ),
                        FieldView::new("startDate", "Start Date", &project.start_date)
                            .kind(InputKind::Month),
                        FieldView::new("endDate", "End Date", &project.end_date)
                            .kind(InputKind::Month),
                        FieldView::new("url", "Live URL", project.url.clone().unwrap_or_default())
                            .kind(InputKind::Url),
                        FieldView::new(
                            "github",
                            "GitHub Repository",
                            project.github.clone().unwrap_or_default(),
                        )
                        .kind(InputKind::Url),
                    ],
                    sub_items: None,
                })
                .collect(),
        }
    }
}

impl ProjectsEditor {
    /// Applies the raw comma-delimited technologies input.
    pub fn set_technologies_text(items: &[Project], id: EntryId, text: &str) -> Vec<Project> {
        Self::update(items, id, ProjectField::Technologies(parse_technologies(text)))
    }

    pub fn add_technology(items: &[Project], id: EntryId) -> Vec<Project> {
        replace_entry(items, id, |p| Project {
            technologies: push_line(&p.technologies),
            ..p.clone()
        })
    }

    pub fn update_technology(items: &[Project], id: EntryId, index: usize, value: &str) -> Vec<Project> {
        replace_entry(items, id, |p| Project {
            technologies: set_line(&p.technologies, index, value),
            ..p.clone()
        })
    }

    /// Technologies have no floor; the list may become empty.
    pub fn remove_technology(items: &[Project], id: EntryId, index: usize) -> Vec<Project> {
        replace_entry(items, id, |p| Project {
            technologies: remove_line(&p.technologies, index, 0),
            ..p.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_technologies_trims_and_drops_empties() {
        assert_eq!(
            parse_technologies(" Rust ,, tokio,  ,serde "),
            vec!["Rust".to_string(), "tokio".to_string(), "serde".to_string()]
        );
        assert!(parse_technologies("").is_empty());
    }

    #[test]
    fn test_comma_inside_entry_is_split() {
        // Known limitation of the single-line encoding.
        let techs = vec!["Foo, Inc. SDK".to_string()];
        assert_eq!(parse_technologies(&technologies_text(&techs)).len(), 2);
    }

    #[test]
    fn test_set_technologies_text() {
        let items = ProjectsEditor::add(&[]);
        let id = items[0].id;
        let items = ProjectsEditor::set_technologies_text(&items, id, "React, Node.js");
        assert_eq!(items[0].technologies, vec!["React".to_string(), "Node.js".to_string()]);
    }

    #[test]
    fn test_remove_last_technology_empties_list() {
        let items = ProjectsEditor::add(&[]);
        let id = items[0].id;
        let items = ProjectsEditor::set_technologies_text(&items, id, "Go");
        let items = ProjectsEditor::remove_technology(&items, id, 0);
        assert!(items[0].technologies.is_empty());
    }

    #[test]
    fn test_blank_url_is_none() {
        let items = ProjectsEditor::add(&[]);
        let id = items[0].id;
        let items = ProjectsEditor::update(&items, id, ProjectField::Url("https://x.dev".into()));
        assert!(items[0].url.is_some());
        let items = ProjectsEditor::update(&items, id, ProjectField::Url(String::new()));
        assert!(items[0].url.is_none());
    }

    proptest! {
        #[test]
        fn prop_technologies_round_trip(
            techs in prop::collection::vec("[A-Za-z0-9.+#][A-Za-z0-9.+# ]{0,10}[A-Za-z0-9.+#]", 0..8)
        ) {
            let parsed = parse_technologies(&technologies_text(&techs));
            prop_assert_eq!(parsed, techs);
        }

        #[test]
        fn prop_remove_decreases_len_by_one(len in 2usize..10, index in 0usize..10) {
            let items = ProjectsEditor::add(&[]);
            let id = items[0].id;
            let techs: Vec<String> = (0..len).map(|i| format!("t{i}")).collect();
            let items = ProjectsEditor::update(&items, id, ProjectField::Technologies(techs.clone()));
            let index = index % len;
            let next = ProjectsEditor::remove_technology(&items, id, index);
            let mut expected = techs;
            expected.remove(index);
            prop_assert_eq!(&next[0].technologies, &expected);
        }
    }
}
