use crate::completion::SectionId;
use crate::editor::form::{EntryForm, FieldView, FormView, InputKind};
use crate::models::resume::PersonalInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonalField {
    Name(String),
    Email(String),
    Phone(String),
    Location(String),
    /// Empty text clears the link.
    LinkedIn(String),
    Github(String),
    Website(String),
}

fn link(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

/// Editor for the singleton personal-info section.
pub struct PersonalInfoEditor;

impl PersonalInfoEditor {
    pub fn update(info: &PersonalInfo, field: PersonalField) -> PersonalInfo {
        let mut next = info.clone();
        match field {
            PersonalField::Name(v) => next.name = v,
            PersonalField::Email(v) => next.email = v,
            PersonalField::Phone(v) => next.phone = v,
            PersonalField::Location(v) => next.location = v,
            PersonalField::LinkedIn(v) => next.linked_in = link(v),
            PersonalField::Github(v) => next.github = link(v),
            PersonalField::Website(v) => next.website = link(v),
        }
        next
    }

    pub fn form(info: &PersonalInfo) -> FormView {
        let optional = |v: &Option<String>| v.clone().unwrap_or_default();
        FormView {
            section: SectionId::PersonalInfo,
            title: "Personal Information",
            add_label: None,
            empty_hint: None,
            entries: vec![EntryForm {
                id: None,
                heading: "Personal Information".to_string(),
                fields: vec![
                    FieldView::new("name", "Full Name", &info.name).required(),
                    FieldView::new("email", "Email", &info.email)
                        .kind(InputKind::Email)
                        .required(),
                    FieldView::new("phone", "Phone", &info.phone)
                        .kind(InputKind::Tel)
                        .required(),
                    FieldView::new("location", "Location", &info.location).required(),
                    FieldView::new("linkedIn", "LinkedIn", optional(&info.linked_in)),
                    FieldView::new("github", "GitHub", optional(&info.github)),
                    FieldView::new("website", "Website", optional(&info.website))
                        .kind(InputKind::Url),
                ],
                sub_items: None,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_replaces_one_field() {
        let info = PersonalInfo::default();
        let next = PersonalInfoEditor::update(&info, PersonalField::Name("Ada".into()));
        assert_eq!(next.name, "Ada");
        assert_eq!(next.email, "");
        assert_eq!(info.name, "");
    }

    #[test]
    fn test_required_fields_are_what_completes_the_section() {
        let form = PersonalInfoEditor::form(&PersonalInfo::default());
        let required: Vec<&str> = form.entries[0]
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.key)
            .collect();
        assert_eq!(required, vec!["name", "email", "phone", "location"]);

        let info = PersonalInfo {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "555".into(),
            location: "London".into(),
            ..PersonalInfo::default()
        };
        assert!(crate::completion::personal_info_complete(&info));
    }

    #[test]
    fn test_blank_link_clears() {
        let info = PersonalInfoEditor::update(
            &PersonalInfo::default(),
            PersonalField::Github("github.com/ada".into()),
        );
        let info = PersonalInfoEditor::update(&info, PersonalField::Github(" ".into()));
        assert_eq!(info.github, None);
    }
}
