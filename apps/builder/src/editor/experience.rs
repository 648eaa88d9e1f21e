use crate::completion::SectionId;
use crate::editor::form::{EntryForm, FieldView, FormView, InputKind, SubItemsView};
use crate::editor::{push_line, remove_line, replace_entry, set_line, CollectionEditor, ACHIEVEMENT_FLOOR};
use crate::models::resume::{EntryId, Experience};

/// One field of an `Experience` entry, carrying its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperienceField {
    Company(String),
    Position(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Description(String),
    Achievements(Vec<String>),
}

pub struct ExperienceEditor;

impl CollectionEditor for ExperienceEditor {
    type Item = Experience;
    type Field = ExperienceField;

    fn new_item() -> Experience {
        Experience::default()
    }

    fn apply_field(item: &Experience, field: ExperienceField) -> Experience {
        let mut next = item.clone();
        match field {
            ExperienceField::Company(v) => next.company = v,
            ExperienceField::Position(v) => next.position = v,
            ExperienceField::StartDate(v) => next.start_date = v,
            ExperienceField::EndDate(v) => next.end_date = v,
            // end_date is kept as-is; consumers suppress it while current.
            ExperienceField::Current(v) => next.current = v,
            ExperienceField::Description(v) => next.description = v,
            ExperienceField::Achievements(v) => next.achievements = v,
        }
        next
    }

    fn form(items: &[Experience]) -> FormView {
        FormView {
            section: SectionId::Experience,
            title: "Work Experience",
            add_label: Some("Add Experience"),
            empty_hint: Some("No work experience added yet. Click \"Add Experience\" to get started."),
            entries: items
                .iter()
                .enumerate()
                .map(|(i, exp)| EntryForm {
                    id: Some(exp.id),
                    heading: format!("Experience #{}", i + 1),
                    fields: vec![
                        FieldView::new("company", "Company", &exp.company).required(),
                        FieldView::new("position", "Position", &exp.position).required(),
                        FieldView::new("startDate", "Start Date", &exp.start_date)
                            .kind(InputKind::Month)
                            .required(),
                        FieldView::new("endDate", "End Date", &exp.end_date)
                            .kind(InputKind::Month)
                            .disabled_if(exp.current),
                        FieldView::new("current", "I currently work here", exp.current.to_string())
                            .kind(InputKind::Checkbox),
                        FieldView::new("description", "Description", &exp.description)
                            .kind(InputKind::TextArea),
                    ],
                    sub_items: Some(SubItemsView {
                        label: "Key Achievements",
                        items: exp.achievements.clone(),
                        can_remove: exp.achievements.len() > ACHIEVEMENT_FLOOR,
                    }),
                })
                .collect(),
        }
    }
}

impl ExperienceEditor {
    pub fn add_achievement(items: &[Experience], id: EntryId) -> Vec<Experience> {
        replace_entry(items, id, |exp| Experience {
            achievements: push_line(&exp.achievements),
            ..exp.clone()
        })
    }

    pub fn update_achievement(
        items: &[Experience],
        id: EntryId,
        index: usize,
        value: &str,
    ) -> Vec<Experience> {
        replace_entry(items, id, |exp| Experience {
            achievements: set_line(&exp.achievements, index, value),
            ..exp.clone()
        })
    }

    /// Removes one achievement line; a no-op when only one line remains.
    pub fn remove_achievement(items: &[Experience], id: EntryId, index: usize) -> Vec<Experience> {
        replace_entry(items, id, |exp| Experience {
            achievements: remove_line(&exp.achievements, index, ACHIEVEMENT_FLOOR),
            ..exp.clone()
        })
    }
}
