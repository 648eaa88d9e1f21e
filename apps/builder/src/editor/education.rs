use crate::completion::SectionId;
use crate::editor::form::{EntryForm, FieldView, FormView, InputKind, SubItemsView};
use crate::editor::{push_line, remove_line, replace_entry, set_line, CollectionEditor, ACHIEVEMENT_FLOOR};
use crate::models::resume::{Education, EntryId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EducationField {
    Institution(String),
    Degree(String),
    Field(String),
    StartDate(String),
    EndDate(String),
    /// Empty text clears the GPA.
    Gpa(String),
    Achievements(Vec<String>),
}

pub struct EducationEditor;

impl CollectionEditor for EducationEditor {
    type Item = Education;
    type Field = EducationField;

    fn new_item() -> Education {
        Education::default()
    }

    fn apply_field(item: &Education, field: EducationField) -> Education {
        let mut next = item.clone();
        match field {
            EducationField::Institution(v) => next.institution = v,
            EducationField::Degree(v) => next.degree = v,
            EducationField::Field(v) => next.field = v,
            EducationField::StartDate(v) => next.start_date = v,
            EducationField::EndDate(v) => next.end_date = v,
            EducationField::Gpa(v) => next.gpa = Some(v).filter(|g| !g.trim().is_empty()),
            EducationField::Achievements(v) => next.achievements = v,
        }
        next
    }

    fn form(items: &[Education]) -> FormView {
        FormView {
            section: SectionId::Education,
            title: "Education",
            add_label: Some("Add Education"),
            empty_hint: Some("No education added yet. Click \"Add Education\" to get started."),
            entries: items
                .iter()
                .enumerate()
                .map(|(i, edu)| EntryForm {
                    id: Some(edu.id),
                    heading: format!("Education #{}", i + 1),
                    fields: vec![
                        FieldView::new("institution", "Institution", &edu.institution).required(),
                        FieldView::new("degree", "Degree", &edu.degree).required(),
                        FieldView::new("field", "Field of Study", &edu.field),
                        FieldView::new("gpa", "GPA", edu.gpa.clone().unwrap_or_default()),
                        FieldView::new("startDate", "Start Date", &edu.start_date)
                            .kind(InputKind::Month)
                            .required(),
                        FieldView::new("endDate", "End Date", &edu.end_date)
                            .kind(InputKind::Month)
                            .required(),
                    ],
                    sub_items: Some(SubItemsView {
                        label: "Achievements & Activities",
                        items: edu.achievements.clone(),
                        can_remove: edu.achievements.len() > ACHIEVEMENT_FLOOR,
                    }),
                })
                .collect(),
        }
    }
}

impl EducationEditor {
    pub fn add_achievement(items: &[Education], id: EntryId) -> Vec<Education> {
        replace_entry(items, id, |edu| Education {
            achievements: push_line(&edu.achievements),
            ..edu.clone()
        })
    }

    pub fn update_achievement(
        items: &[Education],
        id: EntryId,
        index: usize,
        value: &str,
    ) -> Vec<Education> {
        replace_entry(items, id, |edu| Education {
            achievements: set_line(&edu.achievements, index, value),
            ..edu.clone()
        })
    }

    pub fn remove_achievement(items: &[Education], id: EntryId, index: usize) -> Vec<Education> {
        replace_entry(items, id, |edu| Education {
            achievements: remove_line(&edu.achievements, index, ACHIEVEMENT_FLOOR),
            ..edu.clone()
        })
    }
}
