use crate::completion::SectionId;
use crate::editor::form::{EntryForm, FieldView, FormView, InputKind};
use crate::editor::CollectionEditor;
use crate::models::resume::{Skill, SkillCategory, SkillLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillField {
    Name(String),
    Level(SkillLevel),
    Category(SkillCategory),
}

pub struct SkillsEditor;

impl CollectionEditor for SkillsEditor {
    type Item = Skill;
    type Field = SkillField;

    fn new_item() -> Skill {
        Skill::default()
    }

    fn apply_field(item: &Skill, field: SkillField) -> Skill {
        let mut next = item.clone();
        match field {
            SkillField::Name(v) => next.name = v,
            SkillField::Level(v) => next.level = v,
            SkillField::Category(v) => next.category = v,
        }
        next
    }

    fn form(items: &[Skill]) -> FormView {
        let levels = SkillLevel::ALL.iter().map(|l| l.label()).collect::<Vec<_>>();
        let categories = SkillCategory::ALL.iter().map(|c| c.label()).collect::<Vec<_>>();

        FormView {
            section: SectionId::Skills,
            title: "Skills",
            add_label: Some("Add Skill"),
            empty_hint: Some("No skills added yet. Click \"Add Skill\" to get started."),
            entries: items
                .iter()
                .map(|skill| EntryForm {
                    id: Some(skill.id),
                    heading: format!("{} ({}★)", skill.level.label(), skill.level.stars()),
                    fields: vec![
                        FieldView::new("name", "Skill Name", &skill.name).required(),
                        FieldView::new("level", "Level", skill.level.label())
                            .kind(InputKind::Select(levels.clone())),
                        FieldView::new("category", "Category", skill.category.label())
                            .kind(InputKind::Select(categories.clone())),
                    ],
                    sub_items: None,
                })
                .collect(),
        }
    }
}
