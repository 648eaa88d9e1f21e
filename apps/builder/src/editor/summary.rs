use crate::completion::SectionId;
use crate::editor::form::{EntryForm, FieldView, FormView, InputKind};

/// Editor for the free-text professional summary.
pub struct SummaryEditor;

impl SummaryEditor {
    pub fn update(text: &str) -> String {
        text.to_string()
    }

    pub fn form(summary: &str) -> FormView {
        FormView {
            section: SectionId::Summary,
            title: "Professional Summary",
            add_label: None,
            empty_hint: None,
            entries: vec![EntryForm {
                id: None,
                heading: "Professional Summary".to_string(),
                fields: vec![FieldView::new("summary", "Professional Summary", summary)
                    .kind(InputKind::TextArea)
                    .required()],
                sub_items: None,
            }],
        }
    }
}
