//! Host-neutral description of an editor's inputs.
//!
//! Hosts turn a `FormView` into real widgets; the core only decides labels,
//! values, required markers and which buttons are enabled.

use serde::Serialize;

use crate::completion::SectionId;
use crate::models::resume::EntryId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "options")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Url,
    /// `YYYY-MM` month picker.
    Month,
    TextArea,
    Checkbox,
    Select(Vec<&'static str>),
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub kind: InputKind,
    pub required: bool,
    pub disabled: bool,
}

impl FieldView {
    pub fn new(key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            label,
            value: value.into(),
            kind: InputKind::Text,
            required: false,
            disabled: false,
        }
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Label as displayed, with a trailing ` *` on required inputs.
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }
}

/// An editable list of lines (achievements) with per-line remove buttons.
#[derive(Debug, Clone, Serialize)]
pub struct SubItemsView {
    pub label: &'static str,
    pub items: Vec<String>,
    /// False when removing would drop below the list floor.
    pub can_remove: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryForm {
    pub id: Option<EntryId>,
    pub heading: String,
    pub fields: Vec<FieldView>,
    pub sub_items: Option<SubItemsView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub section: SectionId,
    pub title: &'static str,
    /// Label of the add button; `None` for singleton sections.
    pub add_label: Option<&'static str>,
    /// Placeholder shown when a list section has no entries.
    pub empty_hint: Option<&'static str>,
    pub entries: Vec<EntryForm>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_label_gets_marker() {
        let field = FieldView::new("company", "Company", "").required();
        assert_eq!(field.display_label(), "Company *");
        assert_eq!(FieldView::new("gpa", "GPA", "").display_label(), "GPA");
    }
}
