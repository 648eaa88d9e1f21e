//! Section editors, one per slice of `ResumeData`.
//!
//! Every intent is copy-on-write: it borrows the current slice and returns a full
//! replacement, which the aggregate owner (`ResumeStore`) swaps in. No editor
//! hands out mutable access to an item, and no editor knows about another.

pub mod education;
pub mod experience;
pub mod form;
pub mod personal;
pub mod projects;
pub mod skills;
pub mod store;
pub mod summary;

use tracing::debug;

use crate::models::resume::{Entry, EntryId};

pub use education::{EducationEditor, EducationField};
pub use experience::{ExperienceEditor, ExperienceField};
pub use form::{EntryForm, FieldView, FormView, InputKind, SubItemsView};
pub use personal::{PersonalField, PersonalInfoEditor};
pub use projects::{ProjectField, ProjectsEditor};
pub use skills::{SkillField, SkillsEditor};
pub use store::ResumeStore;
pub use summary::SummaryEditor;

/// Minimum number of achievement lines an entry keeps when lines are removed.
pub const ACHIEVEMENT_FLOOR: usize = 1;

// ────────────────────────────────────────────────────────────────────────────
// Collection editor trait
// ────────────────────────────────────────────────────────────────────────────

/// Shared add / update-field / remove intents over an ordered entry list.
///
/// Implementors supply the fresh-item constructor and the single-field rewrite;
/// the list plumbing is provided.
pub trait CollectionEditor {
    type Item: Entry;
    type Field;

    fn new_item() -> Self::Item;

    /// Returns a copy of `item` with one field replaced.
    fn apply_field(item: &Self::Item, field: Self::Field) -> Self::Item;

    fn form(items: &[Self::Item]) -> FormView;

    /// Appends a fresh item with a new identifier.
    fn add(items: &[Self::Item]) -> Vec<Self::Item> {
        let mut next = items.to_vec();
        next.push(Self::new_item());
        next
    }

    fn update(items: &[Self::Item], id: EntryId, field: Self::Field) -> Vec<Self::Item> {
        replace_entry(items, id, |item| Self::apply_field(item, field))
    }

    fn remove(items: &[Self::Item], id: EntryId) -> Vec<Self::Item> {
        let next: Vec<Self::Item> = items.iter().filter(|i| i.id() != id).cloned().collect();
        if next.len() == items.len() {
            debug!(%id, "remove ignored: no entry with this id");
        }
        next
    }
}

// ────────────────────────────────────────────────────────────────────────────
// List helpers
// ────────────────────────────────────────────────────────────────────────────

/// Builds a new list with the entry matching `id` rewritten by `rewrite`.
///
/// An unknown id yields an unchanged copy.
pub(crate) fn replace_entry<T: Entry>(
    items: &[T],
    id: EntryId,
    rewrite: impl FnOnce(&T) -> T,
) -> Vec<T> {
    let mut rewrite = Some(rewrite);
    let next: Vec<T> = items
        .iter()
        .map(|item| {
            if item.id() == id {
                if let Some(f) = rewrite.take() {
                    return f(item);
                }
            }
            item.clone()
        })
        .collect();
    if rewrite.is_some() {
        debug!(%id, "update ignored: no entry with this id");
    }
    next
}

/// Appends a blank line to a string list.
pub(crate) fn push_line(lines: &[String]) -> Vec<String> {
    let mut next = lines.to_vec();
    next.push(String::new());
    next
}

/// Replaces the line at `index`. Out-of-range indices leave the list unchanged.
pub(crate) fn set_line(lines: &[String], index: usize, value: &str) -> Vec<String> {
    if index >= lines.len() {
        debug!(index, len = lines.len(), "line update ignored: index out of range");
        return lines.to_vec();
    }
    let mut next = lines.to_vec();
    next[index] = value.to_string();
    next
}

/// Removes the line at `index` unless that would drop the list below `floor`.
pub(crate) fn remove_line(lines: &[String], index: usize, floor: usize) -> Vec<String> {
    if lines.len() <= floor || index >= lines.len() {
        return lines.to_vec();
    }
    lines
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, l)| l.clone())
        .collect()
}
