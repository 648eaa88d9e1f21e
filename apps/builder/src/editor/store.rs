//! Aggregate owner for one résumé session.
//!
//! Holds `ResumeData` in a `tokio::sync::watch` channel. Each editor result is
//! applied as a whole-field replace, so subscribers (live preview, completion
//! indicators) always observe a consistent snapshot.

use tokio::sync::watch;
use tracing::debug;

use crate::completion::SectionId;
use crate::models::resume::{Education, Experience, PersonalInfo, Project, ResumeData, Skill};

pub struct ResumeStore {
    tx: watch::Sender<ResumeData>,
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new(ResumeData::default())
    }
}

impl ResumeStore {
    pub fn new(initial: ResumeData) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Owned copy of the current aggregate.
    pub fn snapshot(&self) -> ResumeData {
        self.tx.borrow().clone()
    }

    /// Receiver that wakes on every replace.
    pub fn subscribe(&self) -> watch::Receiver<ResumeData> {
        self.tx.subscribe()
    }

    /// Reads the current aggregate without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&ResumeData) -> R) -> R {
        f(&self.tx.borrow())
    }

    fn replace(&self, section: SectionId, build: impl FnOnce(&ResumeData) -> ResumeData) {
        let next = build(&self.tx.borrow());
        self.tx.send_replace(next);
        debug!(section = section.dom_id(), "section replaced");
    }

    pub fn set_personal_info(&self, personal_info: PersonalInfo) {
        self.replace(SectionId::PersonalInfo, |d| ResumeData {
            personal_info,
            ..d.clone()
        });
    }

    pub fn set_summary(&self, summary: String) {
        self.replace(SectionId::Summary, |d| ResumeData { summary, ..d.clone() });
    }

    pub fn set_experience(&self, experience: Vec<Experience>) {
        self.replace(SectionId::Experience, |d| ResumeData {
            experience,
            ..d.clone()
        });
    }

    pub fn set_education(&self, education: Vec<Education>) {
        self.replace(SectionId::Education, |d| ResumeData {
            education,
            ..d.clone()
        });
    }

    pub fn set_skills(&self, skills: Vec<Skill>) {
        self.replace(SectionId::Skills, |d| ResumeData { skills, ..d.clone() });
    }

    pub fn set_projects(&self, projects: Vec<Project>) {
        self.replace(SectionId::Projects, |d| ResumeData { projects, ..d.clone() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{CollectionEditor, ExperienceEditor, ExperienceField};

    #[test]
    fn test_replace_leaves_other_sections() {
        let store = ResumeStore::new(ResumeData::sample());
        let before = store.snapshot();
        store.set_summary("New summary".to_string());
        let after = store.snapshot();
        assert_eq!(after.summary, "New summary");
        assert_eq!(after.experience, before.experience);
        assert_eq!(before.summary, ResumeData::sample().summary);
    }

    #[test]
    fn test_editor_round_trip_through_store() {
        let store = ResumeStore::default();
        store.set_experience(store.read(|d| ExperienceEditor::add(&d.experience)));
        let id = store.read(|d| d.experience[0].id);
        store.set_experience(store.read(|d| {
            ExperienceEditor::update(&d.experience, id, ExperienceField::Company("Acme".into()))
        }));
        assert_eq!(store.snapshot().experience[0].company, "Acme");
    }

    #[tokio::test]
    async fn test_subscribers_see_each_replace() {
        let store = ResumeStore::default();
        let mut rx = store.subscribe();
        store.set_summary("first".to_string());
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().summary, "first");
    }
}
