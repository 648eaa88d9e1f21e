//! Résumé entity model: the aggregate root and every collection it owns.
//!
//! Pure data definition. Required-ness and completeness live in `validation`
//! and `completion`; nothing here rejects a value.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Identifiers
// ────────────────────────────────────────────────────────────────────────────

/// Process-unique identifier for a list entry (experience, education, skill, project).
///
/// Backed by a random v4 UUID; uniqueness is only required within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Implemented by every list entry so editors can address items generically.
pub trait Entry: Clone {
    fn id(&self) -> EntryId;
}

// ────────────────────────────────────────────────────────────────────────────
// Singleton sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, rename = "linkedIn", skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// List entries
// ────────────────────────────────────────────────────────────────────────────

/// A work history entry. `achievements` always holds at least one (possibly blank) line.
///
/// When `current` is true the `end_date` is kept but every consumer ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    /// `YYYY-MM`
    pub start_date: String,
    /// `YYYY-MM`; suppressed in display while `current` is set.
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

impl Default for Experience {
    fn default() -> Self {
        Self {
            id: EntryId::new(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
            achievements: vec![String::new()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    pub achievements: Vec<String>,
}

impl Default for Education {
    fn default() -> Self {
        Self {
            id: EntryId::new(),
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: None,
            achievements: vec![String::new()],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }

    /// Star rating shown next to a skill in the editor (1–4).
    pub fn stars(self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }
}

/// Skill grouping. Declaration order is the fixed display order of the preview buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[default]
    Technical,
    Soft,
    Language,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Language,
        SkillCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Soft => "Soft",
            SkillCategory::Language => "Language",
            SkillCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: EntryId,
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
}

/// A side project. An empty `end_date` means the project is ongoing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

macro_rules! impl_entry {
    ($($ty:ty),*) => {
        $(impl Entry for $ty {
            fn id(&self) -> EntryId {
                self.id
            }
        })*
    };
}

impl_entry!(Experience, Education, Skill, Project);

// ────────────────────────────────────────────────────────────────────────────
// Aggregate root
// ────────────────────────────────────────────────────────────────────────────

/// The single source of truth for one résumé.
///
/// Editors never hand out `&mut` access to an item; they produce a replacement
/// for one whole field, which the owner swaps in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}
