//! Section completion rules and the advance-to-next-section signal.
//!
//! Every predicate is a pure function of the current slice and is recomputed on
//! each call; nothing is cached. A predicate only drives the "section complete"
//! indicator and the advance action. It never blocks an edit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::{Education, Experience, PersonalInfo, ResumeData, Skill};

/// Minimum trimmed summary length, in characters, for the summary to count as complete.
pub const SUMMARY_MIN_CHARS: usize = 50;
/// Minimum number of named skills for the skills section to count as complete.
pub const SKILLS_MIN_COUNT: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

impl SectionId {
    /// Fixed form order.
    pub const ORDER: [SectionId; 6] = [
        SectionId::PersonalInfo,
        SectionId::Summary,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::PersonalInfo => "personal-info",
            SectionId::Summary => "summary",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|s| s.dom_id() == id)
    }

    /// The section after this one, or `None` for the last.
    pub fn next(self) -> Option<Self> {
        let idx = Self::ORDER.iter().position(|s| *s == self)?;
        Self::ORDER.get(idx + 1).copied()
    }

    /// Writing tips shown alongside the section's form.
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            SectionId::PersonalInfo => &[
                "Use a professional email address",
                "Include your city and state/country",
                "Add LinkedIn and GitHub profiles if relevant",
            ],
            SectionId::Summary => &[
                "Keep it 2-3 sentences long",
                "Highlight your years of experience",
                "Mention key technologies or skills",
            ],
            SectionId::Experience => &[
                "Use action verbs (Built, Led, Implemented, Optimized)",
                "Include quantifiable results (percentages, numbers, metrics)",
                "List experiences in reverse chronological order",
            ],
            SectionId::Education => &["Include GPA only if it strengthens your application"],
            SectionId::Skills => &[
                "Group skills by category (Technical, Soft, Languages)",
                "Be honest about your proficiency levels",
            ],
            SectionId::Projects => &[
                "Choose 2-4 of your best projects",
                "Provide links to live demos or code repositories",
            ],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Predicates
// ────────────────────────────────────────────────────────────────────────────

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn personal_info_complete(info: &PersonalInfo) -> bool {
    filled(&info.name) && filled(&info.email) && filled(&info.phone) && filled(&info.location)
}

pub fn summary_complete(summary: &str) -> bool {
    summary.trim().chars().count() >= SUMMARY_MIN_CHARS
}

/// Achievements are not considered; blank bullet lines never block.
pub fn experience_complete(items: &[Experience]) -> bool {
    !items.is_empty()
        && items
            .iter()
            .all(|e| filled(&e.company) && filled(&e.position) && filled(&e.start_date))
}

pub fn education_complete(items: &[Education]) -> bool {
    !items.is_empty()
        && items.iter().all(|e| {
            filled(&e.institution) && filled(&e.degree) && filled(&e.start_date) && filled(&e.end_date)
        })
}

pub fn skills_complete(items: &[Skill]) -> bool {
    items.len() >= SKILLS_MIN_COUNT && items.iter().all(|s| filled(&s.name))
}

// ────────────────────────────────────────────────────────────────────────────
// Report
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Complete,
    Incomplete,
    /// The section has no rule and never blocks progression.
    Optional,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHealth {
    pub section: SectionId,
    pub status: SectionStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionReport {
    pub sections: Vec<SectionHealth>,
}

impl CompletionReport {
    pub fn status(&self, section: SectionId) -> Option<SectionStatus> {
        self.sections
            .iter()
            .find(|h| h.section == section)
            .map(|h| h.status)
    }
}

pub fn section_status(section: SectionId, data: &ResumeData) -> SectionStatus {
    let complete = match section {
        SectionId::PersonalInfo => personal_info_complete(&data.personal_info),
        SectionId::Summary => summary_complete(&data.summary),
        SectionId::Experience => experience_complete(&data.experience),
        SectionId::Education => education_complete(&data.education),
        SectionId::Skills => skills_complete(&data.skills),
        SectionId::Projects => return SectionStatus::Optional,
    };
    if complete {
        SectionStatus::Complete
    } else {
        SectionStatus::Incomplete
    }
}

/// True when the section may be advanced past. Optional sections always may.
pub fn is_section_complete(section: SectionId, data: &ResumeData) -> bool {
    section_status(section, data) != SectionStatus::Incomplete
}

pub fn compute_completion_report(data: &ResumeData) -> CompletionReport {
    CompletionReport {
        sections: SectionId::ORDER
            .iter()
            .map(|&section| SectionHealth {
                section,
                status: section_status(section, data),
            })
            .collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scroll / focus assist
// ────────────────────────────────────────────────────────────────────────────

/// Host hook that scrolls to and focuses a section. Purely advisory.
pub trait ScrollAssist {
    fn focus(&self, section: SectionId);
}

/// Signals the host to move to the section after `current`.
///
/// Returns the section that was focused, or `None` when `current` is still
/// incomplete or is the last section.
pub fn advance(
    current: SectionId,
    data: &ResumeData,
    assist: &dyn ScrollAssist,
) -> Option<SectionId> {
    if !is_section_complete(current, data) {
        debug!(section = current.dom_id(), "advance skipped: section incomplete");
        return None;
    }
    let next = current.next()?;
    assist.focus(next);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::EntryId;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingAssist(RefCell<Vec<SectionId>>);

    impl ScrollAssist for RecordingAssist {
        fn focus(&self, section: SectionId) {
            self.0.borrow_mut().push(section);
        }
    }

    fn experience(company: &str, position: &str, start: &str) -> Experience {
        Experience {
            company: company.into(),
            position: position.into(),
            start_date: start.into(),
            ..Experience::default()
        }
    }

    fn skill(name: &str) -> Skill {
        Skill {
            id: EntryId::new(),
            name: name.into(),
            ..Skill::default()
        }
    }

    #[test]
    fn test_personal_info_requires_four_fields() {
        let mut info = PersonalInfo {
            name: "Ada".into(),
            email: "ada@x.io".into(),
            phone: "1".into(),
            location: "   ".into(),
            ..PersonalInfo::default()
        };
        assert!(!personal_info_complete(&info));
        info.location = "London".into();
        assert!(personal_info_complete(&info));
    }

    #[test]
    fn test_summary_threshold_counts_trimmed_chars() {
        assert!(!summary_complete(&format!("  {}  ", "a".repeat(49))));
        assert!(summary_complete(&"a".repeat(50)));
    }

    #[test]
    fn test_experience_scenario_with_blank_achievement() {
        let exp = Experience {
            current: true,
            ..experience("Acme", "Engineer", "2020-01")
        };
        assert_eq!(exp.achievements, vec![String::new()]);
        assert!(experience_complete(&[exp]));
    }

    #[test]
    fn test_experience_requires_every_entry() {
        let items = vec![experience("Acme", "Engineer", "2020-01"), experience("", "x", "2020")];
        assert!(!experience_complete(&items));
        assert!(!experience_complete(&[]));
    }

    #[test]
    fn test_education_requires_end_date() {
        let edu = Education {
            institution: "MIT".into(),
            degree: "BSc".into(),
            start_date: "2016-09".into(),
            ..Education::default()
        };
        assert!(!education_complete(&[edu.clone()]));
        let edu = Education {
            end_date: "2020-06".into(),
            ..edu
        };
        assert!(education_complete(&[edu]));
    }

    #[test]
    fn test_skills_need_three_named() {
        assert!(!skills_complete(&[skill("Go"), skill("Rust")]));
        assert!(!skills_complete(&[skill("Go"), skill("Rust"), skill(" ")]));
        assert!(skills_complete(&[skill("Go"), skill("Rust"), skill("SQL")]));
    }

    #[test]
    fn test_projects_never_block() {
        let data = ResumeData::default();
        assert_eq!(section_status(SectionId::Projects, &data), SectionStatus::Optional);
        assert!(is_section_complete(SectionId::Projects, &data));
    }

    #[test]
    fn test_sample_is_complete_everywhere() {
        let report = compute_completion_report(&ResumeData::sample());
        assert_eq!(report.sections.len(), 6);
        assert!(report
            .sections
            .iter()
            .all(|h| h.status != SectionStatus::Incomplete));
    }

    #[test]
    fn test_next_section_order() {
        assert_eq!(SectionId::PersonalInfo.next(), Some(SectionId::Summary));
        assert_eq!(SectionId::Skills.next(), Some(SectionId::Projects));
        assert_eq!(SectionId::Projects.next(), None);
        assert_eq!(SectionId::from_dom_id("education"), Some(SectionId::Education));
    }

    #[test]
    fn test_advance_focuses_next_only_when_complete() {
        let assist = RecordingAssist::default();
        let empty = ResumeData::default();
        assert_eq!(advance(SectionId::Summary, &empty, &assist), None);

        let sample = ResumeData::sample();
        assert_eq!(
            advance(SectionId::Summary, &sample, &assist),
            Some(SectionId::Experience)
        );
        assert_eq!(advance(SectionId::Projects, &sample, &assist), None);
        assert_eq!(*assist.0.borrow(), vec![SectionId::Experience]);
    }
}
