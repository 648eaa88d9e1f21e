//! Shared visibility stage: decides which fields and entries appear.
//!
//! Both preview targets consume the same `VisibleResume`, so the exported
//! document can never show something the on-screen preview hides (or vice versa).

use serde::Serialize;

use crate::models::dates::format_range;
use crate::models::resume::{ResumeData, SkillCategory};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const PRESENT_LABEL: &str = "Present";
pub const ONGOING_LABEL: &str = "Ongoing";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Website,
    LinkedIn,
    Github,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub kind: ContactKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleExperience {
    pub position: String,
    pub company: String,
    pub dates: String,
    pub description: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleEducation {
    /// `degree in field`, or just the degree when field is empty.
    pub title: String,
    pub institution: String,
    pub gpa: Option<String>,
    pub dates: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillBucket {
    pub category: SkillCategory,
    pub heading: String,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLink {
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleProject {
    pub name: String,
    pub dates: String,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub links: Vec<ProjectLink>,
}

/// Everything that will be shown, already filtered and formatted.
///
/// An empty vector (or `None` summary) means the section is omitted entirely,
/// heading included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleResume {
    pub name: String,
    pub contacts: Vec<Contact>,
    pub summary: Option<String>,
    pub experience: Vec<VisibleExperience>,
    pub education: Vec<VisibleEducation>,
    pub skills: Vec<SkillBucket>,
    pub projects: Vec<VisibleProject>,
}

fn present(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| value.to_string())
}

fn present_opt(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(present)
}

/// Drops lines that are blank after trimming.
pub fn visible_bullets(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .cloned()
        .collect()
}

pub fn select_visible(data: &ResumeData) -> VisibleResume {
    let info = &data.personal_info;

    let contacts = [
        (ContactKind::Email, present(&info.email)),
        (ContactKind::Phone, present(&info.phone)),
        (ContactKind::Location, present(&info.location)),
        (ContactKind::Website, present_opt(&info.website)),
        (ContactKind::LinkedIn, present_opt(&info.linked_in)),
        (ContactKind::Github, present_opt(&info.github)),
    ]
    .into_iter()
    .filter_map(|(kind, text)| text.map(|text| Contact { kind, text }))
    .collect();

    let experience = data
        .experience
        .iter()
        .map(|exp| VisibleExperience {
            position: exp.position.clone(),
            company: exp.company.clone(),
            dates: format_range(
                &exp.start_date,
                (!exp.current).then_some(exp.end_date.as_str()),
                if exp.current { PRESENT_LABEL } else { "" },
            ),
            description: present(&exp.description),
            bullets: visible_bullets(&exp.achievements),
        })
        .collect();

    let education = data
        .education
        .iter()
        .map(|edu| VisibleEducation {
            title: match present(&edu.field) {
                Some(field) => format!("{} in {}", edu.degree, field),
                None => edu.degree.clone(),
            },
            institution: edu.institution.clone(),
            gpa: present_opt(&edu.gpa),
            dates: format_range(&edu.start_date, Some(edu.end_date.as_str()), ""),
            bullets: visible_bullets(&edu.achievements),
        })
        .collect();

    let skills = SkillCategory::ALL
        .iter()
        .filter_map(|&category| {
            let names: Vec<String> = data
                .skills
                .iter()
                .filter(|s| s.category == category)
                .map(|s| s.name.clone())
                .collect();
            (!names.is_empty()).then(|| SkillBucket {
                category,
                heading: format!("{} Skills", category.label()),
                names,
            })
        })
        .collect();

    let projects = data
        .projects
        .iter()
        .map(|p| VisibleProject {
            name: p.name.clone(),
            dates: format_range(&p.start_date, Some(p.end_date.as_str()), ONGOING_LABEL),
            description: present(&p.description),
            technologies: visible_bullets(&p.technologies),
            links: [("Live Demo", &p.url), ("GitHub", &p.github)]
                .into_iter()
                .filter_map(|(label, href)| present_opt(href).map(|href| ProjectLink { label, href }))
                .collect(),
        })
        .collect();

    VisibleResume {
        name: present(&info.name).unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
        contacts,
        summary: present(&data.summary),
        experience,
        education,
        skills,
        projects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EntryId, Experience, Skill};

    #[test]
    fn test_empty_resume_has_no_sections() {
        let visible = select_visible(&ResumeData::default());
        assert_eq!(visible.name, NAME_PLACEHOLDER);
        assert!(visible.contacts.is_empty());
        assert!(visible.summary.is_none());
        assert!(visible.experience.is_empty());
        assert!(visible.skills.is_empty());
    }

    #[test]
    fn test_current_experience_shows_present_and_no_bullets() {
        let data = ResumeData {
            experience: vec![Experience {
                company: "Acme".into(),
                position: "Engineer".into(),
                start_date: "2020-01".into(),
                end_date: "2019-05".into(),
                current: true,
                ..Experience::default()
            }],
            ..ResumeData::default()
        };
        let visible = select_visible(&data);
        assert_eq!(visible.experience[0].dates, "Jan 2020 – Present");
        assert!(visible.experience[0].bullets.is_empty());
    }

    #[test]
    fn test_past_experience_without_end_date_is_not_present() {
        let data = ResumeData {
            experience: vec![Experience {
                start_date: "2020-01".into(),
                end_date: String::new(),
                current: false,
                ..Experience::default()
            }],
            ..ResumeData::default()
        };
        let dates = &select_visible(&data).experience[0].dates;
        assert!(!dates.contains(PRESENT_LABEL));
        assert_eq!(dates, "Jan 2020 – ");
    }

    #[test]
    fn test_blank_bullets_filtered_keep_order() {
        let lines: Vec<String> = ["a", " ", "b", ""].iter().map(|s| s.to_string()).collect();
        assert_eq!(visible_bullets(&lines), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_skill_buckets_fixed_order_skip_empty() {
        let skill = |name: &str, category| Skill {
            id: EntryId::new(),
            name: name.into(),
            category,
            ..Skill::default()
        };
        let data = ResumeData {
            skills: vec![
                skill("French", SkillCategory::Language),
                skill("Go", SkillCategory::Technical),
            ],
            ..ResumeData::default()
        };
        let headings: Vec<String> = select_visible(&data)
            .skills
            .into_iter()
            .map(|b| b.heading)
            .collect();
        assert_eq!(headings, vec!["Technical Skills", "Language Skills"]);
    }

    #[test]
    fn test_ongoing_project_and_links() {
        let sample = ResumeData::sample();
        let visible = select_visible(&sample);
        let ongoing = &visible.projects[1];
        assert_eq!(ongoing.dates, "Jul 2023 – Ongoing");
        assert_eq!(ongoing.links.len(), 1);
        assert_eq!(ongoing.links[0].label, "GitHub");
        assert_eq!(visible.projects[0].links.len(), 2);
    }

    #[test]
    fn test_education_title_and_gpa() {
        let visible = select_visible(&ResumeData::sample());
        assert_eq!(visible.education[0].title, "Bachelor of Science in Computer Science");
        assert_eq!(visible.education[0].gpa.as_deref(), Some("3.8"));
        assert_eq!(visible.education[0].dates, "Aug 2016 – May 2020");
    }

    #[test]
    fn test_contact_order() {
        let kinds: Vec<ContactKind> = select_visible(&ResumeData::sample())
            .contacts
            .iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                ContactKind::Email,
                ContactKind::Phone,
                ContactKind::Location,
                ContactKind::Website,
                ContactKind::LinkedIn,
                ContactKind::Github,
            ]
        );
    }
}
