//! Preview renderer: pure projection from `ResumeData` to a document tree.
//!
//! One shared selection stage (`select`) feeds two independent themes:
//! `InteractiveTheme` for the on-screen preview and `PrintTheme` for export.

pub mod document;
pub mod interactive;
pub mod print;
pub mod select;

pub use document::{compose, DocumentNode, RenderedDocument, Role, Target, Theme};
pub use interactive::InteractiveTheme;
pub use print::{PrintTheme, PRINT_WIDTH_PX};
pub use select::{select_visible, VisibleResume};

use crate::models::resume::ResumeData;

pub fn render_interactive(data: &ResumeData) -> RenderedDocument {
    compose(&select_visible(data), &InteractiveTheme)
}

/// The export projection: same content as the interactive preview, fixed presentation.
pub fn render_print(data: &ResumeData) -> RenderedDocument {
    compose(&select_visible(data), &PrintTheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EntryId, Experience, Skill, SkillCategory};

    /// Strips presentation so two projections can be compared structurally.
    fn shape(node: &DocumentNode) -> Vec<(Role, Option<String>)> {
        node.walk().map(|n| (n.role, n.text.clone())).collect()
    }

    #[test]
    fn test_projections_share_structure() {
        let data = ResumeData::sample();
        let interactive = render_interactive(&data);
        let print = render_print(&data);
        assert_eq!(shape(&interactive.root), shape(&print.root));
        assert_eq!(print.width_px, Some(PRINT_WIDTH_PX));
        assert_eq!(interactive.width_px, None);
    }

    #[test]
    fn test_print_has_no_animation_or_hover() {
        let print = render_print(&ResumeData::sample());
        assert!(print
            .root
            .walk()
            .all(|n| n.style.animation_delay_ms.is_none() && n.style.hover_color.is_none()));
        assert!(print
            .root
            .walk()
            .filter_map(|n| n.link.as_ref())
            .all(|l| !l.new_context));
    }

    #[test]
    fn test_interactive_links_open_new_context() {
        let doc = render_interactive(&ResumeData::sample());
        let links: Vec<_> = doc.root.walk().filter_map(|n| n.link.as_ref()).collect();
        assert!(!links.is_empty());
        assert!(links.iter().all(|l| l.new_context));
    }

    #[test]
    fn test_empty_sections_render_no_heading() {
        let doc = render_interactive(&ResumeData::default());
        assert!(doc.root.texts_with_role(Role::SectionHeading).is_empty());
        assert_eq!(doc.root.texts_with_role(Role::Name), vec!["Your Name"]);
    }

    #[test]
    fn test_current_experience_scenario() {
        let data = ResumeData {
            experience: vec![Experience {
                company: "Acme".into(),
                position: "Engineer".into(),
                start_date: "2020-01".into(),
                current: true,
                achievements: vec![String::new()],
                ..Experience::default()
            }],
            ..ResumeData::default()
        };
        for doc in [render_interactive(&data), render_print(&data)] {
            assert!(doc.root.walk().all(|n| n.role != Role::BulletList));
            assert_eq!(doc.root.texts_with_role(Role::DateRange), vec!["Jan 2020 – Present"]);
        }
    }

    #[test]
    fn test_two_skill_buckets_scenario() {
        let skill = |name: &str, category| Skill {
            id: EntryId::new(),
            name: name.into(),
            category,
            ..Skill::default()
        };
        let data = ResumeData {
            skills: vec![
                skill("Go", SkillCategory::Technical),
                skill("French", SkillCategory::Language),
            ],
            ..ResumeData::default()
        };
        let doc = render_print(&data);
        assert_eq!(
            doc.root.texts_with_role(Role::GroupHeading),
            vec!["Technical Skills", "Language Skills"]
        );
        assert_eq!(doc.root.texts_with_role(Role::SectionHeading), vec!["Skills"]);
    }

    #[test]
    fn test_section_order_follows_form_order() {
        let doc = render_print(&ResumeData::sample());
        assert_eq!(
            doc.root.texts_with_role(Role::SectionHeading),
            vec!["Professional Summary", "Work Experience", "Education", "Skills", "Projects"]
        );
    }

    #[test]
    fn test_document_serializes_colors_as_hex() {
        let json = serde_json::to_value(render_print(&ResumeData::default())).unwrap();
        assert_eq!(json["background"], "#ffffff");
        assert_eq!(json["target"], "print");
    }
}
