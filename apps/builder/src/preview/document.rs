//! Rendered document tree and the theme seam.
//!
//! `compose` builds one tree shape from a `VisibleResume`; a `Theme` supplies
//! only presentation (colors, sizes, animation, link behaviour).

use serde::{Serialize, Serializer};

use crate::preview::select::VisibleResume;

// ────────────────────────────────────────────────────────────────────────────
// Presentation primitives
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color(0xff, 0xff, 0xff);

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Regular,
    Medium,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeStyle {
    pub color: Color,
    pub font_size_px: f32,
    pub weight: FontWeight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_delay_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTarget {
    pub href: String,
    /// Open in a new browsing context (`target=_blank`).
    pub new_context: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Document,
    Header,
    Name,
    ContactLine,
    Contact,
    Section,
    SectionHeading,
    Entry,
    EntryTitle,
    EntrySubtitle,
    EntryDetail,
    DateRange,
    Paragraph,
    BulletList,
    Bullet,
    GroupHeading,
    ChipGroup,
    Chip,
    LinkRow,
    Link,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentNode {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkTarget>,
    pub style: NodeStyle,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    /// Depth-first iterator over this node and all descendants.
    pub fn walk(&self) -> Box<dyn Iterator<Item = &DocumentNode> + '_> {
        Box::new(std::iter::once(self).chain(self.children.iter().flat_map(|c| c.walk())))
    }

    pub fn texts_with_role(&self, role: Role) -> Vec<&str> {
        self.walk()
            .filter(|n| n.role == role)
            .filter_map(|n| n.text.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Interactive,
    Print,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDocument {
    pub target: Target,
    /// Fixed logical width; `None` lets the host size the preview.
    pub width_px: Option<u32>,
    pub background: Color,
    pub root: DocumentNode,
}

// ────────────────────────────────────────────────────────────────────────────
// Theme seam
// ────────────────────────────────────────────────────────────────────────────

pub trait Theme {
    fn target(&self) -> Target;
    fn width_px(&self) -> Option<u32>;
    fn background(&self) -> Color;

    /// Style for a node of `role` that is the `index`-th among its siblings.
    fn style(&self, role: Role, index: usize) -> NodeStyle;

    fn link(&self, href: &str) -> LinkTarget;
}

// ────────────────────────────────────────────────────────────────────────────
// Tree composition
// ────────────────────────────────────────────────────────────────────────────

struct Builder<'t> {
    theme: &'t dyn Theme,
}

impl Builder<'_> {
    fn node(&self, role: Role, index: usize, children: Vec<DocumentNode>) -> DocumentNode {
        DocumentNode {
            role,
            text: None,
            link: None,
            style: self.theme.style(role, index),
            children,
        }
    }

    fn text(&self, role: Role, index: usize, text: impl Into<String>) -> DocumentNode {
        DocumentNode {
            text: Some(text.into()),
            ..self.node(role, index, Vec::new())
        }
    }

    fn link(&self, index: usize, label: &str, href: &str) -> DocumentNode {
        DocumentNode {
            link: Some(self.theme.link(href)),
            ..self.text(Role::Link, index, label)
        }
    }

    fn section(&self, index: usize, heading: &str, mut body: Vec<DocumentNode>) -> DocumentNode {
        let mut children = vec![self.text(Role::SectionHeading, 0, heading)];
        children.append(&mut body);
        self.node(Role::Section, index, children)
    }

    fn bullets(&self, bullets: &[String]) -> Option<DocumentNode> {
        if bullets.is_empty() {
            return None;
        }
        let items = bullets
            .iter()
            .enumerate()
            .map(|(i, b)| self.text(Role::Bullet, i, b.as_str()))
            .collect();
        Some(self.node(Role::BulletList, 0, items))
    }

    fn chips(&self, names: &[String]) -> Option<DocumentNode> {
        if names.is_empty() {
            return None;
        }
        let chips = names
            .iter()
            .enumerate()
            .map(|(i, n)| self.text(Role::Chip, i, n.as_str()))
            .collect();
        Some(self.node(Role::ChipGroup, 0, chips))
    }
}

/// Builds the document tree for `visible` under `theme`.
pub fn compose(visible: &VisibleResume, theme: &dyn Theme) -> RenderedDocument {
    let b = Builder { theme };
    let mut sections = Vec::new();

    let contacts = visible
        .contacts
        .iter()
        .enumerate()
        .map(|(i, c)| b.text(Role::Contact, i, c.text.as_str()))
        .collect::<Vec<_>>();
    let header = b.node(
        Role::Header,
        0,
        vec![
            b.text(Role::Name, 0, visible.name.as_str()),
            b.node(Role::ContactLine, 0, contacts),
        ],
    );

    if let Some(summary) = &visible.summary {
        sections.push((
            "Professional Summary",
            vec![b.text(Role::Paragraph, 0, summary.as_str())],
        ));
    }

    if !visible.experience.is_empty() {
        let entries = visible
            .experience
            .iter()
            .enumerate()
            .map(|(i, exp)| {
                let mut children = vec![
                    b.text(Role::EntryTitle, 0, exp.position.as_str()),
                    b.text(Role::EntrySubtitle, 0, exp.company.as_str()),
                    b.text(Role::DateRange, 0, exp.dates.as_str()),
                ];
                if let Some(desc) = &exp.description {
                    children.push(b.text(Role::Paragraph, 0, desc.as_str()));
                }
                children.extend(b.bullets(&exp.bullets));
                b.node(Role::Entry, i, children)
            })
            .collect();
        sections.push(("Work Experience", entries));
    }

    if !visible.education.is_empty() {
        let entries = visible
            .education
            .iter()
            .enumerate()
            .map(|(i, edu)| {
                let mut children = vec![
                    b.text(Role::EntryTitle, 0, edu.title.as_str()),
                    b.text(Role::EntrySubtitle, 0, edu.institution.as_str()),
                ];
                if let Some(gpa) = &edu.gpa {
                    children.push(b.text(Role::EntryDetail, 0, format!("GPA: {gpa}")));
                }
                children.push(b.text(Role::DateRange, 0, edu.dates.as_str()));
                children.extend(b.bullets(&edu.bullets));
                b.node(Role::Entry, i, children)
            })
            .collect();
        sections.push(("Education", entries));
    }

    if !visible.skills.is_empty() {
        let groups = visible
            .skills
            .iter()
            .enumerate()
            .map(|(i, bucket)| {
                let mut children = vec![b.text(Role::GroupHeading, i, bucket.heading.as_str())];
                children.extend(b.chips(&bucket.names));
                b.node(Role::Entry, i, children)
            })
            .collect();
        sections.push(("Skills", groups));
    }

    if !visible.projects.is_empty() {
        let entries = visible
            .projects
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mut children = vec![
                    b.text(Role::EntryTitle, 0, p.name.as_str()),
                    b.text(Role::DateRange, 0, p.dates.as_str()),
                ];
                if let Some(desc) = &p.description {
                    children.push(b.text(Role::Paragraph, 0, desc.as_str()));
                }
                children.extend(b.chips(&p.technologies));
                if !p.links.is_empty() {
                    let links = p
                        .links
                        .iter()
                        .enumerate()
                        .map(|(j, l)| b.link(j, l.label, &l.href))
                        .collect();
                    children.push(b.node(Role::LinkRow, 0, links));
                }
                b.node(Role::Entry, i, children)
            })
            .collect();
        sections.push(("Projects", entries));
    }

    let mut children = vec![header];
    children.extend(
        sections
            .into_iter()
            .enumerate()
            .map(|(i, (heading, body))| b.section(i, heading, body)),
    );

    RenderedDocument {
        target: theme.target(),
        width_px: theme.width_px(),
        background: theme.background(),
        root: b.node(Role::Document, 0, children),
    }
}
