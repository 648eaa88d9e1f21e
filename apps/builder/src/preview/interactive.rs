//! On-screen theme: dark violet palette, staggered entrance animation, hover
//! highlights, links opening in a new browsing context.

use crate::preview::document::{Color, FontWeight, LinkTarget, NodeStyle, Role, Target, Theme};

const VIOLET_200: Color = Color(0xdd, 0xd6, 0xfe);
const VIOLET_300: Color = Color(0xc4, 0xb5, 0xfd);
const VIOLET_400: Color = Color(0xa7, 0x8b, 0xfa);
const VIOLET_500: Color = Color(0x8b, 0x5c, 0xf6);
const GRAY_300: Color = Color(0xd1, 0xd5, 0xdb);
const GRAY_400: Color = Color(0x9c, 0xa3, 0xaf);
const BACKDROP: Color = Color(0x1a, 0x16, 0x2b);

/// Stagger between siblings, in milliseconds.
const STAGGER_MS: u32 = 100;

pub struct InteractiveTheme;

impl InteractiveTheme {
    fn base_delay_ms(role: Role) -> Option<u32> {
        match role {
            Role::Header => Some(100),
            Role::Name => Some(200),
            Role::ContactLine => Some(300),
            Role::Section => Some(400),
            Role::Entry => Some(600),
            Role::Chip => Some(1100),
            _ => None,
        }
    }
}

impl Theme for InteractiveTheme {
    fn target(&self) -> Target {
        Target::Interactive
    }

    fn width_px(&self) -> Option<u32> {
        None
    }

    fn background(&self) -> Color {
        BACKDROP
    }

    fn style(&self, role: Role, index: usize) -> NodeStyle {
        let (color, font_size_px, weight) = match role {
            Role::Name => (Color::WHITE, 36.0, FontWeight::Bold),
            Role::SectionHeading => (VIOLET_300, 20.0, FontWeight::Bold),
            Role::EntryTitle => (Color::WHITE, 18.0, FontWeight::Bold),
            Role::GroupHeading => (Color::WHITE, 16.0, FontWeight::Bold),
            Role::EntrySubtitle => (VIOLET_200, 16.0, FontWeight::Medium),
            Role::Contact | Role::ContactLine => (VIOLET_200, 14.0, FontWeight::Regular),
            Role::DateRange | Role::EntryDetail => (GRAY_400, 14.0, FontWeight::Regular),
            Role::Chip => (VIOLET_200, 14.0, FontWeight::Regular),
            Role::Link => (VIOLET_400, 14.0, FontWeight::Regular),
            _ => (GRAY_300, 16.0, FontWeight::Regular),
        };
        let hover_color = match role {
            Role::Contact | Role::Bullet | Role::Link => Some(VIOLET_300),
            Role::Chip => Some(Color::WHITE),
            _ => None,
        };
        let border_color = match role {
            Role::Header | Role::SectionHeading | Role::Chip => Some(VIOLET_500),
            _ => None,
        };
        NodeStyle {
            color,
            font_size_px,
            weight,
            animation_delay_ms: Self::base_delay_ms(role).map(|base| base + index as u32 * STAGGER_MS),
            hover_color,
            border_color,
        }
    }

    fn link(&self, href: &str) -> LinkTarget {
        LinkTarget {
            href: href.to_string(),
            new_context: true,
        }
    }
}
