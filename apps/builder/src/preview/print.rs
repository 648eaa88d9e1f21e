//! Print-safe theme for export: fixed width, black on white, no animation or
//! hover state, so rasterization depends only on the résumé content.

use crate::preview::document::{Color, FontWeight, LinkTarget, NodeStyle, Role, Target, Theme};

/// Fixed logical width of the export surface (A4 at 96 dpi).
pub const PRINT_WIDTH_PX: u32 = 794;

const GRAY_300: Color = Color(0xd1, 0xd5, 0xdb);
const GRAY_600: Color = Color(0x4b, 0x55, 0x63);
const GRAY_700: Color = Color(0x37, 0x41, 0x51);
const GRAY_800: Color = Color(0x1f, 0x29, 0x37);

pub struct PrintTheme;

impl Theme for PrintTheme {
    fn target(&self) -> Target {
        Target::Print
    }

    fn width_px(&self) -> Option<u32> {
        Some(PRINT_WIDTH_PX)
    }

    fn background(&self) -> Color {
        Color::WHITE
    }

    fn style(&self, role: Role, _index: usize) -> NodeStyle {
        let (color, font_size_px, weight) = match role {
            Role::Name => (Color::BLACK, 36.0, FontWeight::Bold),
            Role::SectionHeading => (Color::BLACK, 20.0, FontWeight::Bold),
            Role::EntryTitle => (Color::BLACK, 18.0, FontWeight::Bold),
            Role::GroupHeading => (Color::BLACK, 16.0, FontWeight::Bold),
            Role::EntrySubtitle => (GRAY_700, 16.0, FontWeight::Medium),
            Role::Contact | Role::ContactLine => (GRAY_700, 14.0, FontWeight::Regular),
            Role::DateRange | Role::EntryDetail | Role::Link => (GRAY_600, 14.0, FontWeight::Regular),
            Role::Chip => (GRAY_800, 13.0, FontWeight::Regular),
            _ => (GRAY_800, 15.0, FontWeight::Regular),
        };
        NodeStyle {
            color,
            font_size_px,
            weight,
            animation_delay_ms: None,
            hover_color: None,
            border_color: matches!(role, Role::Header | Role::SectionHeading | Role::Chip)
                .then_some(GRAY_300),
        }
    }

    fn link(&self, href: &str) -> LinkTarget {
        LinkTarget {
            href: href.to_string(),
            new_context: false,
        }
    }
}
