//! Flows a print-projected document onto a fixed-width canvas.
//!
//! The output is a flat display list of positioned text runs and rules in
//! logical pixels; the rasterizer only has to paint it.

use tracing::debug;

use crate::layout::metrics::SANS;
use crate::preview::document::{Color, DocumentNode, FontWeight, NodeStyle, RenderedDocument, Role};
use crate::preview::print::PRINT_WIDTH_PX;

pub const MARGIN_PX: f32 = 40.0;
const LINE_HEIGHT: f32 = 1.4;
const SECTION_GAP_PX: f32 = 20.0;
const ENTRY_GAP_PX: f32 = 10.0;
const INLINE_GAP_PX: f32 = 12.0;
const ROW_GAP_PX: f32 = 6.0;
const CHIP_PAD_X_PX: f32 = 8.0;
const CHIP_PAD_Y_PX: f32 = 3.0;
const BULLET_INDENT_PX: f32 = 16.0;
const RULE_GAP_PX: f32 = 8.0;
const BULLET: &str = "•";

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A single line of text; `y` is the top of the line box.
    Text {
        x: f32,
        y: f32,
        size_px: f32,
        weight: FontWeight,
        color: Color,
        text: String,
    },
    /// One-pixel horizontal rule.
    Rule { x: f32, y: f32, width: f32, color: Color },
    /// One-pixel rectangle outline.
    Outline {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
}

/// Off-screen render target in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub width_px: u32,
    pub height_px: u32,
    pub background: Color,
    pub ops: Vec<DrawOp>,
}

impl Canvas {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

struct Flow {
    left: f32,
    width: f32,
    y: f32,
    ops: Vec<DrawOp>,
}

impl Flow {
    fn block(&mut self, node: &DocumentNode, indent: f32) {
        match node.role {
            Role::ContactLine | Role::ChipGroup | Role::LinkRow => self.inline_row(node, indent),
            Role::BulletList => {
                for bullet in &node.children {
                    self.bullet(bullet, indent);
                }
            }
            _ => {
                match node.role {
                    Role::Section => self.y += SECTION_GAP_PX,
                    Role::Entry => self.y += ENTRY_GAP_PX,
                    _ => {}
                }
                if let Some(text) = &node.text {
                    self.paragraph(text, &node.style, indent);
                }
                for child in &node.children {
                    self.block(child, indent);
                }
            }
        }

        if let (Some(color), false) = (node.style.border_color, node.role == Role::Chip) {
            self.y += RULE_GAP_PX / 2.0;
            self.ops.push(DrawOp::Rule {
                x: self.left,
                y: self.y,
                width: self.width,
                color,
            });
            self.y += RULE_GAP_PX / 2.0;
        }
    }

    fn paragraph(&mut self, text: &str, style: &NodeStyle, indent: f32) {
        let line_h = style.font_size_px * LINE_HEIGHT;
        for line in SANS.wrap(text, self.width - indent, style.font_size_px, style.weight) {
            self.ops.push(DrawOp::Text {
                x: self.left + indent,
                y: self.y,
                size_px: style.font_size_px,
                weight: style.weight,
                color: style.color,
                text: line,
            });
            self.y += line_h;
        }
    }

    fn bullet(&mut self, node: &DocumentNode, indent: f32) {
        let Some(text) = &node.text else { return };
        self.ops.push(DrawOp::Text {
            x: self.left + indent,
            y: self.y,
            size_px: node.style.font_size_px,
            weight: FontWeight::Regular,
            color: node.style.color,
            text: BULLET.to_string(),
        });
        self.paragraph(text, &node.style, indent + BULLET_INDENT_PX);
    }

    /// Lays children left to right, wrapping to a new row when one would overflow.
    fn inline_row(&mut self, node: &DocumentNode, indent: f32) {
        let items: Vec<(&str, &NodeStyle)> = node
            .children
            .iter()
            .filter_map(|c| c.text.as_deref().map(|t| (t, &c.style)))
            .collect();
        if items.is_empty() {
            return;
        }

        let pad = |style: &NodeStyle| style.border_color.map_or((0.0, 0.0), |_| (CHIP_PAD_X_PX, CHIP_PAD_Y_PX));
        let row_h = items
            .iter()
            .map(|(_, s)| s.font_size_px * LINE_HEIGHT + 2.0 * pad(s).1)
            .fold(0.0_f32, f32::max);
        let available = self.width - indent;
        let mut cursor = 0.0_f32;

        for (text, style) in items {
            let (pad_x, pad_y) = pad(style);
            let w = SANS.measure_px(text, style.font_size_px, style.weight) + 2.0 * pad_x;
            if cursor > 0.0 && cursor + w > available {
                self.y += row_h + ROW_GAP_PX;
                cursor = 0.0;
            }
            let x = self.left + indent + cursor;
            if let Some(color) = style.border_color {
                self.ops.push(DrawOp::Outline {
                    x,
                    y: self.y,
                    width: w,
                    height: style.font_size_px * LINE_HEIGHT + 2.0 * pad_y,
                    color,
                });
            }
            self.ops.push(DrawOp::Text {
                x: x + pad_x,
                y: self.y + pad_y,
                size_px: style.font_size_px,
                weight: style.weight,
                color: style.color,
                text: text.to_string(),
            });
            cursor += w + INLINE_GAP_PX;
        }
        self.y += row_h;
    }
}

/// Lays out `doc` at its fixed width (print width when the projection has none).
pub fn layout_document(doc: &RenderedDocument) -> Canvas {
    let width_px = doc.width_px.unwrap_or(PRINT_WIDTH_PX);
    let mut flow = Flow {
        left: MARGIN_PX,
        width: width_px as f32 - 2.0 * MARGIN_PX,
        y: MARGIN_PX,
        ops: Vec::new(),
    };
    flow.block(&doc.root, 0.0);

    let height_px = (flow.y + MARGIN_PX).ceil() as u32;
    debug!(width_px, height_px, ops = flow.ops.len(), "laid out export canvas");

    Canvas {
        width_px,
        height_px,
        background: doc.background,
        ops: flow.ops,
    }
}
