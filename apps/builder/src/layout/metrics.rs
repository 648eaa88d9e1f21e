//! Static glyph-width table for the export face.
//!
//! Widths are in em units, so a run measures `sum(widths) * font_size_px`.
//! The table approximates a humanist sans-serif; exact shaping is left to the
//! rasterizer, the table only has to agree with itself so wrapping is stable.
//! Covers ASCII 0x20..=0x7E, index = (char as usize) - 32.

use crate::preview::document::FontWeight;

/// Bold runs are set wider than regular ones by this factor.
const BOLD_EXPANSION: f32 = 1.06;
const MEDIUM_EXPANSION: f32 = 1.03;

pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for codepoints outside the table.
    pub average_char_width: f32,
    pub space_width: f32,
}

/// Metrics for the single sans face used by the print theme.
pub static SANS: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    space_width: 0.25,
};

impl FontMetricTable {
    /// Width of `s` in em units. Non-ASCII characters use `average_char_width`.
    pub fn measure_em(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    pub fn measure_px(&self, s: &str, size_px: f32, weight: FontWeight) -> f32 {
        self.measure_em(s) * size_px * expansion(weight)
    }

    /// Greedy word wrap at `max_width_px`.
    ///
    /// Whitespace runs collapse to one space. A single word wider than the line
    /// is kept whole on its own line rather than split mid-word.
    pub fn wrap(&self, s: &str, max_width_px: f32, size_px: f32, weight: FontWeight) -> Vec<String> {
        let space = self.space_width * size_px * expansion(weight);
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in s.split_whitespace() {
            let word_w = self.measure_px(word, size_px, weight);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space + word_w > max_width_px {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_w;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

fn expansion(weight: FontWeight) -> f32 {
    match weight {
        FontWeight::Regular => 1.0,
        FontWeight::Medium => MEDIUM_EXPANSION,
        FontWeight::Bold => BOLD_EXPANSION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_is_zero() {
        assert_eq!(SANS.measure_em(""), 0.0);
    }

    #[test]
    fn test_measure_ascii_word() {
        // R(0.61) + u(0.56) + s(0.44) + t(0.39)
        let width = SANS.measure_em("Rust");
        assert!((width - 2.00).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_measure_non_ascii_falls_back() {
        assert!((SANS.measure_em("é") - SANS.average_char_width).abs() < 1e-4);
        assert!((SANS.measure_em("–") - SANS.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let regular = SANS.measure_px("Engineer", 16.0, FontWeight::Regular);
        let bold = SANS.measure_px("Engineer", 16.0, FontWeight::Bold);
        assert!(bold > regular);
    }

    #[test]
    fn test_wrap_short_text_is_single_line() {
        let lines = SANS.wrap("Senior Engineer", 700.0, 16.0, FontWeight::Regular);
        assert_eq!(lines, vec!["Senior Engineer"]);
    }

    #[test]
    fn test_wrap_empty_text_has_no_lines() {
        assert!(SANS.wrap("   ", 700.0, 16.0, FontWeight::Regular).is_empty());
    }

    #[test]
    fn test_wrap_long_text_breaks_between_words() {
        let text = "word ".repeat(60);
        let lines = SANS.wrap(&text, 300.0, 16.0, FontWeight::Regular);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(SANS.measure_px(line, 16.0, FontWeight::Regular) <= 300.0);
            assert!(!line.starts_with(' ') && !line.ends_with(' '));
        }
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.trim_end());
    }

    #[test]
    fn test_wrap_keeps_oversized_word_whole() {
        let word = "a".repeat(200);
        let lines = SANS.wrap(&word, 100.0, 16.0, FontWeight::Regular);
        assert_eq!(lines, vec![word]);
    }
}
