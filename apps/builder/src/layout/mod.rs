//! Export layout: deterministic word wrap onto a fixed-width canvas.

pub mod canvas;
pub mod metrics;

pub use canvas::{layout_document, Canvas, DrawOp};
