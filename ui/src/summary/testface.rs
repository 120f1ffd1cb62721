//! Deterministic block typeface for raster tests.
//!
//! Paints every glyph as a solid 5×7 cell block, so layout-level assertions
//! (frames, bars, slices, line advances) run without touching the network
//! font cache. Letterforms are intentionally not legible.

use super::canvas::{Canvas, Color};
use super::fonts::{LineMetrics, Typeface};
use super::Rect;

const GLYPH_COLS: f32 = 5.0;
const GLYPH_ROWS: f32 = 7.0;
const ADVANCE_COLS: f32 = 6.0;

pub struct DotMatrixFace;

impl Typeface for DotMatrixFace {
    fn line_metrics(&self, px: f32) -> LineMetrics {
        LineMetrics {
            line_h: (px * 1.3).round(),
            ascent: px,
        }
    }

    fn width(&self, text: &str, px: f32) -> f32 {
        let scale = px / GLYPH_ROWS;
        text.chars().count() as f32 * ADVANCE_COLS * scale
    }

    fn paint(
        &self,
        canvas: &mut Canvas,
        x: f32,
        baseline: f32,
        text: &str,
        px: f32,
        color: Color,
    ) {
        let scale = px / GLYPH_ROWS;
        let mut pen_x = x;
        for ch in text.chars() {
            if !ch.is_whitespace() {
                canvas.fill_rect(
                    Rect::new(
                        pen_x,
                        baseline - GLYPH_ROWS * scale,
                        GLYPH_COLS * scale,
                        GLYPH_ROWS * scale,
                    ),
                    color,
                );
            }
            pen_x += ADVANCE_COLS * scale;
        }
    }
}
