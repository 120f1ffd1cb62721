//! Two-pass summary compositor: measure wrapped text and chart rows, then
//! paint everything onto one canvas and encode it as PNG bytes.

use thiserror::Error;
use time::OffsetDateTime;

use crate::core::format;

use super::canvas::{color, Canvas};
use super::chart::{draw_chart, ChartDef};
use super::fonts::Typeface;
use super::wrap::wrap;
use super::Rect;

/// Default export width; height is computed from the content.
pub const CANVAS_WIDTH: u32 = 1080;

const PAD: f32 = 48.0;
const LINE_SPACING: f32 = 6.0;
const BLOCK_GAP: f32 = 14.0;
const SECTION_GAP: f32 = 28.0;
const CHART_GAP: f32 = 24.0;
const CHART_ASPECT: f32 = 0.75;

const BACKGROUND: [u8; 3] = [255, 248, 240];
const INK: [u8; 3] = [58, 44, 32];
const ACCENT: [u8; 3] = [210, 105, 30];

/// Text style classes used on the summary image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Title,
    Header,
    Body,
    Small,
}

impl StyleClass {
    pub fn px(self) -> f32 {
        match self {
            StyleClass::Title => 40.0,
            StyleClass::Header => 26.0,
            StyleClass::Body => 18.0,
            StyleClass::Small => 13.0,
        }
    }

    fn ink(self) -> [u8; 3] {
        match self {
            StyleClass::Title | StyleClass::Header => ACCENT,
            StyleClass::Body | StyleClass::Small => INK,
        }
    }
}

/// One styled paragraph of input text, wrapped during composition.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub style: StyleClass,
}

impl TextBlock {
    pub fn new(style: StyleClass, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Everything one summary image contains, in paint order: lead text, one row
/// of charts, trailing note text. The submission-time stamp is appended by
/// the compositor itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryDoc {
    pub lead: Vec<TextBlock>,
    pub charts: Vec<ChartDef>,
    pub trailing: Vec<TextBlock>,
}

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

struct WrappedLine {
    text: String,
    style: StyleClass,
    end_of_block: bool,
}

/// Compose `doc` into PNG bytes.
///
/// Output bytes are a pure function of the inputs; `generated_at` is the one
/// intentionally volatile field, rendered as the submission-time stamp.
pub fn compose(
    doc: &SummaryDoc,
    face: &dyn Typeface,
    canvas_width: u32,
    generated_at: OffsetDateTime,
) -> Result<Vec<u8>, ComposeError> {
    let avail = canvas_width as f32 - 2.0 * PAD;

    // Pass 1: wrap and measure.
    let lead = wrap_blocks(&doc.lead, face, avail);
    let trailing = wrap_blocks(&doc.trailing, face, avail);
    let stamp = format::stamp_line(generated_at);
    let stamp_metrics = face.line_metrics(StyleClass::Small.px());

    let mut total = PAD;
    total += lines_height(&lead, face);
    let chart_cell = chart_cell_size(doc.charts.len(), avail);
    if let Some((_, cell_h)) = chart_cell {
        total += SECTION_GAP + cell_h;
    }
    if !trailing.is_empty() {
        total += SECTION_GAP + lines_height(&trailing, face);
    }
    total += SECTION_GAP + stamp_metrics.line_h;
    total += PAD;

    // Pass 2: paint.
    let mut canvas = Canvas::new(canvas_width, total.ceil() as u32, color(BACKGROUND));
    canvas.cursor_y = PAD;

    paint_lines(&mut canvas, face, &lead);

    if let Some((cell_w, cell_h)) = chart_cell {
        canvas.cursor_y += SECTION_GAP;
        let row_top = canvas.cursor_y;
        for (index, def) in doc.charts.iter().enumerate() {
            let x = PAD + index as f32 * (cell_w + CHART_GAP);
            draw_chart(&mut canvas, face, def, Rect::new(x, row_top, cell_w, cell_h));
        }
        canvas.cursor_y = row_top + cell_h;
    }

    if !trailing.is_empty() {
        canvas.cursor_y += SECTION_GAP;
        paint_lines(&mut canvas, face, &trailing);
    }

    canvas.cursor_y += SECTION_GAP;
    let baseline = canvas.cursor_y + stamp_metrics.ascent;
    face.paint(
        &mut canvas,
        PAD,
        baseline,
        &stamp,
        StyleClass::Small.px(),
        color(INK),
    );

    Ok(canvas.into_png()?)
}

/// Fixed download name for one generation call.
pub fn export_filename(generated_at: OffsetDateTime) -> String {
    format!(
        "datachef-summary-{}.png",
        format::timestamp_slug(generated_at)
    )
}

fn wrap_blocks(blocks: &[TextBlock], face: &dyn Typeface, avail: f32) -> Vec<WrappedLine> {
    let mut lines = Vec::new();
    for block in blocks {
        let px = block.style.px();
        let wrapped = wrap(&block.text, |candidate| face.width(candidate, px), avail);
        let count = wrapped.len();
        for (index, text) in wrapped.into_iter().enumerate() {
            lines.push(WrappedLine {
                text,
                style: block.style,
                end_of_block: index + 1 == count,
            });
        }
    }
    lines
}

fn lines_height(lines: &[WrappedLine], face: &dyn Typeface) -> f32 {
    lines
        .iter()
        .map(|line| {
            let metrics = face.line_metrics(line.style.px());
            let mut h = metrics.line_h + LINE_SPACING;
            if line.end_of_block {
                h += BLOCK_GAP;
            }
            h
        })
        .sum()
}

fn paint_lines(canvas: &mut Canvas, face: &dyn Typeface, lines: &[WrappedLine]) {
    for line in lines {
        let px = line.style.px();
        let metrics = face.line_metrics(px);
        let baseline = canvas.cursor_y + metrics.ascent;
        face.paint(canvas, PAD, baseline, &line.text, px, color(line.style.ink()));
        canvas.cursor_y += metrics.line_h + LINE_SPACING;
        if line.end_of_block {
            canvas.cursor_y += BLOCK_GAP;
        }
    }
}

fn chart_cell_size(count: usize, avail: f32) -> Option<(f32, f32)> {
    if count == 0 {
        return None;
    }
    let cell_w = (avail - CHART_GAP * (count as f32 - 1.0)) / count as f32;
    Some((cell_w, cell_w * CHART_ASPECT))
}
