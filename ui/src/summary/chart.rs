//! Primitive pie/bar chart rendering.
//!
//! These are the minimal raster routines used by the summary compositor, not
//! the interactive previews the lesson pages show on screen. Layout math is
//! kept in pure helpers so both the renderer and the tests share it.

use crate::core::parse::{DataPoint, Series};
use crate::core::session::ChartKind;

use super::Rect;

/// One chart to draw: recipe, title, and the parsed series. Built per render
/// call and discarded with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDef {
    pub kind: ChartKind,
    pub title: String,
    pub series: Series,
}

impl ChartDef {
    pub fn new(kind: ChartKind, title: impl Into<String>, series: Series) -> Self {
        Self {
            kind,
            title: title.into(),
            series,
        }
    }
}

/// Horizontal space reserved around the bar run, in canvas pixels.
pub const BAR_MARGIN: f32 = 12.0;

/// Angular spans `(start_deg, sweep_deg)` for a pie, clockwise with 0° at
/// 3 o'clock; the first slice starts at −90° (12 o'clock). A zero total has
/// no angular interpretation and yields no spans.
pub fn slice_spans(series: &[DataPoint]) -> Vec<(f32, f32)> {
    let total: f64 = series.iter().map(|point| point.value).sum();
    if total == 0.0 {
        return Vec::new();
    }

    let mut start = -90.0f32;
    series
        .iter()
        .map(|point| {
            let sweep = (point.value / total) as f32 * 360.0;
            let span = (start, sweep);
            start += sweep;
            span
        })
        .collect()
}

/// Bar rectangles for `series` inside `plot`, tallest bar filling the plot
/// height. Bars advance left-to-right at 1.5× bar-width pitch. A zero (or
/// absent) maximum yields no bars.
pub fn bar_layout(series: &[DataPoint], plot: Rect) -> Vec<Rect> {
    let max = series
        .iter()
        .map(|point| point.value)
        .fold(0.0f64, f64::max);
    if series.is_empty() || max <= 0.0 {
        return Vec::new();
    }

    let bar_w = (plot.w - BAR_MARGIN) / (series.len() as f32 * 1.5);
    let pitch = bar_w * 1.5;
    series
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let h = ((point.value / max) as f32 * plot.h).max(0.0);
            Rect::new(
                plot.x + BAR_MARGIN / 2.0 + index as f32 * pitch,
                plot.bottom() - h,
                bar_w,
                h,
            )
        })
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
pub use paint::draw_chart;

#[cfg(not(target_arch = "wasm32"))]
mod paint {
    use super::*;
    use crate::summary::canvas::{color, Canvas};
    use crate::summary::fonts::Typeface;
    use crate::summary::PALETTE;

    const FRAME: [u8; 3] = [224, 201, 166];
    const INK: [u8; 3] = [58, 44, 32];
    const TITLE_PX: f32 = 16.0;
    const LABEL_PX: f32 = 12.0;
    const INSET: f32 = 10.0;

    /// Draw one chart into `rect`: bounding box and centered title always,
    /// then the recipe-specific marks. An empty series renders the "no data"
    /// placeholder — a defined fallback, not an error.
    pub fn draw_chart(canvas: &mut Canvas, face: &dyn Typeface, def: &ChartDef, rect: Rect) {
        canvas.stroke_rect(rect, color(FRAME), 2.0);

        let title_metrics = face.line_metrics(TITLE_PX);
        let title_x = rect.center_x() - face.width(&def.title, TITLE_PX) / 2.0;
        face.paint(
            canvas,
            title_x,
            rect.y + INSET + title_metrics.ascent,
            &def.title,
            TITLE_PX,
            color(INK),
        );

        let plot = Rect::new(
            rect.x + INSET,
            rect.y + INSET + title_metrics.line_h + 6.0,
            rect.w - 2.0 * INSET,
            rect.h - 2.0 * INSET - title_metrics.line_h - 6.0,
        );

        if def.series.is_empty() {
            let placeholder = "no data yet";
            let x = plot.center_x() - face.width(placeholder, LABEL_PX) / 2.0;
            face.paint(canvas, x, plot.center_y(), placeholder, LABEL_PX, color(INK));
            return;
        }

        match def.kind {
            ChartKind::Pie => draw_pie(canvas, def, plot),
            ChartKind::Bar => draw_bars(canvas, face, def, plot),
        }
    }

    fn draw_pie(canvas: &mut Canvas, def: &ChartDef, plot: Rect) {
        let spans = slice_spans(&def.series);
        if spans.is_empty() {
            return;
        }

        let cx = plot.center_x();
        let cy = plot.center_y();
        let radius = (plot.w.min(plot.h) / 2.0 - 4.0).max(1.0);
        let radius_sq = radius * radius;

        let x0 = (cx - radius).floor() as i64;
        let x1 = (cx + radius).ceil() as i64;
        let y0 = (cy - radius).floor() as i64;
        let y1 = (cy + radius).ceil() as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy > radius_sq {
                    continue;
                }
                // Clockwise degrees with 0° at 3 o'clock (screen y grows
                // downward), shifted into the [-90, 270) sweep domain.
                let mut angle = dy.atan2(dx).to_degrees();
                if angle < -90.0 {
                    angle += 360.0;
                }
                let slice = spans
                    .iter()
                    .position(|(start, sweep)| angle >= *start && angle < start + sweep)
                    .unwrap_or(spans.len() - 1);
                canvas.blend_pixel(x, y, color(PALETTE[slice % PALETTE.len()]), 1.0);
            }
        }
    }

    fn draw_bars(canvas: &mut Canvas, face: &dyn Typeface, def: &ChartDef, plot: Rect) {
        let label_metrics = face.line_metrics(LABEL_PX);
        let bars_area = Rect::new(
            plot.x,
            plot.y,
            plot.w,
            (plot.h - label_metrics.line_h).max(0.0),
        );

        let bars = bar_layout(&def.series, bars_area);
        for (index, bar) in bars.iter().enumerate() {
            canvas.fill_rect(*bar, color(PALETTE[index % PALETTE.len()]));

            let label = &def.series[index].label;
            let label_x = bar.x + bar.w / 2.0 - face.width(label, LABEL_PX) / 2.0;
            face.paint(
                canvas,
                label_x,
                bars_area.bottom() + label_metrics.ascent,
                label,
                LABEL_PX,
                color(INK),
            );
        }
    }
}
