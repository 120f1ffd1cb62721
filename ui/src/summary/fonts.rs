//! Lesson font acquisition and text painting for the summary image.
//!
//! The summary face is fetched once from the Google Fonts repository and
//! cached under the per-user cache directory. Acquisition is
//! acquire-or-fetch-then-use: a partial download never becomes the cached
//! file, and any failure aborts the composition that asked for the font —
//! there is no fallback face and no retry.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::canvas::{Canvas, Color};

/// Gowun Dodum covers the Hangul the lesson data is full of.
const FONT_URL: &str =
    "https://github.com/google/fonts/raw/main/ofl/gowundodum/GowunDodum-Regular.ttf";
const FONT_FILE: &str = "GowunDodum-Regular.ttf";

#[derive(Debug, Error)]
pub enum FontError {
    #[error("font download failed: {0}")]
    Download(#[from] reqwest::Error),
    #[error("font download failed with HTTP status {0}")]
    Status(u16),
    #[error("font cache io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("font file is not a usable TTF: {0}")]
    Parse(String),
    #[error("no per-user cache directory available")]
    CacheDir,
}

/// Vertical rhythm for one style size.
#[derive(Debug, Clone, Copy)]
pub struct LineMetrics {
    pub line_h: f32,
    pub ascent: f32,
}

impl LineMetrics {
    pub fn descent(&self) -> f32 {
        self.line_h - self.ascent
    }
}

/// Measurement + glyph painting, so chart and compositor code stay
/// independent of where the glyphs come from.
pub trait Typeface {
    fn line_metrics(&self, px: f32) -> LineMetrics;
    fn width(&self, text: &str, px: f32) -> f32;
    fn paint(
        &self,
        canvas: &mut Canvas,
        x: f32,
        baseline: f32,
        text: &str,
        px: f32,
        color: Color,
    );
}

/// The production face: a TTF parsed by fontdue.
#[derive(Debug)]
pub struct StudioFace {
    font: fontdue::Font,
}

impl StudioFace {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|msg| FontError::Parse(msg.to_string()))?;
        Ok(Self { font })
    }

    /// Load the cached lesson font, downloading it first if this is the
    /// machine's first composition.
    pub fn acquire() -> Result<Self, FontError> {
        let path = font_cache_path()?;
        Self::acquire_at(&path)
    }

    fn acquire_at(path: &Path) -> Result<Self, FontError> {
        if path.exists() {
            let bytes = fs::read(path)?;
            return Self::from_bytes(&bytes);
        }

        tracing::info!(url = FONT_URL, "fetching lesson font");
        let bytes = download(FONT_URL)?;
        // Parse before caching so a bad payload never becomes the cache.
        let face = Self::from_bytes(&bytes)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let partial = path.with_extension("ttf.part");
        if let Err(err) = fs::write(&partial, &bytes).and_then(|()| fs::rename(&partial, path)) {
            let _ = fs::remove_file(&partial);
            return Err(FontError::Io(err));
        }

        tracing::info!(path = %path.display(), "cached lesson font");
        Ok(face)
    }
}

impl Typeface for StudioFace {
    fn line_metrics(&self, px: f32) -> LineMetrics {
        match self.font.horizontal_line_metrics(px) {
            Some(metrics) => LineMetrics {
                // Keep a floor on line height so caps-only lines don't
                // collapse the vertical rhythm.
                line_h: metrics.new_line_size.max(px * 1.24).ceil(),
                ascent: metrics.ascent.round(),
            },
            None => LineMetrics {
                line_h: (px * 1.28).round(),
                ascent: (px * 0.92).round(),
            },
        }
    }

    fn width(&self, text: &str, px: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, px).advance_width)
            .sum()
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
        let mut pen_x = x;
        for ch in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(ch, px);
            let glyph_left = pen_x + metrics.xmin as f32;
            let glyph_top = baseline - metrics.ymin as f32 - metrics.height as f32;
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let coverage = bitmap[row * metrics.width + col] as f32 / 255.0;
                    if coverage > 0.0 {
                        canvas.blend_pixel(
                            glyph_left as i64 + col as i64,
                            glyph_top as i64 + row as i64,
                            color,
                            coverage,
                        );
                    }
                }
            }
            pen_x += metrics.advance_width;
        }
    }
}

fn font_cache_path() -> Result<PathBuf, FontError> {
    let dirs = directories::ProjectDirs::from("com", "DataChef", "DataChef")
        .ok_or(FontError::CacheDir)?;
    Ok(dirs.cache_dir().join("fonts").join(FONT_FILE))
}

fn download(url: &str) -> Result<Vec<u8>, FontError> {
    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(FontError::Status(response.status().as_u16()));
    }
    Ok(response.bytes()?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_parse_not_panic() {
        let err = StudioFace::from_bytes(&[0x00, 0x01, 0x02, 0x03]).unwrap_err();
        assert!(matches!(err, FontError::Parse(_)));
    }

    #[test]
    fn parse_failure_never_reaches_the_cache() {
        let dir = std::env::temp_dir().join("datachef-font-parse-test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("temp dir");
        let cached = dir.join(FONT_FILE);
        fs::write(&cached, b"definitely not a font").expect("seed cache");

        let err = StudioFace::acquire_at(&cached).unwrap_err();
        assert!(matches!(err, FontError::Parse(_)));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn line_metrics_descent_is_consistent() {
        let metrics = LineMetrics {
            line_h: 26.0,
            ascent: 18.0,
        };
        assert_eq!(metrics.descent(), 8.0);
    }
}
