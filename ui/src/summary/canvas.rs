//! RGB raster canvas the compositor paints onto.

use image::{Rgb, RgbImage};

use super::Rect;

pub type Color = Rgb<u8>;

pub fn color(rgb: [u8; 3]) -> Color {
    Rgb(rgb)
}

/// Raster buffer plus the compositor's paint cursor. Owned by a single
/// generation call and consumed by `into_png`.
pub struct Canvas {
    image: RgbImage,
    pub cursor_y: f32,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
            cursor_y: 0.0,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Blend `color` over the existing pixel at the given coverage (0..=1).
    /// Out-of-bounds writes are clipped.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        for channel in 0..3 {
            let base = pixel[channel] as f32;
            let ink = color[channel] as f32;
            pixel[channel] = (base + (ink - base) * coverage).round() as u8;
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x0 = rect.x.floor() as i64;
        let y0 = rect.y.floor() as i64;
        let x1 = rect.right().ceil() as i64;
        let y1 = rect.bottom().ceil() as i64;
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, color, 1.0);
            }
        }
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: f32) {
        let t = thickness.max(1.0);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - t, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.h), color);
        self.fill_rect(Rect::new(rect.right() - t, rect.y, t, rect.h), color);
    }

    /// Encode the buffer as an 8-bit RGB PNG.
    pub fn into_png(self) -> Result<Vec<u8>, png::EncodingError> {
        let (width, height) = (self.width(), self.height());
        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buffer, width, height);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            encoder
                .write_header()?
                .write_image_data(&self.image.into_raw())?;
        }
        Ok(buffer)
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Color {
        *self.image.get_pixel(x, y)
    }
}
