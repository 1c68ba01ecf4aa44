//! CPU bar renderer.
//!
//! Provides the [`BarRenderer`] struct which owns the color buffer and draws
//! array snapshots as vertical bars. SDL only sees the finished buffer.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::RgbaImage;

use crate::colors;
use crate::error::Result;
use crate::sort::Mutation;

pub struct BarRenderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl BarRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.color_buffer = vec![colors::BACKGROUND; (width * height) as usize];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    #[inline]
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// One-pixel border around the rectangle `(x, y, width, height)`.
    pub fn draw_rect_outline(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        if width <= 0 || height <= 0 {
            return;
        }
        let right = x + width - 1;
        let bottom = y + height - 1;
        for dx in x..=right {
            self.set_pixel(dx, y, color);
            self.set_pixel(dx, bottom, color);
        }
        for dy in y..=bottom {
            self.set_pixel(x, dy, color);
            self.set_pixel(right, dy, color);
        }
    }

    /// Draws `values` as bottom-aligned bars spanning the whole buffer height.
    ///
    /// Each bar is `max(1, width / len)` pixels wide and
    /// `value * height / max_value` pixels tall. Bars touched by `highlight`
    /// are filled with [`colors::HIGHLIGHT`].
    pub fn draw_bars(&mut self, values: &[u32], max_value: u32, highlight: Option<Mutation>) {
        self.clear(colors::BACKGROUND);
        if values.is_empty() || max_value == 0 {
            return;
        }

        let bar_width = (self.width / values.len() as u32).max(1) as i32;
        let panel_height = self.height as u64;

        for (i, &value) in values.iter().enumerate() {
            let bar_height = (value.min(max_value) as u64 * panel_height / max_value as u64) as i32;
            let x = i as i32 * bar_width;
            let y = self.height as i32 - bar_height;

            let fill = match highlight {
                Some(mutation) if mutation.touches(i) => colors::HIGHLIGHT,
                _ => colors::BAR,
            };
            self.draw_rect(x, y, bar_width, bar_height, fill);
            self.draw_rect_outline(x, y, bar_width, bar_height, colors::BAR_OUTLINE);
        }
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Converts the current frame to an RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let color = self.color_buffer[(y * self.width + x) as usize];
            image::Rgba(colors::to_rgba(color))
        })
    }

    /// Writes the current frame to `path`; the format follows the extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), image::ImageError> {
        self.to_image().save(path)
    }

    /// Saves the frame as `sortviz-<unix millis>.png` inside `dir` and
    /// returns the written path. The buffer is left untouched on failure.
    pub fn save_screenshot(&self, dir: &Path) -> Result<PathBuf> {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let path = dir.join(format!("sortviz-{stamp}.png"));
        self.save_png(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_are_bottom_aligned_and_scaled() {
        let mut renderer = BarRenderer::new(40, 100);
        renderer.draw_bars(&[50, 100], 100, None);

        // Each bar is 20px wide. The first is half the height.
        assert_eq!(renderer.get_pixel(10, 98), Some(colors::BAR));
        assert_eq!(renderer.get_pixel(10, 60), Some(colors::BAR));
        assert_eq!(renderer.get_pixel(10, 40), Some(colors::BACKGROUND));
        // Second bar reaches the top, where its outline is.
        assert_eq!(renderer.get_pixel(30, 0), Some(colors::BAR_OUTLINE));
        assert_eq!(renderer.get_pixel(30, 10), Some(colors::BAR));
    }

    #[test]
    fn bar_outline() {
        let mut renderer = BarRenderer::new(40, 100);
        renderer.draw_bars(&[50, 100], 100, None);

        assert_eq!(renderer.get_pixel(0, 75), Some(colors::BAR_OUTLINE));
        assert_eq!(renderer.get_pixel(19, 75), Some(colors::BAR_OUTLINE));
        assert_eq!(renderer.get_pixel(10, 50), Some(colors::BAR_OUTLINE));
    }

    #[test]
    fn highlight_marks_touched_bars() {
        let mut renderer = BarRenderer::new(30, 10);
        renderer.draw_bars(&[10, 10, 10], 10, Some(Mutation::Swap(0, 2)));

        assert_eq!(renderer.get_pixel(5, 5), Some(colors::HIGHLIGHT));
        assert_eq!(renderer.get_pixel(15, 5), Some(colors::BAR));
        assert_eq!(renderer.get_pixel(25, 5), Some(colors::HIGHLIGHT));
    }

    #[test]
    fn narrow_buffer_uses_one_pixel_bars() {
        let mut renderer = BarRenderer::new(4, 10);
        renderer.draw_bars(&[10; 8], 10, None);
        // Bars past the right edge are clipped, not wrapped.
        assert_eq!(renderer.get_pixel(3, 5), Some(colors::BAR_OUTLINE));
        assert_eq!(renderer.get_pixel(4, 5), None);
    }

    #[test]
    fn empty_array_clears() {
        let mut renderer = BarRenderer::new(8, 8);
        renderer.clear(colors::BAR);
        renderer.draw_bars(&[], 500, None);
        let background = colors::BACKGROUND.to_ne_bytes();
        assert!(renderer.as_bytes().chunks(4).all(|px| px == &background[..]));
    }

    #[test]
    fn resize_reallocates() {
        let mut renderer = BarRenderer::new(8, 8);
        renderer.resize(16, 4);
        assert_eq!((renderer.width(), renderer.height()), (16, 4));
        assert_eq!(renderer.as_bytes().len(), 16 * 4 * 4);
    }

    #[test]
    fn frame_converts_to_rgba_image() {
        let mut renderer = BarRenderer::new(2, 1);
        renderer.set_pixel(1, 0, colors::HIGHLIGHT);
        let image = renderer.to_image();
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn saves_png() {
        let path = std::env::temp_dir().join(format!("sortviz-{}.png", std::process::id()));
        let mut renderer = BarRenderer::new(20, 10);
        renderer.draw_bars(&[3, 7], 10, None);
        renderer.save_png(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (20, 10));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn screenshot_into_dir() {
        let dir = std::env::temp_dir().join(format!("sortviz-shots-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let renderer = BarRenderer::new(8, 4);

        let path = renderer.save_screenshot(&dir).unwrap();
        assert!(path.starts_with(&dir));
        assert!(path.is_file());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn screenshot_under_a_file_fails_without_touching_the_frame() {
        let file = std::env::temp_dir().join(format!("sortviz-not-a-dir-{}", std::process::id()));
        std::fs::write(&file, b"x").unwrap();
        let mut renderer = BarRenderer::new(20, 10);
        renderer.draw_bars(&[3, 7], 10, None);
        let before = renderer.as_bytes().to_vec();

        let result = renderer.save_screenshot(&file.join("shots"));
        assert!(matches!(result, Err(crate::Error::Screenshot(_))));
        assert_eq!(renderer.as_bytes(), &before[..]);

        // Drawing keeps working after the failure.
        renderer.draw_bars(&[7, 3], 10, None);
        assert_eq!(renderer.get_pixel(15, 5), Some(colors::BAR));
        std::fs::remove_file(file).unwrap();
    }
}
