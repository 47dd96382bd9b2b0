//! Small drawing helpers shared by the screens.

use raylib::core::text::measure_text;
use raylib::prelude::*;

use crate::geometry::Rect;

/// `0xRRGGBB` to an opaque raylib color.
pub fn hex(rgb: u32) -> Color {
    hex_alpha(rgb, 255)
}

pub fn hex_alpha(rgb: u32, alpha: u8) -> Color {
    Color::new(((rgb >> 16) & 0xff) as u8, ((rgb >> 8) & 0xff) as u8, (rgb & 0xff) as u8, alpha)
}

/// Three-stop diagonal gradient, top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub stops: [u32; 3],
}

impl Gradient {
    pub const fn new(start: u32, middle: u32, end: u32) -> Self {
        Self { stops: [start, middle, end] }
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, area: Rect) {
        let [start, middle, end] = self.stops.map(hex);
        // Corners: top-left, bottom-left, top-right, bottom-right
        d.draw_rectangle_gradient_ex(Rectangle::from(area), start, middle, middle, end);
    }
}

/// Greedy word wrap. `measure` returns the pixel width of a candidate line.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() { word.to_string() } else { format!("{line} {word}") };
        if measure(&candidate) <= max_width || line.is_empty() {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Draws `text` wrapped to `max_width`, each line centered on `center_x`.
/// Returns the y just below the last line.
pub fn draw_wrapped_centered(
    d: &mut impl RaylibDraw,
    text: &str,
    center_x: f32,
    top: f32,
    max_width: f32,
    font_size: i32,
    color: Color,
) -> f32 {
    let line_height = font_size as f32 * 1.3;
    let mut y = top;
    for line in wrap_text(text, max_width, |s| measure_text(s, font_size) as f32) {
        let w = measure_text(&line, font_size) as f32;
        d.draw_text(&line, (center_x - w * 0.5) as i32, y as i32, font_size, color);
        y += line_height;
    }
    y
}

/// Same as [`draw_wrapped_centered`], left aligned at `left`.
pub fn draw_wrapped(
    d: &mut impl RaylibDraw,
    text: &str,
    left: f32,
    top: f32,
    max_width: f32,
    font_size: i32,
    color: Color,
) -> f32 {
    let line_height = font_size as f32 * 1.4;
    let mut y = top;
    for line in wrap_text(text, max_width, |s| measure_text(s, font_size) as f32) {
        d.draw_text(&line, left as i32, y as i32, font_size, color);
        y += line_height;
    }
    y
}

pub fn draw_text_centered(d: &mut impl RaylibDraw, text: &str, area: Rect, font_size: i32, color: Color) {
    let w = measure_text(text, font_size) as f32;
    let c = area.center();
    d.draw_text(text, (c.x - w * 0.5) as i32, (c.y - font_size as f32 * 0.5) as i32, font_size, color);
}

pub fn draw_pill(d: &mut impl RaylibDraw, area: Rect, color: Color) {
    d.draw_rectangle_rounded(Rectangle::from(area), 1.0, 16, color);
}

/// Rounded panel with a 1px border, drawn as two stacked fills.
pub fn draw_panel(d: &mut impl RaylibDraw, area: Rect, roundness: f32, fill: Color, outline: Color) {
    d.draw_rectangle_rounded(Rectangle::from(area), roundness, 16, outline);
    d.draw_rectangle_rounded(Rectangle::from(area.inset(1.0)), roundness, 16, fill);
}

/// Source rectangle that crops a `tex_w`×`tex_h` image to fill `dest` without
/// stretching (CSS `object-fit: cover`).
pub fn cover_source(tex_w: f32, tex_h: f32, dest: Rect) -> Rect {
    if tex_w <= 0.0 || tex_h <= 0.0 || dest.width <= 0.0 || dest.height <= 0.0 {
        return Rect::new(0.0, 0.0, tex_w.max(0.0), tex_h.max(0.0));
    }
    let tex_aspect = tex_w / tex_h;
    let dest_aspect = dest.width / dest.height;
    if tex_aspect > dest_aspect {
        // Too wide: trim the sides
        let w = tex_h * dest_aspect;
        Rect::new((tex_w - w) * 0.5, 0.0, w, tex_h)
    } else {
        let h = tex_w / dest_aspect;
        Rect::new(0.0, (tex_h - h) * 0.5, tex_w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_px_per_char(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap_text("Mending makan ini aja deh", 120.0, ten_px_per_char);
        assert_eq!(lines, vec!["Mending", "makan ini", "aja deh"]);
    }

    #[test]
    fn wrap_keeps_overlong_word_on_its_own_line() {
        let lines = wrap_text("a dibarengin b", 50.0, ten_px_per_char);
        assert_eq!(lines, vec!["a", "dibarengin", "b"]);
    }

    #[test]
    fn cover_crops_wide_image_sides() {
        let src = cover_source(2000.0, 1000.0, Rect::new(0.0, 0.0, 400.0, 400.0));
        assert_eq!(src, Rect::new(500.0, 0.0, 1000.0, 1000.0));
    }

    #[test]
    fn cover_crops_tall_image_top_and_bottom() {
        let src = cover_source(1000.0, 2000.0, Rect::new(0.0, 0.0, 400.0, 200.0));
        assert_eq!(src, Rect::new(0.0, 750.0, 1000.0, 500.0));
    }

    #[test]
    fn hex_splits_channels() {
        let c = hex_alpha(0xdc2626, 128);
        assert_eq!((c.r, c.g, c.b, c.a), (0xdc, 0x26, 0x26, 128));
    }
}
