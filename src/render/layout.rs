use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

/// Center-crop to the largest square, then scale to `size`
pub(crate) fn square_background(background: &DynamicImage, size: u32) -> RgbaImage {
    let (width, height) = (background.width(), background.height());
    let side = width.min(height).max(1);
    let x = width.saturating_sub(side) / 2;
    let y = height.saturating_sub(side) / 2;
    background
        .crop_imm(x, y, side, side)
        .resize_exact(size, size, FilterType::Lanczos3)
        .to_rgba8()
}

/// Darken every pixel as if a black layer with `opacity` alpha lay on top
pub(crate) fn apply_dark_overlay(canvas: &mut RgbaImage, opacity: u8) {
    let keep = 255 - u16::from(opacity);
    for pixel in canvas.pixels_mut() {
        for channel in &mut pixel.0[..3] {
            *channel = ((u16::from(*channel) * keep + 127) / 255) as u8;
        }
    }
}

/// Greedy word wrap by measured width. Explicit newlines start a new line;
/// a single word wider than `max_width` gets a line of its own.
pub(crate) fn wrap_text<F>(text: &str, max_width: u32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Left edge that centers `width` inside `canvas_width`
pub(crate) fn centered(canvas_width: u32, width: u32) -> i32 {
    (i64::from(canvas_width) - i64::from(width)).max(0) as i32 / 2
}
