use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{DynamicImage, ImageError, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use super::layout::{apply_dark_overlay, centered, square_background, wrap_text};
use crate::error::AppError;

/// Reference width the style constants were tuned for
const BASE_SIZE: f32 = 1080.0;

const TEXT: Rgba<u8> = Rgba([255, 255, 255, 255]);
const SHADOW: Rgba<u8> = Rgba([0, 0, 0, 255]);
const CAPTION: Rgba<u8> = Rgba([220, 220, 220, 255]);

/// Turns a background and two texts into a square image file
pub(crate) trait Renderer {
    fn render(
        &self,
        background: &DynamicImage,
        primary: &str,
        secondary: &str,
        output: &Path,
    ) -> Result<PathBuf, AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layout {
    /// Primary block centered, secondary as an attribution line below it
    Centered,
    /// Primary near the top, secondary lines stacked under it
    Stacked,
}

#[derive(Debug, Clone)]
pub(crate) struct RenderStyle {
    pub(crate) size: u32,
    pub(crate) overlay_opacity: u8,
    pub(crate) layout: Layout,
    pub(crate) margin: u32,
    pub(crate) top: u32,
    pub(crate) primary_px: f32,
    pub(crate) secondary_px: f32,
    pub(crate) line_spacing: u32,
    pub(crate) block_gap: u32,
    pub(crate) shadow_offset: i32,
}

impl RenderStyle {
    fn scaled(size: u32, overlay_opacity: u8, layout: Layout, base: [f32; 7]) -> Self {
        let k = size as f32 / BASE_SIZE;
        let px = |v: f32| (v * k).round().max(1.0);
        let [margin, top, primary, secondary, spacing, gap, shadow] = base;
        Self {
            size,
            overlay_opacity,
            layout,
            margin: px(margin) as u32,
            top: px(top) as u32,
            primary_px: px(primary),
            secondary_px: px(secondary),
            line_spacing: px(spacing) as u32,
            block_gap: px(gap) as u32,
            shadow_offset: px(shadow) as i32,
        }
    }

    /// Verse card: large centered text with the reference underneath
    pub(crate) fn centered(size: u32, overlay_opacity: u8) -> Self {
        Self::scaled(
            size,
            overlay_opacity,
            Layout::Centered,
            [140.0, 0.0, 50.0, 36.0, 12.0, 40.0, 2.0],
        )
    }

    /// Prayer card: verse at the top, prayer lines below
    pub(crate) fn stacked(size: u32, overlay_opacity: u8) -> Self {
        Self::scaled(
            size,
            overlay_opacity,
            Layout::Stacked,
            [80.0, 140.0, 46.0, 34.0, 14.0, 50.0, 2.0],
        )
    }

    fn text_width(&self) -> u32 {
        self.size.saturating_sub(2 * self.margin).max(1)
    }
}

/// Renderer backed by a TrueType font
pub(crate) struct Composer {
    font: FontVec,
    style: RenderStyle,
}

impl Composer {
    pub(crate) fn new(font_path: &Path, style: RenderStyle) -> Result<Self, AppError> {
        let font_err = |reason: String| AppError::Font {
            path: font_path.to_path_buf(),
            reason,
        };
        let bytes = fs::read(font_path).map_err(|e| font_err(e.to_string()))?;
        let font = FontVec::try_from_vec(bytes).map_err(|e| font_err(e.to_string()))?;
        Ok(Self { font, style })
    }

    fn measure(&self, scale: PxScale, text: &str) -> u32 {
        text_size(scale, &self.font, text).0
    }

    fn line_height(&self, scale: PxScale) -> u32 {
        self.font.as_scaled(scale).height().ceil() as u32
    }

    fn wrap(&self, scale: PxScale, text: &str) -> Vec<String> {
        wrap_text(text, self.style.text_width(), |s| self.measure(scale, s))
    }

    fn draw(
        &self,
        canvas: &mut RgbaImage,
        x: i32,
        y: i32,
        scale: PxScale,
        color: Rgba<u8>,
        text: &str,
    ) {
        let offset = self.style.shadow_offset;
        if offset > 0 {
            draw_text_mut(canvas, SHADOW, x + offset, y + offset, scale, &self.font, text);
        }
        draw_text_mut(canvas, color, x, y, scale, &self.font, text);
    }

    fn draw_centered(&self, canvas: &mut RgbaImage, primary: &str, secondary: &str) {
        let style = &self.style;
        let primary_scale = PxScale::from(style.primary_px);
        let secondary_scale = PxScale::from(style.secondary_px);

        let lines = self.wrap(primary_scale, primary);
        let line_h = self.line_height(primary_scale);
        let block_h = lines.len() as u32 * line_h
            + style.line_spacing * lines.len().saturating_sub(1) as u32;

        let attribution = (!secondary.trim().is_empty()).then(|| format!("— {}", secondary.trim()));
        let total_h = match attribution {
            Some(_) => block_h + style.block_gap + self.line_height(secondary_scale),
            None => block_h,
        };

        let mut y = (style.size.saturating_sub(total_h) / 2) as i32;
        for line in &lines {
            let x = centered(style.size, self.measure(primary_scale, line));
            self.draw(canvas, x, y, primary_scale, TEXT, line);
            y += (line_h + style.line_spacing) as i32;
        }

        if let Some(attribution) = attribution {
            y += style.block_gap as i32 - style.line_spacing as i32;
            let x = centered(style.size, self.measure(secondary_scale, &attribution));
            self.draw(canvas, x, y, secondary_scale, CAPTION, &attribution);
        }
    }

    fn draw_stacked(&self, canvas: &mut RgbaImage, primary: &str, secondary: &str) {
        let style = &self.style;
        let x = style.margin as i32;
        let mut y = style.top as i32;

        for (scale, text) in [
            (PxScale::from(style.primary_px), primary),
            (PxScale::from(style.secondary_px), secondary),
        ] {
            let step = (self.line_height(scale) + style.line_spacing) as i32;
            for line in self.wrap(scale, text) {
                self.draw(canvas, x, y, scale, TEXT, &line);
                y += step;
            }
            y += style.block_gap as i32 - style.line_spacing as i32;
        }
    }
}

impl Renderer for Composer {
    fn render(
        &self,
        background: &DynamicImage,
        primary: &str,
        secondary: &str,
        output: &Path,
    ) -> Result<PathBuf, AppError> {
        let size = self.style.size;
        let mut canvas = square_background(background, size);
        apply_dark_overlay(&mut canvas, self.style.overlay_opacity);

        match self.style.layout {
            Layout::Centered => self.draw_centered(&mut canvas, primary, secondary),
            Layout::Stacked => self.draw_stacked(&mut canvas, primary, secondary),
        }

        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ImageError::IoError)?;
        }
        DynamicImage::ImageRgba8(canvas).to_rgb8().save(output)?;

        tracing::info!(path = %output.display(), size, "Rendered image");
        Ok(output.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn styles_at_reference_size() {
        let style = RenderStyle::centered(1080, 120);
        assert_eq!(style.margin, 140);
        assert_eq!(style.primary_px, 50.0);
        assert_eq!(style.text_width(), 800);
        assert_eq!(style.layout, Layout::Centered);

        let style = RenderStyle::stacked(1080, 120);
        assert_eq!(style.top, 140);
        assert_eq!(style.secondary_px, 34.0);
        assert_eq!(style.layout, Layout::Stacked);
    }

    #[test]
    fn styles_scale_with_size() {
        let style = RenderStyle::centered(540, 120);
        assert_eq!(style.margin, 70);
        assert_eq!(style.primary_px, 25.0);
        assert_eq!(style.shadow_offset, 1);
    }

    fn fixture_font() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("DejaVuSansMono.ttf")
    }

    #[test]
    fn renders_square_rgb_from_landscape_background() {
        let dir = TempDir::new().unwrap();
        let background = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            160,
            107,
            Rgba([200, 200, 200, 255]),
        ));

        for style in [RenderStyle::centered(96, 120), RenderStyle::stacked(96, 120)] {
            let layout = style.layout;
            let composer = Composer::new(&fixture_font(), style).unwrap();
            let output = dir.path().join(format!("{layout:?}").to_lowercase()).join("out.png");
            let path = composer
                .render(&background, "The Lord is my shepherd", "Psalm 23:1", &output)
                .unwrap();

            assert_eq!(path, output);
            let saved = image::open(&path).unwrap();
            assert_eq!((saved.width(), saved.height()), (96, 96));
            assert_eq!(saved.color(), image::ColorType::Rgb8);
            // Corner has no text, only the darkened background: 200 * 135/255
            let corner = saved.to_rgb8().get_pixel(0, 0).0;
            assert!(corner.iter().all(|c| (104..=108).contains(c)), "{corner:?}");
        }
    }

    #[test]
    fn missing_font_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Missing.ttf");
        let err = Composer::new(&path, RenderStyle::centered(1080, 120))
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Font { .. }));
        assert!(err.to_string().contains("Missing.ttf"));
    }

    #[test]
    fn invalid_font_bytes_are_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Broken.ttf");
        fs::write(&path, b"definitely not a font").unwrap();
        let result = Composer::new(&path, RenderStyle::stacked(1080, 120));
        assert!(matches!(result, Err(AppError::Font { .. })));
    }
}
