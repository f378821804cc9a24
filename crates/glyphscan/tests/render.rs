use glyphscan::{
    AsciiError, AsciiOptions, AsciiRenderer, BrightnessFormula, ScalePolicy, DEFAULT_GRADIENT,
};
use image::{DynamicImage, Rgba, RgbaImage};

fn gradient_char(index: usize) -> char {
    DEFAULT_GRADIENT.chars().nth(index).unwrap()
}

fn unscaled() -> AsciiOptions {
    AsciiOptions { scale: ScalePolicy::Original, ..AsciiOptions::default() }
}

#[test]
fn white_pixel_renders_densest_glyph() {
    let image = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
    let output = AsciiRenderer.render_pixels(&image, &unscaled());

    assert_eq!(output.brightness.cells, vec![255]);
    let lines: Vec<String> = output.lines().collect();
    assert_eq!(lines, vec![gradient_char(64).to_string().repeat(3)]);
}

#[test]
fn black_pixel_renders_lightest_glyph() {
    let image = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
    let output = AsciiRenderer.render_pixels(&image, &unscaled());

    assert_eq!(output.brightness.cells, vec![0]);
    assert_eq!(output.glyphs.cells, vec![gradient_char(0)]);
}

#[test]
fn invert_swaps_extremes() {
    let image = RgbaImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let options = AsciiOptions { invert: true, ..unscaled() };
    let output = AsciiRenderer.render_pixels(&image, &options);

    assert_eq!(output.brightness.cells, vec![255, 0]);
    assert_eq!(output.glyphs.cells, vec![gradient_char(64), gradient_char(0)]);
}

#[test]
fn line_shape_follows_image_and_repeat() {
    let image = RgbaImage::from_fn(5, 3, |x, y| Rgba([(x * 50) as u8, (y * 100) as u8, 7, 255]));
    let options = AsciiOptions { repeat: 2, ..unscaled() };
    let output = AsciiRenderer.render_pixels(&image, &options);

    let lines: Vec<String> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert_eq!(line.chars().count(), 5 * 2);
    }
    assert!(output.glyphs.cells.iter().all(|ch| DEFAULT_GRADIENT.contains(*ch)));
}

#[test]
fn rows_follow_image_height() {
    // Top row white, bottom row black: the rendering must not be transposed.
    let image = RgbaImage::from_fn(4, 2, |_, y| {
        if y == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    });
    let options = AsciiOptions { repeat: 1, ..unscaled() };
    let output = AsciiRenderer.render_pixels(&image, &options);

    let lines: Vec<String> = output.lines().collect();
    assert_eq!(lines, vec!["$$$$".to_string(), "````".to_string()]);
}

#[test]
fn zero_width_source_still_emits_one_line_per_row() {
    let image = RgbaImage::new(0, 3);
    let output = AsciiRenderer.render_pixels(&image, &unscaled());

    assert_eq!(output.height(), 3);
    assert_eq!(output.lines().count(), 3);

    let mut out = Vec::new();
    output.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\n\n\n");
}

#[test]
fn formula_selection_changes_brightness() {
    let image = RgbaImage::from_pixel(1, 1, Rgba([0, 255, 0, 255]));
    let brightness = |formula| {
        let options = AsciiOptions { formula, ..unscaled() };
        AsciiRenderer.render_pixels(&image, &options).brightness.cells[0]
    };

    assert_eq!(brightness(BrightnessFormula::Average), 85);
    assert_eq!(brightness(BrightnessFormula::MinMax), 127);
    assert_eq!(brightness(BrightnessFormula::Luminosity), 183);
}

#[test]
fn write_to_emits_one_line_per_row() {
    let image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
    let output = AsciiRenderer.render_pixels(&image, &unscaled());

    let mut out = Vec::new();
    output.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "``````\n``````\n");
}

#[test]
fn render_image_applies_scale() {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(30, 20, Rgba([255, 255, 255, 255])));
    let output = AsciiRenderer.render_image(image, &AsciiOptions::default()).unwrap();

    assert_eq!((output.width(), output.height()), (3, 2));
    assert_eq!(output.pixels.cells.len(), 6);
}

#[test]
fn render_path_decodes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.png");
    RgbaImage::from_pixel(20, 10, Rgba([255, 255, 255, 255])).save(&path).unwrap();

    let options = AsciiOptions { scale: ScalePolicy::percent(50), ..AsciiOptions::default() };
    let output = AsciiRenderer.render_path(&path, &options).unwrap();

    assert_eq!((output.width(), output.height()), (10, 5));
    assert!(output.brightness.cells.iter().all(|&value| value >= 250));
}

#[test]
fn render_path_rejects_non_images() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let result = AsciiRenderer.render_path(&path, &AsciiOptions::default());
    assert!(matches!(result, Err(AsciiError::Image(_))));
}

#[test]
fn render_path_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = AsciiRenderer.render_path(dir.path().join("missing.png"), &AsciiOptions::default());
    assert!(matches!(result, Err(AsciiError::Image(_))));
}

#[test]
fn invalid_scale_is_an_error() {
    let image = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));
    let options = AsciiOptions { scale: ScalePolicy::percent(0), ..AsciiOptions::default() };
    let result = AsciiRenderer.render_image(image, &options);
    assert!(matches!(result, Err(AsciiError::InvalidScale(0))));
}
