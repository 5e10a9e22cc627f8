mod common;

use common::fixtures::*;
use common::{TestResult, pixel, roughly};
use dashgrid::{
    Grid, ImageFormat, Indicator, Palette, PreviewConfig, PreviewError, PreviewRenderer,
    WidgetKind, compute_canvas_size, render_preview,
};
use tempfile::tempdir;

#[test]
fn test_canvas_size_of_sample_layout() {
    let size = compute_canvas_size(&analytics_grid());
    assert_eq!((size.width, size.height), (640, 650));

    let size = compute_canvas_size(&Grid::new("g", 2, 3));
    assert_eq!((size.width, size.height), (640, 330));
}

#[test]
fn test_png_preview_has_expected_boxes() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempdir()?;
    let path = dir.path().join("preview.png");
    let renderer = PreviewRenderer::new(PreviewConfig::default().with_format(ImageFormat::Png));
    renderer.render_to_file(Some(&analytics_grid()), &path)?;

    let image = image::open(&path)?.to_rgb8();
    let palette = Palette::default();
    assert_eq!(image.dimensions(), (640, 650));

    // Top-left margin, the left gridline and the gridline on row boundary 1.
    assert_eq!(pixel(&image, 5, 5), palette.background);
    assert_eq!(pixel(&image, 0, 5), palette.gridline);
    assert_eq!(pixel(&image, 3, 160), palette.gridline);

    // Indicator at (1, 0).
    assert_eq!(pixel(&image, 12, 172), palette.widget(WidgetKind::Indicator));
    // Chart at (2, 0) spans two columns, swallowing the margin between them.
    assert_eq!(pixel(&image, 215, 335), palette.widget(WidgetKind::Chart));
    // Ranking at (2, 2).
    assert_eq!(pixel(&image, 432, 332), palette.widget(WidgetKind::Ranking));
    // Table at (3, 0) spans the full width.
    assert_eq!(pixel(&image, 625, 492), palette.widget(WidgetKind::Table));
    Ok(())
}

#[test]
fn test_jpeg_preview_is_written_at_canvas_size() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempdir()?;
    let path = dir.path().join("preview.jpg");
    let mut grid = Grid::new("g", 1, 2);
    grid.place_at(Indicator::new("Sales"), 0, 0, 1, 1);
    render_preview(Some(&grid), &path)?;

    let image = image::open(&path)?.to_rgb8();
    assert_eq!(image.dimensions(), (430, 170));
    let palette = Palette::default();
    assert!(roughly(pixel(&image, 40, 30), palette.widget(WidgetKind::Indicator), 12));
    assert!(roughly(pixel(&image, 320, 80), palette.background, 12));
    Ok(())
}

#[test]
fn test_quality_zero_is_accepted() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("low.jpg");
    let renderer = PreviewRenderer::new(PreviewConfig::default().with_quality(0));
    renderer.render_to_file(Some(&Grid::new("g", 1, 1)), &path)?;
    assert!(path.exists());
    Ok(())
}

#[test]
fn test_missing_layout_writes_nothing() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("none.jpg");
    render_preview(None, &path)?;
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_invalid_quality_writes_nothing() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("bad.jpg");
    let renderer = PreviewRenderer::new(PreviewConfig::default().with_quality(101));

    let result = renderer.render_to_file(Some(&Grid::new("g", 1, 1)), &path);
    assert!(matches!(result, Err(PreviewError::InvalidQuality(101))));
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_unwritable_path_is_an_io_error() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("missing").join("preview.jpg");

    let result = render_preview(Some(&Grid::new("g", 1, 1)), &path);
    assert!(matches!(result, Err(PreviewError::Io(_))));
    Ok(())
}

#[test]
fn test_preview_config_loads_from_partial_json() -> TestResult {
    let config: PreviewConfig = serde_json::from_str(r#"{ "cell_width": 100, "format": "png" }"#)?;
    assert_eq!(config.cell_width, 100);
    assert_eq!(config.cell_height, 150);
    assert_eq!(config.format, ImageFormat::Png);

    let size = PreviewRenderer::new(config).canvas_size(&Grid::new("g", 1, 2));
    assert_eq!((size.width, size.height), (230, 170));
    Ok(())
}
