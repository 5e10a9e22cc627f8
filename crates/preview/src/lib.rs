//! Static raster previews of dashboard grids.
//!
//! The renderer walks the same anchor matrix as the render tree builder and
//! draws every anchored cell as a colored, labelled box:
//! - `PreviewRenderer` computes the canvas geometry and encodes the bitmap
//! - nested grids and filter bars are drawn recursively by the painter
//! - `Palette` holds the fixed per-kind colors

mod canvas;
mod config;
mod error;
mod painter;
mod palette;

pub use canvas::{Canvas, GLYPH_HEIGHT, GLYPH_WIDTH, text_width};
pub use config::{ImageFormat, PreviewConfig};
pub use error::PreviewError;
pub use palette::Palette;

use dashgrid_layout::{Cell, Grid};
use dashgrid_types::{Rect, Size};
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use painter::{Painter, clamp_i32};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct PreviewRenderer {
    config: PreviewConfig,
    palette: Palette,
}

impl PreviewRenderer {
    pub fn new(config: PreviewConfig) -> Self {
        Self {
            config,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// `columns * cell_width + (columns + 1) * margin` by
    /// `rows * cell_height + (rows + 1) * margin`, saturating at `u32::MAX`.
    pub fn canvas_size(&self, grid: &Grid) -> Size {
        let PreviewConfig {
            cell_width,
            cell_height,
            margin,
            ..
        } = self.config;
        Size::new(
            track_length(grid.columns(), cell_width, margin),
            track_length(grid.rows(), cell_height, margin),
        )
    }

    /// Pixel box of a top-level cell of `grid`, including the margins its
    /// span swallows.
    ///
    /// A span reaching past the grid is cut one slot beyond the last column
    /// (or row), which keeps the overhanging edge off-canvas.
    pub fn cell_rect(&self, grid: &Grid, cell: &Cell) -> Rect {
        let col_span = cell
            .col_span
            .min(grid.columns().saturating_sub(cell.column).saturating_add(1));
        let row_span = cell
            .row_span
            .min(grid.rows().saturating_sub(cell.row).saturating_add(1));
        let (x, width) = span_extent(cell.column, col_span, self.config.cell_width, self.config.margin);
        let (y, height) = span_extent(cell.row, row_span, self.config.cell_height, self.config.margin);
        Rect::new(x, y, width, height)
    }

    /// Fails when the canvas for `grid` cannot be addressed or allocated.
    pub fn check_canvas(&self, grid: &Grid) -> Result<Size, PreviewError> {
        let size = self.canvas_size(grid);
        let too_large = PreviewError::CanvasTooLarge {
            width: size.width,
            height: size.height,
        };
        if size.width > i32::MAX as u32 || size.height > i32::MAX as u32 {
            return Err(too_large);
        }
        (size.width as usize)
            .checked_mul(size.height as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or(too_large)?;
        Ok(size)
    }

    /// Draws `grid` onto a fresh bitmap: white background, gridlines, then
    /// every anchored cell in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the canvas cannot be allocated; [`PreviewRenderer::check_canvas`]
    /// reports that case as an error, and the `render_*` methods call it first.
    pub fn rasterize(&self, grid: &Grid) -> RgbImage {
        let size = self.canvas_size(grid);
        let mut canvas = Canvas::new(size, self.palette.background);

        let row_pitch = self.config.cell_height as usize + self.config.margin as usize;
        let col_pitch = self.config.cell_width as usize + self.config.margin as usize;
        for y in (0..size.height as usize).step_by(row_pitch.max(1)).take(grid.rows().saturating_add(1)) {
            canvas.hline(y as i32, self.palette.gridline);
        }
        for x in (0..size.width as usize).step_by(col_pitch.max(1)).take(grid.columns().saturating_add(1)) {
            canvas.vline(x as i32, self.palette.gridline);
        }

        let mut painter = Painter::new(&mut canvas, &self.palette);
        for cell in grid.cells() {
            painter.draw_widget(&cell.content, self.cell_rect(grid, cell));
        }

        log::debug!(
            "Rasterized grid '{}' ({} cells) onto {}x{} canvas",
            grid.title(),
            grid.len(),
            size.width,
            size.height
        );
        canvas.into_image()
    }

    /// Encodes `image` in the configured format.
    pub fn encode<W: Write>(&self, image: &RgbImage, writer: W) -> Result<(), PreviewError> {
        self.config.validate()?;
        match self.config.format {
            ImageFormat::Jpeg => image.write_with_encoder(JpegEncoder::new_with_quality(
                writer,
                self.config.encoder_quality(),
            ))?,
            ImageFormat::Png => image.write_with_encoder(PngEncoder::new(writer))?,
        }
        Ok(())
    }

    /// Rasterizes and encodes `grid` into memory.
    pub fn render_to_vec(&self, grid: &Grid) -> Result<Vec<u8>, PreviewError> {
        self.config.validate()?;
        self.check_canvas(grid)?;
        let mut bytes = Vec::new();
        self.encode(&self.rasterize(grid), &mut bytes)?;
        Ok(bytes)
    }

    /// Rasterizes `grid` and writes it to `path`.
    ///
    /// With no grid nothing is drawn and no file is written. A failed write
    /// may leave a truncated file behind.
    pub fn render_to_file(
        &self,
        grid: Option<&Grid>,
        path: impl AsRef<Path>,
    ) -> Result<(), PreviewError> {
        let Some(grid) = grid else {
            log::debug!("No layout to preview; skipping {}", path.as_ref().display());
            return Ok(());
        };
        self.config.validate()?;
        self.check_canvas(grid)?;

        let image = self.rasterize(grid);
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.encode(&image, &mut writer)?;
        writer.flush()?;

        log::info!(
            "Wrote {}x{} preview to {}",
            image.width(),
            image.height(),
            path.as_ref().display()
        );
        Ok(())
    }
}

/// `count` tracks of `size` pixels with a `margin` before, between and after them.
fn track_length(count: usize, size: u32, margin: u32) -> u32 {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    count
        .saturating_mul(size)
        .saturating_add(count.saturating_add(1).saturating_mul(margin))
}

/// Offset and length of `span` tracks starting at track `start`.
fn span_extent(start: usize, span: usize, size: u32, margin: u32) -> (i32, i32) {
    let pitch = i64::from(size) + i64::from(margin);
    let margin = i64::from(margin);
    let start = i64::try_from(start).unwrap_or(i64::MAX);
    let span = i64::try_from(span).unwrap_or(i64::MAX);
    (
        clamp_i32(start.saturating_mul(pitch).saturating_add(margin)),
        clamp_i32(span.saturating_mul(pitch).saturating_sub(margin)),
    )
}

/// Renders `grid` to `path` with the default configuration.
pub fn render_preview(grid: Option<&Grid>, path: impl AsRef<Path>) -> Result<(), PreviewError> {
    PreviewRenderer::default().render_to_file(grid, path)
}

/// Canvas size of `grid` under the default configuration.
pub fn compute_canvas_size(grid: &Grid) -> Size {
    PreviewRenderer::default().canvas_size(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashgrid_layout::{Chart, Filter, FilterBar, Indicator, ProgressBar, Render};
    use dashgrid_types::Color;

    fn pixel(image: &RgbImage, x: u32, y: u32) -> Color {
        let [r, g, b] = image.get_pixel(x, y).0;
        Color::rgb(r, g, b)
    }

    /// First and last rows inside `rect` holding a text-colored pixel.
    fn ink_rows(image: &RgbImage, rect: Rect) -> Option<(u32, u32)> {
        let text = Palette::default().text;
        let rows: Vec<u32> = (rect.y as u32..rect.bottom() as u32)
            .filter(|&y| (rect.x as u32..rect.right() as u32).any(|x| pixel(image, x, y) == text))
            .collect();
        Some((*rows.first()?, *rows.last()?))
    }

    fn single_cell(widget: impl Into<dashgrid_layout::Widget>) -> RgbImage {
        let mut grid = Grid::new("g", 1, 1);
        grid.place_at(widget, 0, 0, 1, 1);
        PreviewRenderer::default().rasterize(&grid)
    }

    #[test]
    fn canvas_size_follows_cell_and_margin_formula() {
        let size = compute_canvas_size(&Grid::new("g", 2, 3));
        assert_eq!(size, Size::new(640, 330));

        let renderer = PreviewRenderer::new(PreviewConfig::default().with_cell_size(100, 50).with_margin(0));
        assert_eq!(renderer.canvas_size(&Grid::new("g", 2, 3)), Size::new(300, 100));
    }

    #[test]
    fn spanning_cell_box_includes_inner_margins() {
        let mut grid = Grid::new("g", 3, 3);
        grid.place_at(Chart::new("Revenue", "line"), 1, 1, 2, 2);
        let renderer = PreviewRenderer::default();
        let cell = grid.cell(1, 1).unwrap();
        assert_eq!(renderer.cell_rect(&grid, cell), Rect::new(220, 170, 410, 310));
    }

    #[test]
    fn draws_background_gridlines_and_leaf_boxes() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut grid = Grid::new("g", 2, 3);
        grid.place_at(Indicator::new("Sales"), 0, 0, 1, 1);
        let palette = Palette::default();
        let image = PreviewRenderer::default().rasterize(&grid);

        assert_eq!(image.dimensions(), (640, 330));
        assert_eq!(pixel(&image, 0, 5), palette.gridline);
        assert_eq!(pixel(&image, 5, 160), palette.gridline);
        assert_eq!(pixel(&image, 5, 5), palette.background);
        assert_eq!(pixel(&image, 10, 10), palette.border);
        assert_eq!(pixel(&image, 12, 12), palette.widget(grid.cell(0, 0).unwrap().content.kind()));
        // Empty cell stays white.
        assert_eq!(pixel(&image, 250, 50), palette.background);
    }

    #[test]
    fn nested_grid_subdivides_without_margins() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut inner = Grid::new("", 2, 1);
        inner.place_at(ProgressBar::new("A"), 0, 0, 1, 1);
        inner.place_at(ProgressBar::new("B"), 1, 0, 1, 1);
        let mut outer = Grid::new("g", 1, 1);
        outer.place_at(inner, 0, 0, 1, 1);

        let palette = Palette::default();
        let bar = palette.widget(ProgressBar::new("x").kind());
        let image = PreviewRenderer::default().rasterize(&outer);

        // Outer box is (10, 10, 200, 150); sub-cells are 200x75 with no gap.
        assert_eq!(pixel(&image, 12, 12), bar);
        assert_eq!(pixel(&image, 50, 84), palette.border);
        assert_eq!(pixel(&image, 50, 85), palette.border);
        assert_eq!(pixel(&image, 12, 87), bar);
        assert_eq!(pixel(&image, 12, 157), bar);
    }

    #[test]
    fn nested_grid_with_span_uses_integer_cell_sizes() {
        let mut inner = Grid::new("", 3, 3);
        inner.place_at(Indicator::new(""), 0, 0, 1, 2);
        let mut outer = Grid::new("g", 1, 1);
        outer.place_at(inner, 0, 0, 1, 1);

        let palette = Palette::default();
        let image = PreviewRenderer::default().rasterize(&outer);

        // 200 / 3 = 66 wide, 150 / 3 = 50 high; the span covers x in [10, 142).
        let indicator = palette.widget(Indicator::new("").kind());
        assert_eq!(pixel(&image, 12, 12), indicator);
        assert_eq!(pixel(&image, 141, 12), palette.border);
        assert_eq!(pixel(&image, 145, 12), palette.widget(outer.cell(0, 0).unwrap().content.kind()));
    }

    #[test]
    fn filter_bar_lays_out_equal_chips() {
        let bar = FilterBar::new("Filtros")
            .with_filter(Filter::date("Periodo", "period"))
            .with_filter(Filter::select("Tipo", "type", ["Todos"]));
        let mut grid = Grid::new("g", 1, 1);
        grid.place_at(bar, 0, 0, 1, 1);

        let palette = Palette::default();
        let image = PreviewRenderer::default().rasterize(&grid);

        // chip width (200 - 20) / 2 = 90; chips start at x = 20 and 110, inset by 8.
        assert_eq!(pixel(&image, 27, 50), palette.widget(dashgrid_layout::WidgetKind::FilterBar));
        assert_eq!(pixel(&image, 28, 42), palette.border);
        assert_eq!(pixel(&image, 30, 44), palette.filter(dashgrid_layout::FilterKind::Date));
        assert_eq!(pixel(&image, 120, 44), palette.filter(dashgrid_layout::FilterKind::Select));
    }

    #[test]
    fn spans_past_the_canvas_are_clipped() {
        let mut grid = Grid::new("g", 1, 1);
        grid.place_at(Indicator::new("Wide"), 0, 0, 4, 4);
        let image = PreviewRenderer::default().rasterize(&grid);
        assert_eq!(image.dimensions(), (220, 170));
    }

    #[test]
    fn huge_spans_are_cut_to_the_canvas() {
        let mut grid = Grid::new("g", 1, 1);
        grid.place_at(Indicator::new("Wide"), 0, 0, usize::MAX, 20_000_000);
        let renderer = PreviewRenderer::default();

        // Cut to two columns and two rows: the far edges sit off-canvas.
        let cell = grid.cell(0, 0).unwrap();
        assert_eq!(renderer.cell_rect(&grid, cell), Rect::new(10, 10, 410, 310));

        let image = renderer.rasterize(&grid);
        let palette = Palette::default();
        assert_eq!(image.dimensions(), (220, 170));
        assert_eq!(pixel(&image, 10, 10), palette.border);
        assert_eq!(pixel(&image, 219, 169), palette.widget(Indicator::new("").kind()));
    }

    #[test]
    fn huge_spans_inside_nested_grids_are_cut_to_the_box() {
        let mut inner = Grid::new("", 2, 2);
        inner.place_at(ProgressBar::new(""), 1, 1, usize::MAX, usize::MAX);
        let mut outer = Grid::new("g", 1, 1);
        outer.place_at(inner, 0, 0, 1, 1);

        let palette = Palette::default();
        let image = PreviewRenderer::default().rasterize(&outer);

        // Sub-cell (1, 1) starts at (110, 85) and runs past the outer box.
        assert_eq!(pixel(&image, 110, 85), palette.border);
        assert_eq!(pixel(&image, 200, 150), palette.widget(ProgressBar::new("").kind()));
        assert_eq!(pixel(&image, 50, 50), palette.widget(outer.cell(0, 0).unwrap().content.kind()));
    }

    #[test]
    fn oversized_canvas_is_an_error() {
        let grid = Grid::new("g", 1, 1);
        let renderer = PreviewRenderer::new(PreviewConfig::default().with_cell_size(u32::MAX, 150));
        assert_eq!(renderer.canvas_size(&grid).width, u32::MAX);
        assert!(matches!(
            renderer.render_to_vec(&grid),
            Err(PreviewError::CanvasTooLarge { width: u32::MAX, height: 170 })
        ));
    }

    #[test]
    fn leaf_title_sits_above_the_kind_label() {
        // Box (10, 10, 200, 150): centered baseline 87, lines at 79 and 95.
        let image = single_cell(Indicator::new("Sales"));
        let (top, bottom) = ink_rows(&image, Rect::new(11, 11, 198, 148)).unwrap();
        assert!((66..=72).contains(&top), "title starts at {}", top);
        assert!((90..=98).contains(&bottom), "kind label ends at {}", bottom);
    }

    #[test]
    fn untitled_leaf_centers_the_kind_label_alone() {
        let image = single_cell(Indicator::new(""));
        let (top, bottom) = ink_rows(&image, Rect::new(11, 11, 198, 148)).unwrap();
        assert!(top >= 74, "label starts at {}", top);
        assert!(bottom <= 90, "label ends at {}", bottom);
    }

    #[test]
    fn nested_grid_title_is_drawn_over_its_cells() {
        let mut inner = Grid::new("Inner", 1, 1);
        inner.place_at(Indicator::new(""), 0, 0, 1, 1);
        let image = single_cell(inner);

        // Title baseline is 10 + 13 + 4 = 27, on top of the child's fill.
        let (top, bottom) = ink_rows(&image, Rect::new(11, 11, 198, 25)).unwrap();
        assert!(top >= 14 && bottom <= 30, "title rows {}..={}", top, bottom);
        // The child's own label stays centered.
        let (top, _) = ink_rows(&image, Rect::new(11, 40, 198, 118)).unwrap();
        assert!(top >= 74, "child label starts at {}", top);
    }

    #[test]
    fn filter_chip_shows_label_above_kind_tag() {
        let image = single_cell(FilterBar::new("Filtros").with_filter(Filter::date("Periodo", "period")));

        // Bar title is left-aligned in the top band.
        let (top, bottom) = ink_rows(&image, Rect::new(20, 11, 60, 23)).unwrap();
        assert!(top >= 14 && bottom <= 30, "bar title rows {}..={}", top, bottom);

        // Chip (28, 42, 164, 110): centered baseline 99, lines at 91 and 107.
        let (top, bottom) = ink_rows(&image, Rect::new(29, 43, 162, 108)).unwrap();
        assert!((78..=84).contains(&top), "chip label starts at {}", top);
        assert!((102..=110).contains(&bottom), "kind tag ends at {}", bottom);
    }

    #[test]
    fn encodes_png_losslessly() {
        let mut grid = Grid::new("g", 1, 1);
        grid.place_at(Indicator::new("Sales"), 0, 0, 1, 1);
        let renderer = PreviewRenderer::new(PreviewConfig::default().with_format(ImageFormat::Png));

        let bytes = renderer.render_to_vec(&grid).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded, renderer.rasterize(&grid));
    }

    #[test]
    fn invalid_quality_fails_before_encoding() {
        let renderer = PreviewRenderer::new(PreviewConfig::default().with_quality(150));
        let result = renderer.render_to_vec(&Grid::new("g", 1, 1));
        assert!(matches!(result, Err(PreviewError::InvalidQuality(150))));
    }
}
