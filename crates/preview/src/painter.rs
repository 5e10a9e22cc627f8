//! Recursive box drawing for grid cells.
//!
//! Top-level cells get margin-separated boxes computed by the renderer. A
//! nested grid subdivides its own box into equal sub-cells with no inner
//! margin, and a filter bar lays its filters out as chips.

use crate::canvas::{Canvas, GLYPH_HEIGHT};
use crate::palette::Palette;
use dashgrid_layout::{FilterBar, Grid, Render, Widget};
use dashgrid_types::{Color, Rect};

/// Vertical distance between a title line and the kind line under it.
const LINE_SPACING: i32 = 16;
/// Height of the band at the top of a filter bar reserved for its title.
const FILTER_TITLE_BAND: i32 = 24;
/// Horizontal padding on each side of the filter chip row.
const FILTER_SIDE_PADDING: i32 = 10;
const CHIP_INSET: i32 = 8;

pub(crate) struct Painter<'a> {
    canvas: &'a mut Canvas,
    palette: &'a Palette,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(canvas: &'a mut Canvas, palette: &'a Palette) -> Self {
        Self { canvas, palette }
    }

    pub(crate) fn draw_widget(&mut self, widget: &Widget, rect: Rect) {
        match widget {
            Widget::Grid(grid) => self.draw_nested_grid(grid, rect),
            Widget::FilterBar(bar) => self.draw_filter_bar(bar, rect),
            leaf => self.draw_leaf(leaf, rect),
        }
    }

    fn draw_box(&mut self, rect: Rect, fill: Color) {
        self.canvas.fill_rect(rect, fill);
        self.canvas.stroke_rect(rect, self.palette.border);
    }

    fn draw_leaf(&mut self, widget: &Widget, rect: Rect) {
        let kind = widget.kind();
        self.draw_box(rect, self.palette.widget(kind));
        self.draw_labels(widget.title(), kind.label(), rect);
    }

    /// Centers `title` above `secondary`, or `secondary` alone.
    fn draw_labels(&mut self, title: Option<&str>, secondary: &str, rect: Rect) {
        let baseline = center_baseline(rect);
        let color = self.palette.text;
        match title {
            Some(title) => {
                let half = LINE_SPACING / 2;
                self.canvas
                    .text_centered(title, rect.x, rect.width, baseline - half, color);
                self.canvas
                    .text_centered(secondary, rect.x, rect.width, baseline + half, color);
            }
            None => self
                .canvas
                .text_centered(secondary, rect.x, rect.width, baseline, color),
        }
    }

    fn draw_nested_grid(&mut self, grid: &Grid, rect: Rect) {
        self.draw_box(rect, self.palette.widget(grid.kind()));

        if grid.rows() > 0 && grid.columns() > 0 {
            for cell in grid.cells() {
                let (x, width) =
                    sub_extent(rect.x, rect.width, grid.columns(), cell.column, cell.col_span);
                let (y, height) =
                    sub_extent(rect.y, rect.height, grid.rows(), cell.row, cell.row_span);
                self.draw_widget(&cell.content, Rect::new(x, y, width, height));
            }
        }

        if !grid.title().is_empty() {
            self.canvas.text_centered(
                grid.title(),
                rect.x,
                rect.width,
                title_baseline(rect),
                self.palette.text,
            );
        }
    }

    fn draw_filter_bar(&mut self, bar: &FilterBar, rect: Rect) {
        self.draw_box(rect, self.palette.widget(bar.kind()));
        self.canvas.text(
            &bar.title,
            rect.x.saturating_add(FILTER_SIDE_PADDING),
            title_baseline(rect),
            self.palette.text,
        );

        if bar.is_empty() {
            return;
        }

        let slots = rect.width.saturating_sub(2 * FILTER_SIDE_PADDING);
        let chip_width = slots / i32::try_from(bar.len()).unwrap_or(i32::MAX);
        let band_top = rect.y.saturating_add(FILTER_TITLE_BAND);
        let band_height = rect.height.saturating_sub(FILTER_TITLE_BAND);
        let left = i64::from(rect.x) + i64::from(FILTER_SIDE_PADDING);

        for (i, filter) in bar.filters().iter().enumerate() {
            let offset = i64::try_from(i).unwrap_or(i64::MAX).saturating_mul(i64::from(chip_width));
            let slot = Rect::new(
                clamp_i32(left.saturating_add(offset)),
                band_top,
                chip_width,
                band_height,
            );
            let chip = slot.inset(CHIP_INSET);
            if chip.is_empty() {
                continue;
            }
            let kind = filter.kind();
            self.draw_box(chip, self.palette.filter(kind));
            self.draw_labels(Some(filter.label.as_str()), kind.tag(), chip);
        }
    }
}

/// Baseline that vertically centers one line of text in `rect`.
fn center_baseline(rect: Rect) -> i32 {
    let offset = (i64::from(rect.height) + i64::from(GLYPH_HEIGHT)) / 2 - 4;
    clamp_i32(i64::from(rect.y) + offset)
}

/// Baseline of a title drawn just inside the top edge of `rect`.
fn title_baseline(rect: Rect) -> i32 {
    rect.y.saturating_add(GLYPH_HEIGHT + 4)
}

/// Offset and length of a nested sub-cell along one axis. The box is split
/// into `count` equal integer tracks; a span past the last track is cut one
/// track beyond it.
fn sub_extent(origin: i32, length: i32, count: usize, index: usize, span: usize) -> (i32, i32) {
    let count = i64::try_from(count).unwrap_or(i64::MAX);
    let index = i64::try_from(index).unwrap_or(i64::MAX);
    let span = i64::try_from(span).unwrap_or(i64::MAX);
    let track = i64::from(length) / count;
    let span = span.min(count.saturating_sub(index).saturating_add(1));
    (
        clamp_i32(i64::from(origin).saturating_add(index.saturating_mul(track))),
        clamp_i32(span.saturating_mul(track)),
    )
}

pub(crate) fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
