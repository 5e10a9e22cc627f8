//! The grid layout engine.
//!
//! A [`Grid`] is a fixed `rows x columns` matrix that stores a [`Cell`] only at
//! its anchor (top-left) coordinate. Coordinates covered by a span but not
//! the anchor stay empty in the matrix. Placement is best-effort: it never
//! fails mid-construction, and every call reports what happened through a
//! [`Placement`] so callers can observe dropped or overwritten content.
//!
//! # Example
//! ```
//! use dashgrid_layout::{Grid, Indicator, Placement};
//!
//! let mut grid = Grid::new("Indicators", 2, 2);
//! grid.place_at(Indicator::new("Sales"), 0, 0, 1, 2);
//!
//! assert_eq!(grid.place_next(Indicator::new("Users"), 1, 1), Placement::Placed { row: 0, column: 1 });
//! assert_eq!(grid.place_at(Indicator::new("Lost"), 5, 0, 1, 1), Placement::OutOfBounds { row: 5, column: 0 });
//! ```

use crate::LayoutError;
use crate::config::{GridConfig, OccupancyMode};
use crate::widget::{Render, Widget};

/// A placed widget and the rectangle `[row, row+row_span) x [column, column+col_span)`
/// it covers. The footprint may extend past the grid's declared size.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub col_span: usize,
    pub content: Widget,
}

impl Cell {
    /// Whether `(row, column)` lies inside this cell's footprint.
    pub fn covers(&self, row: usize, column: usize) -> bool {
        (self.row..self.row.saturating_add(self.row_span)).contains(&row)
            && (self.column..self.column.saturating_add(self.col_span)).contains(&column)
    }
}

/// Outcome of a placement call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The cell was stored at an empty anchor.
    Placed { row: usize, column: usize },
    /// The cell replaced an existing cell at the same anchor.
    Replaced { row: usize, column: usize },
    /// The anchor was outside the grid; the content was dropped.
    OutOfBounds { row: usize, column: usize },
    /// Auto-placement found no free anchor; the content was dropped.
    NoSpace,
}

impl Placement {
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. } | Placement::Replaced { .. })
    }

    /// The anchor the content ended up at, if it was stored.
    pub fn anchor(&self) -> Option<(usize, usize)> {
        match *self {
            Placement::Placed { row, column } | Placement::Replaced { row, column } => {
                Some((row, column))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    title: String,
    rows: usize,
    columns: usize,
    /// Row-major anchor matrix of `rows * columns` slots.
    cells: Vec<Option<Cell>>,
    spacing: f64,
    padding: f64,
    occupancy: OccupancyMode,
}

impl Grid {
    /// Creates an empty grid with the default spacing (10) and padding (15).
    pub fn new(title: impl Into<String>, rows: usize, columns: usize) -> Self {
        Self::with_config(title, rows, columns, GridConfig::default())
    }

    /// # Panics
    ///
    /// Panics if `rows * columns` slots cannot be allocated. Use
    /// [`Grid::try_with_config`] for sizes that come from untrusted input.
    pub fn with_config(
        title: impl Into<String>,
        rows: usize,
        columns: usize,
        config: GridConfig,
    ) -> Self {
        let cells = vec![None; rows.saturating_mul(columns)];
        Self::from_slots(title.into(), rows, columns, cells, config)
    }

    /// Like [`Grid::with_config`], but reports a size whose anchor matrix
    /// cannot be allocated as [`LayoutError::GridTooLarge`].
    pub fn try_with_config(
        title: impl Into<String>,
        rows: usize,
        columns: usize,
        config: GridConfig,
    ) -> Result<Self, LayoutError> {
        let too_large = || LayoutError::GridTooLarge { rows, columns };
        let len = rows.checked_mul(columns).ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, None);
        Ok(Self::from_slots(title.into(), rows, columns, cells, config))
    }

    fn from_slots(
        title: String,
        rows: usize,
        columns: usize,
        cells: Vec<Option<Cell>>,
        config: GridConfig,
    ) -> Self {
        Self {
            title,
            rows,
            columns,
            cells,
            spacing: config.spacing,
            padding: config.padding,
            occupancy: config.occupancy,
        }
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_occupancy(mut self, occupancy: OccupancyMode) -> Self {
        self.occupancy = occupancy;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn occupancy(&self) -> OccupancyMode {
        self.occupancy
    }

    pub fn in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// The cell anchored at `(row, column)`, if any.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        if !self.in_bounds(row, column) {
            return None;
        }
        self.cells[self.index(row, column)].as_ref()
    }

    /// Anchored cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Number of anchored cells.
    pub fn len(&self) -> usize {
        self.cells().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Whether any cell's footprint covers `(row, column)`, regardless of the
    /// grid's occupancy mode.
    pub fn footprint_occupied(&self, row: usize, column: usize) -> bool {
        self.cells().any(|cell| cell.covers(row, column))
    }

    /// Stores `content` with its anchor at `(row, column)`.
    ///
    /// An anchor outside the grid drops the content. An existing cell at the
    /// same anchor is replaced outright. The span is not checked against the
    /// grid size or against other cells' footprints; spans of 0 count as 1.
    pub fn place_at(
        &mut self,
        content: impl Into<Widget>,
        row: usize,
        column: usize,
        row_span: usize,
        col_span: usize,
    ) -> Placement {
        let content: Widget = content.into();
        if !self.in_bounds(row, column) {
            log::warn!(
                "Dropping {} at ({}, {}): outside {}x{} grid '{}'",
                content.kind().label(),
                row,
                column,
                self.rows,
                self.columns,
                self.title
            );
            return Placement::OutOfBounds { row, column };
        }

        let index = self.index(row, column);
        let cell = Cell {
            row,
            column,
            row_span: row_span.max(1),
            col_span: col_span.max(1),
            content,
        };

        match self.cells[index].replace(cell) {
            Some(previous) => {
                log::warn!(
                    "Replaced {} at ({}, {}) in grid '{}'",
                    previous.content.kind().label(),
                    row,
                    column,
                    self.title
                );
                Placement::Replaced { row, column }
            }
            None => {
                log::debug!("Placed cell at ({}, {}) in grid '{}'", row, column, self.title);
                Placement::Placed { row, column }
            }
        }
    }

    /// Auto-places `content` at the first free anchor in row-major order.
    ///
    /// A candidate is free when no coordinate of its `row_span x col_span`
    /// window (clipped to the grid) is occupied. What counts as occupied
    /// depends on [`OccupancyMode`]. Content is dropped when no candidate fits.
    pub fn place_next(
        &mut self,
        content: impl Into<Widget>,
        row_span: usize,
        col_span: usize,
    ) -> Placement {
        let content: Widget = content.into();
        match self.next_free_anchor(row_span, col_span) {
            Some((row, column)) => self.place_at(content, row, column, row_span, col_span),
            None => {
                log::warn!(
                    "Dropping {}: no free {}x{} slot in grid '{}'",
                    content.kind().label(),
                    row_span,
                    col_span,
                    self.title
                );
                Placement::NoSpace
            }
        }
    }

    /// The anchor `place_next` would choose for a `row_span x col_span` cell.
    pub fn next_free_anchor(&self, row_span: usize, col_span: usize) -> Option<(usize, usize)> {
        let row_span = row_span.max(1);
        let col_span = col_span.max(1);
        let occupied = self.occupancy_map();

        for row in 0..self.rows {
            for column in 0..self.columns {
                let row_end = row.saturating_add(row_span).min(self.rows);
                let col_end = column.saturating_add(col_span).min(self.columns);
                let taken = (row..row_end)
                    .any(|r| (column..col_end).any(|c| occupied[self.index(r, c)]));
                if !taken {
                    return Some((row, column));
                }
            }
        }
        None
    }

    /// Row-major map of the coordinates auto-placement treats as occupied.
    fn occupancy_map(&self) -> Vec<bool> {
        let mut occupied = vec![false; self.cells.len()];
        for cell in self.cells() {
            match self.occupancy {
                OccupancyMode::Anchor => occupied[self.index(cell.row, cell.column)] = true,
                OccupancyMode::Footprint => {
                    let row_end = cell.row.saturating_add(cell.row_span).min(self.rows);
                    let col_end = cell.column.saturating_add(cell.col_span).min(self.columns);
                    for r in cell.row..row_end {
                        for c in cell.column..col_end {
                            occupied[self.index(r, c)] = true;
                        }
                    }
                }
            }
        }
        occupied
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }
}
