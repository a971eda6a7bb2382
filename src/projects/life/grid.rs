#![deny(clippy::all)]
#![forbid(unsafe_code)]

use crate::traits_and_structs::cell::Cell;

/// Board geometry, fixed for the lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridModel {
    rows: usize,
    cols: usize,
    cell_size: u32,
    margin: u32,
}

impl GridModel {
    /// Fit as many `cell_size` squares, each followed by `margin` pixels of
    /// gap, as the viewport holds.
    pub fn new(viewport_width: u32, viewport_height: u32, cell_size: u32, margin: u32) -> Self {
        let stride = cell_size + margin;
        assert!(stride > 0, "cell size plus margin must be positive");
        Self {
            rows: (viewport_height / stride) as usize,
            cols: (viewport_width / stride) as usize,
            cell_size,
            margin,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    fn stride(&self) -> u32 {
        self.cell_size + self.margin
    }

    pub fn empty_generation(&self) -> Generation {
        let mut cells = Vec::with_capacity(self.rows * self.cols);
        for row in 0..self.rows as u32 {
            for col in 0..self.cols as u32 {
                cells.push(Cell::new(
                    self.cell_size * col + (col + 1) * self.margin,
                    self.cell_size * row + (row + 1) * self.margin,
                    false,
                ));
            }
        }
        Generation {
            cells,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Map a viewport pixel to `(row, col)`. The result is not bounds-checked
    /// and may be negative for pixels left of or above the viewport.
    pub fn pixel_to_grid(&self, px: f32, py: f32) -> (i64, i64) {
        let stride = self.stride() as f32;
        ((py / stride).floor() as i64, (px / stride).floor() as i64)
    }
}

/// One full board snapshot, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Generation {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid_idx(row, col).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.grid_idx(row, col).map(move |i| &mut self.cells[i])
    }

    /// Bounds-checked lookup for coordinates of any integer type, e.g. the
    /// signed output of `GridModel::pixel_to_grid`.
    pub fn cell_at_mut<I: TryInto<usize>>(&mut self, row: I, col: I) -> Option<&mut Cell> {
        match (row.try_into(), col.try_into()) {
            (Ok(row), Ok(col)) => self.get_mut(row, col),
            _ => None,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn grid_idx(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(col + row * self.cols)
        } else {
            None
        }
    }
}
