use crate::error::GameError;

/// Largest width or height accepted, in cells.
pub const MAX_GRID_SIDE: u16 = 1000;

/// A `(x, y)` coordinate on the grid, measured in cells.
pub type Cell = (i32, i32);

/// Toroidal coordinate space. Leaving one edge re-enters from the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Result<Self, GameError> {
        // One cell for the snake, one for the item
        if (width as u32) * (height as u32) < 2 || width > MAX_GRID_SIDE || height > MAX_GRID_SIDE {
            return Err(GameError::InvalidGrid { width, height });
        }

        Ok(Grid { width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn center(&self) -> Cell {
        (self.width as i32 / 2, self.height as i32 / 2)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True modulo on both axes, so `(-1, y)` becomes `(width - 1, y)`.
    pub fn wrap(&self, cell: Cell) -> Cell {
        (cell.0.rem_euclid(self.width as i32), cell.1.rem_euclid(self.height as i32))
    }

    /// Every cell, row by row.
    pub fn all_cells(&self) -> impl Iterator<Item = Cell> {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}
