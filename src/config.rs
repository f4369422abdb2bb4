use crate::{Cell, GridInt};

/// Per-run game settings, fixed at startup and passed by reference to
/// everything that needs grid geometry or pacing.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    pub grid_width: GridInt,
    pub grid_height: GridInt,
    /// Side length of one cell in pixel units, for renderers that draw
    /// rectangles instead of terminal characters.
    pub cell_size: u32,
    /// Simulation steps per second.
    pub tick_rate: u64,
}

impl Default for Config {
    fn default() -> Self {
        // 640x480 playfield at 20 px per cell
        Config { grid_width: 32, grid_height: 24, cell_size: 20, tick_rate: 20 }
    }
}

impl Config {
    pub fn center(&self) -> Cell {
        (self.grid_width / 2, self.grid_height / 2)
    }

    /// Pixel-space rectangle (x, y, w, h) covering a grid cell.
    pub fn cell_rect(&self, cell: Cell) -> (u32, u32, u32, u32) {
        let (x, y) = cell;
        (x as u32 * self.cell_size, y as u32 * self.cell_size, self.cell_size, self.cell_size)
    }
}
