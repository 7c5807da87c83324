use anyhow::Result;
use crossterm::style::Color;

use crate::grid::Cell;
use crate::snake::Direction;

pub const BOARD_BACKGROUND: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const CELL_BORDER: Color = Color::Rgb { r: 93, g: 216, b: 228 };
pub const ITEM_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };

/// Where the board gets drawn. Nothing is visible until `present`.
pub trait Surface {
    fn draw_cell(&mut self, pos: Cell, fill: Color, outline: Color) -> Result<()>;

    fn clear(&mut self, color: Color) -> Result<()>;

    fn draw_status(&mut self, text: &str) -> Result<()>;

    fn present(&mut self) -> Result<()>;

    fn erase_cell(&mut self, pos: Cell) -> Result<()> {
        self.draw_cell(pos, BOARD_BACKGROUND, BOARD_BACKGROUND)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    TogglePause,
    Quit,
}

pub trait InputSource {
    /// Everything buffered since the last call. Never blocks.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;
}
