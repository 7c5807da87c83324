use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("a {width}x{height} grid needs at least two cells and at most {} per side", crate::grid::MAX_GRID_SIDE)]
    InvalidGrid { width: u16, height: u16 },

    #[error("no free cell left to place the item")]
    ExhaustedBoard,

    #[error("terminal is {cols}x{rows} but the board needs {needed_cols}x{needed_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        needed_cols: u32,
        needed_rows: u32,
    },
}
