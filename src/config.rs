use std::path::PathBuf;

use log::LevelFilter;

use crate::error::GameError;
use crate::grid::Grid;

/// Configuration for one game session
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Width of the board in cells
    pub grid_width: u16,
    /// Height of the board in cells
    pub grid_height: u16,
    /// Game updates per second
    pub tick_rate: u32,
    /// Seed for item placement and reset directions
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        // 640x480 at 20 pixels per cell
        Self {
            grid_width: 32,
            grid_height: 24,
            tick_rate: 20,
            seed: None,
            log_file: PathBuf::from("snake.log"),
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    pub fn grid(&self) -> Result<Grid, GameError> {
        Grid::new(self.grid_width, self.grid_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.tick_rate, 20);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_grid_validation() {
        let config = GameConfig { grid_width: 1, grid_height: 1, ..Default::default() };
        assert!(config.grid().is_err());

        let grid = GameConfig::default().grid().unwrap();
        assert_eq!(grid.cell_count(), 768);
    }
}
