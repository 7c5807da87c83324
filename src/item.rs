use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GameError;
use crate::grid::{Cell, Grid};

/// The consumable. Its position is never on the snake's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    position: Cell,
}

impl Item {
    /// Places a new item on a random cell outside `occupied`.
    pub fn spawn<R: Rng>(grid: &Grid, occupied: &HashSet<Cell>, rng: &mut R) -> Result<Self, GameError> {
        let mut item = Item { position: grid.center() };
        item.relocate(grid, occupied, rng)?;
        Ok(item)
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the item to a cell picked uniformly from the free ones. On
    /// `ExhaustedBoard` the position is left untouched.
    pub fn relocate<R: Rng>(&mut self, grid: &Grid, occupied: &HashSet<Cell>, rng: &mut R) -> Result<(), GameError> {
        let choices: Vec<Cell> = grid.all_cells().filter(|pos| !occupied.contains(pos)).collect();
        let pick = choices.choose(rng).copied().ok_or(GameError::ExhaustedBoard)?;

        self.position = pick;
        Ok(())
    }

    #[cfg(test)]
    pub fn at(position: Cell) -> Self {
        Item { position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_avoids_occupied() {
        let grid = Grid::new(6, 6).unwrap();
        let occupied: HashSet<Cell> = [grid.center()].iter().copied().collect();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let item = Item::spawn(&grid, &occupied, &mut rng).unwrap();
            assert_ne!(item.position(), grid.center());
        }
    }

    #[test]
    fn test_relocate_lands_on_only_free_cell() {
        let grid = Grid::new(5, 4).unwrap();
        let free = (3, 2);
        let occupied: HashSet<Cell> = grid.all_cells().filter(|&c| c != free).collect();

        let mut rng = StdRng::seed_from_u64(7);
        let mut item = Item::at((0, 0));
        item.relocate(&grid, &occupied, &mut rng).unwrap();
        assert_eq!(item.position(), free);
    }

    #[test]
    fn test_relocate_on_full_board_keeps_position() {
        let grid = Grid::new(3, 3).unwrap();
        let occupied: HashSet<Cell> = grid.all_cells().collect();

        let mut rng = StdRng::seed_from_u64(1);
        let mut item = Item::at((1, 1));
        assert_eq!(item.relocate(&grid, &occupied, &mut rng), Err(GameError::ExhaustedBoard));
        assert_eq!(item.position(), (1, 1));
    }

    #[test]
    fn test_same_seed_same_cell() {
        let grid = Grid::new(20, 20).unwrap();
        let occupied = HashSet::new();

        let a = Item::spawn(&grid, &occupied, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Item::spawn(&grid, &occupied, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
