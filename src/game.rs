use std::cmp::max;

use anyhow::Result;
use log::{debug, info};
use rand::Rng;

use crate::clock::Clock;
use crate::error::GameError;
use crate::frontend::{InputEvent, InputSource, Surface, BOARD_BACKGROUND, CELL_BORDER, ITEM_COLOR, SNAKE_COLOR};
use crate::grid::{Cell, Grid};
use crate::item::Item;
use crate::snake::{Snake, Direction::Right, MoveResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Quit,
}

/// Owns the snake and the item and runs them against a surface and an
/// input source, one tick at a time.
pub struct SnakeGame<S, I, R> {
    grid: Grid,
    snake: Snake,
    item: Item,
    surface: S,
    input: I,
    rng: R,
    paused: bool,
    best_length: usize,
}

impl<S: Surface, I: InputSource, R: Rng> SnakeGame<S, I, R> {
    pub fn new(grid: Grid, surface: S, input: I, mut rng: R) -> Result<Self> {
        let snake = Snake::new(grid, Right);
        let item = Item::spawn(&grid, &snake.occupied_cells(), &mut rng)?;

        Ok(SnakeGame { grid, snake, item, surface, input, rng, paused: false, best_length: 1 })
    }

    /// Ticks until the input source asks to quit.
    pub fn run(&mut self, clock: &mut Clock) -> Result<()> {
        self.redraw()?;
        self.draw_status()?;
        self.surface.present()?;

        loop {
            clock.tick();

            if self.step()? == Tick::Quit {
                info!("Quit at length {}, best {}", self.snake.length(), self.best_length);
                return Ok(());
            }
        }
    }

    pub fn step(&mut self) -> Result<Tick> {
        for ev in self.input.poll_events()? {
            match ev {
                InputEvent::Quit => return Ok(Tick::Quit),
                InputEvent::Turn(dir) => {
                    self.snake.set_pending_direction(dir);
                    debug!("Turn {:?} requested, pending {:?}", dir, self.snake.pending_direction());
                },
                InputEvent::TogglePause => {
                    self.paused = !self.paused;
                    info!("{}", if self.paused {"Paused"} else {"Resumed"});
                }
            }
        }

        if !self.paused {
            self.advance()?;
        }

        self.draw_status()?;
        self.surface.present()?;
        Ok(Tick::Continue)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn advance(&mut self) -> Result<()> {
        self.snake.apply_pending_direction();

        let ate_item = self.snake.next_head() == self.item.position();
        let length_before = self.snake.length();

        match self.snake.move_step(ate_item, &mut self.rng) {
            MoveResult::Reset => {
                info!(
                    "Snake ran into itself at length {}, starting over heading {:?}",
                    length_before, self.snake.direction()
                );

                // The fresh snake may spawn right on the item
                if self.snake.occupied_cells().contains(&self.item.position()) {
                    self.item.relocate(&self.grid, &self.snake.occupied_cells(), &mut self.rng)?;
                }
                self.redraw()
            },
            MoveResult::Moved { new_head, old_tail } => {
                self.best_length = max(self.best_length, self.snake.length());

                if ate_item {
                    debug!("Item eaten at {:?}, length {}", new_head, self.snake.length());
                    match self.item.relocate(&self.grid, &self.snake.occupied_cells(), &mut self.rng) {
                        Ok(()) => {},
                        Err(GameError::ExhaustedBoard) => return self.new_round(),
                        Err(err) => return Err(err.into()),
                    }
                }

                self.draw_move(new_head, old_tail)
            },
        }
    }

    // The snake covers the whole board
    fn new_round(&mut self) -> Result<()> {
        info!("All {} cells filled, starting a new round", self.grid.cell_count());

        self.snake = self.snake.reset(&mut self.rng);
        self.item.relocate(&self.grid, &self.snake.occupied_cells(), &mut self.rng)?;
        self.redraw()
    }

    fn draw_move(&mut self, new_head: Cell, old_tail: Option<Cell>) -> Result<()> {
        if let Some(tail) = old_tail {
            self.surface.erase_cell(tail)?;
        }

        self.surface.draw_cell(self.item.position(), ITEM_COLOR, CELL_BORDER)?;
        self.surface.draw_cell(new_head, SNAKE_COLOR, CELL_BORDER)
    }

    fn redraw(&mut self) -> Result<()> {
        self.surface.clear(BOARD_BACKGROUND)?;
        self.surface.draw_cell(self.item.position(), ITEM_COLOR, CELL_BORDER)?;

        for &pos in self.snake.body() {
            self.surface.draw_cell(pos, SNAKE_COLOR, CELL_BORDER)?;
        }

        Ok(())
    }

    fn draw_status(&mut self) -> Result<()> {
        let mut status = format!("Length: {}  Best: {}", self.snake.length(), self.best_length);
        if self.paused {
            status.push_str("  Paused");
        }

        self.surface.draw_status(&status)
    }
}
