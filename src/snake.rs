use std::collections::{HashSet, VecDeque};

use rand::Rng;

use crate::grid::{Cell, Grid};
use Direction::*;
use MoveResult::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn delta(self) -> Cell {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Direction {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell, old_tail: Option<Cell> },
    /// The head ran into the body and the snake started over.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    grid: Grid,
    body: VecDeque<Cell>,
    length: usize,
    direction: Direction,
    pending: Option<Direction>,
}

impl Snake {
    /// A length 1 snake at the grid center.
    pub fn new(grid: Grid, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_back(grid.center());
        Snake { grid, body, length: 1, direction, pending: None }
    }

    /// A fresh snake heading somewhere random. The old one is left as is;
    /// the caller assigns the result back.
    pub fn reset<R: Rng>(&self, rng: &mut R) -> Snake {
        Snake::new(self.grid, Direction::random(rng))
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Queues a turn for the next move. A turn straight back against the
    /// current direction is dropped. Later calls overwrite earlier ones.
    pub fn set_pending_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.pending = Some(requested);
        }
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }
    }

    /// Where the head lands on the next move.
    pub fn next_head(&self) -> Cell {
        let (dx, dy) = self.direction.delta();
        let head = self.head();
        self.grid.wrap((head.0 + dx, head.1 + dy))
    }

    pub fn move_step<R: Rng>(&mut self, ate_item: bool, rng: &mut R) -> MoveResult {
        let new_head = self.next_head();

        // The neck and the head itself are never hit
        if self.body.iter().skip(2).any(|&pos| pos == new_head) {
            *self = self.reset(rng);
            return Reset;
        }

        self.body.push_front(new_head);
        if ate_item {
            self.length += 1;
        }

        let mut old_tail = None;
        while self.body.len() > self.length {
            old_tail = self.body.pop_back();
        }

        Moved { new_head, old_tail }
    }

    #[cfg(test)]
    pub fn from_body(grid: Grid, body: &[Cell], direction: Direction) -> Self {
        Snake {
            grid,
            body: body.iter().copied().collect(),
            length: body.len(),
            direction,
            pending: None,
        }
    }
}
