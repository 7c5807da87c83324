use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, poll, read};
use crossterm::style::Color;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use log::error;

use crate::error::GameError;
use crate::frontend::{InputEvent, InputSource, Surface};
use crate::grid::{Cell, Grid};
use crate::snake::Direction::*;

// A cell is two columns wide so it comes out roughly square
const CELL_COLUMNS: u16 = 2;
const BORDER_COLOR: Color = Color::Grey;

pub struct TermSurface {
    grid_width: u16,
    grid_height: u16,
    stdout: Stdout,
    active: bool,
}

impl TermSurface {
    /// Switches the terminal to the alternate screen in raw mode and draws
    /// the frame around the board. The terminal is restored on drop.
    pub fn open(grid: &Grid) -> Result<Self> {
        let (cols, rows) = terminal::size()?;
        let (needed_cols, needed_rows) = board_size(grid);
        if (cols as u32) < needed_cols || (rows as u32) < needed_rows {
            return Err(GameError::TerminalTooSmall { cols, rows, needed_cols, needed_rows }.into());
        }

        let mut surface = TermSurface {
            grid_width: grid.width(),
            grid_height: grid.height(),
            stdout: stdout(),
            active: false,
        };
        surface.setup()?;
        surface.draw_borders()?;
        Ok(surface)
    }

    fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        self.active = true;
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            terminal::SetTitle("Snake"),
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
            cursor::DisableBlinking
        )?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    fn draw_borders(&mut self) -> Result<()> {
        let end_x = self.grid_width * CELL_COLUMNS + 1;
        let end_y = self.grid_height + 1;

        queue!(self.stdout, style::SetForegroundColor(BORDER_COLOR))?;
        for x in 0..=end_x {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            queue!(self.stdout, cursor::MoveTo(x, 0), style::Print(ch), cursor::MoveTo(x, end_y), style::Print(ch))?;
        }

        for y in 1..end_y {
            queue!(self.stdout, cursor::MoveTo(0, y), style::Print('|'), cursor::MoveTo(end_x, y), style::Print('|'))?;
        }

        queue!(self.stdout, style::ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn screen_pos(&self, pos: Cell) -> (u16, u16) {
        (1 + pos.0 as u16 * CELL_COLUMNS, 1 + pos.1 as u16)
    }
}

/// Columns and rows taken by the board, its frame and the status line.
fn board_size(grid: &Grid) -> (u32, u32) {
    let cols = grid.width() as u32 * CELL_COLUMNS as u32 + 2;
    let rows = grid.height() as u32 + 3;
    (cols, rows)
}

impl Surface for TermSurface {
    fn draw_cell(&mut self, pos: Cell, fill: Color, outline: Color) -> Result<()> {
        let (col, row) = self.screen_pos(pos);
        let glyph = if fill == outline {"  "} else {"[]"};
        queue!(
            self.stdout,
            cursor::MoveTo(col, row),
            style::SetBackgroundColor(fill),
            style::SetForegroundColor(outline),
            style::Print(glyph),
            style::ResetColor
        )?;
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        let blank = " ".repeat((self.grid_width * CELL_COLUMNS) as usize);
        queue!(self.stdout, style::SetBackgroundColor(color))?;
        for row in 1..=self.grid_height {
            queue!(self.stdout, cursor::MoveTo(1, row), style::Print(&blank))?;
        }
        queue!(self.stdout, style::ResetColor)?;
        Ok(())
    }

    fn draw_status(&mut self, text: &str) -> Result<()> {
        let row = self.grid_height + 2;
        queue!(
            self.stdout,
            cursor::MoveTo(0, row),
            terminal::Clear(terminal::ClearType::UntilNewLine),
            style::Print(text)
        )?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TermSurface {
    fn drop(&mut self) {
        if !self.active {
            return;
        }

        if let Err(err) = self.restore() {
            error!("failed to restore terminal: {}", err);
        }
    }
}

/// Reads key presses from the terminal without blocking.
pub struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                if let Some(mapped) = map_key(&ev) {
                    events.push(mapped);
                }
            }
        }

        Ok(events)
    }
}

pub fn map_key(ev: &KeyEvent) -> Option<InputEvent> {
    if is_ctrl_c(ev) {
        return Some(InputEvent::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(InputEvent::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(InputEvent::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(InputEvent::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(InputEvent::Turn(Right)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(InputEvent::TogglePause),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MAX_GRID_SIDE;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_board_size_includes_frame_and_status() {
        let grid = Grid::new(32, 24).unwrap();
        assert_eq!(board_size(&grid), (66, 27));

        let widest = Grid::new(MAX_GRID_SIDE, MAX_GRID_SIDE).unwrap();
        assert_eq!(board_size(&widest), (2002, 1003));
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(&key(KeyCode::Up)), Some(InputEvent::Turn(Up)));
        assert_eq!(map_key(&key(KeyCode::Down)), Some(InputEvent::Turn(Down)));
        assert_eq!(map_key(&key(KeyCode::Left)), Some(InputEvent::Turn(Left)));
        assert_eq!(map_key(&key(KeyCode::Right)), Some(InputEvent::Turn(Right)));
    }

    #[test]
    fn test_wasd_either_case() {
        assert_eq!(map_key(&key(KeyCode::Char('w'))), Some(InputEvent::Turn(Up)));
        assert_eq!(map_key(&key(KeyCode::Char('A'))), Some(InputEvent::Turn(Left)));
        assert_eq!(map_key(&key(KeyCode::Char('s'))), Some(InputEvent::Turn(Down)));
        assert_eq!(map_key(&key(KeyCode::Char('D'))), Some(InputEvent::Turn(Right)));
    }

    #[test]
    fn test_quit_and_pause() {
        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(map_key(&ctrl_c), Some(InputEvent::Quit));
        assert_eq!(map_key(&key(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(map_key(&key(KeyCode::Esc)), Some(InputEvent::TogglePause));
        assert_eq!(map_key(&key(KeyCode::Char('p'))), Some(InputEvent::TogglePause));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(map_key(&key(KeyCode::Char('c'))), None);
        assert_eq!(map_key(&key(KeyCode::Char('x'))), None);
        assert_eq!(map_key(&key(KeyCode::Enter)), None);
    }
}
