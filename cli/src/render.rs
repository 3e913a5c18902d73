//! Board drawing.
//!
//! Each tile is a 5x5 colored box with a one-cell gutter. The score and,
//! once the game has ended, a restart prompt are printed below the board.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor};
use crossterm::terminal::{Clear, ClearType};
use termtiles_core::{GameState, Grid, Point, SIZE};

const TILE: u16 = 5;
const STRIDE: u16 = TILE + 1;
const STATUS_ROW: u16 = 24;

/// Background color per tile value. Values not listed use the terminal's
/// default background.
pub const TILE_COLORS: [(u32, Color); 11] = [
    (2, Color::Red),
    (4, Color::Green),
    (8, Color::Blue),
    (16, Color::Yellow),
    (32, Color::Magenta),
    (64, Color::Cyan),
    (128, Color::Red),
    (256, Color::Green),
    (512, Color::Blue),
    (1024, Color::Yellow),
    (2048, Color::Magenta),
];

pub fn tile_color(value: u32) -> Option<Color> {
    TILE_COLORS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|&(_, color)| color)
}

/// Redraw the whole screen.
pub fn draw<W: Write>(out: &mut W, grid: &Grid, score: u64, state: GameState) -> io::Result<()> {
    queue!(out, ResetColor, Clear(ClearType::All))?;

    for row in 0..SIZE {
        for col in 0..SIZE {
            let value = grid.get(Point::new(row, col));
            draw_tile(out, col as u16 * STRIDE, row as u16 * STRIDE, value)?;
        }
    }

    queue!(
        out,
        SetAttribute(Attribute::Bold),
        MoveTo(0, STATUS_ROW),
        Print(format!("Score: {score}"))
    )?;
    if state == GameState::GameOver {
        queue!(
            out,
            MoveTo(0, STATUS_ROW + 1),
            Print("Game Over"),
            MoveTo(0, STATUS_ROW + 2),
            Print("Press R to Restart")
        )?;
    }
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        MoveTo(0, STATUS_ROW + 4),
        Print("Arrows/WASD move | R restart | Q quit")
    )?;

    out.flush()
}

fn draw_tile<W: Write>(out: &mut W, left: u16, top: u16, value: u32) -> io::Result<()> {
    let blank = " ".repeat(TILE as usize);
    let label = if value == 0 {
        blank.clone()
    } else {
        format!("{:^width$}", value, width = TILE as usize)
    };

    if let Some(color) = tile_color(value) {
        queue!(out, SetBackgroundColor(color))?;
    }
    queue!(out, SetAttribute(Attribute::Bold))?;
    for line in 0..TILE {
        let text = if line == TILE / 2 { &label } else { &blank };
        queue!(out, MoveTo(left, top + line), Print(text))?;
    }
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)
}
