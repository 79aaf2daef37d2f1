//! Fixed-width text drawing of boards.
//!
//! Legend: `-` empty, `X` and `O` for the players. The frame uses
//! box-drawing characters; cell rows are separated with ASCII `|`.

use std::fmt;

use uttt_core::Player;

use crate::{Coord, MetaBoard, SubBoard};

const TOP: &str = "┌───────┬───────┬───────┐";
const MIDDLE: &str = "├───────┼───────┼───────┤";
const BOTTOM: &str = "└───────┴───────┴───────┘";

fn symbol(cell: Option<Player>) -> char {
    match cell {
        Some(Player::X) => 'X',
        Some(Player::O) => 'O',
        None => '-',
    }
}

impl fmt::Display for MetaBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TOP)?;
        for line in 0..9u8 {
            let (meta_row, cell_row) = (line / 3, line % 3);
            write!(f, "|")?;
            for meta_col in 0..3u8 {
                let board = Coord::new_unchecked(meta_row, meta_col);
                for cell_col in 0..3u8 {
                    let cell = Coord::new_unchecked(cell_row, cell_col);
                    write!(f, " {}", symbol(self.cell(board, cell)))?;
                }
                write!(f, " |")?;
            }
            writeln!(f)?;
            if line == 2 || line == 5 {
                writeln!(f, "{}", MIDDLE)?;
            }
        }
        write!(f, "{}", BOTTOM)
    }
}

impl fmt::Display for SubBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3u8 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..3u8 {
                if col > 0 {
                    write!(f, " ")?;
                }
                let cell = Coord::new_unchecked(row, col);
                write!(f, "{}", symbol(self.get(cell)))?;
            }
        }
        Ok(())
    }
}
