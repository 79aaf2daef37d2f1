//! Ultimate Tic-Tac-Toe rules
//!
//! A 3×3 grid of 3×3 sub-boards. Each move targets the sub-board selected by
//! the cell coordinate of the previous move, unless that sub-board is already
//! decided, in which case any cell of any undecided sub-board may be played.
//!
//! Status evaluation runs the same eight-line scan at both levels: over raw
//! cells for a [`SubBoard`], and over cached sub-board outcomes for the
//! [`MetaBoard`].

mod coord;
mod game_impl;
mod meta_board;
mod render;
mod status;
mod sub_board;

pub use coord::{Coord, Move};
pub use game_impl::UltimateTicTacToe;
pub use meta_board::MetaBoard;
pub use status::Status;
pub use sub_board::SubBoard;
