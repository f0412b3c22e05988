use rogour::{
  layout::{GREEN_SAFE_CELLS, RED_ENTRY_CELLS, RED_EXIT_CELLS, STRIP_CELLS},
  Board, Player, Tile,
};

use crate::subset::iter_ones;

/// Width of Red's placement domain when Green leaves the strip empty: 4
/// entry cells, 8 strip cells, 2 exit cells.
pub const FULL_RED_DOMAIN: u32 = 14;

/// The cells a Red man may stand on when Green occupies `green_strip` of the
/// shared strip: Red's entry cells, the free strip cells, then Red's exit
/// cells.
pub fn red_domain(green_strip: u16) -> impl Iterator<Item = usize> {
  RED_ENTRY_CELLS
    .into_iter()
    .chain(
      STRIP_CELLS.filter(move |&cell| green_strip & (1 << (cell - STRIP_CELLS.start)) == 0),
    )
    .chain(RED_EXIT_CELLS)
}

/// A board split into its three independently ranked placement groups, with
/// the counts that pick the sub-block each group is ranked within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition {
  pub green_off: u8,
  pub red_off: u8,
  /// Green men on Green's private cells, bit `i` for `GREEN_SAFE_CELLS[i]`.
  pub safe: u16,
  pub safe_count: u32,
  /// Green men on the strip, bit `i` for strip cell `4 + i`.
  pub strip: u16,
  pub strip_count: u32,
  /// Red men, bit `i` for the `i`-th cell of [`red_domain`].
  pub opponent: u16,
  pub opponent_count: u32,
  pub opponent_domain: u32,
}

pub fn decompose(board: &Board) -> Decomposition {
  let mut safe = 0u16;
  for (index, cell) in GREEN_SAFE_CELLS.into_iter().enumerate() {
    if board.tile(cell) == Tile::Green {
      safe |= 1 << index;
    }
  }
  let mut strip = 0u16;
  for cell in STRIP_CELLS {
    if board.tile(cell) == Tile::Green {
      strip |= 1 << (cell - STRIP_CELLS.start);
    }
  }
  let mut opponent = 0u16;
  let mut opponent_domain = 0;
  for (index, cell) in red_domain(strip).enumerate() {
    if board.tile(cell) == Tile::Red {
      opponent |= 1 << index;
    }
    opponent_domain += 1;
  }

  Decomposition {
    green_off: board.off_count(Player::Green),
    red_off: board.off_count(Player::Red),
    safe,
    safe_count: safe.count_ones(),
    strip,
    strip_count: strip.count_ones(),
    opponent,
    opponent_count: opponent.count_ones(),
    opponent_domain,
  }
}

/// Inverse of [`decompose`]: rebuilds the board from its placement groups.
pub fn recompose(green_off: u8, red_off: u8, safe: u16, strip: u16, opponent: u16) -> Board {
  let mut board = Board::start();
  for index in iter_ones(safe) {
    board.set_tile(GREEN_SAFE_CELLS[index as usize], Tile::Green);
  }
  for index in iter_ones(strip) {
    board.set_tile(STRIP_CELLS.start + index as usize, Tile::Green);
  }
  for (index, cell) in red_domain(strip).enumerate() {
    if opponent & (1 << index) != 0 {
      board.set_tile(cell, Tile::Red);
    }
  }
  board.set_off_count(Player::Green, green_off);
  board.set_off_count(Player::Red, red_off);
  board
}
