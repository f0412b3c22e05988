use std::fmt::Display;

use crate::{
  error::{UrError, UrResult},
  layout::{
    BOARD_SLOTS, GREEN_OFF_SLOT, GREEN_SAFE_CELLS, PIECES_PER_SIDE, RED_ENTRY_CELLS,
    RED_EXIT_CELLS, RED_OFF_SLOT, STRIP_CELLS,
  },
  macro_state::MacroState,
};

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
  #[default]
  Empty,
  Green,
  Red,
}

impl Tile {
  /// The raw slot encoding: Green 1, Red -1, empty 0.
  pub const fn slot_value(self) -> i8 {
    match self {
      Tile::Empty => 0,
      Tile::Green => 1,
      Tile::Red => -1,
    }
  }

  /// The same tile seen from the other player's side.
  pub const fn flipped(self) -> Tile {
    match self {
      Tile::Empty => Tile::Empty,
      Tile::Green => Tile::Red,
      Tile::Red => Tile::Green,
    }
  }
}

/// One of the two sides. Green is the side to move in the canonical
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
  Green,
  Red,
}

impl Player {
  pub const fn tile(self) -> Tile {
    match self {
      Player::Green => Tile::Green,
      Player::Red => Tile::Red,
    }
  }
}

/// A full position. Each side races 7 men along its route: four private
/// entry cells, the shared 8-cell strip, two private exit cells, then off
/// the board. Cells are numbered in the raw slot order, drawn here the way
/// the board prints (Red on top):
///
///```text
///   18 17 16 15        20 19     Red entry / exit
///    4  5  6  7  8  9 10 11     shared strip
///    3  2  1  0        13 12     Green entry / exit
///```
///
/// Slots 14 and 21 of the raw encoding are not cells; they hold the men
/// Green and Red have borne off, which this struct keeps in separate fields.
/// The counter slots of `cells` always read `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
  cells: [Tile; BOARD_SLOTS],
  green_off: u8,
  red_off: u8,
}

impl Board {
  /// The start position: nothing placed or borne off, both sides with all 7
  /// men at home.
  pub const fn start() -> Self {
    Board {
      cells: [Tile::Empty; BOARD_SLOTS],
      green_off: 0,
      red_off: 0,
    }
  }

  /// Builds a board from the raw 22-slot encoding, checking the length, the
  /// per-zone cell domains, the off-count ranges and men conservation.
  pub fn from_slots(slots: &[i8]) -> UrResult<Self> {
    if slots.len() != BOARD_SLOTS {
      return Err(UrError::InvalidBoard(format!(
        "expected {BOARD_SLOTS} slots, got {}",
        slots.len()
      )));
    }

    let mut board = Board::start();
    for cell in GREEN_SAFE_CELLS {
      board.cells[cell] = match slots[cell] {
        0 => Tile::Empty,
        1 => Tile::Green,
        value => {
          return Err(UrError::InvalidBoard(format!(
            "cell {cell} is Green-only, holds {value}"
          )));
        }
      };
    }
    for cell in STRIP_CELLS {
      board.cells[cell] = match slots[cell] {
        0 => Tile::Empty,
        1 => Tile::Green,
        -1 => Tile::Red,
        value => {
          return Err(UrError::InvalidBoard(format!(
            "cell {cell} holds {value}, expected -1, 0 or 1"
          )));
        }
      };
    }
    for cell in RED_ENTRY_CELLS.into_iter().chain(RED_EXIT_CELLS) {
      board.cells[cell] = match slots[cell] {
        0 => Tile::Empty,
        -1 => Tile::Red,
        value => {
          return Err(UrError::InvalidBoard(format!(
            "cell {cell} is Red-only, holds {value}"
          )));
        }
      };
    }

    let green_off = slots[GREEN_OFF_SLOT];
    let red_off = slots[RED_OFF_SLOT];
    if !(0..=PIECES_PER_SIDE as i8).contains(&green_off)
      || !(0..=PIECES_PER_SIDE as i8).contains(&red_off)
    {
      return Err(UrError::InvalidBoard(format!(
        "off counts ({green_off}, {red_off}) outside 0..={PIECES_PER_SIDE}"
      )));
    }
    board.green_off = green_off as u8;
    board.red_off = red_off as u8;

    for player in [Player::Green, Player::Red] {
      let used = board.men_on_board(player) + board.off_count(player);
      if used > PIECES_PER_SIDE {
        return Err(UrError::InvalidBoard(format!(
          "{used} {player:?} men on board or off, more than {PIECES_PER_SIDE}"
        )));
      }
    }

    Ok(board)
  }

  /// The raw 22-slot encoding, the exact inverse of [`Board::from_slots`].
  pub fn slots(&self) -> [i8; BOARD_SLOTS] {
    let mut slots = [0i8; BOARD_SLOTS];
    for (slot, tile) in self.cells.iter().enumerate() {
      slots[slot] = tile.slot_value();
    }
    slots[GREEN_OFF_SLOT] = self.green_off as i8;
    slots[RED_OFF_SLOT] = self.red_off as i8;
    slots
  }

  pub fn tile(&self, cell: usize) -> Tile {
    debug_assert!(cell < BOARD_SLOTS);
    self.cells[cell]
  }

  /// Places a tile on a playable cell. Used by the decoder and enumerators;
  /// conservation is the caller's contract.
  pub fn set_tile(&mut self, cell: usize, tile: Tile) {
    debug_assert!(cell != GREEN_OFF_SLOT && cell != RED_OFF_SLOT);
    self.cells[cell] = tile;
  }

  pub fn off_count(&self, player: Player) -> u8 {
    match player {
      Player::Green => self.green_off,
      Player::Red => self.red_off,
    }
  }

  pub fn set_off_count(&mut self, player: Player, count: u8) {
    debug_assert!(count <= PIECES_PER_SIDE);
    match player {
      Player::Green => self.green_off = count,
      Player::Red => self.red_off = count,
    }
  }

  /// Men the player has on the board.
  pub fn men_on_board(&self, player: Player) -> u8 {
    let tile = player.tile();
    self.cells.iter().filter(|&&t| t == tile).count() as u8
  }

  /// Men the player still has waiting to enter.
  pub fn home_count(&self, player: Player) -> u8 {
    let used = self.men_on_board(player) + self.off_count(player);
    debug_assert!(used <= PIECES_PER_SIDE);
    PIECES_PER_SIDE - used
  }

  pub fn macro_state(&self) -> MacroState {
    MacroState::new(
      self.green_off,
      self.red_off,
      self.home_count(Player::Green),
      self.home_count(Player::Red),
    )
  }

  /// True once either side has borne off all 7 men.
  pub fn is_game_over(&self) -> bool {
    self.green_off == PIECES_PER_SIDE || self.red_off == PIECES_PER_SIDE
  }

  /// The same position with the players' roles swapped. An involution:
  /// reversing twice gives the original back.
  pub fn reversed(&self) -> Self {
    let mut rev = Board::start();
    // The private zones mirror each other cell for cell in route order.
    for (green, red) in GREEN_SAFE_CELLS
      .into_iter()
      .zip(RED_ENTRY_CELLS.into_iter().chain(RED_EXIT_CELLS))
    {
      rev.cells[green] = self.cells[red].flipped();
      rev.cells[red] = self.cells[green].flipped();
    }
    for cell in STRIP_CELLS {
      rev.cells[cell] = self.cells[cell].flipped();
    }
    rev.green_off = self.red_off;
    rev.red_off = self.green_off;
    rev
  }
}

impl Display for Board {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let symbol = |cell: usize| match self.cells[cell] {
      Tile::Empty => '.',
      Tile::Green => 'X',
      Tile::Red => 'O',
    };
    let row = |cells: &[usize]| cells.iter().map(|&cell| symbol(cell)).collect::<String>();

    let strip: String = STRIP_CELLS.map(symbol).collect();
    write!(
      f,
      "[{}] {}  {} ({})\n    {}\n[{}] {}  {} ({})",
      self.home_count(Player::Red),
      row(&[18, 17, 16, 15]),
      row(&[20, 19]),
      self.red_off,
      strip,
      self.home_count(Player::Green),
      row(&[3, 2, 1, 0]),
      row(&[13, 12]),
      self.green_off,
    )
  }
}

#[cfg(test)]
mod tests {
  use googletest::{expect_eq, expect_that, gtest, prelude::eq};
  use rstest::rstest;

  use super::*;

  /// Greens on cells 0, 5 and 12 with 2 off, Reds on 7, 16 and 20 with 1
  /// off.
  fn mid_game() -> Board {
    let mut slots = [0i8; BOARD_SLOTS];
    slots[0] = 1;
    slots[5] = 1;
    slots[12] = 1;
    slots[7] = -1;
    slots[16] = -1;
    slots[20] = -1;
    slots[GREEN_OFF_SLOT] = 2;
    slots[RED_OFF_SLOT] = 1;
    Board::from_slots(&slots).unwrap()
  }

  #[gtest]
  fn test_start_counts() {
    let board = Board::start();
    expect_eq!(board.men_on_board(Player::Green), 0);
    expect_eq!(board.men_on_board(Player::Red), 0);
    expect_eq!(board.home_count(Player::Green), 7);
    expect_eq!(board.home_count(Player::Red), 7);
    expect_eq!(board.macro_state(), MacroState::new(0, 0, 7, 7));
    expect_that!(board.is_game_over(), eq(false));
  }

  #[gtest]
  fn test_slots_round_trip() {
    let board = mid_game();
    expect_eq!(Board::from_slots(&board.slots()).unwrap(), board);
    expect_eq!(board.macro_state(), MacroState::new(2, 1, 2, 3));
    expect_eq!(board.tile(5), Tile::Green);
    expect_eq!(board.tile(7), Tile::Red);
    expect_eq!(board.tile(6), Tile::Empty);
  }

  #[rstest]
  fn test_from_slots_wrong_length(#[values(&[0; 21], &[0; 23])] slots: &[i8]) {
    assert!(matches!(
      Board::from_slots(slots),
      Err(UrError::InvalidBoard(_))
    ));
  }

  // A Red man in Green's zone, a Green man in Red's zone, a strip value
  // outside -1..=1 and off counts outside 0..=7 must all be rejected.
  #[rstest]
  fn test_from_slots_bad_value(
    #[values((2, -1), (17, 1), (8, 2), (GREEN_OFF_SLOT, 8), (RED_OFF_SLOT, -1))] args: (usize, i8),
  ) {
    let (slot, value) = args;
    let mut slots = [0i8; BOARD_SLOTS];
    slots[slot] = value;
    assert!(matches!(
      Board::from_slots(&slots),
      Err(UrError::InvalidBoard(_))
    ));
  }

  #[gtest]
  fn test_from_slots_conservation() {
    // 6 men on the strip plus 2 borne off is one too many.
    let mut slots = [0i8; BOARD_SLOTS];
    for cell in 4..10 {
      slots[cell] = 1;
    }
    slots[GREEN_OFF_SLOT] = 2;
    expect_that!(
      Board::from_slots(&slots).is_err(),
      eq(true),
      "8 Green men should be rejected"
    );
    slots[GREEN_OFF_SLOT] = 1;
    expect_that!(Board::from_slots(&slots).is_ok(), eq(true));
  }

  #[gtest]
  fn test_reversed_involution() {
    let board = mid_game();
    expect_eq!(board.reversed().reversed(), board);
    expect_eq!(Board::start().reversed(), Board::start());
  }

  #[gtest]
  fn test_reversed_swaps_roles() {
    let board = mid_game();
    let rev = board.reversed();
    expect_eq!(rev.off_count(Player::Green), 1);
    expect_eq!(rev.off_count(Player::Red), 2);
    // Green's cell 0 mirrors Red's cell 15, strip men flip in place.
    expect_eq!(rev.tile(15), Tile::Red);
    expect_eq!(rev.tile(1), Tile::Green);
    expect_eq!(rev.tile(5), Tile::Red);
    expect_eq!(rev.tile(7), Tile::Green);
    expect_eq!(rev.tile(19), Tile::Red);
  }

  #[gtest]
  fn test_game_over() {
    let mut board = Board::start();
    board.set_off_count(Player::Red, 7);
    expect_that!(board.is_game_over(), eq(true));
    expect_eq!(board.macro_state(), MacroState::new(0, 7, 7, 0));
  }

  #[gtest]
  fn test_display_start() {
    let shown = format!("{}", Board::start());
    expect_eq!(shown, "[7] ....  .. (0)\n    ........\n[7] ....  .. (0)");
  }

  #[gtest]
  fn test_display_mid_game() {
    let shown = format!("{}", mid_game());
    expect_eq!(shown, "[3] ..O.  O. (1)\n    .X.O....\n[2] ...X  .X (2)");
  }
}
