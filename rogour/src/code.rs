use crate::{
  board::{Board, Player, Tile},
  error::{UrError, UrResult},
  layout::{GREEN_SAFE_CELLS, PIECES_PER_SIDE, RED_ENTRY_CELLS, RED_EXIT_CELLS, STRIP_CELLS},
};

/// The Z85 digit alphabet, in digit-value order.
const ALPHABET: &[u8; 85] =
  b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

const fn decode_table() -> [i8; 256] {
  let mut table = [-1i8; 256];
  let mut digit = 0;
  while digit < ALPHABET.len() {
    table[ALPHABET[digit] as usize] = digit as i8;
    digit += 1;
  }
  table
}

/// Digit value of each byte, -1 for bytes outside the alphabet.
const DECODE: [i8; 256] = decode_table();

const CODE_LEN: usize = 5;

fn encode_u32(mut value: u32) -> String {
  (0..CODE_LEN)
    .map(|_| {
      let digit = (value % 85) as usize;
      value /= 85;
      ALPHABET[digit] as char
    })
    .collect()
}

fn decode_u32(code: &str) -> UrResult<u32> {
  if code.len() != CODE_LEN {
    return Err(UrError::InvalidCode(code.to_owned()));
  }
  let mut value = 0u64;
  for (index, byte) in code.bytes().enumerate() {
    let digit = DECODE[byte as usize];
    if digit < 0 {
      return Err(UrError::InvalidCode(code.to_owned()));
    }
    value += digit as u64 * 85u64.pow(index as u32);
  }
  // The payload is 31 bits; 5 digits can name values well past it.
  if value >> 31 != 0 {
    return Err(UrError::InvalidCode(code.to_owned()));
  }
  Ok(value as u32)
}

impl Board {
  /// Renders the position as a 5-character code in the Z85 alphabet, least
  /// significant digit first.
  ///
  /// A code packs the position into 31 bits: Green's home count, occupancy
  /// bits for Green's six private cells, Red's home count and private-cell
  /// bits, then the shared strip as 8 base-3 digits in the low 13 bits. Off
  /// counts are implied by conservation.
  pub fn code(&self) -> String {
    let mut packed = (self.home_count(Player::Green) as u32) << 28;
    for (index, cell) in GREEN_SAFE_CELLS.into_iter().enumerate() {
      if self.tile(cell) == Tile::Green {
        packed |= 1 << (27 - index);
      }
    }
    packed |= (self.home_count(Player::Red) as u32) << 19;
    for (index, cell) in RED_ENTRY_CELLS
      .into_iter()
      .chain(RED_EXIT_CELLS)
      .enumerate()
    {
      if self.tile(cell) == Tile::Red {
        packed |= 1 << (18 - index);
      }
    }
    let mut strip = 0u32;
    for cell in STRIP_CELLS {
      strip = strip * 3 + (self.tile(cell).slot_value() + 1) as u32;
    }
    encode_u32(packed | strip)
  }

  /// Parses a code produced by [`Board::code`].
  pub fn from_code(code: &str) -> UrResult<Self> {
    let packed = decode_u32(code)?;
    let mut strip = packed & 0x1fff;
    if strip >= 6561 {
      // 3^8; the 13-bit field has a dead tail.
      return Err(UrError::InvalidCode(code.to_owned()));
    }

    let mut board = Board::start();
    for cell in STRIP_CELLS.rev() {
      board.set_tile(
        cell,
        match strip % 3 {
          0 => Tile::Red,
          1 => Tile::Empty,
          _ => Tile::Green,
        },
      );
      strip /= 3;
    }
    for (index, cell) in GREEN_SAFE_CELLS.into_iter().enumerate() {
      if packed >> (27 - index) & 1 != 0 {
        board.set_tile(cell, Tile::Green);
      }
    }
    for (index, cell) in RED_ENTRY_CELLS
      .into_iter()
      .chain(RED_EXIT_CELLS)
      .enumerate()
    {
      if packed >> (18 - index) & 1 != 0 {
        board.set_tile(cell, Tile::Red);
      }
    }

    for (player, home) in [
      (Player::Green, (packed >> 28 & 0x7) as u8),
      (Player::Red, (packed >> 19 & 0x7) as u8),
    ] {
      let used = home + board.men_on_board(player);
      if used > PIECES_PER_SIDE {
        return Err(UrError::InvalidCode(code.to_owned()));
      }
      board.set_off_count(player, PIECES_PER_SIDE - used);
    }
    Ok(board)
  }
}

#[cfg(test)]
mod tests {
  use googletest::{expect_eq, expect_that, gtest, prelude::eq};
  use rstest::rstest;

  use super::*;

  fn mid_game() -> Board {
    let mut board = Board::start();
    for cell in [0, 5, 12] {
      board.set_tile(cell, Tile::Green);
    }
    for cell in [7, 16, 20] {
      board.set_tile(cell, Tile::Red);
    }
    board.set_off_count(Player::Green, 2);
    board.set_off_count(Player::Red, 1);
    board
  }

  #[gtest]
  fn test_start_code() {
    expect_eq!(Board::start().code(), "MoX5A");
    expect_eq!(Board::from_code("MoX5A").unwrap(), Board::start());
  }

  #[gtest]
  fn test_mid_game_code() {
    expect_eq!(mid_game().code(), ">!h4d");
    expect_eq!(Board::from_code(">!h4d").unwrap(), mid_game());
  }

  #[gtest]
  fn test_round_trip() {
    let mut board = mid_game();
    board.set_off_count(Player::Green, 4);
    board.set_off_count(Player::Red, 4);
    expect_eq!(Board::from_code(&board.code()).unwrap(), board);
  }

  #[rstest]
  fn test_invalid_code(
    #[values("", "MoX5", "MoX5AA", "MoX5~", "MoX5é", "#####")] code: &str,
  ) {
    assert!(matches!(
      Board::from_code(code),
      Err(UrError::InvalidCode(_))
    ));
  }

  #[gtest]
  fn test_bad_strip_field() {
    // Low 13 bits name a value past 3^8 - 1.
    let code = encode_u32(0x1fff);
    expect_that!(Board::from_code(&code).is_err(), eq(true));
  }

  #[gtest]
  fn test_overfull_side() {
    // Green claims 7 men at home with one already placed on cell 0.
    let code = encode_u32(7 << 28 | 1 << 27 | 7 << 19 | 3280);
    expect_that!(Board::from_code(&code).is_err(), eq(true));
  }
}
