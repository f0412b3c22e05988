use std::fmt::Display;

use crate::layout::PIECES_PER_SIDE;

/// The coarse shape of a position: men borne off and men still waiting at
/// home, per side. Conservation fixes the men on board, so the macro state
/// selects one contiguous block of the index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacroState {
  pub green_off: u8,
  pub red_off: u8,
  pub green_home: u8,
  pub red_home: u8,
}

impl MacroState {
  pub const fn new(green_off: u8, red_off: u8, green_home: u8, red_home: u8) -> Self {
    MacroState {
      green_off,
      red_off,
      green_home,
      red_home,
    }
  }

  /// Men each side has on the board, or `None` when the off and home counts
  /// already exceed a full side and no such position exists.
  pub fn men_on_board(&self) -> Option<(u8, u8)> {
    let side = PIECES_PER_SIDE as u32;
    let green = side.checked_sub(self.green_off as u32 + self.green_home as u32)?;
    let red = side.checked_sub(self.red_off as u32 + self.red_home as u32)?;
    Some((green as u8, red as u8))
  }
}

impl Display for MacroState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "(off {}/{}, home {}/{})",
      self.green_off, self.red_off, self.green_home, self.red_home
    )
  }
}
