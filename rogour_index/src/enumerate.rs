use itertools::iproduct;
use rogour::{layout::PIECES_PER_SIDE, Board, MacroState};

use crate::{
  decompose::{recompose, FULL_RED_DOMAIN},
  subset::Subsets,
};

/// Every board in the block of `state`. An inconsistent state yields
/// nothing.
pub fn macro_positions(state: MacroState) -> impl Iterator<Item = Board> {
  state
    .men_on_board()
    .into_iter()
    .flat_map(move |(green_men, red_men)| {
      let green_men = u32::from(green_men);
      let red_men = u32::from(red_men);
      (0..=green_men.min(6)).flat_map(move |safe_count| {
        let strip_count = green_men - safe_count;
        Subsets::new(6, safe_count).flat_map(move |safe| {
          Subsets::new(8, strip_count).flat_map(move |strip| {
            Subsets::new(FULL_RED_DOMAIN - strip_count, red_men).map(move |opponent| {
              recompose(state.green_off, state.red_off, safe, strip, opponent)
            })
          })
        })
      })
    })
}

/// Every board with the given borne-off counts, across all macro states
/// sharing them.
pub fn positions(green_off: u8, red_off: u8) -> impl Iterator<Item = Board> {
  let green_avail = PIECES_PER_SIDE - green_off;
  let red_avail = PIECES_PER_SIDE - red_off;
  iproduct!(0..=green_avail, 0..=red_avail).flat_map(move |(green_home, red_home)| {
    macro_positions(MacroState::new(green_off, red_off, green_home, red_home))
  })
}
