use rogour::{Board, MacroState, UrError, UrResult};

use crate::{
  binomial::Binomial,
  decompose::{decompose, recompose, FULL_RED_DOMAIN},
  subset::{subset_rank, subset_unrank},
  tables::{BoundaryTable, MacroOffsetTable},
};

/// Bidirectional map between boards and their dense global indices.
///
/// The index space is laid out per macro state, and a state's block is laid
/// out per split of Green's men between private cells and the strip. Within
/// a split the three placement groups are ranked independently and mixed by
/// place value: Green's private cells are the most significant group, then
/// Green's strip men, then Red's men over the cells Green leaves free.
#[derive(Debug, Clone)]
pub struct PositionCodec {
  binomial: Binomial,
}

impl PositionCodec {
  pub const fn new() -> Self {
    PositionCodec {
      binomial: Binomial::new(),
    }
  }

  pub const fn binomial(&self) -> &Binomial {
    &self.binomial
  }

  /// The global index of `board`, or `Ok(None)` when the boundary table
  /// marks its men counts unreachable.
  pub fn encode(
    &self,
    board: &Board,
    offsets: &MacroOffsetTable,
    boundaries: &BoundaryTable,
  ) -> UrResult<Option<u64>> {
    let state = board.macro_state();
    let base = offsets
      .get(state)
      .ok_or(UrError::MacroStateNotFound(state))?;

    let parts = decompose(board);
    let green_men = parts.safe_count + parts.strip_count;
    let Some(sums) = boundaries.get(green_men, parts.opponent_count) else {
      return Ok(None);
    };

    let safe_rank = subset_rank(&self.binomial, parts.safe, parts.safe_count, 6);
    let strip_rank = subset_rank(&self.binomial, parts.strip, parts.strip_count, 8);
    let opponent_rank = subset_rank(
      &self.binomial,
      parts.opponent,
      parts.opponent_count,
      parts.opponent_domain,
    );

    let green = safe_rank * self.binomial.get(8, parts.strip_count) + strip_rank;
    let both = green * self.binomial.get(parts.opponent_domain, parts.opponent_count)
      + opponent_rank;
    Ok(Some(base + sums[parts.safe_count as usize] + both))
  }

  /// Rebuilds the board at `index` within the block of `state`.
  ///
  /// `index` counts from the start of the block, not from 0 of the global
  /// space; pair with [`PositionTables::locate`](crate::PositionTables::locate)
  /// to resolve a global index first.
  pub fn decode(
    &self,
    index: u64,
    state: MacroState,
    boundaries: &BoundaryTable,
  ) -> UrResult<Board> {
    let (green_men, red_men) = state
      .men_on_board()
      .ok_or(UrError::MacroStateNotFound(state))?;
    let green_men = u32::from(green_men);
    let red_men = u32::from(red_men);

    let Some(sums) = boundaries.get(green_men, red_men) else {
      return Err(UrError::IndexOutOfRange { index, limit: 0 });
    };
    let limit = *sums.last().unwrap_or(&0);
    if index >= limit {
      return Err(UrError::IndexOutOfRange { index, limit });
    }

    let mut private = 0;
    while sums[private + 1] <= index {
      private += 1;
    }
    let mut rest = index - sums[private];

    let safe_count = private as u32;
    let strip_count = green_men - safe_count;
    let domain = FULL_RED_DOMAIN - strip_count;

    // Peel the groups off least significant first.
    let opponent_block = self.binomial.get(domain, red_men);
    let opponent_rank = rest % opponent_block;
    rest /= opponent_block;
    let strip_block = self.binomial.get(8, strip_count);
    let strip_rank = rest % strip_block;
    let safe_rank = rest / strip_block;

    let safe = subset_unrank(&self.binomial, safe_rank, safe_count, 6);
    let strip = subset_unrank(&self.binomial, strip_rank, strip_count, 8);
    let opponent = subset_unrank(&self.binomial, opponent_rank, red_men, domain);

    Ok(recompose(state.green_off, state.red_off, safe, strip, opponent))
  }
}
