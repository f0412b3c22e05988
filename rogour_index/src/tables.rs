use std::collections::HashMap;

use itertools::iproduct;
use rogour::{layout::PIECES_PER_SIDE, MacroState, UrError, UrResult};

use crate::{binomial::Binomial, decompose::FULL_RED_DOMAIN};

/// Number of distinct placements of `green_men` Green and `red_men` Red men
/// on the board, summed over the ways Green splits between its private cells
/// and the strip.
pub fn placements(binomial: &Binomial, green_men: u32, red_men: u32) -> u64 {
  (0..=green_men.min(6))
    .map(|private| {
      let strip = green_men - private;
      binomial.get(6, private)
        * binomial.get(8, strip)
        * binomial.get(FULL_RED_DOMAIN - strip, red_men)
    })
    .sum()
}

/// Cumulative placement counts for the given men counts, keyed by how many
/// of Green's men sit on private cells: entry `m` counts the placements with
/// fewer than `m` private men. Entry 0 is 0 and the last entry is the block
/// total, so the vector has `min(green_men, 6) + 2` entries.
pub fn partial_sums(binomial: &Binomial, green_men: u32, red_men: u32) -> Vec<u64> {
  let mut sums = vec![0];
  let mut total = 0;
  for private in 0..=green_men.min(6) {
    let strip = green_men - private;
    total += binomial.get(6, private)
      * binomial.get(8, strip)
      * binomial.get(FULL_RED_DOMAIN - strip, red_men);
    sums.push(total);
  }
  sums
}

/// Positions across every macro state sharing the two borne-off counts.
pub fn block_positions(binomial: &Binomial, green_off: u32, red_off: u32) -> u64 {
  let green_avail = PIECES_PER_SIDE as u32 - green_off;
  let red_avail = PIECES_PER_SIDE as u32 - red_off;
  iproduct!(0..=green_avail, 0..=red_avail)
    .map(|(green_home, red_home)| {
      placements(binomial, green_avail - green_home, red_avail - red_home)
    })
    .sum()
}

/// Start of each macro state's contiguous block of the global index space.
#[derive(Debug, Clone, Default)]
pub struct MacroOffsetTable {
  offsets: HashMap<MacroState, u64>,
}

impl MacroOffsetTable {
  pub fn new() -> Self {
    MacroOffsetTable {
      offsets: HashMap::new(),
    }
  }

  pub fn get(&self, state: MacroState) -> Option<u64> {
    self.offsets.get(&state).copied()
  }

  pub fn insert(&mut self, state: MacroState, base: u64) {
    self.offsets.insert(state, base);
  }

  pub fn len(&self) -> usize {
    self.offsets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.offsets.is_empty()
  }
}

/// Boundary vectors from [`partial_sums`], keyed by men counts. A men count
/// pair can also be marked unreachable, which reads back as `None` just like
/// a pair never filled in.
#[derive(Debug, Clone, Default)]
pub struct BoundaryTable {
  entries: HashMap<(u32, u32), Option<Vec<u64>>>,
}

impl BoundaryTable {
  pub fn new() -> Self {
    BoundaryTable {
      entries: HashMap::new(),
    }
  }

  pub fn get(&self, green_men: u32, red_men: u32) -> Option<&[u64]> {
    match self.entries.get(&(green_men, red_men)) {
      Some(Some(sums)) => Some(sums),
      _ => None,
    }
  }

  pub fn insert(&mut self, green_men: u32, red_men: u32, sums: Vec<u64>) {
    self.entries.insert((green_men, red_men), Some(sums));
  }

  pub fn insert_empty(&mut self, green_men: u32, red_men: u32) {
    self.entries.insert((green_men, red_men), None);
  }
}

/// Lookup tables covering the whole index space: per-macro-state offsets,
/// per-men-count boundaries and the block list in index order.
#[derive(Debug, Clone)]
pub struct PositionTables {
  offsets: MacroOffsetTable,
  boundaries: BoundaryTable,
  blocks: Vec<(u64, MacroState)>,
  total: u64,
}

impl PositionTables {
  /// Builds every table in one pass over macro states in lexicographic
  /// (green off, red off, green home, red home) order, which is also
  /// increasing block order.
  pub fn build(binomial: &Binomial) -> Self {
    let pieces = PIECES_PER_SIDE as u32;

    let mut boundaries = BoundaryTable::new();
    for (green_men, red_men) in iproduct!(0..=pieces, 0..=pieces) {
      boundaries.insert(green_men, red_men, partial_sums(binomial, green_men, red_men));
    }

    let mut offsets = MacroOffsetTable::new();
    let mut blocks = Vec::new();
    let mut base = 0;
    for (green_off, red_off) in iproduct!(0..=pieces, 0..=pieces) {
      for (green_home, red_home) in iproduct!(0..=pieces - green_off, 0..=pieces - red_off) {
        let state = MacroState::new(
          green_off as u8,
          red_off as u8,
          green_home as u8,
          red_home as u8,
        );
        offsets.insert(state, base);
        blocks.push((base, state));
        base += placements(
          binomial,
          pieces - green_off - green_home,
          pieces - red_off - red_home,
        );
      }
    }

    PositionTables {
      offsets,
      boundaries,
      blocks,
      total: base,
    }
  }

  pub fn offsets(&self) -> &MacroOffsetTable {
    &self.offsets
  }

  pub fn boundaries(&self) -> &BoundaryTable {
    &self.boundaries
  }

  /// Size of the global index space.
  pub fn total_positions(&self) -> u64 {
    self.total
  }

  /// The macro state whose block holds `index`, with the block's base.
  pub fn locate(&self, index: u64) -> UrResult<(MacroState, u64)> {
    if index >= self.total {
      return Err(UrError::IndexOutOfRange {
        index,
        limit: self.total,
      });
    }
    let position = self.blocks.partition_point(|&(base, _)| base <= index);
    debug_assert!(position > 0);
    let (base, state) = self.blocks[position - 1];
    Ok((state, base))
  }
}
