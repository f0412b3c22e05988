use std::time::Instant;

use itertools::iproduct;
use rayon::prelude::*;
use rogour::{Board, MacroState};
use rogour_index::{block_positions, macro_positions, PositionCodec, PositionTables};

#[derive(Debug, Default)]
struct Metrics {
  n_positions: u64,
  n_duplicates: u64,
  n_gaps: u64,
  n_mismatches: u64,
}

impl Metrics {
  fn merge(self, other: Metrics) -> Metrics {
    Metrics {
      n_positions: self.n_positions + other.n_positions,
      n_duplicates: self.n_duplicates + other.n_duplicates,
      n_gaps: self.n_gaps + other.n_gaps,
      n_mismatches: self.n_mismatches + other.n_mismatches,
    }
  }
}

/// Walks every position sharing the two borne-off counts, checking that
/// encoding is injective, decoding inverts it and the indices tile the
/// block with no gaps.
fn verify_block(
  codec: &PositionCodec,
  tables: &PositionTables,
  green_off: u8,
  red_off: u8,
) -> Metrics {
  let first_state = MacroState::new(green_off, red_off, 0, 0);
  let super_base = tables.offsets().get(first_state).unwrap();
  let expected = block_positions(codec.binomial(), green_off.into(), red_off.into());

  let mut seen = vec![false; expected as usize];
  let mut metrics = Metrics::default();

  for (green_home, red_home) in iproduct!(0..=7 - green_off, 0..=7 - red_off) {
    let state = MacroState::new(green_off, red_off, green_home, red_home);
    let base = tables.offsets().get(state).unwrap();
    for board in macro_positions(state) {
      metrics.n_positions += 1;
      let index = codec
        .encode(&board, tables.offsets(), tables.boundaries())
        .unwrap()
        .unwrap();
      let decoded = codec
        .decode(index - base, state, tables.boundaries())
        .unwrap();
      if decoded != board {
        metrics.n_mismatches += 1;
      }

      let slot = (index - super_base) as usize;
      if seen[slot] {
        metrics.n_duplicates += 1;
      }
      seen[slot] = true;
    }
  }

  metrics.n_gaps = seen.iter().filter(|&&covered| !covered).count() as u64;
  metrics
}

fn main() {
  let codec = PositionCodec::new();

  let start = Instant::now();
  let tables = PositionTables::build(codec.binomial());
  println!(
    "built tables for {} positions across {} macro states in {:?}",
    tables.total_positions(),
    tables.offsets().len(),
    start.elapsed()
  );
  println!("{}", Board::start());

  let start = Instant::now();
  let blocks: Vec<(u8, u8)> = iproduct!(0..=7u8, 0..=7u8).collect();
  let metrics = blocks
    .par_iter()
    .map(|&(green_off, red_off)| {
      let block_start = Instant::now();
      let metrics = verify_block(&codec, &tables, green_off, red_off);
      println!(
        "block ({}, {}): {} positions in {:?}",
        green_off,
        red_off,
        metrics.n_positions,
        block_start.elapsed()
      );
      metrics
    })
    .reduce(Metrics::default, Metrics::merge);
  let elapsed = start.elapsed();

  println!(
    "{} positions checked, {} duplicates, {} gaps, {} mismatches",
    metrics.n_positions, metrics.n_duplicates, metrics.n_gaps, metrics.n_mismatches
  );
  println!(
    "{:?}, {} positions/sec",
    elapsed,
    metrics.n_positions as f64 / elapsed.as_secs_f64()
  );

  assert_eq!(metrics.n_positions, tables.total_positions());
  assert_eq!(metrics.n_duplicates, 0);
  assert_eq!(metrics.n_gaps, 0);
  assert_eq!(metrics.n_mismatches, 0);
}
