use googletest::{expect_eq, expect_true, gtest};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rogour::{Board, MacroState};
use rogour_index::{macro_positions, placements, PositionCodec, PositionTables};
use rstest::rstest;
use rstest_reuse::{apply, template};

#[template]
#[rstest]
fn index_blocks(
  #[values(
    MacroState::new(0, 0, 0, 0),
    MacroState::new(0, 0, 7, 7),
    MacroState::new(0, 0, 5, 5),
    MacroState::new(2, 1, 2, 3),
    MacroState::new(3, 3, 2, 2),
    MacroState::new(5, 5, 0, 0),
    MacroState::new(7, 6, 0, 1)
  )]
  state: MacroState,
) {
}

// Every board of a block must encode into the block's index range with no
// collisions and no gaps, and decode back to itself.
#[apply(index_blocks)]
#[gtest]
fn test_block_is_a_bijection(state: MacroState) {
  let codec = PositionCodec::new();
  let tables = PositionTables::build(codec.binomial());
  let base = tables.offsets().get(state).unwrap();
  let (green_men, red_men) = state.men_on_board().unwrap();
  let expected = placements(codec.binomial(), green_men.into(), red_men.into());

  let mut seen = vec![false; expected as usize];
  for board in macro_positions(state) {
    let index = codec
      .encode(&board, tables.offsets(), tables.boundaries())
      .unwrap()
      .unwrap();
    assert!(index >= base && index < base + expected, "{board} at {index}");

    let offset = (index - base) as usize;
    assert!(!seen[offset], "two boards at index {index}");
    seen[offset] = true;

    let decoded = codec.decode(index - base, state, tables.boundaries()).unwrap();
    assert_eq!(decoded, board);
  }
  expect_true!(seen.iter().all(|&covered| covered));
}

#[gtest]
fn test_start_position_index() {
  let codec = PositionCodec::new();
  let tables = PositionTables::build(codec.binomial());
  expect_eq!(
    codec
      .encode(&Board::start(), tables.offsets(), tables.boundaries())
      .unwrap(),
    Some(18_746_643)
  );
  expect_eq!(tables.total_positions(), 137_913_936);
}

#[gtest]
fn test_sampled_global_round_trip() {
  let codec = PositionCodec::new();
  let tables = PositionTables::build(codec.binomial());

  let mut rng = StdRng::seed_from_u64(27);
  for _ in 0..10_000 {
    let index = rng.random_range(0..tables.total_positions());
    let (state, base) = tables.locate(index).unwrap();
    let board = codec.decode(index - base, state, tables.boundaries()).unwrap();
    assert_eq!(board.macro_state(), state);
    assert_eq!(
      codec
        .encode(&board, tables.offsets(), tables.boundaries())
        .unwrap(),
      Some(index)
    );
  }
}

#[gtest]
fn test_sampled_reversal() {
  let codec = PositionCodec::new();
  let tables = PositionTables::build(codec.binomial());

  let mut rng = StdRng::seed_from_u64(4);
  for _ in 0..1000 {
    let index = rng.random_range(0..tables.total_positions());
    let (state, base) = tables.locate(index).unwrap();
    let board = codec.decode(index - base, state, tables.boundaries()).unwrap();

    let reversed = board.reversed();
    assert_eq!(reversed.reversed(), board);
    assert_eq!(
      reversed.macro_state(),
      MacroState::new(state.red_off, state.green_off, state.red_home, state.green_home)
    );

    // A reversed board is still a position, just in another block.
    let reversed_index = codec
      .encode(&reversed, tables.offsets(), tables.boundaries())
      .unwrap()
      .unwrap();
    assert!(reversed_index < tables.total_positions());
  }
}

#[gtest]
fn test_sampled_codes() {
  let codec = PositionCodec::new();
  let tables = PositionTables::build(codec.binomial());

  let mut rng = StdRng::seed_from_u64(99);
  for _ in 0..1000 {
    let index = rng.random_range(0..tables.total_positions());
    let (state, base) = tables.locate(index).unwrap();
    let board = codec.decode(index - base, state, tables.boundaries()).unwrap();

    let code = board.code();
    assert_eq!(code.len(), 5);
    assert_eq!(Board::from_code(&code).unwrap(), board);
  }
}
