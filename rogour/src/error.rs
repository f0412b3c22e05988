use std::{error::Error, fmt::Display};

use crate::macro_state::MacroState;

/// Errors reported by the board model and the position codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrError {
  /// A raw 22-slot board is malformed: wrong length, a cell value outside
  /// its zone's domain, an off count outside `0..=7`, or more men accounted
  /// for than a side owns.
  InvalidBoard(String),
  /// The offset table has no block for this macro state, or the macro state
  /// itself is inconsistent (off + home exceeding a full side).
  MacroStateNotFound(MacroState),
  /// An index at or past the end of its addressable range.
  IndexOutOfRange { index: u64, limit: u64 },
  /// A printable position code failed to parse.
  InvalidCode(String),
}

impl Error for UrError {}

impl Display for UrError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      UrError::InvalidBoard(message) => write!(f, "Invalid board: {message}"),
      UrError::MacroStateNotFound(state) => {
        write!(f, "No index block for macro state {state}")
      }
      UrError::IndexOutOfRange { index, limit } => {
        write!(f, "Index {index} out of range [0, {limit})")
      }
      UrError::InvalidCode(message) => write!(f, "Invalid position code: {message}"),
    }
  }
}

pub type UrResult<T> = Result<T, UrError>;
