mod board;
mod code;
mod error;
pub mod layout;
mod macro_state;

pub use board::*;
pub use error::*;
pub use macro_state::*;
