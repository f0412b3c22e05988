mod binomial;
mod codec;
mod decompose;
mod enumerate;
mod subset;
mod tables;

pub use binomial::*;
pub use codec::*;
pub use decompose::*;
pub use enumerate::*;
pub use subset::*;
pub use tables::*;
