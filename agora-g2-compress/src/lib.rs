#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod arithmetic;
pub mod compression;
pub mod curve;
pub mod error;
pub mod parse;

pub use bigint::U384;
pub use compression::{compress, decompress, CompressedPoint};
pub use error::{DecompressionError, ParseError};
