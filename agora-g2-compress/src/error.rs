use crate::compression::Flags;
use crate::U384;

use thiserror::Error;

/// Which extracted coordinate failed the range check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coordinate {
    Real,
    Imaginary,
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Imaginary => write!(f, "imaginary"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecompressionError {
    #[error("malformed encoding with {flags:?}: {reason}")]
    MalformedEncoding { reason: &'static str, flags: Flags },
    #[error("{coordinate} part of x is not below the field modulus: {value}")]
    OutOfRange { coordinate: Coordinate, value: U384 },
    #[error("x^3 + b has no square root for x = {x}")]
    NoSquareRoot { x: String },
    #[error("decompressed point is not on the curve: x = {x}, y = {y}")]
    NotOnCurve { x: String, y: String },
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("invalid integer literal: {0}")]
    InvalidInteger(String),
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("coordinate is not below the field modulus: {0}")]
    OutOfRange(String),
    #[error("point is not on the curve")]
    NotOnCurve,
}
