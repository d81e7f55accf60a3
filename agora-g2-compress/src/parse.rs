use crate::arithmetic::{AffinePoint, FieldElement, Fq2, Modular};
use crate::compression::CompressedPoint;
use crate::curve::Curve;
use crate::error::ParseError;
use crate::U384;

use bigint::Encoding;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

const COORDINATE_BYTES: usize = 48;
pub const COMPRESSED_BYTES: usize = 2 * COORDINATE_BYTES;

impl CompressedPoint {
    /// `z1` followed by `z2`, both big-endian.
    pub fn to_bytes(&self) -> [u8; COMPRESSED_BYTES] {
        let mut bytes = [0u8; COMPRESSED_BYTES];
        bytes[..COORDINATE_BYTES].copy_from_slice(&self.z1().to_be_bytes());
        bytes[COORDINATE_BYTES..].copy_from_slice(&self.z2().to_be_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        if bytes.len() != COMPRESSED_BYTES {
            return Err(ParseError::InvalidLength {
                expected: COMPRESSED_BYTES,
                actual: bytes.len(),
            });
        }
        Ok(Self::new(
            U384::from_be_slice(&bytes[..COORDINATE_BYTES]),
            U384::from_be_slice(&bytes[COORDINATE_BYTES..]),
        ))
    }
}

impl fmt::Display for CompressedPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl FromStr for CompressedPoint {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim_start_matches("0x"))?;
        Self::from_bytes(&bytes)
    }
}

impl TryFrom<String> for CompressedPoint {
    type Error = ParseError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CompressedPoint> for String {
    fn from(point: CompressedPoint) -> Self {
        point.to_string()
    }
}

/// Parses a `0x` prefixed hex or a plain decimal integer.
pub fn parse_coordinate(number: &str) -> Result<U384, ParseError> {
    let parsed = match number.strip_prefix("0x") {
        Some(digits) => BigUint::parse_bytes(digits.as_bytes(), 16),
        None => BigUint::parse_bytes(number.as_bytes(), 10),
    }
    .ok_or_else(|| ParseError::InvalidInteger(number.to_string()))?;

    let bytes = parsed.to_bytes_be();
    if bytes.len() > COORDINATE_BYTES {
        return Err(ParseError::OutOfRange(number.to_string()));
    }
    let mut padded = [0u8; COORDINATE_BYTES];
    padded[COORDINATE_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Ok(U384::from_be_slice(&padded))
}

/// Decimal representation of a field element.
pub fn format_coordinate<C: Curve>(element: &FieldElement<C>) -> String {
    BigUint::from_bytes_be(&element.inner().to_be_bytes()).to_string()
}

fn parse_field_element<C: Curve>(number: &str) -> Result<FieldElement<C>, ParseError> {
    FieldElement::new_checked(parse_coordinate(number)?)
        .ok_or_else(|| ParseError::OutOfRange(number.to_string()))
}

fn parse_fq2<C: Curve>(coordinate: &[String; 2]) -> Result<Fq2<C>, ParseError> {
    Ok(Fq2::new(
        parse_field_element(&coordinate[0])?,
        parse_field_element(&coordinate[1])?,
    ))
}

/// Uncompressed point as it arrives in JSON, coordinates given as `[real, imaginary]`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointInput {
    pub x: [String; 2],
    pub y: [String; 2],
    #[serde(default)]
    pub infinity: bool,
}

impl<C: Curve> TryFrom<PointInput> for AffinePoint<C> {
    type Error = ParseError;
    fn try_from(input: PointInput) -> Result<Self, Self::Error> {
        if input.infinity {
            return Ok(Self::IDENTITY);
        }
        let point = Self::new(parse_fq2(&input.x)?, parse_fq2(&input.y)?);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(ParseError::NotOnCurve)
        }
    }
}

/// Decimal coordinates of a point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOutput {
    pub x: [String; 2],
    pub y: [String; 2],
    pub infinity: bool,
}

impl<C: Curve> From<&AffinePoint<C>> for PointOutput {
    fn from(point: &AffinePoint<C>) -> Self {
        let format = |element: &Fq2<C>| {
            [
                format_coordinate(element.re()),
                format_coordinate(element.im()),
            ]
        };
        Self {
            x: format(point.x()),
            y: format(point.y()),
            infinity: point.is_identity(),
        }
    }
}

impl From<PointOutput> for PointInput {
    fn from(output: PointOutput) -> Self {
        Self {
            x: output.x,
            y: output.y,
            infinity: output.infinity,
        }
    }
}
