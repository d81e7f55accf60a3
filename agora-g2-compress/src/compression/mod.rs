mod flags;

pub use flags::{payload, Flags, PAYLOAD_MASK};

use crate::arithmetic::{AffinePoint, FieldElement, Fq2, Modular};
use crate::curve::Curve;
use crate::error::{Coordinate, DecompressionError};
use crate::U384;

use serde::{Deserialize, Serialize};

/// A G2 point packed into two 384 bit integers.
///
/// `z1` carries the flags in its three most significant bits and the imaginary part of
/// `x` below them, `z2` is the real part of `x`. Serialized as a hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompressedPoint {
    z1: U384,
    z2: U384,
}

impl CompressedPoint {
    pub fn new(z1: U384, z2: U384) -> Self {
        Self { z1, z2 }
    }

    pub fn z1(&self) -> &U384 {
        &self.z1
    }

    pub fn z2(&self) -> &U384 {
        &self.z2
    }

    pub fn flags(&self) -> Flags {
        Flags::decode(&self.z1)
    }
}

pub fn compress<C: Curve>(point: &AffinePoint<C>) -> CompressedPoint {
    if point.is_identity() {
        return CompressedPoint::new(Flags::infinity().encode(), U384::ZERO);
    }
    let x = point.x();
    let flags = Flags::compressed(point.y().sign_flag());
    CompressedPoint::new(flags.encode() | *x.im().inner(), *x.re().inner())
}

pub fn decompress<C: Curve>(
    compressed: &CompressedPoint,
) -> Result<AffinePoint<C>, DecompressionError> {
    match try_decompress(compressed) {
        Ok(point) => {
            log::debug!("decompressed point x = {}", point.x());
            Ok(point)
        }
        Err(error) => {
            log::debug!("rejected compressed point {}: {}", compressed, error);
            Err(error)
        }
    }
}

fn try_decompress<C: Curve>(
    compressed: &CompressedPoint,
) -> Result<AffinePoint<C>, DecompressionError> {
    let flags = compressed.flags();
    let malformed = |reason| DecompressionError::MalformedEncoding { reason, flags };
    if !flags.compression {
        return Err(malformed("compression flag is not set"));
    }

    let x_im = payload(&compressed.z1);
    let is_infinity = x_im == U384::ZERO && compressed.z2 == U384::ZERO;
    if flags.infinity != is_infinity {
        return Err(malformed("infinity flag does not match the encoded coordinate"));
    }
    if is_infinity {
        if flags.sign {
            return Err(malformed("sign flag is set on the point at infinity"));
        }
        return Ok(AffinePoint::IDENTITY);
    }

    let x_im = FieldElement::new_checked(x_im).ok_or(DecompressionError::OutOfRange {
        coordinate: Coordinate::Imaginary,
        value: x_im,
    })?;
    let x_re =
        FieldElement::new_checked(compressed.z2).ok_or(DecompressionError::OutOfRange {
            coordinate: Coordinate::Real,
            value: compressed.z2,
        })?;
    let x = Fq2::new(x_re, x_im);

    let mut y = (x.square() * x + C::twist_coeff_b())
        .sqrt()
        .ok_or_else(|| DecompressionError::NoSquareRoot { x: x.to_string() })?;
    // y = -y when y is zero, so only the cleared sign flag encodes it
    if y.is_zero() && flags.sign {
        return Err(malformed("sign flag is set on a point with y = 0"));
    }
    if y.sign_flag() != flags.sign {
        y = -y;
    }

    let point = AffinePoint::new(x, y);
    if !point.is_on_curve() {
        return Err(DecompressionError::NotOnCurve {
            x: x.to_string(),
            y: y.to_string(),
        });
    }
    Ok(point)
}
