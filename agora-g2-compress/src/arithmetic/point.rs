use super::fq2::Fq2;
use crate::compression::{self, CompressedPoint};
use crate::curve::Curve;
use crate::error::DecompressionError;

use rand_core::{CryptoRng, RngCore};

use std::fmt;

// z can only be 1 (general point) or 0 (identity)
// This invariable is preserved in the methods
#[derive(Debug, Clone, Copy)]
pub struct AffinePoint<C: Curve> {
    x: Fq2<C>,
    y: Fq2<C>,
    z: Fq2<C>,
}

impl<C: Curve> fmt::Display for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "x: {}", self.x)?;
        writeln!(f, "y: {}", self.y)?;
        writeln!(f, "z: {}", self.z)
    }
}

impl<C: Curve> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        (self.is_identity() && other.is_identity())
            || (!self.is_identity()
                && !other.is_identity()
                && self.x == other.x
                && self.y == other.y)
    }
}

impl<C: Curve> Eq for AffinePoint<C> {}

impl<C: Curve> std::ops::Neg for AffinePoint<C> {
    type Output = Self;
    fn neg(self) -> Self {
        AffinePoint {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl<C: Curve> std::ops::Neg for &AffinePoint<C> {
    type Output = AffinePoint<C>;
    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<C: Curve> AffinePoint<C> {
    pub const IDENTITY: Self = Self {
        x: Fq2::ZERO,
        y: Fq2::ONE,
        z: Fq2::ZERO,
    };

    pub fn new(x: Fq2<C>, y: Fq2<C>) -> Self {
        Self { x, y, z: Fq2::ONE }
    }

    pub fn generator() -> Self {
        Self::new(
            Fq2::from_coeffs(C::GENERATOR_X_RE, C::GENERATOR_X_IM),
            Fq2::from_coeffs(C::GENERATOR_Y_RE, C::GENERATOR_Y_IM),
        )
    }

    /// Random point with a uniformly chosen x coordinate. Not a random element of the
    /// prime order subgroup.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        loop {
            let x = Fq2::random(rng);
            if let Some(y) = (x.square() * x + C::twist_coeff_b()).sqrt() {
                let mut sign = [0u8; 1];
                rng.fill_bytes(&mut sign);
                return if sign[0] & 1 == 1 {
                    Self::new(x, -y)
                } else {
                    Self::new(x, y)
                };
            }
        }
    }

    /// Checks `y^2 z = x^3 + b z^3` on the twist, which the identity satisfies as well.
    pub fn is_on_curve(&self) -> bool {
        let b = C::twist_coeff_b();

        let y2z = self.y.square() * self.z;
        let x3 = self.x.square() * self.x;
        let bz3 = b * self.z.square() * self.z;

        (y2z - (x3 + bz3)).is_zero()
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && !self.y.is_zero() && self.z.is_zero()
    }

    pub fn to_compressed(&self) -> CompressedPoint {
        compression::compress(self)
    }

    pub fn from_compressed(compressed: &CompressedPoint) -> Result<Self, DecompressionError> {
        compression::decompress(compressed)
    }

    pub fn x(&self) -> &Fq2<C> {
        &self.x
    }

    pub fn y(&self) -> &Fq2<C> {
        &self.y
    }

    pub fn z(&self) -> &Fq2<C> {
        &self.z
    }
}
