use super::field::FieldElement;
use super::modular::{bit_vartime, Modular};
use crate::curve::Curve;

use bigint::{Limb, UInt, U384};
use rand_core::{CryptoRng, RngCore};

use std::fmt;

/// Element `re + im * i` of the quadratic extension `Fq[i] / (i^2 + 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fq2<C: Curve> {
    re: FieldElement<C>,
    im: FieldElement<C>,
}

impl<C: Curve> Fq2<C> {
    pub const ZERO: Self = Self {
        re: FieldElement::ZERO,
        im: FieldElement::ZERO,
    };

    pub const ONE: Self = Self {
        re: FieldElement::ONE,
        im: FieldElement::ZERO,
    };

    pub fn new(re: FieldElement<C>, im: FieldElement<C>) -> Self {
        Self { re, im }
    }

    /// Builds an element from raw coefficients, reducing them modulo `q`.
    pub fn from_coeffs(re: U384, im: U384) -> Self {
        Self {
            re: FieldElement::new(re),
            im: FieldElement::new(im),
        }
    }

    pub fn re(&self) -> &FieldElement<C> {
        &self.re
    }

    pub fn im(&self) -> &FieldElement<C> {
        &self.im
    }

    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    pub fn conjugate(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    pub fn square(&self) -> Self {
        // (a + bi)^2 = (a + b)(a - b) + 2ab i
        let ab = self.re * self.im;
        Self {
            re: (self.re + self.im) * (self.re - self.im),
            im: ab + ab,
        }
    }

    /// `None` for zero.
    pub fn inverse(&self) -> Option<Self> {
        // (a + bi)^-1 = (a - bi) / (a^2 + b^2)
        let norm = self.re.square() + self.im.square();
        let norm_inv = norm.inverse()?;
        Some(Self {
            re: self.re * norm_inv,
            im: -(self.im * norm_inv),
        })
    }

    pub fn pow<const LIMBS: usize>(&self, exponent: &UInt<LIMBS>) -> Self {
        let mut result = Self::ONE;
        let mut started = false;
        for i in (0..LIMBS * Limb::BIT_SIZE).rev() {
            if started {
                result = result.square();
            }
            if bit_vartime(exponent, i) {
                result = result * *self;
                started = true;
            }
        }
        result
    }

    /// Coefficient ordering used to pick between `y` and `-y`: the larger imaginary
    /// coefficient wins, the real coefficient breaks ties.
    pub fn outranks(&self, other: &Self) -> bool {
        let (self_im, other_im) = (self.im.inner(), other.im.inner());
        self_im > other_im || (self_im == other_im && self.re.inner() > other.re.inner())
    }

    /// Which of `y` and `-y` this is: decided by the imaginary coefficient, or by the
    /// real one when the imaginary coefficient is zero.
    pub fn sign_flag(&self) -> bool {
        if self.im.is_zero() {
            self.re.is_upper_half()
        } else {
            self.im.is_upper_half()
        }
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self {
            re: FieldElement::random(rng),
            im: FieldElement::random(rng),
        }
    }
}

impl<C: Curve> fmt::Display for Fq2<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}

impl<C: Curve> std::ops::Add for Fq2<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b Fq2<C>> for &'a Fq2<C> {
    type Output = Fq2<C>;
    fn add(self, rhs: &'b Fq2<C>) -> Self::Output {
        *self + *rhs
    }
}

impl<C: Curve> std::ops::Sub for Fq2<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<C: Curve> std::ops::Neg for Fq2<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<C: Curve> std::ops::Neg for &Fq2<C> {
    type Output = Fq2<C>;
    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<C: Curve> std::ops::Mul for Fq2<C> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        // Karatsuba with i^2 = -1
        let aa = self.re * rhs.re;
        let bb = self.im * rhs.im;
        Self {
            re: aa - bb,
            im: (self.re + self.im) * (rhs.re + rhs.im) - aa - bb,
        }
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b Fq2<C>> for &'a Fq2<C> {
    type Output = Fq2<C>;
    fn mul(self, rhs: &'b Fq2<C>) -> Self::Output {
        *self * *rhs
    }
}

impl<C: Curve> std::ops::MulAssign for Fq2<C> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
