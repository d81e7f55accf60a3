use bigint::{Limb, NonZero, UInt, U384, U768};

pub trait Modular: Sized + Copy {
    const MODULUS: U384;

    fn new(number: U384) -> Self;

    fn inner(&self) -> &U384;

    fn add(&self, other: &Self) -> Self {
        Self::new(self.inner().add_mod(other.inner(), &Self::MODULUS))
    }

    fn neg(&self) -> Self {
        Self::new(self.inner().neg_mod(&Self::MODULUS))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::new(self.inner().sub_mod(other.inner(), &Self::MODULUS))
    }

    fn mul(&self, other: &Self) -> Self {
        Self::new(mul_mod_u384(self.inner(), other.inner(), &Self::MODULUS))
    }

    fn square(&self) -> Self {
        Modular::mul(self, self)
    }

    fn is_zero(&self) -> bool {
        self.inner() == &U384::ZERO
    }

    /// Left-to-right square and multiply. Not constant time.
    fn pow<const LIMBS: usize>(&self, exponent: &UInt<LIMBS>) -> Self {
        let mut result = Self::new(U384::ONE);
        let mut started = false;
        for i in (0..LIMBS * Limb::BIT_SIZE).rev() {
            if started {
                result = result.square();
            }
            if bit_vartime(exponent, i) {
                result = Modular::mul(&result, self);
                started = true;
            }
        }
        result
    }

    /// Inverse via Fermat's little theorem, `None` for zero.
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.pow(&Self::MODULUS.wrapping_sub(&U384::from_u8(2))))
        }
    }
}

pub fn mul_mod_u384(lhs: &U384, rhs: &U384, modulus: &U384) -> U384 {
    // NOTE modulus is never zero, so unwrap is fine here
    let mod768 = NonZero::new(widen(modulus)).unwrap();
    // the remainder is below the modulus, so its upper half is always zero
    low_half(&(wide_mul(lhs, rhs) % mod768))
}

/// Full 768 bit product.
pub(crate) fn wide_mul(lhs: &U384, rhs: &U384) -> U768 {
    let (lo, hi) = lhs.mul_wide(rhs);
    // the first element of the pair is the most significant half
    U768::from((hi, lo))
}

fn widen(number: &U384) -> U768 {
    U768::from((U384::ZERO, *number))
}

/// Returns the lower `L` limbs of a wider integer.
pub(crate) fn low_half<const L: usize, const W: usize>(wide: &UInt<W>) -> UInt<L> {
    let mut words = [0; L];
    words.copy_from_slice(&wide.as_words()[..L]);
    UInt::from_words(words)
}

pub(crate) fn bit_vartime<const LIMBS: usize>(number: &UInt<LIMBS>, index: usize) -> bool {
    let words = number.as_words();
    (words[index / Limb::BIT_SIZE] >> (index % Limb::BIT_SIZE)) & 1 == 1
}
