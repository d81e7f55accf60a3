use super::fq2::Fq2;
use super::modular::{bit_vartime, wide_mul};
use crate::curve::Curve;

use bigint::U768;

/// The `2^s` roots of unity of `Fq2`, where `2^s` is the largest power of two
/// dividing `q^2 - 1`, generated by the curve's quadratic non-residue.
///
/// Each curve keeps one instance behind [`Curve::roots_of_unity`].
#[derive(Debug)]
pub struct RootsOfUnity<C: Curve> {
    roots: Vec<Fq2<C>>,
    sqrt_exponent: U768,
}

impl<C: Curve> RootsOfUnity<C> {
    pub fn compute() -> Self {
        let q = C::PRIME_MODULUS;
        // q^2 - 1 = 2^s * t with t odd
        let order = wide_mul(&q, &q).wrapping_sub(&U768::ONE);
        let mut two_adicity = 0;
        while !bit_vartime(&order, two_adicity) {
            two_adicity += 1;
        }
        let odd_part = order.shr_vartime(two_adicity);

        // g^((q^2 - 1) / 2^s) is a primitive 2^s-th root of unity
        let primitive = C::non_residue().pow(&odd_part);
        let mut roots = Vec::with_capacity(1 << two_adicity);
        let mut root = Fq2::ONE;
        for _ in 0..(1 << two_adicity) {
            roots.push(root);
            root *= primitive;
        }
        log::trace!("computed {} roots of unity in Fq2", roots.len());

        Self {
            roots,
            // (q^2 - 1 + 2^s) / 2^(s + 1)
            sqrt_exponent: odd_part.wrapping_add(&U768::ONE).shr_vartime(1),
        }
    }

    /// `roots()[k]` is `g^((q^2 - 1) * k / 2^s)`.
    pub fn roots(&self) -> &[Fq2<C>] {
        &self.roots
    }

    pub fn two_adicity(&self) -> usize {
        self.roots.len().trailing_zeros() as usize
    }
}

impl<C: Curve> Fq2<C> {
    /// Square root with a canonical choice between the two roots `y` and `-y`: the one
    /// with the larger imaginary coefficient, or on a tie the larger real coefficient.
    ///
    /// Returns `None` when `self` is not a quadratic residue.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::ZERO);
        }
        let table = C::roots_of_unity();
        let candidate = self.pow(&table.sqrt_exponent);
        // candidate^2 / self = self^t, a 2^s-th root of unity which is a square
        // (an even power of the generator) exactly when self is
        let check = candidate.square() * self.inverse()?;
        let half_index = table
            .roots
            .iter()
            .step_by(2)
            .position(|root| root == &check)?;

        let x1 = candidate * table.roots[half_index].inverse()?;
        let x2 = -x1;
        if x1.outranks(&x2) {
            Some(x1)
        } else {
            Some(x2)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::test_curves::{TestCurveMod19, TestCurveMod23};
    use crate::curve::{Bls12_381, Bn254};
    use bigint::U384;

    fn all_elements<C: Curve>(q: u32) -> Vec<Fq2<C>> {
        let mut elements = Vec::with_capacity((q * q) as usize);
        for re in 0..q {
            for im in 0..q {
                elements.push(Fq2::from_coeffs(U384::from_u32(re), U384::from_u32(im)));
            }
        }
        elements
    }

    fn exhaustive_check<C: Curve>(q: u32) {
        let elements = all_elements::<C>(q);
        let squares = elements.iter().map(Fq2::square).collect::<Vec<_>>();
        for element in elements.iter() {
            match element.sqrt() {
                Some(root) => {
                    assert!(squares.contains(element));
                    assert_eq!(root.square(), *element);
                    assert!(root.is_zero() || root.outranks(&-root));
                }
                None => assert!(!squares.contains(element)),
            }
        }
    }

    #[test]
    fn table_shape() {
        let bls = Bls12_381::roots_of_unity();
        assert_eq!(bls.two_adicity(), 3);
        assert_eq!(bls.roots().len(), 8);
        // the eighth roots of unity generated by 1 + i
        let one_plus_i = Fq2::<Bls12_381>::from_coeffs(U384::ONE, U384::ONE);
        let q = Bls12_381::PRIME_MODULUS;
        let order = wide_mul(&q, &q).wrapping_sub(&U768::ONE);
        assert_eq!(bls.roots()[1], one_plus_i.pow(&order.shr_vartime(3)));

        // q^2 - 1 = 360 = 2^3 * 45
        let order = wide_mul(&U384::from_u8(19), &U384::from_u8(19)).wrapping_sub(&U768::ONE);
        assert_eq!(order, U768::from_u32(360));
        assert_eq!(TestCurveMod19::roots_of_unity().two_adicity(), 3);

        let bn = Bn254::roots_of_unity();
        assert_eq!(bn.two_adicity(), 4);
        assert_eq!(bn.roots().len(), 16);

        cyclic_table::<Bls12_381>();
        cyclic_table::<Bn254>();
        cyclic_table::<TestCurveMod19>();
        cyclic_table::<TestCurveMod23>();
    }

    fn cyclic_table<C: Curve>() {
        let table = C::roots_of_unity().roots();
        let n = table.len();
        assert_eq!(table[0], Fq2::ONE);
        assert_eq!(table[n / 2], -Fq2::ONE);
        assert_eq!(table[n - 1] * table[1], Fq2::ONE);
    }

    #[test]
    fn exhaustive_small_fields() {
        // 2-adicity 3 like BLS12-381
        exhaustive_check::<TestCurveMod19>(19);
        // 2-adicity 4 like BN254
        exhaustive_check::<TestCurveMod23>(23);
    }

    #[test]
    fn non_residues_have_no_root() {
        assert_eq!(Bls12_381::non_residue().sqrt(), None);
        assert_eq!(Bn254::non_residue().sqrt(), None);
        assert_eq!(Fq2::<Bls12_381>::ZERO.sqrt(), Some(Fq2::ZERO));
    }

    #[test]
    fn canonical_root_is_independent_of_input_root() {
        let y = Fq2::<Bn254>::from_coeffs(
            U384::from_be_hex("00000000000000000000000000000000018e34ca0b2dfe9517b7c9eff73c4a58d6ac4e848e9cdc2b7f6ac98e306ef26f"),
            U384::from_be_hex("0000000000000000000000000000000013551dafce7946b683b9270b1829e60e7abca233f091e00f7666f4c9c157b69b"),
        );
        let from_y = y.square().sqrt().unwrap();
        let from_neg_y = (-y).square().sqrt().unwrap();
        assert_eq!(from_y, from_neg_y);
        // -y has the larger imaginary coefficient
        assert_eq!(from_y, -y);
        assert_eq!(
            from_y,
            Fq2::from_coeffs(
                U384::from_be_hex("000000000000000000000000000000002ed619a8d603a194a0987bc68a450e04c0d51c0cd9d4ee61bcb5c288a80e0ad8"),
                U384::from_be_hex("000000000000000000000000000000001d0f30c312b8597334971eab6957724f1cc4c85d77dfea7dc5b9974d172546ac"),
            )
        );

        let i = Fq2::<Bls12_381>::from_coeffs(U384::ZERO, U384::ONE);
        // sqrt(-1) = ±i, and -i has the larger imaginary coefficient (q - 1)
        assert_eq!((-Fq2::<Bls12_381>::ONE).sqrt(), Some(-i));
        // sqrt(4) = ±2 with a zero imaginary part, so the larger real part wins
        let four = Fq2::<Bls12_381>::from_coeffs(U384::from_u8(4), U384::ZERO);
        let two = Fq2::<Bls12_381>::from_coeffs(U384::from_u8(2), U384::ZERO);
        assert_eq!(four.sqrt(), Some(-two));
    }
}
