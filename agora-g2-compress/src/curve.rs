use crate::arithmetic::{Fq2, RootsOfUnity};
use crate::U384;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// A pairing-friendly curve whose G2 lives on the twist `y^2 = x^3 + b` over `Fq2`.
pub trait Curve: Clone + Copy + std::fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
    const PRIME_MODULUS: U384;
    const TWIST_COEFF_B_RE: U384;
    const TWIST_COEFF_B_IM: U384;
    /// Quadratic non-residue of `Fq2` generating the roots of unity used by `sqrt`.
    const NON_RESIDUE_RE: U384;
    const NON_RESIDUE_IM: U384;
    const GENERATOR_X_RE: U384;
    const GENERATOR_X_IM: U384;
    const GENERATOR_Y_RE: U384;
    const GENERATOR_Y_IM: U384;

    /// Process-wide table, built on first use.
    fn roots_of_unity() -> &'static RootsOfUnity<Self>;

    fn twist_coeff_b() -> Fq2<Self> {
        Fq2::from_coeffs(Self::TWIST_COEFF_B_RE, Self::TWIST_COEFF_B_IM)
    }

    fn non_residue() -> Fq2<Self> {
        Fq2::from_coeffs(Self::NON_RESIDUE_RE, Self::NON_RESIDUE_IM)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bn254;

impl Curve for Bn254 {
    const PRIME_MODULUS: U384 = U384::from_be_hex("0000000000000000000000000000000030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");
    // 3 / (9 + i)
    const TWIST_COEFF_B_RE: U384 = U384::from_be_hex("000000000000000000000000000000002b149d40ceb8aaae81be18991be06ac3b5b4c5e559dbefa33267e6dc24a138e5");
    const TWIST_COEFF_B_IM: U384 = U384::from_be_hex("00000000000000000000000000000000009713b03af0fed4cd2cafadeed8fdf4a74fa084e52d1852e4a2bd0685c315d2");
    const NON_RESIDUE_RE: U384 = U384::from_u8(9);
    const NON_RESIDUE_IM: U384 = U384::ONE;
    const GENERATOR_X_RE: U384 = U384::from_be_hex("000000000000000000000000000000001800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed");
    const GENERATOR_X_IM: U384 = U384::from_be_hex("00000000000000000000000000000000198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2");
    const GENERATOR_Y_RE: U384 = U384::from_be_hex("0000000000000000000000000000000012c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa");
    const GENERATOR_Y_IM: U384 = U384::from_be_hex("00000000000000000000000000000000090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b");

    fn roots_of_unity() -> &'static RootsOfUnity<Self> {
        lazy_static! {
            static ref ROOTS: RootsOfUnity<Bn254> = RootsOfUnity::compute();
        }
        &ROOTS
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bls12_381;

impl Curve for Bls12_381 {
    const PRIME_MODULUS: U384 = U384::from_be_hex("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab");
    const TWIST_COEFF_B_RE: U384 = U384::from_u8(4);
    const TWIST_COEFF_B_IM: U384 = U384::from_u8(4);
    const NON_RESIDUE_RE: U384 = U384::ONE;
    const NON_RESIDUE_IM: U384 = U384::ONE;
    const GENERATOR_X_RE: U384 = U384::from_be_hex("024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8");
    const GENERATOR_X_IM: U384 = U384::from_be_hex("13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e");
    const GENERATOR_Y_RE: U384 = U384::from_be_hex("0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801");
    const GENERATOR_Y_IM: U384 = U384::from_be_hex("0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be");

    fn roots_of_unity() -> &'static RootsOfUnity<Self> {
        lazy_static! {
            static ref ROOTS: RootsOfUnity<Bls12_381> = RootsOfUnity::compute();
        }
        &ROOTS
    }
}

#[cfg(test)]
pub(crate) mod test_curves {
    use super::*;

    // q = 19, q^2 - 1 = 2^3 * 45
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TestCurveMod19;

    impl Curve for TestCurveMod19 {
        const PRIME_MODULUS: U384 = U384::from_u8(19);
        const TWIST_COEFF_B_RE: U384 = U384::from_u8(4);
        const TWIST_COEFF_B_IM: U384 = U384::from_u8(4);
        const NON_RESIDUE_RE: U384 = U384::ONE;
        const NON_RESIDUE_IM: U384 = U384::ONE;
        const GENERATOR_X_RE: U384 = U384::ZERO;
        const GENERATOR_X_IM: U384 = U384::ZERO;
        const GENERATOR_Y_RE: U384 = U384::ZERO;
        const GENERATOR_Y_IM: U384 = U384::ZERO;

        fn roots_of_unity() -> &'static RootsOfUnity<Self> {
            lazy_static! {
                static ref ROOTS: RootsOfUnity<TestCurveMod19> = RootsOfUnity::compute();
            }
            &ROOTS
        }
    }

    // q = 23, q^2 - 1 = 2^4 * 33
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TestCurveMod23;

    impl Curve for TestCurveMod23 {
        const PRIME_MODULUS: U384 = U384::from_u8(23);
        const TWIST_COEFF_B_RE: U384 = U384::from_u8(3);
        const TWIST_COEFF_B_IM: U384 = U384::ZERO;
        const NON_RESIDUE_RE: U384 = U384::ONE;
        const NON_RESIDUE_IM: U384 = U384::from_u8(2);
        const GENERATOR_X_RE: U384 = U384::ZERO;
        const GENERATOR_X_IM: U384 = U384::ZERO;
        const GENERATOR_Y_RE: U384 = U384::ZERO;
        const GENERATOR_Y_IM: U384 = U384::ZERO;

        fn roots_of_unity() -> &'static RootsOfUnity<Self> {
            lazy_static! {
                static ref ROOTS: RootsOfUnity<TestCurveMod23> = RootsOfUnity::compute();
            }
            &ROOTS
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bn254_twist_coefficient() {
        let xi = Bn254::non_residue();
        let three = Fq2::<Bn254>::from_coeffs(U384::from_u8(3), U384::ZERO);
        assert_eq!(Bn254::twist_coeff_b() * xi, three);
    }

    #[test]
    fn bls12_381_twist_coefficient() {
        let four = Fq2::<Bls12_381>::from_coeffs(U384::from_u8(4), U384::ZERO);
        assert_eq!(Bls12_381::twist_coeff_b(), four * Bls12_381::non_residue());
    }

    #[test]
    fn moduli_fit_below_flag_bits() {
        // the three most significant bits of a compressed coordinate carry flags
        let payload_mask = U384::ONE.shl_vartime(381);
        assert!(Bn254::PRIME_MODULUS < payload_mask);
        assert!(Bls12_381::PRIME_MODULUS < payload_mask);
    }
}
