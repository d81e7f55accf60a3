use crate::arithmetic::bit_vartime;
use crate::U384;

const COMPRESSION_BIT: usize = 383;
const INFINITY_BIT: usize = 382;
const SIGN_BIT: usize = 381;

/// `2^381 - 1`, selects the coordinate carried alongside the flags.
pub const PAYLOAD_MASK: U384 = U384::from_be_hex("1fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");

/// The three flag bits at the top of the first compressed coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub compression: bool,
    pub infinity: bool,
    pub sign: bool,
}

impl Flags {
    /// Flags of an ordinary compressed point.
    pub fn compressed(sign: bool) -> Self {
        Self {
            compression: true,
            infinity: false,
            sign,
        }
    }

    /// Flags of the compressed point at infinity.
    pub fn infinity() -> Self {
        Self {
            compression: true,
            infinity: true,
            sign: false,
        }
    }

    /// The flags as a 384 bit integer with every payload bit cleared, to be or-ed onto
    /// a payload below `2^381`.
    pub fn encode(&self) -> U384 {
        let mut encoded = U384::ZERO;
        for (set, index) in [
            (self.compression, COMPRESSION_BIT),
            (self.infinity, INFINITY_BIT),
            (self.sign, SIGN_BIT),
        ] {
            if set {
                encoded = encoded | single_bit(index);
            }
        }
        encoded
    }

    pub fn decode(z1: &U384) -> Self {
        Self {
            compression: bit_vartime(z1, COMPRESSION_BIT),
            infinity: bit_vartime(z1, INFINITY_BIT),
            sign: bit_vartime(z1, SIGN_BIT),
        }
    }
}

/// Clears the flag bits, i.e. `z1 mod 2^381`.
pub fn payload(z1: &U384) -> U384 {
    *z1 & PAYLOAD_MASK
}

fn single_bit(index: usize) -> U384 {
    U384::ONE.shl_vartime(index)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flag_positions() {
        assert_eq!(
            Flags::infinity().encode(),
            U384::from_be_hex("c00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000")
        );
        assert_eq!(
            Flags::compressed(true).encode(),
            U384::from_be_hex("a00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000")
        );
        assert_eq!(Flags::default().encode(), U384::ZERO);
        assert_eq!(PAYLOAD_MASK, single_bit(SIGN_BIT).wrapping_sub(&U384::ONE));
    }

    #[test]
    fn every_combination_survives_decoding() {
        for bits in 0u8..8 {
            let flags = Flags {
                compression: bits & 4 != 0,
                infinity: bits & 2 != 0,
                sign: bits & 1 != 0,
            };
            let z1 = flags.encode() | U384::from_u32(0xdead_beef);
            assert_eq!(Flags::decode(&z1), flags);
            assert_eq!(payload(&z1), U384::from_u32(0xdead_beef));
        }
    }

    #[test]
    fn decoding_matches_shifts() {
        let samples = [
            "80000000000000000000000000000000084aab0ba37fa5ce4842e898f56a539907c1b96aded734ea2edaa997776c9724",
            "b3e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e",
            "5fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001",
        ];
        for sample in samples {
            let z1 = U384::from_be_hex(sample);
            let flags = Flags::decode(&z1);
            let bit = |index: usize| z1.shr_vartime(index) & U384::ONE == U384::ONE;
            assert_eq!(flags.compression, bit(383));
            assert_eq!(flags.infinity, bit(382));
            assert_eq!(flags.sign, bit(381));
        }
    }
}
