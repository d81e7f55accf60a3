mod field;
mod fq2;
mod modular;
mod point;
mod sqrt;

pub use field::FieldElement;
pub use fq2::Fq2;
pub(crate) use modular::bit_vartime;
pub use modular::{mul_mod_u384, Modular};
pub use point::AffinePoint;
pub use sqrt::RootsOfUnity;
