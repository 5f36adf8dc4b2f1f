pub mod curve;
mod error;
pub mod mod_arithmetic;
pub mod mod_sqrt;
pub mod nt;

pub use curve::{AffinePoint, CurveParams};
pub use error::Error;
pub use mod_arithmetic::{is_quadratic_residue, legendre, Quadratic};
pub use mod_sqrt::{mod_sqrt, mod_sqrt_checked};
