use rug::Integer;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("modulus {0} is not an odd prime")]
    InvalidModulus(Integer),
    // t^(2^i) never reached 1 for i < m. Only happens for a composite modulus.
    #[error("order of t exceeds 2^{m}, the modulus is not prime")]
    InvariantViolation { m: u32 },
    #[error("no point on the curve has x = {x}")]
    NotOnCurve { x: Integer },
    #[error("point ({x}, {y}) does not satisfy the curve equation")]
    VerificationFailed { x: Integer, y: Integer },
    #[error("unknown curve {0:?}")]
    UnknownCurve(String),
    #[error("cannot parse {0:?} as an integer")]
    Parse(String),
}
