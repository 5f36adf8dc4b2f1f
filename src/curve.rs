use std::{fmt, thread};

use log::{debug, info};
use rug::Integer;

use crate::{mod_sqrt::mod_sqrt, nt, Error};

// (name, p, a, b), hexadecimal. The first entry is the default curve of the command line driver.
pub const PRESETS: [(&str, &str, &str, &str); 3] = [
    (
        "P-224",
        "ffffffffffffffffffffffffffffffff000000000000000000000001",
        "-3",
        "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    ),
    (
        "P-256",
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        "-3",
        "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    ),
    (
        "secp256k1",
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        "0",
        "7",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffinePoint {
    pub x: Integer,
    pub y: Integer,
}

impl AffinePoint {
    // The other point with the same x coordinate.
    pub fn negate(&self, p: &Integer) -> AffinePoint {
        AffinePoint {
            x: self.x.clone(),
            y: Integer::from(p - &self.y).modulo(p),
        }
    }
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// A short Weierstrass curve y^2 = x^3 + a x + b over the prime field of order p.
#[derive(Debug, Clone)]
pub struct CurveParams {
    name: String,
    p: Integer,
    a: Integer,
    b: Integer,
}

impl CurveParams {
    pub fn new(name: &str, p: Integer, a: Integer, b: Integer) -> Result<CurveParams, Error> {
        nt::check_prime_modulus(&p)?;
        let a = a.modulo(&p);
        let b = b.modulo(&p);
        Ok(CurveParams {
            name: name.to_string(),
            p,
            a,
            b,
        })
    }

    pub fn named(name: &str) -> Result<CurveParams, Error> {
        let (name, p, a, b) = PRESETS
            .iter()
            .find(|(preset, ..)| preset.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownCurve(name.to_string()))?;

        CurveParams::new(name, parse_hex(p)?, parse_hex(a)?, parse_hex(b)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn p(&self) -> &Integer {
        &self.p
    }

    pub fn a(&self) -> &Integer {
        &self.a
    }

    pub fn b(&self) -> &Integer {
        &self.b
    }

    // x^3 + a x + b mod p
    pub fn rhs(&self, x: &Integer) -> Integer {
        let mut y_squared = Integer::from(x.square_ref()) + &self.a;
        y_squared *= x;
        y_squared += &self.b;
        y_squared.modulo(&self.p)
    }

    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        let lhs = Integer::from(point.y.square_ref()).modulo(&self.p);
        lhs == self.rhs(&point.x)
    }

    // Recovers a point with the given x coordinate, if there is one. Which of the two candidate y
    // values is returned is unspecified; use AffinePoint::negate for the other one.
    pub fn decompress(&self, x: &Integer) -> Result<AffinePoint, Error> {
        let x = x.clone().modulo(&self.p);
        let n = self.rhs(&x);
        debug!("{}: x^3 + a x + b = {}", self.name, n);

        let y = mod_sqrt(&n, &self.p)?.ok_or_else(|| Error::NotOnCurve { x: x.clone() })?;
        let point = AffinePoint { x, y };

        if !self.is_on_curve(&point) {
            return Err(Error::VerificationFailed {
                x: point.x,
                y: point.y,
            });
        }
        info!("{}: verified point {}", self.name, point);
        Ok(point)
    }

    // Every decompression is independent, so the inputs are split evenly among scoped threads.
    pub fn decompress_batch(&self, xs: &[Integer]) -> Vec<Result<AffinePoint, Error>> {
        if xs.is_empty() {
            return vec![];
        }

        let num_threads = thread::available_parallelism().map_or(1, |n| n.get());
        let chunk_size = (xs.len() + num_threads - 1) / num_threads;

        thread::scope(|s| {
            let handles: Vec<_> = xs
                .chunks(chunk_size)
                .map(|chunk| {
                    s.spawn(move || chunk.iter().map(|x| self.decompress(x)).collect::<Vec<_>>())
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(points) => points,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }
}

fn parse_hex(s: &str) -> Result<Integer, Error> {
    Integer::from_str_radix(s, 16).map_err(|_| Error::Parse(s.to_string()))
}
