use log::debug;
use rug::Integer;

// Quadratic character of an integer modulo an odd prime, named after the value Euler's criterion
// produces for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadratic {
    NonResidue = -1,
    Zero = 0,
    NonZeroResidue = 1,
}

// a^b mod n in [0, n). a may be negative or larger than n, b must not be negative.
pub fn mod_exp(a: &Integer, b: &Integer, n: &Integer) -> Integer {
    debug_assert!(*b >= 0);

    // pow_mod only fails for a negative exponent without inverse.
    a.clone().modulo(n).pow_mod(b, n).unwrap()
}

// a^((p - 1) / 2) mod p. For prime p this is 0, 1 or p - 1.
pub fn euler_criterion(a: &Integer, p: &Integer) -> Integer {
    let e = Integer::from(p - 1u32) >> 1;
    mod_exp(a, &e, p)
}

pub fn legendre(a: &Integer, p: &Integer) -> Quadratic {
    match a.legendre(p) {
        0 => Quadratic::Zero,
        1 => Quadratic::NonZeroResidue,
        _ => Quadratic::NonResidue,
    }
}

// Returns whether n is a square modulo the odd prime p. Multiples of p count as residues, callers
// which need nonzero residues have to check for zero themselves.
pub fn is_quadratic_residue(n: &Integer, p: &Integer) -> bool {
    let n = n.clone().modulo(p);
    if n == 0 {
        return true;
    }

    let is_residue = euler_criterion(&n, p) == 1;
    debug!(
        "{} is a quadratic {} mod {}",
        n,
        if is_residue { "residue" } else { "non-residue" },
        p
    );
    is_residue
}
