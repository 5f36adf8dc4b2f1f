use log::debug;
use rug::Integer;

use crate::{
    mod_arithmetic::{is_quadratic_residue, mod_exp},
    nt, Error,
};

// Writes x = 2^s * q with q odd. x must be positive.
pub fn factor_two_power(x: &Integer) -> (Integer, u32) {
    debug_assert!(*x > 0);

    let mut q = x.clone();
    let mut s = 0;
    while q.is_even() {
        q >>= 1;
        s += 1;
    }
    (q, s)
}

// Least z >= 2 which is not a square mod p. For prime p half of all nonzero classes are
// non-residues. For composite p the least prime factor q of p fails Euler's criterion, since
// q^((p - 1) / 2) is divisible by q, so the search always stops below p.
pub fn find_non_residue(p: &Integer) -> Integer {
    let mut z = Integer::from(2);
    while is_quadratic_residue(&z, p) {
        z += 1;
    }
    z
}

// Least i with t^(2^i) = 1 mod p. For prime p and a residue n, i < m always holds.
fn order_exponent(t: &Integer, m: u32, p: &Integer) -> Result<u32, Error> {
    let mut i = 0;
    let mut temp = t.clone();
    while temp != 1 {
        i += 1;
        if i >= m {
            return Err(Error::InvariantViolation { m });
        }
        temp.square_mut();
        temp %= p;
    }
    Ok(i)
}

// Finds a square root of n modulo the odd prime p. Note the argument order: the residue comes
// first, the modulus second.
//
// Returns Ok(None) if n is a quadratic non-residue, which is an ordinary outcome and not an error.
// A root of zero is Ok(Some(0)). Primality of p is not checked (see mod_sqrt_checked); a composite
// modulus can make the computation fail with Error::InvariantViolation instead of looping forever.
pub fn mod_sqrt(n: &Integer, p: &Integer) -> Result<Option<Integer>, Error> {
    nt::check_odd_modulus(p)?;

    let n = n.clone().modulo(p);
    if n == 0 {
        return Ok(Some(n));
    }

    if !is_quadratic_residue(&n, p) {
        return Ok(None);
    }

    if p.mod_u(4) == 3 {
        let e = Integer::from(p + 1u32) >> 2;
        return Ok(Some(mod_exp(&n, &e, p)));
    }

    tonelli_shanks(&n, p).map(Some)
}

// Like mod_sqrt, but rejects a composite modulus with Error::InvalidModulus first.
pub fn mod_sqrt_checked(n: &Integer, p: &Integer) -> Result<Option<Integer>, Error> {
    nt::check_prime_modulus(p)?;
    mod_sqrt(n, p)
}

// General case p = 1 mod 4, n a nonzero residue in [0, p).
//
// Loop invariant: r^2 = t * n, c^(2^(m - 1)) = -1 and t^(2^(m - 1)) = 1. Every iteration strictly
// decreases m, and once t = 1, r is the root.
fn tonelli_shanks(n: &Integer, p: &Integer) -> Result<Integer, Error> {
    let (q, s) = factor_two_power(&Integer::from(p - 1u32));
    debug!("p - 1 = 2^{} * {}", s, q);

    let z = find_non_residue(p);
    debug!("z = {}", z);

    let mut m = s;
    let mut c = mod_exp(&z, &q, p);
    let mut t = mod_exp(n, &q, p);
    let mut r = mod_exp(n, &(Integer::from(&q + 1u32) >> 1), p);
    debug!("m = {}, c = {}, t = {}, r = {}", m, c, t, r);

    while t != 1 {
        let i = order_exponent(&t, m, p)?;

        // b = c^(2^(m - i - 1))
        let mut b = c;
        for _ in 0..m - i - 1 {
            b.square_mut();
            b %= p;
        }

        m = i;
        c = Integer::from(b.square_ref()) % p;
        t *= &c;
        t %= p;
        r *= &b;
        r %= p;
        debug!("i = {}, b = {}, c = {}, t = {}, r = {}", i, b, c, t, r);
    }

    Ok(r)
}
