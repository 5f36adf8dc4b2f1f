use rug::{integer::IsPrime, Integer};

use crate::Error;

const MILLER_RABIN_ITERATIONS: u32 = 30;

// Cheap precondition of every square root computation. Primality is not checked here.
pub fn check_odd_modulus(p: &Integer) -> Result<(), Error> {
    if *p < 3 || p.is_even() {
        return Err(Error::InvalidModulus(p.clone()));
    }
    Ok(())
}

pub fn check_prime_modulus(p: &Integer) -> Result<(), Error> {
    check_odd_modulus(p)?;
    if p.is_probably_prime(MILLER_RABIN_ITERATIONS) == IsPrime::No {
        return Err(Error::InvalidModulus(p.clone()));
    }
    Ok(())
}

// Sieve of Eratosthenes. 2 is sieved but not returned.
pub fn odd_primes_below(limit: usize) -> Vec<u32> {
    let mut is_prime: Vec<bool> = vec![true; limit];
    let mut primes: Vec<u32> = vec![];

    for i in 2..limit {
        if is_prime[i] {
            if i != 2 {
                primes.push(i as u32);
            }

            let mut j = i * i;
            while j < limit {
                is_prime[j] = false;
                j += i;
            }
        }
    }

    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_primes_below() {
        assert_eq!(odd_primes_below(30), vec![3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(odd_primes_below(1000).len(), 167);
        assert!(odd_primes_below(3).is_empty());
        assert_eq!(
            odd_primes_below(50),
            vec![3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
        assert!(odd_primes_below(10000)
            .iter()
            .all(|&p| Integer::from(p).is_probably_prime(MILLER_RABIN_ITERATIONS) != IsPrime::No));
    }

    #[test]
    fn test_check_modulus() {
        for p in [-7, 0, 1, 2, 4, 10] {
            assert!(check_odd_modulus(&Integer::from(p)).is_err());
        }
        assert!(check_odd_modulus(&Integer::from(9)).is_ok());
        assert_eq!(
            check_prime_modulus(&Integer::from(9)),
            Err(Error::InvalidModulus(Integer::from(9)))
        );
        assert!(check_prime_modulus(&Integer::from(13)).is_ok());
    }
}
