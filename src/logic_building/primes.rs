//! Primality, factorisation, divisors and the sieve of Eratosthenes.

/// Trial division over candidates of the form `6k ± 1`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u64;
    while i.saturating_mul(i) <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Prime factors with multiplicity, in ascending order.
pub fn prime_factors(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }
    let mut n = n;
    for p in [2u64, 3] {
        while n % p == 0 {
            factors.push(p);
            n /= p;
        }
    }
    let mut i = 5u64;
    while i.saturating_mul(i) <= n {
        for p in [i, i + 2] {
            while n % p == 0 {
                factors.push(p);
                n /= p;
            }
        }
        i += 6;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// All positive divisors in ascending order, found in O(sqrt n).
pub fn divisors(n: u64) -> Vec<u64> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut i = 1u64;
    while i.saturating_mul(i) <= n {
        if n % i == 0 {
            small.push(i);
            if i != n / i {
                large.push(n / i);
            }
        }
        i += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

/// Primes `<= n` using the sieve of Eratosthenes, starting each crossing-out
/// pass at `p * p`.
pub fn sieve(n: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }
    tracing::trace!(n, "building sieve");
    let mut composite = vec![false; n + 1];
    let mut primes = Vec::new();
    for p in 2..=n {
        if composite[p] {
            continue;
        }
        primes.push(p);
        let mut multiple = p * p;
        while multiple <= n {
            composite[multiple] = true;
            multiple += p;
        }
    }
    primes
}
