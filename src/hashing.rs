//! Polynomial string hashing and the double-hashing probe sequence.
//!
//! A key is hashed twice with the same polynomial scheme but different
//! bases. The first hash picks the starting slot, the second (plus one)
//! picks the step between successive probes.

/// Base of the primary hash. Prime, larger than the byte alphabet.
pub const PRIME_PRIMARY: u64 = 151;
/// Base of the secondary hash. Prime, distinct from `PRIME_PRIMARY`.
pub const PRIME_SECONDARY: u64 = 193;

/// Evaluates the bytes of `s` as digits of a base-`a` polynomial modulo `m`.
///
/// Reduction happens after every byte, so the result equals
/// `sum(a^(n-1-i) * s[i]) mod m` for inputs of any length. Returns a value
/// in `[0, m)`; `m` must be non-zero.
pub fn generic_hash(s: &str, a: u64, m: usize) -> usize {
    debug_assert!(m > 0, "bucket count must be non-zero");
    let m = m as u128;
    let a = a as u128;
    let h = s
        .bytes()
        .fold(0u128, |h, b| (h * a + b as u128) % m);
    h as usize
}

/// Index probed for `s` on the given `attempt` in a table of `m` slots.
///
/// `(h1 + attempt * (h2 + 1)) mod m` with the default primes.
pub fn combined_hash(s: &str, m: usize, attempt: usize) -> usize {
    let h1 = generic_hash(s, PRIME_PRIMARY, m);
    let h2 = generic_hash(s, PRIME_SECONDARY, m);
    probe_index(h1, h2, m, attempt)
}

#[inline]
fn probe_index(h1: usize, h2: usize, m: usize, attempt: usize) -> usize {
    let m = m as u128;
    let step = h2 as u128 + 1;
    ((h1 as u128 + attempt as u128 * step) % m) as usize
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Produces the `(primary, secondary)` hash pair a table probes with.
///
/// Both results must lie in `[0, buckets)`.
pub trait KeyHasher {
    fn hash_pair(&self, key: &str, buckets: usize) -> (usize, usize);
}

/// Two polynomial hashes over distinct prime bases.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Polynomial {
    pub primary: u64,
    pub secondary: u64,
}

impl Default for Polynomial {
    fn default() -> Self {
        Self {
            primary: PRIME_PRIMARY,
            secondary: PRIME_SECONDARY,
        }
    }
}

impl KeyHasher for Polynomial {
    #[inline]
    fn hash_pair(&self, key: &str, buckets: usize) -> (usize, usize) {
        (
            generic_hash(key, self.primary, buckets),
            generic_hash(key, self.secondary, buckets),
        )
    }
}

/// Slot indices visited for one key, in attempt order.
///
/// Yields `(attempt, index)`. The sequence repeats with period
/// `m / gcd(step mod m, m)`; iteration ends after one period, so every
/// reachable slot is produced exactly once and never more than `m` times
/// in total. When `h2 == m - 1` the step is 0 mod m and the period is 1,
/// whether or not `m` is prime.
#[derive(Clone, Debug)]
pub struct ProbeSequence {
    h1: usize,
    h2: usize,
    buckets: usize,
    attempt: usize,
    period: usize,
}

impl ProbeSequence {
    pub fn new(h1: usize, h2: usize, buckets: usize) -> Self {
        debug_assert!(buckets > 0);
        let step = (h2 % buckets + 1) % buckets;
        let period = buckets / gcd(step, buckets);
        Self {
            h1,
            h2,
            buckets,
            attempt: 0,
            period,
        }
    }

    pub fn for_key<H: KeyHasher + ?Sized>(hasher: &H, key: &str, buckets: usize) -> Self {
        let (h1, h2) = hasher.hash_pair(key, buckets);
        Self::new(h1, h2, buckets)
    }

    /// Number of distinct slots this sequence reaches.
    pub fn period(&self) -> usize {
        self.period
    }
}

impl Iterator for ProbeSequence {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.attempt >= self.period {
            return None;
        }
        let attempt = self.attempt;
        self.attempt += 1;
        Some((attempt, probe_index(self.h1, self.h2, self.buckets, attempt)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.period - self.attempt;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ProbeSequence {}
