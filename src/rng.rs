use std::{
    cell::Cell,
    ops::{Bound, RangeBounds},
};

/// The increment used to update the state of the RNG. This value is coprime to 2^64 and
/// `INCREMENT / 2^64` is approximately `phi - 1`, where `phi` is the golden ratio, which gives a
/// low discrepancy Weyl sequence with a period of 2^64.
pub(crate) const INCREMENT: u64 = 0x9E3779B97F4A7FFF;

// These constants, like the `INCREMENT` constant, are coprime to 2^64.
const ALPHA: u128 = 0x11F9ADBB8F8DA6FFF;
const BETA: u128 = 0x1E3DF208C6781EFFF;

/// A source of uniformly distributed indices.
///
/// This is the only randomness the record generator needs. Production code uses [`Rng`]; tests
/// can plug in a [`Sequence`] to make the output reproducible.
pub trait IndexSource {
    /// Returns an index drawn uniformly from `0..len`. `len` must be greater than zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<S> IndexSource for &mut S
where
    S: IndexSource + ?Sized,
{
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

#[derive(Debug)]
/// A random number generator that can be used in single-threaded contexts without a mutable
/// reference.
///
/// The implementation is based on hashing the Weyl sequence with `wyhash`, adapted from
/// https://github.com/lemire/testingRNG/blob/master/source/wyhash.h.
pub struct Rng {
    /// The current state of the RNG.
    pub(crate) state: Cell<u64>,
}

impl Rng {
    /// Returns a random `usize` in the given range.
    ///
    /// # Example
    /// ```
    /// # use wordrec::Rng;
    /// let rng = Rng::new();
    /// let value = rng.bounded(10..20);
    /// assert!(value >= 10 && value < 20);
    /// ```
    pub fn bounded<R>(&self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let low = match range.start_bound() {
            Bound::Included(&low) => low,
            Bound::Excluded(&low) => low.saturating_add(1),
            Bound::Unbounded => 0,
        };

        assert!(
            range.contains(&low),
            "cannot generate a value from an empty range"
        );
        let width = match range.end_bound() {
            Bound::Included(&high) if high - low < usize::MAX => high - low + 1,
            Bound::Excluded(&high) => high - low,
            Bound::Unbounded if low > 0 => usize::MAX - low + 1,
            _ => return self.u64() as usize,
        };

        low + self.below(width as u64) as usize
    }

    /// Initializes a new RNG. In release builds, the state is seeded with `std::hash::RandomState`.
    /// In debug builds, the state is set to a constant to make tests reproducible.
    pub fn new() -> Self {
        let seed = {
            #[cfg(not(debug_assertions))]
            {
                use std::hash::{BuildHasher, RandomState};
                RandomState::new().hash_one("wordrec")
            }
            #[cfg(debug_assertions)]
            1234
        };
        Self::with_seed(seed)
    }

    /// Returns a new RNG whose state starts at `seed`.
    ///
    /// # Example
    /// ```
    /// # use wordrec::Rng;
    /// let (a, b) = (Rng::with_seed(1234), Rng::with_seed(1234));
    /// assert_eq!(a.u64(), b.u64());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: Cell::new(seed),
        }
    }

    /// Returns the next `u64` value from the pseudorandom sequence.
    pub fn u64(&self) -> u64 {
        let old_state = self.state.get();
        self.state.set(old_state.wrapping_add(INCREMENT));

        wyhash(old_state)
    }

    /// Returns a value in `0..width` using Lemire's multiply-shift method with rejection, so the
    /// result is unbiased.
    fn below(&self, width: u64) -> u64 {
        debug_assert!(width > 0);
        let mut m = (self.u64() as u128) * (width as u128);
        if (m as u64) < width {
            let threshold = width.wrapping_neg() % width;
            while (m as u64) < threshold {
                m = (self.u64() as u128) * (width as u128);
            }
        }
        (m >> u64::BITS) as u64
    }
}

impl Default for Rng {
    /// Returns a new instance of `Rng`.
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for Rng {
    fn next_index(&mut self, len: usize) -> usize {
        self.bounded(0..len)
    }
}

impl IndexSource for &Rng {
    fn next_index(&mut self, len: usize) -> usize {
        self.bounded(0..len)
    }
}

#[inline]
pub(crate) fn wyhash(value: u64) -> u64 {
    let mut tmp = (value as u128).wrapping_mul(ALPHA);
    tmp ^= tmp >> 64;
    tmp = tmp.wrapping_mul(BETA);
    ((tmp >> 64) ^ tmp) as _
}

#[derive(Clone, Debug, Default)]
/// An [`IndexSource`] that replays a fixed list of indices.
///
/// Each stored value is reduced modulo the requested length, and the list repeats once it runs
/// out. An empty list always yields `0`.
///
/// # Example
/// ```
/// # use wordrec::{IndexSource, Sequence};
/// let mut seq = Sequence::new([0, 1, 5]);
/// assert_eq!(seq.next_index(2), 0);
/// assert_eq!(seq.next_index(2), 1);
/// assert_eq!(seq.next_index(2), 1);
/// assert_eq!(seq.next_index(2), 0);
/// ```
pub struct Sequence {
    values: Vec<usize>,
    position: usize,
}

impl Sequence {
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            values: values.into_iter().collect(),
            position: 0,
        }
    }

    /// How many indices have been handed out so far.
    pub fn drawn(&self) -> usize {
        self.position
    }
}

impl IndexSource for Sequence {
    fn next_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot draw an index from an empty range");
        let position = self.position;
        self.position += 1;
        match self.values.len() {
            0 => 0,
            n => self.values[position % n] % len,
        }
    }
}
