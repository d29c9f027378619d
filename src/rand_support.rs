use rand::RngCore;

use crate::IndexSource;

#[derive(Debug)]
/// Adapts any `rand` generator into an [`IndexSource`].
///
/// # Example
/// ```
/// # use rand::{rngs::StdRng, SeedableRng};
/// # use wordrec::{IndexSource, RandSource};
/// let mut source = RandSource(StdRng::seed_from_u64(7));
/// assert!(source.next_index(10) < 10);
/// ```
pub struct RandSource<R>(pub R);

impl<R> IndexSource for RandSource<R>
where
    R: RngCore,
{
    fn next_index(&mut self, len: usize) -> usize {
        use rand::Rng as _;
        self.0.gen_range(0..len)
    }
}
