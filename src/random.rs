//! Seeded random streams.
//!
//! Every stochastic step of the search takes an explicit `&mut R: Rng`, so a
//! run is fully determined by the seed handed to [`create_rng`].

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible random stream from a seed.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use cvrp_alns::random::create_rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Resolves an optional seed, drawing one from entropy when absent.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}
