use crate::models::Song;
use rand::Rng;

/// Random sampling primitives. Both functions take ownership of the pool
/// and return new disjoint collections, so callers stay purely functional
/// and downstream draws never see a song twice.
pub struct RandomSampler;

impl RandomSampler {
    /// Draw one uniformly random song from a non-empty pool.
    ///
    /// Returns the picked song and the remaining pool with the picked
    /// element removed and the rest in their original order.
    ///
    /// Precondition: `pool` is non-empty. Callers must guard length first;
    /// an empty pool panics on the index draw.
    pub fn pick_one<R: Rng>(rng: &mut R, mut pool: Vec<Song>) -> (Song, Vec<Song>) {
        let index = rng.gen_range(0..pool.len());
        let picked = pool.remove(index);
        (picked, pool)
    }

    /// Draw up to `count` songs without replacement, stopping early if the
    /// pool runs out. Returns (drawn, remaining); `drawn.len()` is
    /// `min(count, pool.len())`.
    pub fn sample_up_to<R: Rng>(
        rng: &mut R,
        mut pool: Vec<Song>,
        count: usize,
    ) -> (Vec<Song>, Vec<Song>) {
        let mut drawn = Vec::with_capacity(count.min(pool.len()));
        while drawn.len() < count && !pool.is_empty() {
            let (picked, remaining) = Self::pick_one(rng, pool);
            drawn.push(picked);
            pool = remaining;
        }
        (drawn, pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, Rank};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(n: usize) -> Vec<Song> {
        (0..n)
            .map(|i| Song {
                id: i.to_string(),
                title: format!("Song {i}"),
                length: 4,
                tempo: Some(3),
                is_cover: false,
                position: Position::Other,
                rank: Rank::NoPreference,
            })
            .collect()
    }

    #[test]
    fn test_pick_one_removes_exactly_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let (picked, remaining) = RandomSampler::pick_one(&mut rng, pool(5));
        assert_eq!(remaining.len(), 4);
        assert!(!remaining.iter().any(|s| s.id == picked.id));
    }

    #[test]
    fn test_pick_one_preserves_remaining_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let (picked, remaining) = RandomSampler::pick_one(&mut rng, pool(6));
        let expected: Vec<String> = (0..6)
            .map(|i| i.to_string())
            .filter(|id| *id != picked.id)
            .collect();
        let actual: Vec<String> = remaining.iter().map(|s| s.id.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_sample_up_to_draws_requested_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let (drawn, remaining) = RandomSampler::sample_up_to(&mut rng, pool(10), 4);
        assert_eq!(drawn.len(), 4);
        assert_eq!(remaining.len(), 6);
    }

    #[test]
    fn test_sample_up_to_stops_at_exhaustion() {
        let mut rng = StdRng::seed_from_u64(42);
        let (drawn, remaining) = RandomSampler::sample_up_to(&mut rng, pool(3), 10);
        assert_eq!(drawn.len(), 3);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_sample_up_to_zero_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(42);
        let (drawn, remaining) = RandomSampler::sample_up_to(&mut rng, pool(3), 0);
        assert!(drawn.is_empty());
        assert_eq!(remaining.len(), 3);
    }

    #[test]
    fn test_drawn_and_remaining_are_disjoint() {
        let mut rng = StdRng::seed_from_u64(99);
        let (drawn, remaining) = RandomSampler::sample_up_to(&mut rng, pool(8), 5);
        for song in &drawn {
            assert!(!remaining.iter().any(|s| s.id == song.id));
        }
    }
}
