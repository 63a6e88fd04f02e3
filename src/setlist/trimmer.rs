use super::sampler::RandomSampler;
use crate::models::{Position, Song};
use rand::Rng;

/// Cuts one draft set down to its target duration. Greedy and randomized,
/// not optimal packing: categories are drained in closer, opener, other
/// order so the high-impact songs are reserved before filler, and the
/// total may overshoot the target by at most the last song drawn.
pub struct DurationTrimmer;

impl DurationTrimmer {
    /// Trim a draft set's songs to the smallest random selection whose
    /// lengths sum to at least `set_length` minutes, or the whole draft if
    /// it falls short. Songs not picked are discarded.
    pub fn trim_to_length<R: Rng>(rng: &mut R, draft: Vec<Song>, set_length: u32) -> Vec<Song> {
        let mut openers = Vec::new();
        let mut others = Vec::new();
        let mut closers = Vec::new();
        for song in draft {
            match song.position {
                Position::Opener => openers.push(song),
                Position::Other => others.push(song),
                Position::Closer => closers.push(song),
            }
        }

        let mut picked = Vec::new();
        let mut total = 0u32;
        for pool in [closers, openers, others] {
            Self::drain_category(rng, pool, set_length, &mut picked, &mut total);
        }
        picked
    }

    /// Randomly draw from one category while the global running total is
    /// still short of the target and the category has songs left.
    fn drain_category<R: Rng>(
        rng: &mut R,
        mut pool: Vec<Song>,
        set_length: u32,
        picked: &mut Vec<Song>,
        total: &mut u32,
    ) {
        while *total < set_length && !pool.is_empty() {
            let (song, remaining) = RandomSampler::pick_one(rng, pool);
            *total += song.length;
            picked.push(song);
            pool = remaining;
        }
    }
}
