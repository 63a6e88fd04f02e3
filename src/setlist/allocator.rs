use super::sampler::RandomSampler;
use crate::models::{Position, Song};
use rand::Rng;

/// One position category's share-out across the output sets: an equal
/// floor-division share per bucket, plus whatever could not be divided.
pub struct CategoryAllocation {
    pub buckets: Vec<Vec<Song>>,
    pub extra_songs: Vec<Song>,
}

/// Builds the position-balanced draft sets that the trimmer later cuts
/// down to length. The whole filtered pool is assigned here: every song
/// lands in exactly one draft set, either through its category's fair
/// share or through leftover redistribution.
pub struct SetComposer;

impl SetComposer {
    /// Distribute one category's songs across `set_count` buckets.
    ///
    /// Each bucket gets `floor(pool / set_count)` songs, drawn randomly in
    /// bucket index order so every draw shrinks the pool for later
    /// buckets. The undrawn remainder comes back as `extra_songs`.
    ///
    /// Precondition: `set_count >= 1` (validated at the generator boundary).
    pub fn allocate_category<R: Rng>(
        rng: &mut R,
        mut pool: Vec<Song>,
        set_count: usize,
    ) -> CategoryAllocation {
        let per_set = pool.len() / set_count;
        let mut buckets = Vec::with_capacity(set_count);
        for _ in 0..set_count {
            let (drawn, remaining) = RandomSampler::sample_up_to(rng, pool, per_set);
            buckets.push(drawn);
            pool = remaining;
        }
        CategoryAllocation {
            buckets,
            extra_songs: pool,
        }
    }

    /// Compose `set_count` draft sets from the filtered pool: allocate the
    /// opener, other, and closer categories separately, concatenate each
    /// bucket opener -> other -> closer, then round-robin the categories'
    /// leftovers so nothing is dropped.
    pub fn compose_draft_sets<R: Rng>(
        rng: &mut R,
        songs: Vec<Song>,
        set_count: usize,
    ) -> Vec<Vec<Song>> {
        let mut openers = Vec::new();
        let mut others = Vec::new();
        let mut closers = Vec::new();
        for song in songs {
            match song.position {
                Position::Opener => openers.push(song),
                Position::Other => others.push(song),
                Position::Closer => closers.push(song),
            }
        }

        let opener_alloc = Self::allocate_category(rng, openers, set_count);
        let other_alloc = Self::allocate_category(rng, others, set_count);
        let closer_alloc = Self::allocate_category(rng, closers, set_count);

        let mut drafts: Vec<Vec<Song>> = Vec::with_capacity(set_count);
        let buckets = opener_alloc
            .buckets
            .into_iter()
            .zip(other_alloc.buckets)
            .zip(closer_alloc.buckets);
        for ((opener_draw, other_draw), closer_draw) in buckets {
            let mut draft = opener_draw;
            draft.extend(other_draw);
            draft.extend(closer_draw);
            drafts.push(draft);
        }

        // Leftover pool order: opener extras, then closer extras, then
        // other extras.
        let mut leftovers = opener_alloc.extra_songs;
        leftovers.extend(closer_alloc.extra_songs);
        leftovers.extend(other_alloc.extra_songs);
        Self::redistribute_leftovers(&mut drafts, leftovers);

        drafts
    }

    /// Round-robin the leftover songs across the draft sets, popping from
    /// the end of the pool and cycling bucket indices from 0, until the
    /// pool is empty. Buckets end up differing by at most one extra song.
    pub fn redistribute_leftovers(sets: &mut [Vec<Song>], mut leftovers: Vec<Song>) {
        if sets.is_empty() {
            return;
        }
        let mut index = 0;
        while let Some(song) = leftovers.pop() {
            sets[index].push(song);
            index = (index + 1) % sets.len();
        }
    }
}
