use anyhow::{Result, bail};
use rand::Rng;

use super::allocator::SetComposer;
use super::filters::SongFilters;
use super::ordering::SetOrdering;
use super::trimmer::DurationTrimmer;
use crate::models::{GeneratedSetlist, SetlistSettings, Song};

/// Main setlist generator
pub struct SetlistGenerator {
    settings: SetlistSettings,
}

impl SetlistGenerator {
    pub fn new(settings: SetlistSettings) -> Self {
        Self { settings }
    }

    /// Generate a full setlist from a band's song pool.
    ///
    /// Pure up to the injected random source: filter the pool, apportion
    /// every surviving song into position-balanced draft sets, trim each
    /// draft independently to the target length, and order each finished
    /// set opener-first, closer-last.
    ///
    /// Fails fast on a degenerate request (`set_count` or `set_length`
    /// below 1); scarcity is never an error and just yields shorter sets.
    pub fn generate<R: Rng>(
        &self,
        songs: Vec<Song>,
        name: Option<String>,
        rng: &mut R,
    ) -> Result<GeneratedSetlist> {
        if self.settings.set_count < 1 {
            bail!(
                "invalid setlist settings: setCount must be at least 1, got {}",
                self.settings.set_count
            );
        }
        if self.settings.set_length < 1 {
            bail!(
                "invalid setlist settings: setLength must be at least 1 minute, got {}",
                self.settings.set_length
            );
        }

        let candidates = SongFilters::apply(songs, &self.settings.filters);

        let drafts = SetComposer::compose_draft_sets(rng, candidates, self.settings.set_count);

        let sets: Vec<Vec<Song>> = drafts
            .into_iter()
            .map(|draft| {
                let mut set =
                    DurationTrimmer::trim_to_length(rng, draft, self.settings.set_length);
                SetOrdering::sort_by_position(&mut set);
                set
            })
            .collect();

        Ok(GeneratedSetlist {
            name: name.unwrap_or_else(|| "Setlist".to_string()),
            sets,
        })
    }
}
