use crate::models::Song;

/// Set ordering utilities
pub struct SetOrdering;

impl SetOrdering {
    /// Re-order a set so openers precede others precede closers. The sort
    /// is stable: ties keep the order the trimmer produced.
    pub fn sort_by_position(set: &mut [Song]) {
        set.sort_by_key(|song| song.position.sort_priority());
    }
}
