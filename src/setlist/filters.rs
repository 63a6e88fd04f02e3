use crate::models::{Rank, SetlistFilters, Song};

/// Song filtering functionality using static helper functions
pub struct SongFilters;

impl SongFilters {
    /// Check if a song passes the ballad filter (tempo rated above 1).
    /// Songs with no tempo rating fail the check and are excluded.
    pub fn is_not_ballad(song: &Song) -> bool {
        song.tempo.is_some_and(|t| t > 1)
    }

    /// Check if a song is eligible under the default (no explicit filter)
    /// path: everything except songs the author marked `exclude`.
    pub fn is_not_excluded(song: &Song) -> bool {
        song.rank != Rank::Exclude
    }

    /// Reduce a song pool to the eligible candidates for one generation run.
    ///
    /// Exactly one branch applies, first active filter wins:
    /// noCovers, then onlyCovers, then noBallads, then the default
    /// rank-based exclusion. An active explicit filter therefore overrides
    /// a song's individual `exclude` rank; that precedence is intentional
    /// to preserve and is pinned by a regression test.
    pub fn apply(songs: Vec<Song>, filters: &SetlistFilters) -> Vec<Song> {
        if filters.no_covers {
            songs.into_iter().filter(|s| !s.is_cover).collect()
        } else if filters.only_covers {
            songs.into_iter().filter(|s| s.is_cover).collect()
        } else if filters.no_ballads {
            songs.into_iter().filter(Self::is_not_ballad).collect()
        } else {
            songs.into_iter().filter(Self::is_not_excluded).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn song(id: &str, is_cover: bool, tempo: Option<u8>, rank: Rank) -> Song {
        Song {
            id: id.to_string(),
            title: format!("Song {id}"),
            length: 4,
            tempo,
            is_cover,
            position: Position::Other,
            rank,
        }
    }

    #[test]
    fn test_no_covers_keeps_only_originals() {
        let pool = vec![
            song("1", true, Some(3), Rank::NoPreference),
            song("2", false, Some(3), Rank::NoPreference),
        ];
        let filters = SetlistFilters {
            no_covers: true,
            ..Default::default()
        };
        let result = SongFilters::apply(pool, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_only_covers_keeps_only_covers() {
        let pool = vec![
            song("1", true, Some(3), Rank::NoPreference),
            song("2", false, Some(3), Rank::NoPreference),
        ];
        let filters = SetlistFilters {
            only_covers: true,
            ..Default::default()
        };
        let result = SongFilters::apply(pool, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn test_no_ballads_excludes_unrated_tempo() {
        let pool = vec![
            song("slow", false, Some(1), Rank::NoPreference),
            song("unrated", false, None, Rank::NoPreference),
            song("fast", false, Some(4), Rank::NoPreference),
        ];
        let filters = SetlistFilters {
            no_ballads: true,
            ..Default::default()
        };
        let result = SongFilters::apply(pool, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "fast");
    }

    #[test]
    fn test_default_branch_drops_excluded_rank() {
        let pool = vec![
            song("in", false, Some(3), Rank::Include),
            song("out", false, Some(3), Rank::Exclude),
            song("neutral", false, Some(3), Rank::NoPreference),
        ];
        let result = SongFilters::apply(pool, &SetlistFilters::default());
        let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["in", "neutral"]);
    }

    // Regression: an active explicit filter takes precedence over a song's
    // individual exclude rank, so an excluded cover still comes through
    // when onlyCovers is set.
    #[test]
    fn test_explicit_filter_overrides_exclude_rank() {
        let pool = vec![
            song("excluded-cover", true, Some(3), Rank::Exclude),
            song("original", false, Some(3), Rank::NoPreference),
        ];
        let filters = SetlistFilters {
            only_covers: true,
            ..Default::default()
        };
        let result = SongFilters::apply(pool, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "excluded-cover");
    }

    #[test]
    fn test_first_active_filter_wins() {
        // noCovers and noBallads both set: only the cover check applies,
        // so the slow original survives.
        let pool = vec![
            song("slow-original", false, Some(1), Rank::NoPreference),
            song("fast-cover", true, Some(5), Rank::NoPreference),
        ];
        let filters = SetlistFilters {
            no_covers: true,
            no_ballads: true,
            ..Default::default()
        };
        let result = SongFilters::apply(pool, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "slow-original");
    }

    #[test]
    fn test_empty_pool_is_valid() {
        let result = SongFilters::apply(Vec::new(), &SetlistFilters::default());
        assert!(result.is_empty());
    }
}
