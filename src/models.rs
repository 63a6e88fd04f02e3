use serde::{Deserialize, Serialize};

/// A song's declared role/preference for set placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Opener,
    #[default]
    Other,
    Closer,
}

impl Position {
    /// Fixed sort priority: openers first, closers last.
    pub fn sort_priority(&self) -> u8 {
        match self {
            Position::Opener => 0,
            Position::Other => 1,
            Position::Closer => 2,
        }
    }
}

/// A song's auto-generation inclusion preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// Prefer inclusion. Serialized as `include`; `star` accepted as an alias.
    #[serde(alias = "star")]
    Include,
    Exclude,
    #[default]
    NoPreference,
}

/// A song in a band's pool, as exported by the surrounding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    /// Length in whole minutes.
    pub length: u32,
    /// Tempo rating 1 (slow) to 5 (fast), when the band has rated it.
    pub tempo: Option<u8>,
    #[serde(rename = "isCover", default)]
    pub is_cover: bool,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub rank: Rank,
}

impl Song {
    /// Load a band's full song pool from a JSON array file.
    pub fn load_all_from_file(path: &str) -> Result<Vec<Song>, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let songs: Vec<Song> = serde_json::from_str(&content)?;
        Ok(songs)
    }
}

/// Boolean toggles that narrow the candidate pool before generation.
/// Intended to be mutually exclusive; precedence is noCovers, then
/// onlyCovers, then noBallads (first active filter wins).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetlistFilters {
    #[serde(rename = "noCovers", default)]
    pub no_covers: bool,
    #[serde(rename = "onlyCovers", default)]
    pub only_covers: bool,
    #[serde(rename = "noBallads", default)]
    pub no_ballads: bool,
}

/// A generation request, typically parsed from a web form or CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetlistSettings {
    #[serde(default)]
    pub filters: SetlistFilters,
    #[serde(rename = "setCount")]
    pub set_count: usize,
    /// Target length per set, in minutes.
    #[serde(rename = "setLength")]
    pub set_length: u32,
}

/// The finished output of one generation run: `set_count` ordered sets,
/// addressed by index. Immutable once returned; the caller persists it.
#[derive(Debug)]
pub struct GeneratedSetlist {
    pub name: String,
    pub sets: Vec<Vec<Song>>,
}

impl GeneratedSetlist {
    /// Total length of one set, in minutes.
    pub fn set_length(&self, index: usize) -> u32 {
        self.sets[index].iter().map(|s| s.length).sum()
    }

    /// The set-key -> ordered song-id mapping handed to the persistence
    /// layer (keys are the stringified set indices "0".."setCount-1").
    pub fn song_id_map(&self) -> Vec<(String, Vec<String>)> {
        self.sets
            .iter()
            .enumerate()
            .map(|(i, set)| (i.to_string(), set.iter().map(|s| s.id.clone()).collect()))
            .collect()
    }
}
