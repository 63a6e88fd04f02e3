use chrono::Local;

/// Setlist naming utilities
pub struct SetlistNaming;

impl SetlistNaming {
    /// Default name for a generated setlist, stamped with the day it was
    /// generated, e.g. "Setlist Friday 2026-08-28".
    pub fn default_name() -> String {
        format!("Setlist {}", Local::now().format("%A %Y-%m-%d"))
    }
}
