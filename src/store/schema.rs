use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::entry::IdiomEntry;

const SCHEMA_VERSION: u32 = 1;

/// The cached idiom set for one calendar day. This is the only study
/// state the app persists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DailyIdiomsData {
    pub schema_version: u32,
    /// UTC calendar date (`YYYY-MM-DD`) the set was drawn for.
    pub date: String,
    pub generated_at: DateTime<Utc>,
    pub idioms: Vec<IdiomEntry>,
}

impl Default for DailyIdiomsData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            date: String::new(),
            generated_at: Utc::now(),
            idioms: Vec::new(),
        }
    }
}

impl DailyIdiomsData {
    pub fn fresh(date: &str, idioms: Vec<IdiomEntry>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            date: date.to_string(),
            generated_at: Utc::now(),
            idioms,
        }
    }

    /// Check if loaded data has a stale schema version and needs reset.
    /// A reset just means today's set gets drawn again.
    pub fn needs_reset(&self) -> bool {
        self.schema_version != SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_an_empty_current_cache() {
        let data = DailyIdiomsData::default();
        assert!(!data.needs_reset());
        assert!(data.date.is_empty());
        assert!(data.idioms.is_empty());
    }

    #[test]
    fn stale_version_needs_reset() {
        let mut data = DailyIdiomsData::default();
        data.schema_version = 0;
        assert!(data.needs_reset());
    }
}
