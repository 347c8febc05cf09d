use chrono::Utc;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::content::entry::IdiomEntry;
use crate::store::json_store::JsonStore;
use crate::store::schema::DailyIdiomsData;

/// Idioms shown per day.
pub const DAILY_COUNT: usize = 5;

/// Calendar date the cache is keyed on.
pub fn today_stamp() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Draw a fresh daily set: `DAILY_COUNT` distinct picks, or the whole
/// list when it is shorter than that.
pub fn draw_daily(all: &[IdiomEntry], rng: &mut impl Rng) -> Vec<IdiomEntry> {
    all.choose_multiple(rng, DAILY_COUNT).cloned().collect()
}

/// The idiom set for `today`: reuse the cached set when its date matches,
/// otherwise draw and cache a new one. `force` redraws even when the
/// cache is fresh. Store failures degrade to drawing without caching.
pub fn open_daily(
    store: Option<&JsonStore>,
    all: &[IdiomEntry],
    today: &str,
    force: bool,
    rng: &mut impl Rng,
) -> Vec<IdiomEntry> {
    let Some(store) = store else {
        return draw_daily(all, rng);
    };

    if !force {
        let cached = store.load_daily();
        if cached.date == today && !cached.idioms.is_empty() {
            return cached.idioms;
        }
    }

    let idioms = draw_daily(all, rng);
    let _ = store.save_daily(&DailyIdiomsData::fresh(today, idioms.clone()));
    idioms
}
