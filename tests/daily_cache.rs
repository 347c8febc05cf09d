use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tempfile::TempDir;

use hanjaro::content::entry::IdiomEntry;
use hanjaro::engine::daily::{DAILY_COUNT, open_daily};
use hanjaro::store::json_store::JsonStore;
use hanjaro::store::schema::DailyIdiomsData;

fn make_store() -> (TempDir, JsonStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

fn idioms(prefix: &str, count: usize) -> Vec<IdiomEntry> {
    (0..count)
        .map(|i| IdiomEntry {
            phrase: format!("{prefix}성어{i}"),
            reading: format!("{prefix}독음{i}"),
            meaning: format!("{prefix} 뜻풀이 {i}"),
        })
        .collect()
}

fn cache_file(dir: &Path) -> std::path::PathBuf {
    dir.join("daily_idioms.json")
}

// ── Cache hits and misses ────────────────────────────────────────────────

#[test]
fn the_same_day_reuses_the_cached_set() {
    let (_dir, store) = make_store();
    let all = idioms("가", 20);

    let mut first_rng = SmallRng::seed_from_u64(1);
    let first = open_daily(Some(&store), &all, "2026-08-22", false, &mut first_rng);
    assert_eq!(first.len(), DAILY_COUNT);

    // A differently seeded rng makes no difference on a cache hit.
    let mut second_rng = SmallRng::seed_from_u64(999);
    let second = open_daily(Some(&store), &all, "2026-08-22", false, &mut second_rng);
    assert_eq!(first, second);
}

#[test]
fn a_new_day_redraws_and_overwrites_the_cache() {
    let (_dir, store) = make_store();
    let all = idioms("가", 20);

    store
        .save_daily(&DailyIdiomsData::fresh("2026-08-21", all[..5].to_vec()))
        .unwrap();

    let mut rng = SmallRng::seed_from_u64(4);
    let set = open_daily(Some(&store), &all, "2026-08-22", false, &mut rng);
    assert_eq!(set.len(), DAILY_COUNT);

    let cached = store.load_daily();
    assert_eq!(cached.date, "2026-08-22");
    assert_eq!(cached.idioms, set);
}

#[test]
fn force_redraws_even_when_the_cache_is_fresh() {
    let (_dir, store) = make_store();
    // Seed the cache from one list, then force against a disjoint one.
    let old_list = idioms("갑", 10);
    let new_list = idioms("을", 10);

    let mut rng = SmallRng::seed_from_u64(2);
    let first = open_daily(Some(&store), &old_list, "2026-08-22", false, &mut rng);
    assert!(first.iter().all(|i| i.phrase.starts_with("갑")));

    let forced = open_daily(Some(&store), &new_list, "2026-08-22", true, &mut rng);
    assert_eq!(forced.len(), DAILY_COUNT);
    assert!(
        forced.iter().all(|i| i.phrase.starts_with("을")),
        "a forced redraw must ignore the cached set"
    );

    // The forced set replaces the cache.
    let cached = store.load_daily();
    assert_eq!(cached.idioms, forced);
}

#[test]
fn an_empty_cached_set_is_not_reused() {
    let (_dir, store) = make_store();
    let all = idioms("가", 20);

    store
        .save_daily(&DailyIdiomsData::fresh("2026-08-22", Vec::new()))
        .unwrap();

    let mut rng = SmallRng::seed_from_u64(6);
    let set = open_daily(Some(&store), &all, "2026-08-22", false, &mut rng);
    assert_eq!(set.len(), DAILY_COUNT);
}

// ── Damaged and missing state ────────────────────────────────────────────

#[test]
fn a_corrupt_cache_file_redraws() {
    let (dir, store) = make_store();
    let all = idioms("가", 20);
    fs::write(cache_file(dir.path()), "{ not json").unwrap();

    let mut rng = SmallRng::seed_from_u64(5);
    let set = open_daily(Some(&store), &all, "2026-08-22", false, &mut rng);
    assert_eq!(set.len(), DAILY_COUNT);

    // The corrupt file has been replaced by a valid one.
    let cached = store.load_daily();
    assert_eq!(cached.date, "2026-08-22");
    assert_eq!(cached.idioms.len(), DAILY_COUNT);
}

#[test]
fn the_cache_survives_reopening_the_store() {
    let (dir, store) = make_store();
    let all = idioms("가", 20);

    let mut rng = SmallRng::seed_from_u64(8);
    let set = open_daily(Some(&store), &all, "2026-08-22", false, &mut rng);
    drop(store);

    let reopened = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    let cached = reopened.load_daily();
    assert_eq!(cached.date, "2026-08-22");
    assert_eq!(cached.idioms, set);
}
