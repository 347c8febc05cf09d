use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use hanjaro::content::entry::StudyCard;
use hanjaro::content::level::Level;
use hanjaro::content::library::Library;
use hanjaro::engine::deal::draw_round;
use hanjaro::engine::pool::{StudySource, card_pool, resolve_span};
use hanjaro::engine::search::search;

fn make_pool(count: usize) -> Vec<StudyCard> {
    (0..count)
        .map(|i| StudyCard {
            glyph: format!("자{i}"),
            caption: format!("훈 음{i}"),
        })
        .collect()
}

fn bench_draw_round(c: &mut Criterion) {
    for &size in &[100usize, 1_000, 5_000] {
        let pool = make_pool(size);
        let mut rng = SmallRng::seed_from_u64(42);

        c.bench_function(&format!("draw_round ({size} cards)"), |b| {
            b.iter(|| draw_round(black_box(&pool), &mut rng))
        });
    }
}

fn bench_pool_build(c: &mut Criterion) {
    let library = Library::load();
    let span = resolve_span(Level::L8, Level::Special).unwrap();

    c.bench_function("card_pool (full range, characters)", |b| {
        b.iter(|| card_pool(black_box(&library), StudySource::Characters, black_box(span)))
    });
}

fn bench_search(c: &mut Criterion) {
    let library = Library::load();

    // "수" hits both glosses and readings across several levels.
    c.bench_function("search (bundled tables, common reading)", |b| {
        b.iter(|| search(black_box(&library), black_box("수")))
    });

    c.bench_function("search (bundled tables, no match)", |b| {
        b.iter(|| search(black_box(&library), black_box("없는말")))
    });
}

criterion_group!(benches, bench_draw_round, bench_pool_build, bench_search);
criterion_main!(benches);
