use criterion::{black_box, criterion_group, criterion_main, Criterion};

use opskills_core::model::{Category, UserSelection};
use opskills_core::normalize::{canonicalize_key, canonicalize_label};
use opskills_core::reference::skills_in;
use opskills_core::resolver::resolve_correct_skills;
use opskills_core::scoring::score;

fn everything_selected() -> UserSelection {
    Category::ALL
        .into_iter()
        .fold(UserSelection::new(), |sel, c| sel.with(c, skills_in(c).iter().copied()))
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("label", |b| {
        b.iter(|| canonicalize_label(black_box("  Use of the Robot controller ")))
    });

    group.bench_function("key", |b| {
        b.iter(|| canonicalize_key(black_box(" Plant Flow-Keeper ")))
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_correct_skills", |b| {
        b.iter(|| resolve_correct_skills(black_box("logistic sector"), black_box("tech solver")))
    });
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let empty = UserSelection::new();
    let full = everything_selected();

    group.bench_function("empty", |b| {
        b.iter(|| score(black_box("FOOD SECTOR"), black_box("SMART LINE OPERATOR"), black_box(&empty)))
    });

    group.bench_function("all_selected", |b| {
        b.iter(|| score(black_box("FOOD SECTOR"), black_box("SMART LINE OPERATOR"), black_box(&full)))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_resolve, bench_score);
criterion_main!(benches);
