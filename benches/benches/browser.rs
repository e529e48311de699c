// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lab_catalog::{CompletedSet, GroupIndex, Specimen, filter};
use lab_session::{LabSession, SessionConfig};
use lab_virtual_list::{RowMetrics, flatten, visible_range};

const MOTIONS: [&str; 10] = [
    "spring", "bounce", "fade", "slide", "orbit", "ripple", "morph", "swing", "pulse", "drift",
];

/// A catalog shaped like the Lab: `groups` acts of roughly equal size.
fn catalog(total: usize, groups: usize) -> (GroupIndex, Vec<Specimen>) {
    let items: Vec<Specimen> = (0..total)
        .map(|i| {
            Specimen::new(format!("s{i}"), format!("{} {i}", MOTIONS[i % MOTIONS.len()]))
                .with_signature(format!("{}(t, {})", MOTIONS[(i / 3) % MOTIONS.len()], i % 7))
        })
        .collect();
    let per = total / groups;
    let counts = (0..groups).map(|g| {
        let count = if g + 1 == groups { total - per * g } else { per };
        (format!("act-{g}"), format!("Act {g}"), count)
    });
    let index = GroupIndex::from_counts(counts).expect("valid counts");
    (index, items)
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("browser/filter");
    let (index, items) = catalog(1_380, 24);
    group.throughput(Throughput::Elements(items.len() as u64));

    for query in ["", "s", "spring", "zzz"] {
        let id = BenchmarkId::new("query", format!("{query:?}"));
        group.bench_with_input(id, query, |b, query| {
            b.iter(|| black_box(filter(&index, &items, query)));
        });
    }
    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("browser/flatten");
    let (index, items) = catalog(1_380, 24);
    let completed: CompletedSet = (0..items.len()).step_by(5).collect();

    for query in ["", "spring"] {
        let filtered = filter(&index, &items, query);
        let id = BenchmarkId::new("query", format!("{query:?}"));
        group.bench_with_input(id, &filtered, |b, filtered| {
            b.iter(|| {
                black_box(flatten(
                    filtered,
                    Some(700),
                    &completed,
                    RowMetrics::default(),
                ))
            });
        });
    }
    group.finish();
}

fn bench_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("browser/visible_range");
    for total in [1_380_usize, 20_000] {
        let (index, items) = catalog(total, 24);
        let rows = flatten(
            &filter(&index, &items, ""),
            None,
            &CompletedSet::new(),
            RowMetrics::default(),
        );
        let step = rows.total_height() / 64.0;
        group.bench_with_input(BenchmarkId::from_parameter(total), &rows, |b, rows| {
            b.iter(|| {
                let mut scroll = 0.0;
                for _ in 0..64 {
                    black_box(visible_range(rows.rows(), scroll, 720.0, 240.0));
                    scroll += step;
                }
            });
        });
    }
    group.finish();
}

fn bench_session_typing(c: &mut Criterion) {
    let (index, items) = catalog(1_380, 24);
    let config = SessionConfig::default().with_viewport_height(720.0);
    let mut session =
        LabSession::with_index(index, items, config).expect("catalog matches its index");
    session.select(700);

    // One keystroke at a time, as a user types and then clears a query.
    let keystrokes = ["s", "sp", "spr", "spri", "sprin", "spring", "sprin", ""];
    c.bench_function("browser/session_typing", |b| {
        b.iter(|| {
            for query in keystrokes {
                black_box(session.set_query(query));
                black_box(session.visible_rows().len());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_filter,
    bench_flatten,
    bench_window,
    bench_session_typing
);
criterion_main!(benches);
