//! Filter engine benchmarks.
//!
//! Every keystroke refilters the whole store, so a full pass over a large
//! file has to stay well under a frame.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fview::filter::filter;
use fview::model::{KeyAction, MatchMode, RecordStore};
use fview::state::Session;

/// Generate a store of log-like lines.
fn generate_store() -> RecordStore {
    const NUM_LINES: usize = 200_000;
    const LEVELS: [&str; 4] = ["INFO", "DEBUG", "WARN", "ERROR"];

    (0..NUM_LINES)
        .map(|i| {
            format!(
                "2024-05-{:02}T12:{:02}:{:02} {} worker-{} request {} handled in {}ms",
                i % 28 + 1,
                i % 60,
                (i * 7) % 60,
                LEVELS[i % LEVELS.len()],
                i % 16,
                i,
                (i * 13) % 1000
            )
        })
        .collect()
}

fn benchmark_filter(c: &mut Criterion) {
    // Generate store once (expensive, don't time this)
    let store = generate_store();
    println!("Benchmark store: {} lines", store.len());

    c.bench_function("filter_literal_common", |b| {
        b.iter(|| {
            let view = filter(black_box(&store), black_box("INFO"), MatchMode::literal());
            black_box(view)
        })
    });

    c.bench_function("filter_literal_no_match", |b| {
        b.iter(|| {
            let view = filter(black_box(&store), black_box("XYZNONEXISTENT"), MatchMode::literal());
            black_box(view)
        })
    });

    c.bench_function("filter_ignore_case", |b| {
        let mode = MatchMode::literal().with_ignore_case(true);
        b.iter(|| {
            let view = filter(black_box(&store), black_box("error"), mode);
            black_box(view)
        })
    });

    c.bench_function("filter_regex", |b| {
        let mode = MatchMode::literal().with_regex(true);
        b.iter(|| {
            let view = filter(black_box(&store), black_box(r"worker-1\d request"), mode);
            black_box(view)
        })
    });

    c.bench_function("session_type_and_backspace", |b| {
        b.iter(|| {
            let mut session = Session::new(store.clone(), MatchMode::literal(), 40);
            for ch in "ERROR".chars() {
                session.handle_char(ch);
            }
            session.handle_action(KeyAction::DeletePrev);
            black_box(session.view().len())
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(10));
    targets = benchmark_filter
}

criterion_main!(benches);
