use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use melodex::playlist::linked::Playlist;
use melodex::sort::engine::{SortEngine, insertion_sort, merge_sort, quick_sort};
use melodex::sort::key::{SortField, SortSpec};
use melodex::{Catalog, Track};
use rand::Rng;

/// Helper to create test tracks with pseudo-random metadata
fn create_test_tracks(count: usize) -> Vec<Track> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let words = ["night", "drive", "echo", "neon", "dawn", "static", "glass", "wire"];
            let title = format!(
                "{} {} {}",
                words[rng.gen_range(0..words.len())],
                words[rng.gen_range(0..words.len())],
                i
            );
            let artist = format!("artist_{}", i % 25);
            Track::new(&title, &artist, rng.gen_range(60..600))
        })
        .collect()
}

/// Benchmark playlist insertion at both ends versus the interior
fn bench_playlist_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("playlist_insert");

    group.bench_function("append", |b| {
        b.iter(|| {
            let mut playlist = Playlist::new();
            for track in create_test_tracks(500) {
                playlist.push(track);
            }
            black_box(playlist.len())
        });
    });

    group.bench_function("prepend", |b| {
        b.iter(|| {
            let mut playlist = Playlist::new();
            for track in create_test_tracks(500) {
                playlist.insert(track, Some(0));
            }
            black_box(playlist.len())
        });
    });

    group.bench_function("interior", |b| {
        b.iter(|| {
            let mut playlist = Playlist::new();
            for (i, track) in create_test_tracks(500).into_iter().enumerate() {
                playlist.insert(track, Some(i / 2));
            }
            black_box(playlist.len())
        });
    });

    group.finish();
}

/// Benchmark reversal and full enumeration across playlist sizes
fn bench_playlist_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("playlist_traversal");

    for size in [100, 1_000, 10_000].iter() {
        let mut playlist = Playlist::new();
        for track in create_test_tracks(*size) {
            playlist.push(track);
        }

        group.bench_with_input(BenchmarkId::new("tracks", size), size, |b, _| {
            b.iter(|| black_box(playlist.tracks()));
        });
    }

    group.bench_function("reverse_10000", |b| {
        let mut playlist = Playlist::new();
        for track in create_test_tracks(10_000) {
            playlist.push(track);
        }
        b.iter(|| {
            playlist.reverse();
            black_box(playlist.len())
        });
    });

    group.finish();
}

/// Benchmark the three sort algorithms over random input
fn bench_sort_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_algorithms");

    for size in [100, 1_000, 5_000].iter() {
        let tracks = create_test_tracks(*size);

        group.bench_with_input(BenchmarkId::new("merge", size), size, |b, _| {
            b.iter(|| {
                black_box(merge_sort(
                    &tracks,
                    &|t: &Track| t.duration_secs,
                    false,
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("quick", size), size, |b, _| {
            b.iter(|| {
                let mut copy = tracks.clone();
                quick_sort(&mut copy, &|t: &Track| t.duration_secs, false);
                black_box(copy)
            });
        });
    }

    group.bench_function("insertion_50", |b| {
        let tracks = create_test_tracks(50);
        b.iter(|| black_box(insertion_sort(&tracks, &|t: &Track| t.duration_secs, false)));
    });

    // last-element pivot degrades on pre-sorted input; keep the size modest
    group.bench_function("quick_presorted_2000", |b| {
        let mut tracks = create_test_tracks(2_000);
        quick_sort(&mut tracks, &|t: &Track| t.duration_secs, false);
        b.iter(|| {
            let mut copy = tracks.clone();
            quick_sort(&mut copy, &|t: &Track| t.duration_secs, false);
            black_box(copy)
        });
    });

    group.finish();
}

/// Benchmark multi-criteria sorting through the engine
fn bench_multi_criteria_sort(c: &mut Criterion) {
    let tracks = create_test_tracks(1_000);
    let specs = [
        SortSpec::ascending(SortField::Artist),
        SortSpec::descending(SortField::Duration),
        SortSpec::ascending(SortField::Title),
    ];

    c.bench_function("multi_criteria_sort_1000", |b| {
        let mut engine = SortEngine::new();
        b.iter(|| black_box(engine.sort_by_criteria(&tracks, &specs)));
    });
}

/// Benchmark search paths through a populated catalog
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let mut catalog = Catalog::new();
    for track in create_test_tracks(5_000) {
        let _ = catalog.add_track_with_id(
            track.id,
            &track.title,
            &track.artist,
            track.duration_secs as i64,
            None,
        );
    }

    group.bench_function("fuzzy_5000", |b| {
        b.iter(|| black_box(catalog.search("night")));
    });

    group.bench_function("exact_artist_5000", |b| {
        b.iter(|| black_box(catalog.search_by_artist("artist_7")));
    });

    group.bench_function("title_substring_5000", |b| {
        b.iter(|| black_box(catalog.search_by_title("echo")));
    });

    group.finish();
}

/// Benchmark history churn at capacity and the snapshot assembly
fn bench_history_and_snapshot(c: &mut Criterion) {
    let mut catalog = Catalog::new();
    for track in create_test_tracks(1_000) {
        let _ = catalog.add_track_with_id(
            track.id,
            &track.title,
            &track.artist,
            track.duration_secs as i64,
            None,
        );
    }
    let ids: Vec<_> = catalog.tracks().iter().map(|t| t.id).collect();

    c.bench_function("play_at_capacity", |b| {
        let mut rng = rand::thread_rng();
        // fill past capacity so every play evicts
        for id in ids.iter().take(60) {
            catalog.play(id).unwrap();
        }
        b.iter(|| {
            let id = ids[rng.gen_range(0..ids.len())];
            black_box(catalog.play(&id).unwrap())
        });
    });

    c.bench_function("snapshot_1000", |b| {
        b.iter(|| black_box(catalog.snapshot()));
    });
}

criterion_group!(
    benches,
    bench_playlist_insert,
    bench_playlist_traversal,
    bench_sort_algorithms,
    bench_multi_criteria_sort,
    bench_search,
    bench_history_and_snapshot
);
criterion_main!(benches);
