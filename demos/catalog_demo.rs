/// Complete melodex API demo
///
/// Walks through the major catalog operations:
/// - Adding, moving and removing tracks
/// - Sorting (single field, multi-criteria, shuffle)
/// - Playback history and undo
/// - Ratings
/// - Search (exact, substring, fuzzy)
/// - Artist blocklist
/// - The aggregate snapshot
use melodex::sort::key::{SortField, SortSpec};
use melodex::{Catalog, ErrorKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("\n=== melodex catalog demo ===\n");

    // Step 1: build a catalog and add tracks
    println!("Step 1: adding tracks...");
    let mut catalog = Catalog::new();
    catalog.add_track("Night Drive", "Neon Rose", 245, None)?;
    catalog.add_track("Midnight", "Neon Rose", 198, None)?;
    catalog.add_track("Sunrise", "Dawn Patrol", 312, None)?;
    catalog.add_track("Static", "Wire Frame", 176, None)?;
    println!("  {} tracks in the playlist\n", catalog.len());

    // Step 2: reorder
    println!("Step 2: reordering...");
    catalog.move_track(0, 2)?;
    catalog.reverse();
    for (i, track) in catalog.tracks().iter().enumerate() {
        println!("  {}. {}", i + 1, track);
    }
    println!();

    // Step 3: sorting
    println!("Step 3: sorting...");
    catalog.sort_by(SortField::Title, false)?;
    println!("  by title: {:?}", titles(&catalog));

    catalog.sort(&[
        SortSpec::ascending(SortField::Artist),
        SortSpec::descending(SortField::Duration),
    ])?;
    println!("  by artist, then longest first: {:?}", titles(&catalog));

    catalog.shuffle();
    println!("  shuffled: {:?}\n", titles(&catalog));

    // Step 4: playback and undo
    println!("Step 4: playback...");
    let ids: Vec<_> = catalog.tracks().iter().map(|t| t.id).collect();
    catalog.play(&ids[0])?;
    catalog.play(&ids[1])?;
    catalog.play(&ids[0])?;
    println!("  total plays: {}", catalog.history().total_plays());

    let undone = catalog.undo_play()?;
    println!("  undid: {}", undone.title);
    println!("  total plays still: {}\n", catalog.history().total_plays());

    // Step 5: ratings
    println!("Step 5: ratings...");
    catalog.rate(&ids[0], 5)?;
    catalog.rate(&ids[1], 3)?;
    catalog.rate(&ids[2], 5)?;
    for track in catalog.top_rated(3) {
        let rating = catalog.rating_of(&track.id).unwrap_or(0);
        println!("  {} stars: {}", rating, track.title);
    }
    println!();

    // Step 6: search
    println!("Step 6: search...");
    for hit in catalog.search_scored("night") {
        println!("  {:.2}  {}", hit.score, hit.track);
    }
    println!(
        "  exact artist 'neon rose': {} tracks\n",
        catalog.search_by_artist("neon rose").len()
    );

    // Step 7: blocklist
    println!("Step 7: blocklist...");
    catalog.block_artist("Bad Act")?;
    match catalog.add_track("Anything", "bad act", 100, None) {
        Err(e) if e.kind() == ErrorKind::Conflict => {
            println!("  refused blocked artist: {}", e)
        }
        other => println!("  unexpected: {:?}", other),
    }
    catalog.unblock_artist("Bad Act")?;
    println!("  unblocked; {} artists blocked\n", catalog.blocked_artists().len());

    // Step 8: snapshot
    println!("Step 8: snapshot...");
    let snapshot = catalog.snapshot();
    println!("  tracks: {}", snapshot.analytics.total_tracks);
    println!("  total duration: {}s", snapshot.analytics.total_duration_secs);
    println!("  rating distribution: {:?}", snapshot.analytics.rating_distribution);
    println!("  lifetime plays: {}", snapshot.analytics.total_plays);
    println!("\nAs JSON:\n{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

fn titles(catalog: &Catalog) -> Vec<String> {
    catalog.tracks().into_iter().map(|t| t.title).collect()
}
