use melodex::ErrorKind;
use melodex::ratings::tree::RatingTree;

mod helpers;
use helpers::{titles, track};

#[test]
fn rate_and_lookup_by_bucket() {
    let mut tree = RatingTree::new();
    let a = track("A", "x", 100);
    let b = track("B", "x", 100);
    let c = track("C", "x", 100);

    tree.rate(a.clone(), 4).unwrap();
    tree.rate(b.clone(), 4).unwrap();
    tree.rate(c.clone(), 2).unwrap();

    assert_eq!(titles(&tree.lookup_by_rating(4)), ["A", "B"]);
    assert_eq!(titles(&tree.lookup_by_rating(2)), ["C"]);
    assert!(tree.lookup_by_rating(5).is_empty());
    assert_eq!(tree.len(), 3);
}

#[test]
fn out_of_range_rating_rejected() {
    let mut tree = RatingTree::new();
    let a = track("A", "x", 100);

    assert_eq!(
        tree.rate(a.clone(), 0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        tree.rate(a.clone(), 6).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert!(tree.is_empty());
}

#[test]
fn lookup_out_of_range_is_empty_not_error() {
    let mut tree = RatingTree::new();
    tree.rate(track("A", "x", 1), 3).unwrap();
    assert!(tree.lookup_by_rating(0).is_empty());
    assert!(tree.lookup_by_rating(9).is_empty());
}

#[test]
fn re_rating_moves_track_between_buckets() {
    let mut tree = RatingTree::new();
    let a = track("A", "x", 100);

    tree.rate(a.clone(), 2).unwrap();
    tree.rate(a.clone(), 5).unwrap();

    assert!(tree.lookup_by_rating(2).is_empty());
    assert_eq!(titles(&tree.lookup_by_rating(5)), ["A"]);
    assert_eq!(tree.rating_of(&a.id), Some(5));
    assert_eq!(tree.len(), 1);
}

#[test]
fn re_rating_same_value_keeps_single_entry() {
    let mut tree = RatingTree::new();
    let a = track("A", "x", 100);

    tree.rate(a.clone(), 3).unwrap();
    tree.rate(a.clone(), 3).unwrap();

    assert_eq!(tree.lookup_by_rating(3).len(), 1);
    assert_eq!(tree.len(), 1);
}

#[test]
fn unrate_returns_old_rating() {
    let mut tree = RatingTree::new();
    let a = track("A", "x", 100);
    tree.rate(a.clone(), 4).unwrap();

    assert_eq!(tree.unrate(&a.id).unwrap(), 4);
    assert_eq!(tree.rating_of(&a.id), None);
    assert!(tree.lookup_by_rating(4).is_empty());
    assert!(tree.is_empty());
}

#[test]
fn unrate_unknown_is_not_found() {
    let mut tree = RatingTree::new();
    let ghost = track("Ghost", "x", 1);
    assert_eq!(tree.unrate(&ghost.id).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn emptied_bucket_leaves_others_reachable() {
    let mut tree = RatingTree::new();
    let a = track("A", "x", 1);
    let b = track("B", "x", 1);
    let c = track("C", "x", 1);

    // root 3, children 1 and 5
    tree.rate(a.clone(), 3).unwrap();
    tree.rate(b.clone(), 1).unwrap();
    tree.rate(c.clone(), 5).unwrap();

    tree.unrate(&b.id).unwrap();

    assert!(tree.lookup_by_rating(1).is_empty());
    assert_eq!(titles(&tree.lookup_by_rating(3)), ["A"]);
    assert_eq!(titles(&tree.lookup_by_rating(5)), ["C"]);
}

#[test]
fn two_child_deletion_promotes_successor() {
    let mut tree = RatingTree::new();
    let a = track("A", "x", 1);
    let b = track("B", "x", 1);
    let c = track("C", "x", 1);
    let d = track("D", "x", 1);

    // root 3 with both subtrees; successor of 3 is 4
    tree.rate(a.clone(), 3).unwrap();
    tree.rate(b.clone(), 1).unwrap();
    tree.rate(c.clone(), 5).unwrap();
    tree.rate(d.clone(), 4).unwrap();

    tree.unrate(&a.id).unwrap();

    assert!(tree.lookup_by_rating(3).is_empty());
    assert_eq!(titles(&tree.lookup_by_rating(1)), ["B"]);
    assert_eq!(titles(&tree.lookup_by_rating(4)), ["D"]);
    assert_eq!(titles(&tree.lookup_by_rating(5)), ["C"]);
    assert_eq!(tree.len(), 3);
}

#[test]
fn top_rated_descends_from_highest() {
    let mut tree = RatingTree::new();
    tree.rate(track("Low", "x", 1), 1).unwrap();
    tree.rate(track("Mid", "x", 1), 3).unwrap();
    tree.rate(track("High1", "x", 1), 5).unwrap();
    tree.rate(track("High2", "x", 1), 5).unwrap();

    let top = tree.top_rated(3);
    assert_eq!(titles(&top), ["High1", "High2", "Mid"]);

    let all = tree.top_rated(10);
    assert_eq!(all.len(), 4);
    assert_eq!(all.last().unwrap().title, "Low");
}

#[test]
fn distribution_and_average() {
    let mut tree = RatingTree::new();
    tree.rate(track("A", "x", 1), 5).unwrap();
    tree.rate(track("B", "x", 1), 5).unwrap();
    tree.rate(track("C", "x", 1), 2).unwrap();

    assert_eq!(tree.distribution(), [0, 1, 0, 0, 2]);
    assert!((tree.average_rating() - 4.0).abs() < f64::EPSILON);

    assert_eq!(RatingTree::new().average_rating(), 0.0);
}

#[test]
fn side_table_matches_buckets_after_churn() {
    let mut tree = RatingTree::new();
    let tracks: Vec<_> = (0..20).map(|i| track(&format!("T{}", i), "x", 1)).collect();

    for (i, t) in tracks.iter().enumerate() {
        tree.rate(t.clone(), (i % 5 + 1) as u8).unwrap();
    }
    // re-rate half, unrate a quarter
    for t in tracks.iter().take(10) {
        tree.rate(t.clone(), 3).unwrap();
    }
    for t in tracks.iter().take(5) {
        tree.unrate(&t.id).unwrap();
    }

    let all = tree.all_ratings();
    assert_eq!(all.len(), 15);
    assert_eq!(tree.len(), 15);

    for (id, rating) in &all {
        let bucket = tree.lookup_by_rating(*rating);
        assert!(bucket.iter().any(|t| t.id == *id));
        assert_eq!(tree.rating_of(id), Some(*rating));
    }
    let total: usize = tree.distribution().iter().sum();
    assert_eq!(total, 15);
}

#[test]
fn height_bounded_by_distinct_ratings() {
    let mut tree = RatingTree::new();
    for rating in 1..=5 {
        tree.rate(track(&format!("R{}", rating), "x", 1), rating).unwrap();
    }
    assert!(tree.height() <= 5);
    assert!(tree.height() >= 3);
}

#[test]
fn clear_resets_tree() {
    let mut tree = RatingTree::new();
    tree.rate(track("A", "x", 1), 4).unwrap();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert!(tree.top_rated(10).is_empty());
}
