use std::fs;
use std::path::PathBuf;

use road_fighter::scores::{ScoreStore, MAX_ENTRIES};

/// Unique temp path per test so parallel tests never share a file.
fn temp_store_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("road_fighter_{}_{}.json", tag, std::process::id()))
}

#[test]
fn missing_file_starts_empty() {
    let path = temp_store_path("missing");
    let _ = fs::remove_file(&path);
    let store = ScoreStore::at(path);
    assert!(store.entries().is_empty());
    assert_eq!(store.best(), 0);
}

#[test]
fn corrupt_file_starts_empty() {
    let path = temp_store_path("corrupt");
    fs::write(&path, "not json at all {{{").unwrap();
    let store = ScoreStore::at(path.clone());
    assert!(store.entries().is_empty());
    let _ = fs::remove_file(&path);
}

#[test]
fn entries_stay_sorted_and_capped() {
    let path = temp_store_path("capped");
    let _ = fs::remove_file(&path);
    let mut store = ScoreStore::at(path.clone());

    for score in [300, 50, 900, 120, 40, 770, 10, 640, 880, 210, 500, 60] {
        store.record(score, score / 10).unwrap();
    }

    assert_eq!(store.entries().len(), MAX_ENTRIES);
    let scores: Vec<u32> = store.entries().iter().map(|e| e.score).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
    assert_eq!(store.best(), 900);
    // The two lowest recorded runs fell off the table.
    assert!(!scores.contains(&10));
    assert!(!scores.contains(&40));
    let _ = fs::remove_file(&path);
}

#[test]
fn saved_table_survives_reopen() {
    let path = temp_store_path("reopen");
    let _ = fs::remove_file(&path);
    {
        let mut store = ScoreStore::at(path.clone());
        store.record(420, 33).unwrap();
        store.record(150, 9).unwrap();
    }
    let store = ScoreStore::at(path.clone());
    assert_eq!(store.entries().len(), 2);
    assert_eq!(store.best(), 420);
    assert_eq!(store.entries()[0].distance, 33);
    let _ = fs::remove_file(&path);
}

#[test]
fn is_high_score_on_a_partial_table() {
    let path = temp_store_path("partial");
    let _ = fs::remove_file(&path);
    let mut store = ScoreStore::at(path.clone());
    store.record(500, 40).unwrap();
    // Any score qualifies while the table has room, even zero.
    assert!(store.is_high_score(0));
    let _ = fs::remove_file(&path);
}

#[test]
fn is_high_score_on_a_full_table() {
    let path = temp_store_path("full");
    let _ = fs::remove_file(&path);
    let mut store = ScoreStore::at(path.clone());
    for score in 1..=10 {
        store.record(score * 100, 0).unwrap();
    }
    // Table floor is 100: beating it qualifies, tying it does not.
    assert!(store.is_high_score(101));
    assert!(!store.is_high_score(100));
    assert!(!store.is_high_score(0));
    let _ = fs::remove_file(&path);
}

#[test]
fn equal_scores_keep_insertion_order() {
    let path = temp_store_path("stable");
    let _ = fs::remove_file(&path);
    let mut store = ScoreStore::at(path.clone());
    store.record(200, 1).unwrap();
    store.record(200, 2).unwrap();
    store.record(200, 3).unwrap();
    let distances: Vec<u32> = store.entries().iter().map(|e| e.distance).collect();
    assert_eq!(distances, vec![1, 2, 3]);
    let _ = fs::remove_file(&path);
}
