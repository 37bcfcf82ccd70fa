use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use karaoke_songs::{Error, SearchColumn, SongRecord, SongStore, ValidationError};
use tempfile::tempdir;

fn csv_path(dir: &Path) -> PathBuf {
    dir.join("song_list.csv")
}

#[test]
fn karaoke_night_scenario() {
    let dir = tempdir().unwrap();
    let path = csv_path(dir.path());
    let mut store = SongStore::open(&path).unwrap();
    assert!(store.is_empty());

    store.add("マツケンサンバ", "松平健", Some(95.5)).unwrap();
    assert_eq!(store.len(), 1);
    store.add("Lemon", "米津玄師", Some(88.0)).unwrap();

    let hits = store.search(SearchColumn::Title, "Lemon").unwrap();
    assert_eq!(hits, vec![store.songs()[1].clone()]);

    assert_eq!(store.delete("マツケンサンバ").unwrap(), 1);
    assert_eq!(store.len(), 1);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "title,artist,score\nLemon,米津玄師,88.0\n");
}

#[test]
fn reload_yields_the_same_ordered_records() {
    let dir = tempdir().unwrap();
    let path = csv_path(dir.path());
    let mut store = SongStore::open(&path).unwrap();
    store.add("Lemon", "米津玄師", Some(88.0)).unwrap();
    store.add("マツケンサンバ", "松平健", None).unwrap();
    store.add("Lemon", "Cover, with a comma", Some(61.25)).unwrap();
    store.add("\"Quoted\" title", "Someone", Some(100.0)).unwrap();

    let reloaded = SongStore::open(&path).unwrap();
    assert_eq!(reloaded.songs(), store.songs());
}

#[test]
fn rejected_add_leaves_store_and_file_alone() {
    let dir = tempdir().unwrap();
    let path = csv_path(dir.path());
    let mut store = SongStore::open(&path).unwrap();
    store.add("Lemon", "米津玄師", Some(88.0)).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let err = store.add("", "米津玄師", Some(88.0)).unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::MissingField)));
    let err = store.add("Flamingo", "米津玄師", Some(101.0)).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::ScoreOutOfRange(_))
    ));

    assert_eq!(store.len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn statistics_need_at_least_one_score() {
    let dir = tempdir().unwrap();
    let mut store = SongStore::open(csv_path(dir.path())).unwrap();
    assert!(store.statistics().is_none());

    store.add("No score", "Anyone", None).unwrap();
    assert!(store.statistics().is_none());

    for (title, score) in [("A", 80.0), ("B", 90.0), ("C", 100.0)] {
        store.add(title, "Anyone", Some(score)).unwrap();
    }
    let summary = store.statistics().unwrap();
    assert_eq!(summary.count, 3);
    assert!((summary.mean - 90.0).abs() < 1e-9);
    assert_eq!(store.histogram(10).iter().map(|bin| bin.count).sum::<u64>(), 3);
}

#[test]
fn hook_sees_the_persisted_path() {
    let dir = tempdir().unwrap();
    let path = csv_path(dir.path());
    let mut store = SongStore::open(&path).unwrap();

    let seen: Rc<RefCell<Vec<Vec<SongRecord>>>> = Rc::default();
    let log = Rc::clone(&seen);
    store.add_hook(move |saved: &Path| {
        log.borrow_mut()
            .push(karaoke_songs::store::read_songs(saved).unwrap());
    });

    store.add("Lemon", "米津玄師", Some(88.0)).unwrap();
    store.delete("Nothing here").unwrap();
    store.delete("Lemon").unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].len(), 1);
    assert!(seen[1].is_empty());
}

#[test]
fn unscored_markers_in_file_do_not_poison_statistics() {
    let dir = tempdir().unwrap();
    let path = csv_path(dir.path());
    fs::write(&path, "title,artist,score\nLemon,米津玄師,NaN\nA,b,80\nB,c,90\n").unwrap();

    let store = SongStore::open(&path).unwrap();
    assert_eq!(store.songs()[0].score, None);
    let summary = store.statistics().unwrap();
    assert_eq!(summary.count, 2);
    assert!((summary.mean - 85.0).abs() < 1e-9);
    assert!(summary.max.is_finite());
}

#[test]
fn file_with_invalid_row_refuses_to_load() {
    let dir = tempdir().unwrap();
    let path = csv_path(dir.path());
    fs::write(&path, "title,artist,score\nA,b,80\n,,150\n").unwrap();

    let err = SongStore::open(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidRow { line: 3, .. }));
    assert_eq!(err.to_string(), "row 3: Title and artist are both required.");
}
