use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::open_maybe_gz;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("combine_rank_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_open_plain_file() {
    let dir = make_temp_dir();
    let path = dir.join("raw.csv");
    fs::write(&path, "name,grad_year\n").unwrap();

    let mut reader = open_maybe_gz(&path).unwrap();
    let mut text = String::new();
    reader.read_to_string(&mut text).unwrap();
    assert_eq!(text, "name,grad_year\n");
}

#[test]
fn test_open_gz_file() {
    let dir = make_temp_dir();
    let path = dir.join("raw.csv.gz");
    let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    enc.write_all(b"name,grad_year\nAlex Roe,2026\n").unwrap();
    enc.finish().unwrap();

    let mut reader = open_maybe_gz(&path).unwrap();
    let mut text = String::new();
    reader.read_to_string(&mut text).unwrap();
    assert_eq!(text, "name,grad_year\nAlex Roe,2026\n");
}

#[test]
fn test_missing_file_is_missing_input() {
    let dir = make_temp_dir();
    let err = open_maybe_gz(&dir.join("nope.csv")).err().unwrap();
    assert!(matches!(err, super::InputError::MissingInput(_)));
}
