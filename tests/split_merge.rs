use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use prt::{part_path, Error, Merger, SplitterBuilder};

/// Deterministic non-repeating-ish byte pattern.
fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

fn split(full: &PathBuf, part_size: usize) -> u64 {
    SplitterBuilder::new(full)
        .part_size(part_size)
        .build()
        .unwrap()
        .run()
        .unwrap()
}

#[test]
fn split_then_merge_round_trips() {
    let dir = tempdir().unwrap();
    let full = dir.path().join("data.bin");
    let merged = dir.path().join("merged.bin");
    let bytes = pattern(10_000);
    fs::write(&full, &bytes).unwrap();

    let created = split(&full, 4096);
    assert_eq!(created, 3);
    assert_eq!(fs::metadata(part_path(&full, 1)).unwrap().len(), 4096);
    assert_eq!(fs::metadata(part_path(&full, 2)).unwrap().len(), 4096);
    assert_eq!(fs::metadata(part_path(&full, 3)).unwrap().len(), 1808);

    let parts = (1..=created).map(|i| part_path(&full, i)).collect();
    let written = Merger::new(parts, &merged).run().unwrap();
    assert_eq!(written, 10_000);
    assert_eq!(fs::read(&merged).unwrap(), bytes);
}

#[test]
fn exact_multiple_creates_trailing_empty_part() {
    let dir = tempdir().unwrap();
    let full = dir.path().join("data.bin");
    let merged = dir.path().join("merged.bin");
    let bytes = pattern(8192);
    fs::write(&full, &bytes).unwrap();

    // Two full parts plus the empty one created by the read that first
    // observes the end of the stream.
    let created = split(&full, 4096);
    assert_eq!(created, 3);
    assert_eq!(fs::metadata(part_path(&full, 3)).unwrap().len(), 0);

    // Including the empty trailing part in the merge list is harmless.
    let parts = (1..=created).map(|i| part_path(&full, i)).collect();
    Merger::new(parts, &merged).run().unwrap();
    assert_eq!(fs::read(&merged).unwrap(), bytes);
}

#[test]
fn input_size_equal_to_part_size_gives_one_full_and_one_empty_part() {
    let dir = tempdir().unwrap();
    let full = dir.path().join("data.bin");
    fs::write(&full, pattern(4096)).unwrap();

    assert_eq!(split(&full, 4096), 2);
    assert_eq!(fs::metadata(part_path(&full, 1)).unwrap().len(), 4096);
    assert_eq!(fs::metadata(part_path(&full, 2)).unwrap().len(), 0);
}

#[test]
fn empty_input_creates_single_empty_part() {
    let dir = tempdir().unwrap();
    let full = dir.path().join("data.bin");
    fs::write(&full, b"").unwrap();

    assert_eq!(split(&full, 4096), 1);
    assert_eq!(fs::metadata(part_path(&full, 1)).unwrap().len(), 0);
}

#[test]
fn merge_of_empty_list_creates_empty_output() {
    let dir = tempdir().unwrap();
    let merged = dir.path().join("merged.bin");

    let written = Merger::new(Vec::new(), &merged).run().unwrap();
    assert_eq!(written, 0);
    assert_eq!(fs::metadata(&merged).unwrap().len(), 0);
}

#[test]
fn merge_concatenates_in_given_order() {
    let dir = tempdir().unwrap();
    let merged = dir.path().join("merged.bin");
    let a = dir.path().join("a.prt");
    let b = dir.path().join("b.prt");
    let c = dir.path().join("c.prt");
    fs::write(&a, vec![1u8; 1]).unwrap();
    fs::write(&b, vec![2u8; 4096]).unwrap();
    fs::write(&c, vec![3u8; 7]).unwrap();

    // The list order decides the output, not any naming scheme.
    Merger::new(vec![c, a, b], &merged).run().unwrap();

    let mut expected = vec![3u8; 7];
    expected.extend(vec![1u8; 1]);
    expected.extend(vec![2u8; 4096]);
    assert_eq!(fs::read(&merged).unwrap(), expected);
}

#[test]
fn merge_output_is_independent_of_chunk_size() {
    let dir = tempdir().unwrap();
    let part = dir.path().join("data.prt");
    let bytes = pattern(9);
    fs::write(&part, &bytes).unwrap();

    for chunk_size in [1, 3, 4, 9, 4096] {
        let merged = dir.path().join(format!("merged_{}.bin", chunk_size));
        Merger::new(vec![part.clone()], &merged)
            .chunk_size(chunk_size)
            .run()
            .unwrap();
        assert_eq!(fs::read(&merged).unwrap(), bytes);
    }
}

#[test]
fn split_missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let err = SplitterBuilder::new(dir.path().join("missing.bin"))
        .build()
        .unwrap()
        .run()
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn merge_missing_part_keeps_already_written_bytes() {
    let dir = tempdir().unwrap();
    let merged = dir.path().join("merged.bin");
    let good = dir.path().join("good.prt");
    fs::write(&good, b"kept").unwrap();

    let err = Merger::new(vec![good, dir.path().join("missing.prt")], &merged)
        .run()
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    // No rollback: the output holds everything copied before the failure.
    assert_eq!(fs::read(&merged).unwrap(), b"kept");
}

#[test]
fn split_reuses_part_size_from_builder() {
    let dir = tempdir().unwrap();
    let full = dir.path().join("data.bin");
    fs::write(&full, pattern(5)).unwrap();

    assert_eq!(split(&full, 2), 3);
    assert_eq!(fs::metadata(part_path(&full, 1)).unwrap().len(), 2);
    assert_eq!(fs::metadata(part_path(&full, 2)).unwrap().len(), 2);
    assert_eq!(fs::metadata(part_path(&full, 3)).unwrap().len(), 1);
}
