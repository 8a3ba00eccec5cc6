// File: crates/report/tests/archive.rs
// Purpose: Archive entries are compressed, named as given, and repeated names overwrite.

use std::io::{Cursor, Read};

use rank_report::ArchiveAssembler;

fn open(bytes: Vec<u8>) -> zip::ZipArchive<Cursor<Vec<u8>>> {
    zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip")
}

#[test]
fn entries_are_deflated_and_readable() {
    let mut asm = ArchiveAssembler::new();
    asm.add("A_校排名.png", vec![1u8; 4096]);
    asm.add("B_校排名.png", b"second".to_vec());
    assert_eq!(asm.len(), 2);

    let mut zip = open(asm.finish().expect("finish"));
    assert_eq!(zip.len(), 2);

    let mut first = zip.by_name("A_校排名.png").expect("entry A");
    assert_eq!(first.compression(), zip::CompressionMethod::Deflated);
    assert!(first.compressed_size() < first.size());
    let mut buf = Vec::new();
    first.read_to_end(&mut buf).unwrap();
    assert_eq!(buf, vec![1u8; 4096]);
}

#[test]
fn empty_archive_is_still_valid() {
    let asm = ArchiveAssembler::default();
    assert!(asm.is_empty());
    let zip = open(asm.finish().expect("finish"));
    assert_eq!(zip.len(), 0);
}

#[test]
fn repeated_name_keeps_later_bytes() {
    let mut asm = ArchiveAssembler::new();
    assert!(!asm.add("A.png", b"first".to_vec()));
    assert!(!asm.add("B.png", b"other".to_vec()));
    assert!(asm.add("A.png", b"second".to_vec()));
    assert_eq!(asm.names().collect::<Vec<_>>(), vec!["A.png", "B.png"]);

    let mut zip = open(asm.finish().unwrap());
    assert_eq!(zip.len(), 2);
    let mut buf = String::new();
    zip.by_name("A.png").unwrap().read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "second");
}
