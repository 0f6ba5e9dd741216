//! End-to-end tests of the library pipeline
//!
//! These exercise the complete flow: listing -> ledger write -> ledger read
//! -> reconciliation -> archive, without going through the dispatcher.

use std::fs::File;
use std::io::Read;

use ledger_core::{LedgerEntry, archive::archive, read_ledger, verify, write_ledger};
use ledger_fs::list_images;
use ledger_test_utils::TestImageDir;
use pretty_assertions::assert_eq;

#[test]
fn test_listing_scenario() {
    let dir = TestImageDir::with_images(&["p1.png", "p2.JPG", "note.txt", "p3.webp"]);

    assert_eq!(list_images(dir.root()), vec!["p1.png", "p2.JPG", "p3.webp"]);
}

#[test]
fn test_index_then_verify_is_clean() {
    let dir = TestImageDir::with_images(&["a.png", "b.jpeg", "c.tif", "readme.md"]);
    let ledger = dir.path("ledger.csv");

    let names = list_images(dir.root());
    write_ledger(&ledger, &names).unwrap();
    let entries = read_ledger(&ledger).unwrap();

    assert_eq!(entries, LedgerEntry::numbered(&names));
    let report = verify(&entries, dir.root());
    assert!(report.is_clean(), "unexpected drift: {report:?}");
}

#[test]
fn test_new_file_shows_up_as_extra() {
    let dir = TestImageDir::with_images(&["a.png", "b.png"]);
    let ledger = dir.path("ledger.csv");
    write_ledger(&ledger, list_images(dir.root())).unwrap();

    dir.touch("c.gif");
    let report = verify(&read_ledger(&ledger).unwrap(), dir.root());

    assert!(report.missing.is_empty());
    assert_eq!(report.extra, vec!["c.gif"]);
}

#[test]
fn test_removed_file_shows_up_as_missing() {
    let dir = TestImageDir::with_images(&["a.png", "b.png"]);
    let ledger = dir.path("ledger.csv");
    write_ledger(&ledger, list_images(dir.root())).unwrap();

    dir.remove("b.png");
    let report = verify(&read_ledger(&ledger).unwrap(), dir.root());

    assert_eq!(report.missing, vec!["b.png"]);
    assert!(report.extra.is_empty());
}

#[test]
fn test_archive_from_written_ledger() {
    let dir = TestImageDir::with_images(&["a.png", "b.png", "c.png"]);
    let out = TestImageDir::new();
    let ledger = dir.path("ledger.csv");
    write_ledger(&ledger, list_images(dir.root())).unwrap();
    dir.remove("b.png");

    let entries = read_ledger(&ledger).unwrap();
    let zip_path = out.path("export.zip");
    let exported = archive(dir.root(), &entries, &zip_path).unwrap();

    assert_eq!(exported, 2);
    let mut zip = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
    assert_eq!(zip.len(), 2);
    let mut content = String::new();
    zip.by_name("c.png")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(content, "c.png");
}

#[test]
fn test_hand_edited_ledger_keeps_order_and_skips_bad_rows() {
    let dir = TestImageDir::with_images(&["z.png", "a.png"]);
    dir.write(
        "ledger.csv",
        b"Page,Filename\r\n2,z.png\r\nx,broken.png\r\n1,a.png\r\n",
    );

    let entries = read_ledger(dir.path("ledger.csv")).unwrap();

    assert_eq!(
        entries,
        vec![LedgerEntry::new(2, "z.png"), LedgerEntry::new(1, "a.png")]
    );
    assert!(verify(&entries, dir.root()).is_clean());
}
