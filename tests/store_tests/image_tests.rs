//! Tests for the on-disk image format
//!
//! These tests verify:
//! - Exact byte layout of slots in the file
//! - Little-endian integer encoding
//! - Detection of damaged images (bad flags, misplaced ids, wrong size)

use std::fs;
use std::path::{Path, PathBuf};

use slotdb::record::Record;
use slotdb::store::{decode_image, encode_image, image_len, Connection, Database, OpenMode};
use slotdb::SlotDbError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const FIELD_LEN: usize = 512;
const RECORD_LEN: usize = 8 + 2 * FIELD_LEN;

fn setup_temp_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("image.db");
    (temp_dir, path)
}

/// Persist a default-layout store with a single record in slot `id`
fn write_store_with(path: &Path, id: i64, name: &str, email: &str) {
    let mut conn = Connection::open_path(path, OpenMode::Create).unwrap();
    conn.initialize();
    conn.set(id, name, email).unwrap();
    conn.persist().unwrap();
    conn.close().unwrap();
}

fn u32_at(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_record_encoded_len() {
    assert_eq!(Record::encoded_len(FIELD_LEN), RECORD_LEN);
    assert_eq!(image_len(100, FIELD_LEN), 100 * RECORD_LEN as u64);
}

#[test]
fn test_file_layout_of_single_record() {
    let (_temp, path) = setup_temp_path();
    write_store_with(&path, 1, "Alice", "a@x.com");

    let data = fs::read(&path).unwrap();
    let slot = RECORD_LEN;

    assert_eq!(u32_at(&data, slot), 1);
    assert_eq!(u32_at(&data, slot + 4), 1);
    assert_eq!(&data[slot + 8..slot + 13], b"Alice");
    assert!(data[slot + 13..slot + 8 + FIELD_LEN].iter().all(|&b| b == 0));

    let email = slot + 8 + FIELD_LEN;
    assert_eq!(&data[email..email + 7], b"a@x.com");
    assert!(data[email + 7..slot + RECORD_LEN].iter().all(|&b| b == 0));
}

#[test]
fn test_every_slot_stores_its_index() {
    let (_temp, path) = setup_temp_path();
    write_store_with(&path, 0, "a", "b");

    let data = fs::read(&path).unwrap();
    for index in 0..100 {
        let offset = index * RECORD_LEN;
        assert_eq!(u32_at(&data, offset), index as u32);
        let expected_flag = if index == 0 { 1 } else { 0 };
        assert_eq!(u32_at(&data, offset + 4), expected_flag);
    }
}

#[test]
fn test_encode_decode_preserves_database() {
    let mut db = Database::new(10, 32);
    db.set(0, b"zero", b"0@x").unwrap();
    db.set(9, b"nine", b"9@x").unwrap();

    let image = encode_image(&db);
    let decoded = decode_image(&image, 10, 32, Path::new("mem")).unwrap();

    assert_eq!(decoded, db);
}

// =============================================================================
// Corruption Tests
// =============================================================================

#[test]
fn test_bad_occupied_flag_is_corrupt() {
    let (_temp, path) = setup_temp_path();
    write_store_with(&path, 0, "a", "b");

    let mut data = fs::read(&path).unwrap();
    let flag = 3 * RECORD_LEN + 4;
    data[flag..flag + 4].copy_from_slice(&7u32.to_le_bytes());
    fs::write(&path, &data).unwrap();

    match Connection::open_path(&path, OpenMode::Existing) {
        Err(SlotDbError::CorruptStore { path: reported, reason }) => {
            assert_eq!(reported, path);
            assert!(reason.contains("slot 3"), "reason: {reason}");
        }
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("damaged flag should not load"),
    }
}

#[test]
fn test_misplaced_id_is_corrupt() {
    let (_temp, path) = setup_temp_path();
    write_store_with(&path, 0, "a", "b");

    let mut data = fs::read(&path).unwrap();
    let id = 5 * RECORD_LEN;
    data[id..id + 4].copy_from_slice(&6u32.to_le_bytes());
    fs::write(&path, &data).unwrap();

    let result = Connection::open_path(&path, OpenMode::Existing);
    assert!(matches!(result, Err(SlotDbError::CorruptStore { .. })));
}

#[test]
fn test_decode_wrong_length() {
    let db = Database::new(4, 8);
    let image = encode_image(&db);

    let result = decode_image(&image[..image.len() - 1], 4, 8, Path::new("mem"));
    assert!(matches!(result, Err(SlotDbError::CorruptStore { .. })));
}

#[test]
fn test_garbage_in_unoccupied_slot_is_ignored() {
    let (_temp, path) = setup_temp_path();
    write_store_with(&path, 0, "a", "b");

    let mut data = fs::read(&path).unwrap();
    let name = 2 * RECORD_LEN + 8;
    data[name..name + 4].copy_from_slice(b"junk");
    fs::write(&path, &data).unwrap();

    let conn = Connection::open_path(&path, OpenMode::Existing).unwrap();
    assert!(matches!(conn.get(2), Err(SlotDbError::NotSet { id: 2 })));
    assert!(conn.database().slots()[2].raw_name().iter().all(|&b| b == 0));
}
