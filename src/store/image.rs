//! Store image codec
//!
//! Encodes a whole `Database` into one contiguous block and back.

use std::path::Path;

use bytes::{Bytes, BytesMut};

use crate::error::{Result, SlotDbError};
use crate::record::Record;

use super::Database;

/// Exact size in bytes of an image with the given layout
///
/// Saturates at `u64::MAX` for layouts too large to exist.
pub fn image_len(capacity: usize, field_len: usize) -> u64 {
    (capacity as u64).saturating_mul(Record::encoded_len(field_len) as u64)
}

/// Encode every slot, in slot order, into one block
pub fn encode_image(db: &Database) -> Bytes {
    let len = image_len(db.capacity(), db.field_len()) as usize;
    let mut buf = BytesMut::with_capacity(len);
    for record in db.slots() {
        record.encode_into(&mut buf);
    }
    buf.freeze()
}

/// Decode a full image
///
/// `data` must be exactly one image for the layout. Each slot's stored id
/// must match its position. `path` is only used for error reporting.
pub fn decode_image(
    data: &[u8],
    capacity: usize,
    field_len: usize,
    path: &Path,
) -> Result<Database> {
    let expected = image_len(capacity, field_len);
    if data.len() as u64 != expected {
        return Err(corrupt(
            path,
            format!("expected {} bytes, found {}", expected, data.len()),
        ));
    }

    let mut buf = data;
    let mut slots = Vec::with_capacity(capacity);
    for index in 0..capacity {
        let record = Record::decode(&mut buf, field_len)
            .map_err(|e| corrupt(path, format!("slot {}: {}", index, e)))?;

        if record.id() as usize != index {
            return Err(corrupt(
                path,
                format!("slot {} holds id {}", index, record.id()),
            ));
        }
        slots.push(record);
    }

    Ok(Database::from_slots(slots, field_len))
}

/// CRC32 of an encoded image
pub fn checksum(image: &[u8]) -> u32 {
    crc32fast::hash(image)
}

fn corrupt(path: &Path, reason: String) -> SlotDbError {
    SlotDbError::CorruptStore {
        path: path.to_path_buf(),
        reason,
    }
}
