//! Address records
//!
//! A `Record` is one slot of the store: an id, an occupied flag and two
//! fixed-width byte buffers (name and email).
//!
//! ## Encoded Layout
//! ```text
//! ┌──────────┬──────────────┬────────────┬────────────┐
//! │ Id (4)   │ Occupied (4) │  Name (L)  │ Email (L)  │
//! └──────────┴──────────────┴────────────┴────────────┘
//! ```
//! Integers are little-endian u32. Text fields are NUL-padded to L bytes.
//!
//! ## Field Boundary
//! A value of L bytes or more fills the whole buffer and carries no NUL
//! terminator. Reads never go past L, so such a value reads back as its
//! first L bytes. Values are cut at the byte level and may split a UTF-8
//! sequence; the `*_lossy` accessors replace the broken tail.

use std::borrow::Cow;
use std::fmt;

use bytes::{Buf, BufMut};
use thiserror::Error;

/// Size of the id field
pub const ID_SIZE: usize = 4;

/// Size of the occupied flag
pub const OCCUPIED_SIZE: usize = 4;

/// Fixed bytes preceding the two text fields
pub const RECORD_HEADER_SIZE: usize = ID_SIZE + OCCUPIED_SIZE;

/// Problems found while decoding a single record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordFormatError {
    #[error("need {needed} bytes, only {remaining} left")]
    Truncated { needed: usize, remaining: usize },

    #[error("occupied flag must be 0 or 1, found {0}")]
    BadOccupiedFlag(u32),
}

/// One fixed-size slot of the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: u32,
    occupied: bool,
    name: Box<[u8]>,
    email: Box<[u8]>,
}

impl Record {
    /// An unoccupied slot with cleared buffers
    pub fn empty(id: u32, field_len: usize) -> Self {
        Self {
            id,
            occupied: false,
            name: vec![0u8; field_len].into_boxed_slice(),
            email: vec![0u8; field_len].into_boxed_slice(),
        }
    }

    /// Slot index this record lives at
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Width of each text buffer
    pub fn field_len(&self) -> usize {
        self.name.len()
    }

    /// Name bytes up to the first NUL, or the full buffer if there is none
    pub fn name(&self) -> &[u8] {
        until_nul(&self.name)
    }

    /// Email bytes up to the first NUL, or the full buffer if there is none
    pub fn email(&self) -> &[u8] {
        until_nul(&self.email)
    }

    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.name())
    }

    pub fn email_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.email())
    }

    /// The whole name buffer, padding included
    pub fn raw_name(&self) -> &[u8] {
        &self.name
    }

    /// The whole email buffer, padding included
    pub fn raw_email(&self) -> &[u8] {
        &self.email
    }

    /// Mark occupied and copy both values in, cutting each at the field width.
    ///
    /// Returns true when either value had to be cut.
    pub(crate) fn fill(&mut self, name: &[u8], email: &[u8]) -> bool {
        self.occupied = true;
        let name_cut = copy_field(&mut self.name, name);
        let email_cut = copy_field(&mut self.email, email);
        name_cut || email_cut
    }

    /// Back to an unoccupied slot with cleared buffers
    pub(crate) fn clear(&mut self) {
        self.occupied = false;
        self.name.fill(0);
        self.email.fill(0);
    }

    /// Encoded size of a record with the given field width
    ///
    /// Saturates instead of overflowing; `Config::validate` rejects layouts
    /// that get anywhere near that.
    pub const fn encoded_len(field_len: usize) -> usize {
        RECORD_HEADER_SIZE.saturating_add(field_len.saturating_mul(2))
    }

    /// Append the encoded record to `buf`
    pub fn encode_into<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.id);
        buf.put_u32_le(u32::from(self.occupied));
        buf.put_slice(&self.name);
        buf.put_slice(&self.email);
    }

    /// Decode one record from the front of `buf`
    ///
    /// Unoccupied records come back with cleared buffers whatever the
    /// file held.
    pub fn decode<B: Buf>(buf: &mut B, field_len: usize) -> Result<Self, RecordFormatError> {
        let needed = Self::encoded_len(field_len);
        if buf.remaining() < needed {
            return Err(RecordFormatError::Truncated {
                needed,
                remaining: buf.remaining(),
            });
        }

        let id = buf.get_u32_le();
        let occupied = match buf.get_u32_le() {
            0 => false,
            1 => true,
            other => return Err(RecordFormatError::BadOccupiedFlag(other)),
        };

        let mut record = Self::empty(id, field_len);
        buf.copy_to_slice(&mut record.name);
        buf.copy_to_slice(&mut record.email);

        if occupied {
            record.occupied = true;
        } else {
            record.clear();
        }
        Ok(record)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.name_lossy(), self.email_lossy())
    }
}

fn until_nul(field: &[u8]) -> &[u8] {
    match field.iter().position(|&b| b == 0) {
        Some(end) => &field[..end],
        None => field,
    }
}

/// Copy `value` into `field`, zero the tail. Returns true if `value` was cut.
fn copy_field(field: &mut [u8], value: &[u8]) -> bool {
    let n = value.len().min(field.len());
    field[..n].copy_from_slice(&value[..n]);
    field[n..].fill(0);
    value.len() > field.len()
}
