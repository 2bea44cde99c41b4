//! Store Module
//!
//! Fixed-slot record store persisted as one whole-file image.
//!
//! ## Responsibilities
//! - Hold exactly `capacity` record slots, addressed by id == index
//! - Set / get / delete / list against the in-memory image
//! - Load the whole image on open, rewrite the whole image on persist
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │ Slot 0                                                 │
//! │ ┌────────┬──────────────┬────────────┬────────────┐    │
//! │ │ Id (4) │ Occupied (4) │  Name (L)  │ Email (L)  │    │
//! │ └────────┴──────────────┴────────────┴────────────┘    │
//! ├────────────────────────────────────────────────────────┤
//! │ Slot 1                                                 │
//! │ ... (repeated for every slot, in slot order)           │
//! ├────────────────────────────────────────────────────────┤
//! │ Slot capacity-1                                        │
//! └────────────────────────────────────────────────────────┘
//! ```
//! No header, no padding, little-endian integers. The file is exactly
//! `capacity * (8 + 2L)` bytes; anything else fails to load.
//!
//! Persist overwrites the file in place. A crash halfway through leaves a
//! mixed image on disk.

mod connection;
mod database;
mod image;
mod iterator;

pub use connection::{Connection, OpenMode};
pub use database::Database;
pub use image::{checksum, decode_image, encode_image, image_len};
pub use iterator::ListIter;
