//! # SlotDB
//!
//! A single-file address record store with:
//! - A fixed number of fixed-size slots, addressed by id == slot index
//! - Set / get / delete / list against an in-memory image
//! - Whole-image load on open and whole-image rewrite on persist
//! - An explicit little-endian on-disk layout
//!
//! Also carries a small fixed-capacity integer stack (`stack`).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Caller (CLI / tests)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ open / set / get / delete / list
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Connection                             │
//! │              (file handle + dirty tracking)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Database   │ ◄─────── │ Image codec │ ◄── backing file
//!   │  (slots)    │  decode  │  (bytes)    │ ──► (whole rewrite)
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod stack;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SlotDbError, Result};
pub use config::Config;
pub use record::Record;
pub use store::{Connection, Database, OpenMode};
pub use stack::BoundedStack;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of SlotDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
