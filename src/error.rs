//! Error types for SlotDB
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using SlotDbError
pub type Result<T> = std::result::Result<T, SlotDbError>;

/// Unified error type for SlotDB operations
#[derive(Debug, Error)]
pub enum SlotDbError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error on {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Image Errors
    // -------------------------------------------------------------------------
    #[error("Corrupt store {}: {reason}", path.display())]
    CorruptStore { path: PathBuf, reason: String },

    // -------------------------------------------------------------------------
    // Slot Errors
    // -------------------------------------------------------------------------
    #[error("Invalid id {id}: must be in 0..{capacity}")]
    InvalidId { id: i64, capacity: usize },

    #[error("Id {id} is already set, delete it first")]
    AlreadySet { id: usize },

    #[error("Id {id} is not set")]
    NotSet { id: usize },

    // -------------------------------------------------------------------------
    // Stack Errors
    // -------------------------------------------------------------------------
    #[error("Stack is full (capacity {capacity})")]
    StackFull { capacity: usize },

    #[error("Stack is empty")]
    StackEmpty,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
