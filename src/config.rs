//! Configuration for SlotDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, SlotDbError};
use crate::record::RECORD_HEADER_SIZE;

/// Default number of slots in a store
pub const DEFAULT_CAPACITY: usize = 100;

/// Default width of the name and email fields, in bytes
pub const DEFAULT_FIELD_LEN: usize = 512;

/// Largest accepted field width (1 MiB)
pub const MAX_FIELD_LEN: usize = 1024 * 1024;

/// Largest accepted image, which is held in memory whole (1 GiB)
pub const MAX_IMAGE_LEN: u64 = 1024 * 1024 * 1024;

/// Main configuration for a SlotDB store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing file holding the whole store image
    pub path: PathBuf,

    /// How persist makes the image durable
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Layout Configuration
    // -------------------------------------------------------------------------
    /// Number of slots; fixed for the lifetime of a file
    pub capacity: usize,

    /// Width (L) of each of the name and email buffers
    pub field_len: usize,
}

/// Durability strategy applied at the end of `persist`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Flush user-space buffers only
    Flush,

    /// Flush, then fsync file data and metadata (slower, survives power loss)
    Sync,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./slotdb.db"),
            sync_strategy: SyncStrategy::Flush,
            capacity: DEFAULT_CAPACITY,
            field_len: DEFAULT_FIELD_LEN,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the layout can be stored on disk
    ///
    /// Ids are written as u32, so the capacity must fit in one. The whole
    /// image is loaded into memory, so its size is capped at `MAX_IMAGE_LEN`.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(SlotDbError::Config("capacity must be at least 1".to_string()));
        }
        if self.capacity > u32::MAX as usize {
            return Err(SlotDbError::Config(format!(
                "capacity {} does not fit a u32 id",
                self.capacity
            )));
        }
        if self.field_len == 0 {
            return Err(SlotDbError::Config("field_len must be at least 1".to_string()));
        }
        if self.field_len > MAX_FIELD_LEN {
            return Err(SlotDbError::Config(format!(
                "field_len {} exceeds {}",
                self.field_len, MAX_FIELD_LEN
            )));
        }

        let image_len = self
            .field_len
            .checked_mul(2)
            .and_then(|fields| fields.checked_add(RECORD_HEADER_SIZE))
            .and_then(|record| record.checked_mul(self.capacity))
            .map(|len| len as u64)
            .filter(|&len| len <= MAX_IMAGE_LEN);
        if image_len.is_none() {
            return Err(SlotDbError::Config(format!(
                "{} slots of field_len {} exceed the {} byte image limit",
                self.capacity, self.field_len, MAX_IMAGE_LEN
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the sync strategy used by persist
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the number of slots
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the width of the name and email fields (in bytes)
    pub fn field_len(mut self, len: usize) -> Self {
        self.config.field_len = len;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
