//! Store Connection
//!
//! The open handle: backing file plus in-memory image.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{Config, SyncStrategy};
use crate::error::{Result, SlotDbError};
use crate::record::Record;

use super::image::{checksum, decode_image, encode_image, image_len};
use super::{Database, ListIter};

/// How `Connection::open` treats the backing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Create or truncate the file; nothing is loaded
    Create,

    /// Open an existing file read/write and load its image
    Existing,
}

/// An open store
///
/// ## Lifecycle
/// - `open` establishes the file handle (and loads the image in
///   `Existing` mode)
/// - operations mutate the in-memory image only
/// - `persist` rewrites the whole file from the image
/// - `close` releases the file; it never persists
///
/// Dropping a connection without `close` is fine on error paths; the file
/// is released the same way.
pub struct Connection {
    /// Backing file path (for diagnostics)
    path: PathBuf,

    /// Open backing file
    file: File,

    /// In-memory image
    db: Database,

    /// Applied at the end of every persist and on close
    sync_strategy: SyncStrategy,

    /// Image changed since last load/persist
    dirty: bool,
}

impl Connection {
    /// Open a store described by `config`
    ///
    /// In `Create` mode the in-memory image starts with every slot empty.
    /// In `Existing` mode the file must hold exactly one image for the
    /// configured layout, otherwise `CorruptStore` is returned.
    pub fn open(config: &Config, mode: OpenMode) -> Result<Self> {
        config.validate()?;
        let path = config.path.clone();

        let (file, db) = match mode {
            OpenMode::Create => {
                let file = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&path)
                    .map_err(|source| SlotDbError::Open {
                        path: path.clone(),
                        source,
                    })?;
                (file, Database::new(config.capacity, config.field_len))
            }
            OpenMode::Existing => {
                let mut file = OpenOptions::new()
                    .read(true)
                    .write(true)
                    .open(&path)
                    .map_err(|source| SlotDbError::Open {
                        path: path.clone(),
                        source,
                    })?;
                let db = Self::load(&mut file, &path, config)?;
                (file, db)
            }
        };

        debug!(path = %path.display(), ?mode, "opened store");

        Ok(Self {
            path,
            file,
            db,
            sync_strategy: config.sync_strategy,
            dirty: false,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses the default layout and sync strategy
    pub fn open_path(path: &Path, mode: OpenMode) -> Result<Self> {
        let config = Config::builder().path(path).build();
        Self::open(&config, mode)
    }

    /// Read the whole image in one transfer
    fn load(file: &mut File, path: &Path, config: &Config) -> Result<Database> {
        let expected = image_len(config.capacity, config.field_len);
        let actual = file.metadata().map_err(file_error(path))?.len();
        if actual != expected {
            return Err(SlotDbError::CorruptStore {
                path: path.to_path_buf(),
                reason: format!("expected {} bytes, found {}", expected, actual),
            });
        }

        let mut data = vec![0u8; expected as usize];
        file.read_exact(&mut data).map_err(file_error(path))?;
        let db = decode_image(&data, config.capacity, config.field_len, path)?;

        debug!(
            path = %path.display(),
            occupied = db.occupied_count(),
            "loaded store image"
        );
        Ok(db)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Reset every slot to empty (memory only)
    pub fn initialize(&mut self) {
        self.db.initialize();
        self.dirty = true;
    }

    /// Rewrite the whole file from the in-memory image
    ///
    /// A write that stops short of the full image fails inside `write_all`
    /// with `WriteZero`.
    pub fn persist(&mut self) -> Result<()> {
        let image = encode_image(&self.db);
        let len = image.len() as u64;

        self.write_image(&image).map_err(file_error(&self.path))?;

        self.dirty = false;
        info!(path = %self.path.display(), bytes = len, "persisted store");
        Ok(())
    }

    fn write_image(&mut self, image: &[u8]) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(image)?;

        // Drop anything past the image left by an earlier, larger file
        self.file.set_len(image.len() as u64)?;
        self.file.flush()?;
        if self.sync_strategy == SyncStrategy::Sync {
            self.file.sync_all()?;
        }
        Ok(())
    }

    /// Fill an empty slot; see `Database::set`
    pub fn set(
        &mut self,
        id: i64,
        name: impl AsRef<[u8]>,
        email: impl AsRef<[u8]>,
    ) -> Result<&Record> {
        let record = self.db.set(id, name.as_ref(), email.as_ref())?;
        self.dirty = true;
        Ok(record)
    }

    /// Get an occupied record
    pub fn get(&self, id: i64) -> Result<&Record> {
        self.db.get(id)
    }

    /// Clear a slot; clearing an empty slot is a no-op
    pub fn delete(&mut self, id: i64) -> Result<()> {
        self.db.delete(id)?;
        self.dirty = true;
        Ok(())
    }

    /// Occupied records in ascending slot order
    pub fn list(&self) -> ListIter<'_> {
        self.db.iter()
    }

    /// Release the file
    ///
    /// Unpersisted changes are discarded. With `SyncStrategy::Sync` the file
    /// is fsynced before it is released.
    pub fn close(self) -> Result<()> {
        if self.dirty {
            warn!(path = %self.path.display(), "closing store with unpersisted changes");
        }
        if self.sync_strategy == SyncStrategy::Sync {
            self.file.sync_all().map_err(file_error(&self.path))?;
        }
        debug!(path = %self.path.display(), "closed store");
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the in-memory image
    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn capacity(&self) -> usize {
        self.db.capacity()
    }

    pub fn field_len(&self) -> usize {
        self.db.field_len()
    }

    pub fn occupied_count(&self) -> usize {
        self.db.occupied_count()
    }

    /// True when the image has changes not yet persisted
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Size in bytes of the persisted image
    pub fn image_len(&self) -> u64 {
        image_len(self.db.capacity(), self.db.field_len())
    }

    /// CRC32 of the current in-memory image
    pub fn checksum(&self) -> u32 {
        checksum(&encode_image(&self.db))
    }
}

/// Attach the backing path to an I/O failure
fn file_error(path: &Path) -> impl FnOnce(io::Error) -> SlotDbError + '_ {
    move |source| SlotDbError::File {
        path: path.to_path_buf(),
        source,
    }
}
