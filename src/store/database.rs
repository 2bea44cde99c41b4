//! In-memory store image
//!
//! The slot array and every operation that only touches memory.

use tracing::{debug, warn};

use crate::error::{Result, SlotDbError};
use crate::record::Record;

use super::iterator::ListIter;

/// Fixed-capacity array of record slots
///
/// The slot count never changes after construction. Every slot's id equals
/// its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    slots: Vec<Record>,
    field_len: usize,
}

impl Database {
    /// A store with every slot empty
    pub fn new(capacity: usize, field_len: usize) -> Self {
        let slots = (0..capacity)
            .map(|i| Record::empty(i as u32, field_len))
            .collect();
        Self { slots, field_len }
    }

    /// Wrap already-decoded slots (ids checked by the caller)
    pub(crate) fn from_slots(slots: Vec<Record>, field_len: usize) -> Self {
        Self { slots, field_len }
    }

    /// Reset every slot to empty
    pub fn initialize(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = Record::empty(i as u32, self.field_len);
        }
        debug!(capacity = self.slots.len(), "initialized all slots");
    }

    /// Get an occupied record
    pub fn get(&self, id: i64) -> Result<&Record> {
        let index = self.slot_index(id)?;
        let record = &self.slots[index];
        if !record.is_occupied() {
            return Err(SlotDbError::NotSet { id: index });
        }
        Ok(record)
    }

    /// Fill an empty slot
    ///
    /// Values longer than the field width are cut to it. An occupied slot is
    /// left untouched and reported as `AlreadySet`.
    pub fn set(&mut self, id: i64, name: &[u8], email: &[u8]) -> Result<&Record> {
        let index = self.slot_index(id)?;
        let field_len = self.field_len;
        let record = &mut self.slots[index];
        if record.is_occupied() {
            return Err(SlotDbError::AlreadySet { id: index });
        }

        if name.len() >= field_len || email.len() >= field_len {
            warn!(
                id = index,
                name_len = name.len(),
                email_len = email.len(),
                field_len,
                "value fills its field; stored without terminator"
            );
        }
        record.fill(name, email);
        debug!(id = index, "set slot");
        Ok(&*record)
    }

    /// Clear a slot, occupied or not
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let index = self.slot_index(id)?;
        self.slots[index] = Record::empty(index as u32, self.field_len);
        debug!(id = index, "deleted slot");
        Ok(())
    }

    /// Occupied records in ascending slot order
    pub fn iter(&self) -> ListIter<'_> {
        ListIter::new(&self.slots)
    }

    /// Every slot, occupied or not
    pub fn slots(&self) -> &[Record] {
        &self.slots
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn field_len(&self) -> usize {
        self.field_len
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|r| r.is_occupied()).count()
    }

    /// Map a caller id to a slot index, rejecting anything outside 0..capacity
    pub fn slot_index(&self, id: i64) -> Result<usize> {
        usize::try_from(id)
            .ok()
            .filter(|&index| index < self.slots.len())
            .ok_or(SlotDbError::InvalidId {
                id,
                capacity: self.slots.len(),
            })
    }
}
