//! Store Iterator
//!
//! Sequential iteration over the occupied slots of a store.

use std::slice;

use crate::record::Record;

/// Iterator over occupied records in ascending slot order
///
/// Borrowed from the store; call `list()` again to start over.
#[derive(Clone)]
pub struct ListIter<'a> {
    slots: slice::Iter<'a, Record>,
}

impl<'a> ListIter<'a> {
    pub(super) fn new(slots: &'a [Record]) -> Self {
        Self { slots: slots.iter() }
    }
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find(|record| record.is_occupied())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}
