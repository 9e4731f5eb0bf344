use crate::model::todo::{Todo, TodoList};

/// Single-capacity memory of the most recent deletion.
///
/// A new delete overwrites the slot, so only the latest one can be undone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoSlot {
    slot: Option<(Todo, usize)>,
}

impl UndoSlot {
    pub fn new() -> Self {
        UndoSlot { slot: None }
    }

    /// Remember a deleted item and the index it was removed from
    pub fn record(&mut self, item: Todo, index: usize) {
        self.slot = Some((item, index));
    }

    /// Take the remembered deletion, leaving the slot empty
    pub fn consume(&mut self) -> Option<(Todo, usize)> {
        self.slot.take()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn is_available(&self) -> bool {
        self.slot.is_some()
    }

    /// Consume the slot and splice the item back into `list` at
    /// `min(recorded_index, len)`. Returns the index it landed at.
    pub fn restore_into(&mut self, list: &mut TodoList) -> Option<usize> {
        let (item, index) = self.consume()?;
        Some(list.splice_at(index, item))
    }
}
