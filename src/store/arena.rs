//! Slot arena backing the store's node handles.
//!
//! Nodes live in contiguous slots; a [`NodeId`] is the slot index. Freed
//! slots go on a free list and are reused LIFO, so a stale handle may later
//! alias a newly created node — the same hazard as a freed-and-reallocated
//! pointer, and deliberately left to the caller to avoid.

use crate::types::NodeId;

#[derive(Debug)]
struct Slot<T> {
    data: Option<T>,
    next_free: Option<u32>,
}

/// Contiguous node storage with free-list reuse.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_list_head: Option<u32>,
    live_count: usize,
}

impl<T> NodeArena<T> {
    pub(crate) fn new() -> Self {
        Self { slots: Vec::new(), free_list_head: None, live_count: 0 }
    }

    /// Store `data` in a slot and return its handle, reusing the most
    /// recently freed slot if one is available.
    pub(crate) fn allocate(&mut self, data: T) -> NodeId {
        self.live_count += 1;
        if let Some(idx) = self.free_list_head {
            let slot = &mut self.slots[idx as usize];
            debug_assert!(slot.data.is_none(), "free slot should have no data");
            self.free_list_head = slot.next_free;
            slot.data = Some(data);
            slot.next_free = None;
            NodeId::new(idx)
        } else {
            let idx = self.slots.len() as u32;
            self.slots.push(Slot { data: Some(data), next_free: None });
            NodeId::new(idx)
        }
    }

    /// Free the slot behind `id`, returning its data.
    ///
    /// Returns `None` if the handle is stale (already freed or never
    /// allocated); the arena is left untouched in that case.
    pub(crate) fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let idx = id.as_u32() as usize;
        let slot = self.slots.get_mut(idx)?;
        let data = slot.data.take()?;
        slot.next_free = self.free_list_head;
        self.free_list_head = Some(id.as_u32());
        self.live_count -= 1;
        Some(data)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.as_u32() as usize).and_then(|slot| slot.data.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.as_u32() as usize).and_then(|slot| slot.data.as_mut())
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live slots.
    pub(crate) fn live_count(&self) -> usize {
        self.live_count
    }

    /// Empty the arena, returning all remaining data in slot order.
    pub(crate) fn drain(&mut self) -> Vec<T> {
        let drained: Vec<T> = self.slots.drain(..).filter_map(|slot| slot.data).collect();
        self.free_list_head = None;
        self.live_count = 0;
        drained
    }
}
