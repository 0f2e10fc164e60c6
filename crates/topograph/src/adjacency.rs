//! Order-preserving adjacency lists with O(1) handle-based removal.
//!
//! The list is doubly linked, but the links are slot indices into a slab arena rather than
//! pointers. Entries never move, so an [`EntryHandle`] stays valid until its entry is removed;
//! freed slots are chained into a free list and reused by later appends.

use crate::graph::VertexId;

/// Opaque reference to a live list entry, usable for O(1) targeted removal without re-scanning.
///
/// A handle is only meaningful for the list that issued it, and only until the entry it names
/// is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryHandle(usize);

#[derive(Debug, Clone, Copy)]
struct Entry {
    vertex: VertexId,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
enum Slot {
    Occupied(Entry),
    Vacant { next_free: Option<usize> },
}

/// An ordered, mutable collection of vertex ids.
///
/// Stores ids, not vertex data; dropping a list never affects the vertices it refers to.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    slots: Vec<Slot>,
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live entry count. Kept exact on every append/remove; callers use it as an O(1)
    /// degree check.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first entry's vertex id, if any.
    pub fn front(&self) -> Option<VertexId> {
        self.head.map(|idx| self.entry(idx).vertex)
    }

    /// Appends `vertex` at the tail. O(1).
    pub fn push_back(&mut self, vertex: VertexId) -> EntryHandle {
        let entry = Entry {
            vertex,
            prev: self.tail,
            next: None,
        };
        let idx = match self.free {
            Some(idx) => {
                match self.slots[idx] {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                }
                self.slots[idx] = Slot::Occupied(entry);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(entry));
                self.slots.len() - 1
            }
        };
        match self.tail {
            Some(tail) => self.entry_mut(tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        EntryHandle(idx)
    }

    /// Removes and returns the first entry, or `None` if the list is empty. O(1).
    pub fn pop_front(&mut self) -> Option<VertexId> {
        let head = self.head?;
        Some(self.remove(EntryHandle(head)))
    }

    /// Scans from the head for the first entry holding `vertex`. O(len).
    ///
    /// Parallel entries for the same id are distinct; the earliest-appended one is found.
    pub fn find(&self, vertex: VertexId) -> Option<EntryHandle> {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let entry = self.entry(idx);
            if entry.vertex == vertex {
                return Some(EntryHandle(idx));
            }
            cursor = entry.next;
        }
        None
    }

    /// Unlinks the entry named by `handle` and returns its vertex id. O(1).
    ///
    /// Precondition: `handle` was issued by this list and its entry has not been removed.
    /// Panics otherwise.
    pub fn remove(&mut self, handle: EntryHandle) -> VertexId {
        let EntryHandle(idx) = handle;
        let Some(Slot::Occupied(entry)) = self.slots.get(idx).cloned() else {
            panic!("handle {idx} does not name a live entry of this list");
        };
        match entry.prev {
            Some(prev) => self.entry_mut(prev).next = entry.next,
            None => self.head = entry.next,
        }
        match entry.next {
            Some(next) => self.entry_mut(next).prev = entry.prev,
            None => self.tail = entry.prev,
        }
        self.slots[idx] = Slot::Vacant {
            next_free: self.free,
        };
        self.free = Some(idx);
        self.len -= 1;
        entry.vertex
    }

    /// Vertex ids in list order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.entries().map(|(_, vertex)| vertex)
    }

    /// `(handle, vertex)` pairs in list order.
    ///
    /// Collect this before unlinking entries mid-iteration; a removal invalidates the
    /// handle it consumed but no others.
    pub fn entries(&self) -> impl Iterator<Item = (EntryHandle, VertexId)> + '_ {
        std::iter::successors(self.head, |&idx| self.entry(idx).next)
            .map(|idx| (EntryHandle(idx), self.entry(idx).vertex))
    }

    fn entry(&self, idx: usize) -> &Entry {
        match &self.slots[idx] {
            Slot::Occupied(entry) => entry,
            Slot::Vacant { .. } => panic!("adjacency slot {idx} is vacant"),
        }
    }

    fn entry_mut(&mut self, idx: usize) -> &mut Entry {
        match &mut self.slots[idx] {
            Slot::Occupied(entry) => entry,
            Slot::Vacant { .. } => panic!("adjacency slot {idx} is vacant"),
        }
    }
}
