//! Intrusive doubly linked list threaded through `SlotArena` nodes.
//!
//! The list owns no nodes. It stores only `head`, `tail` and a length; the
//! `prev`/`next` links live inside the arena values themselves. A node type
//! can carry several independent link pairs ("lanes"), so one arena value can
//! sit in several lists at once without extra allocation.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<N>)                      lane 0 list       lane 1 list
//!   ┌────────┬──────────────────────────────┐
//!   │ SlotId │ N { .., links: [L0, L1] }     │  head ─► id_2      head ─► id_1
//!   ├────────┼──────────────────────────────┤          │                 │
//!   │ id_1   │ L0: {prev: id_2, next: None} │          ▼                 ▼
//!   │ id_2   │ L0: {prev: None, next: id_1} │         id_1 ◄─ tail      id_2 ◄─ tail
//!   └────────┴──────────────────────────────┘
//! ```
//!
//! ## Operations
//! - `push_front` / `push_back`: O(1)
//! - `unlink`: O(1)
//! - `move_to_front` / `move_to_back`: O(1)
//! - `iter` / `iter_rev`: O(n)
//!
//! The lane is a const parameter, so a list for lane 0 can never be handed
//! lane 1 links by mistake.

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

/// One `prev`/`next` pair embedded in a node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Links {
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Node types that embed one [`Links`] pair per lane.
pub trait Linked {
    fn links(&self, lane: usize) -> &Links;
    fn links_mut(&mut self, lane: usize) -> &mut Links;
}

/// Doubly linked list over the `LANE` links of arena nodes.
#[derive(Debug, Default, Clone)]
pub struct IntrusiveList<const LANE: usize> {
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<const LANE: usize> IntrusiveList<LANE> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn front(&self) -> Option<SlotId> {
        self.head
    }

    #[inline]
    pub fn back(&self) -> Option<SlotId> {
        self.tail
    }

    /// Links `id` at the head. The node must not already be in this list.
    pub fn push_front<N: Linked>(&mut self, arena: &mut SlotArena<N>, id: SlotId) -> bool {
        let old_head = self.head;
        match arena.get_mut(id) {
            Some(node) => {
                *node.links_mut(LANE) = Links {
                    prev: None,
                    next: old_head,
                }
            },
            None => return false,
        }
        match old_head {
            Some(head) => {
                if let Some(node) = arena.get_mut(head) {
                    node.links_mut(LANE).prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        true
    }

    /// Links `id` at the tail. The node must not already be in this list.
    pub fn push_back<N: Linked>(&mut self, arena: &mut SlotArena<N>, id: SlotId) -> bool {
        let old_tail = self.tail;
        match arena.get_mut(id) {
            Some(node) => {
                *node.links_mut(LANE) = Links {
                    prev: old_tail,
                    next: None,
                }
            },
            None => return false,
        }
        match old_tail {
            Some(tail) => {
                if let Some(node) = arena.get_mut(tail) {
                    node.links_mut(LANE).next = Some(id);
                }
            },
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        true
    }

    /// Detaches `id` from the list; returns `false` if it was not linked here.
    pub fn unlink<N: Linked>(&mut self, arena: &mut SlotArena<N>, id: SlotId) -> bool {
        let Some(node) = arena.get(id) else {
            return false;
        };
        let Links { prev, next } = *node.links(LANE);
        if prev.is_none() && self.head != Some(id) {
            return false;
        }

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = arena.get_mut(prev_id) {
                    prev_node.links_mut(LANE).next = next;
                }
            },
            None => self.head = next,
        }
        match next {
            Some(next_id) => {
                if let Some(next_node) = arena.get_mut(next_id) {
                    next_node.links_mut(LANE).prev = prev;
                }
            },
            None => self.tail = prev,
        }
        if let Some(node) = arena.get_mut(id) {
            *node.links_mut(LANE) = Links::default();
        }
        self.len -= 1;
        true
    }

    /// Moves a linked node to the head; returns `false` if it is not linked here.
    pub fn move_to_front<N: Linked>(&mut self, arena: &mut SlotArena<N>, id: SlotId) -> bool {
        if self.head == Some(id) {
            return arena.contains(id);
        }
        self.unlink(arena, id) && self.push_front(arena, id)
    }

    /// Moves a linked node to the tail; returns `false` if it is not linked here.
    pub fn move_to_back<N: Linked>(&mut self, arena: &mut SlotArena<N>, id: SlotId) -> bool {
        if self.tail == Some(id) {
            return arena.contains(id);
        }
        self.unlink(arena, id) && self.push_back(arena, id)
    }

    /// Forgets every node. The caller is responsible for the arena.
    pub fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates `(SlotId, &N)` from head to tail.
    pub fn iter<'a, N: Linked>(&self, arena: &'a SlotArena<N>) -> Iter<'a, N, LANE> {
        Iter {
            arena,
            current: self.head,
            reverse: false,
        }
    }

    /// Iterates `(SlotId, &N)` from tail to head.
    pub fn iter_rev<'a, N: Linked>(&self, arena: &'a SlotArena<N>) -> Iter<'a, N, LANE> {
        Iter {
            arena,
            current: self.tail,
            reverse: true,
        }
    }

    /// Walks the list and checks link symmetry, length and termination.
    pub fn validate<N: Linked>(&self, arena: &SlotArena<N>) -> Result<(), InvariantError> {
        if self.head.is_none() || self.tail.is_none() {
            if self.head.is_some() || self.tail.is_some() || self.len != 0 {
                return Err(InvariantError::new(format!(
                    "lane {LANE}: half-empty list (head {:?}, tail {:?}, len {})",
                    self.head, self.tail, self.len
                )));
            }
            return Ok(());
        }

        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            count += 1;
            if count > self.len || count > arena.len() {
                return Err(InvariantError::new(format!(
                    "lane {LANE}: walk exceeded length {} (cycle?)",
                    self.len
                )));
            }
            let node = arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("lane {LANE}: stale {id:?}")))?;
            let links = node.links(LANE);
            if links.prev != prev {
                return Err(InvariantError::new(format!(
                    "lane {LANE}: {id:?} has prev {:?}, expected {prev:?}",
                    links.prev
                )));
            }
            prev = Some(id);
            current = links.next;
        }

        if prev != self.tail {
            return Err(InvariantError::new(format!(
                "lane {LANE}: walk ended at {prev:?}, tail is {:?}",
                self.tail
            )));
        }
        if count != self.len {
            return Err(InvariantError::new(format!(
                "lane {LANE}: counted {count} nodes, len is {}",
                self.len
            )));
        }
        Ok(())
    }
}

/// Iterator over the nodes of an [`IntrusiveList`].
pub struct Iter<'a, N, const LANE: usize> {
    arena: &'a SlotArena<N>,
    current: Option<SlotId>,
    reverse: bool,
}

impl<'a, N: Linked, const LANE: usize> Iterator for Iter<'a, N, LANE> {
    type Item = (SlotId, &'a N);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.arena.get(id)?;
        let links = node.links(LANE);
        self.current = if self.reverse {
            links.prev
        } else {
            links.next
        };
        Some((id, node))
    }
}
