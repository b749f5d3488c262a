//! Slot-based storage with stable handles.
//!
//! Values live in a `Vec` of slots. A removed slot turns vacant and joins a
//! chain of free slots threaded through the vacant slots themselves, so reuse
//! needs no side table. A [`SlotId`] stays valid until its slot is removed,
//! which lets linked structures refer to nodes by index instead of by pointer.
//!
//! ```text
//!   slots:      [ Occupied(a) | Vacant(next: 3) | Occupied(c) | Vacant(next: -) ]
//!   first_free: 1
//!
//!   insert(e) ─► takes slot 1, first_free becomes 3 ─► SlotId(1)
//! ```

/// Handle to an occupied slot in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

/// Arena of values addressed by [`SlotId`].
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    first_free: Option<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    /// Creates an arena with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            first_free: None,
            len: 0,
        }
    }

    /// Stores `value` and returns its handle. The most recently freed slot is
    /// reused first.
    pub fn insert(&mut self, value: T) -> SlotId {
        self.len += 1;
        let Some(idx) = self.first_free else {
            self.slots.push(Slot::Occupied(value));
            return SlotId(self.slots.len() - 1);
        };

        let vacated = std::mem::replace(&mut self.slots[idx], Slot::Occupied(value));
        debug_assert!(matches!(vacated, Slot::Vacant { .. }), "free chain hit an occupied slot");
        self.first_free = match vacated {
            Slot::Vacant { next_free } => next_free,
            Slot::Occupied(_) => None,
        };
        SlotId(idx)
    }

    /// Frees the slot and returns its value; `None` if it is already vacant.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        if let Slot::Vacant { .. } = slot {
            return None;
        }

        let vacant = Slot::Vacant {
            next_free: self.first_free,
        };
        match std::mem::replace(slot, vacant) {
            Slot::Occupied(value) => {
                self.first_free = Some(id.0);
                self.len -= 1;
                Some(value)
            },
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every value and invalidates all handles.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.first_free = None;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_reuses_slot() {
        let mut arena = SlotArena::with_capacity(2);
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(a));

        let c = arena.insert("c");
        assert_eq!(c, a);
        assert_eq!(arena.get(c), Some(&"c"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn freed_slots_are_reused_newest_first() {
        let mut arena = SlotArena::with_capacity(4);
        let ids: Vec<_> = (0..4).map(|v| arena.insert(v)).collect();
        arena.remove(ids[1]);
        arena.remove(ids[3]);

        assert_eq!(arena.insert(10), ids[3]);
        assert_eq!(arena.insert(11), ids[1]);
        // chain exhausted, so the arena grows
        assert_eq!(arena.insert(12), SlotId(4));
        assert_eq!(arena.len(), 5);
    }

    #[test]
    fn double_remove_is_noop() {
        let mut arena = SlotArena::with_capacity(1);
        let a = arena.insert(1);
        assert_eq!(arena.remove(a), Some(1));
        assert_eq!(arena.remove(a), None);
        assert!(arena.is_empty());

        // the second remove must not push the slot onto the chain twice
        let b = arena.insert(2);
        let c = arena.insert(3);
        assert_ne!(b, c);
    }

    #[test]
    fn out_of_range_handle_is_absent() {
        let mut arena: SlotArena<u8> = SlotArena::with_capacity(4);
        assert_eq!(arena.get(SlotId(99)), None);
        assert_eq!(arena.get_mut(SlotId(99)), None);
        assert_eq!(arena.remove(SlotId(99)), None);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut arena = SlotArena::with_capacity(2);
        let a = arena.insert(10);
        arena.insert(20);
        arena.remove(a);

        arena.clear();
        assert!(arena.is_empty());
        assert!(!arena.contains(a));
        assert_eq!(arena.insert(30), SlotId(0));
    }
}
