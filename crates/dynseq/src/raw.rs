//! Fixed-length slot storage backing a [`DynamicSequence`](crate::DynamicSequence).
//!
//! A [`SlotBuffer`] is a boxed slice of `Option<T>` slots. `None` marks an
//! unwritten slot; `Some(value)` a written one. The buffer never changes
//! length in place: growth allocates a new block and moves the written
//! prefix across.

/// Owned, fixed-length block of slots.
#[derive(Clone)]
pub(crate) struct SlotBuffer<T> {
    slots: Box<[Option<T>]>,
}

impl<T> SlotBuffer<T> {
    /// Allocate `capacity` unwritten slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Take ownership of `items`, writing every slot in order.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            slots: items.into_iter().map(Some).collect(),
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Replace the block with a new one of `new_capacity` slots, moving the
    /// first `len` slots across in order.
    pub fn grow(&mut self, new_capacity: usize, len: usize) {
        debug_assert!(new_capacity > self.capacity());
        let mut next = Self::new(new_capacity);
        for (dst, src) in next.slots.iter_mut().zip(&mut self.slots[..len]) {
            *dst = src.take();
        }
        *self = next;
    }

    /// Shared access to a written slot. `None` if unwritten or past capacity.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Mutable access to a written slot.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Write `value` into an unwritten slot.
    pub fn write(&mut self, index: usize, value: T) {
        debug_assert!(self.slots[index].is_none(), "slot {index} already written");
        self.slots[index] = Some(value);
    }

    /// Overwrite a slot, returning what it held.
    pub fn replace(&mut self, index: usize, value: T) -> Option<T> {
        self.slots[index].replace(value)
    }

    /// Unwrite a slot, returning what it held.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots[index].take()
    }

    /// Move slots `[index, len)` one position right.
    ///
    /// Slot `len` must be unwritten; afterwards slot `index` is.
    pub fn shift_right(&mut self, index: usize, len: usize) {
        debug_assert!(len < self.capacity() && self.slots[len].is_none());
        self.slots[index..=len].rotate_right(1);
    }

    /// Move slots `(index, len)` one position left.
    ///
    /// Slot `index` must be unwritten; afterwards slot `len - 1` is.
    pub fn shift_left(&mut self, index: usize, len: usize) {
        debug_assert!(self.slots[index].is_none());
        self.slots[index..len].rotate_left(1);
    }

    /// Unwrite slots `[0, len)`.
    pub fn clear(&mut self, len: usize) {
        for slot in &mut self.slots[..len] {
            *slot = None;
        }
    }

    /// The first `len` slots.
    pub fn written(&self, len: usize) -> &[Option<T>] {
        &self.slots[..len]
    }
}
