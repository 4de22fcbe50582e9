//! The [`DynamicSequence`] container.
//!
//! Elements live in slots `[0, len)` of an owned [`SlotBuffer`]; slots
//! `[len, capacity)` are always unwritten. Insertion grows the buffer only
//! when every slot is written, and removal clears the vacated trailing slot
//! so the removed value is not kept alive by the buffer.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::SequenceConfig;
use crate::error::SequenceError;
use crate::raw::SlotBuffer;

/// Signed not-found sentinel returned by [`DynamicSequence::index_of_signed`]
/// and [`DynamicSequence::last_index_of_signed`].
pub const NOT_FOUND: isize = -1;

/// A growable, index-addressable sequence backed by contiguous slots.
///
/// Indices are accepted as `isize` so that negative positions coming from
/// callers are rejected with [`SequenceError::IndexOutOfBounds`] rather than
/// wrapping. To store "absent" elements, use an `Option` element type:
/// `None == None` holds for every search operation.
///
/// ```
/// use dynseq::DynamicSequence;
///
/// let mut seq = DynamicSequence::new();
/// seq.add(10);
/// seq.add(30);
/// seq.insert(1, 20)?;
///
/// assert_eq!(seq.to_string(), "[10, 20, 30]");
/// assert_eq!(seq.remove_at(0)?, 10);
/// assert_eq!(seq.index_of(&30), Some(1));
/// # Ok::<(), dynseq::SequenceError>(())
/// ```
#[derive(Clone)]
pub struct DynamicSequence<T> {
    buf: SlotBuffer<T>,
    len: usize,
    config: SequenceConfig,
}

impl<T> DynamicSequence<T> {
    /// Create an empty sequence with the default capacity of 10.
    pub fn new() -> Self {
        Self::from_valid_config(SequenceConfig::default())
    }

    /// Create an empty sequence with room for `capacity` elements.
    ///
    /// A capacity of zero is allowed; the first insertion grows it.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `capacity` is negative.
    pub fn with_capacity(capacity: isize) -> Result<Self, SequenceError> {
        let capacity = usize::try_from(capacity).map_err(|_| SequenceError::InvalidArgument {
            reason: format!("capacity must be >= 0, got {capacity}"),
        })?;
        Ok(Self::from_valid_config(SequenceConfig::new(capacity)))
    }

    /// Create an empty sequence from an explicit growth configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if the config fails
    /// [`SequenceConfig::validate`].
    pub fn with_config(config: SequenceConfig) -> Result<Self, SequenceError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Build a sequence holding `items` in order, with `capacity == len`.
    pub fn from_sequence(items: Vec<T>) -> Self {
        let len = items.len();
        Self {
            buf: SlotBuffer::from_vec(items),
            len,
            config: SequenceConfig::new(len),
        }
    }

    fn from_valid_config(config: SequenceConfig) -> Self {
        Self {
            buf: SlotBuffer::new(config.initial_capacity),
            len: 0,
            config,
        }
    }

    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The growth configuration in effect.
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Append `value` at the end, growing the buffer if it is full.
    pub fn add(&mut self, value: T) {
        self.reserve_slot();
        self.buf.write(self.len, value);
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting later elements one slot right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] unless `0 <= index <= len()`.
    pub fn insert(&mut self, index: isize, value: T) -> Result<(), SequenceError> {
        let at = self.check_insert(index)?;
        self.reserve_slot();
        self.buf.shift_right(at, self.len);
        self.buf.write(at, value);
        self.len += 1;
        Ok(())
    }

    /// Borrow the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] unless `0 <= index < len()`.
    pub fn get(&self, index: isize) -> Result<&T, SequenceError> {
        let at = self.check_access(index)?;
        self.buf
            .get(at)
            .ok_or_else(|| SequenceError::out_of_bounds(index, self.len))
    }

    /// Mutably borrow the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] unless `0 <= index < len()`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, SequenceError> {
        let at = self.check_access(index)?;
        let len = self.len;
        self.buf
            .get_mut(at)
            .ok_or_else(|| SequenceError::out_of_bounds(index, len))
    }

    /// Overwrite the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] unless `0 <= index < len()`.
    pub fn set(&mut self, index: isize, value: T) -> Result<T, SequenceError> {
        let at = self.check_access(index)?;
        self.buf
            .replace(at, value)
            .ok_or_else(|| SequenceError::out_of_bounds(index, self.len))
    }

    /// Remove and return the element at `index`, shifting later elements
    /// one slot left.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] unless `0 <= index < len()`.
    pub fn remove_at(&mut self, index: isize) -> Result<T, SequenceError> {
        let at = self.check_access(index)?;
        self.take_at(at)
            .ok_or_else(|| SequenceError::out_of_bounds(index, self.len))
    }

    /// Remove every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        log::trace!(
            "clearing {} elements, keeping capacity {}",
            self.len,
            self.capacity()
        );
        self.buf.clear(self.len);
        self.len = 0;
    }

    fn take_at(&mut self, at: usize) -> Option<T> {
        let value = self.buf.take(at)?;
        self.buf.shift_left(at, self.len);
        self.len -= 1;
        Some(value)
    }

    /// Grow the buffer if there is no unwritten slot left.
    fn reserve_slot(&mut self) {
        let capacity = self.buf.capacity();
        if self.len < capacity {
            return;
        }
        let new_capacity = self.config.next_capacity(capacity);
        log::debug!("growing sequence storage from {capacity} to {new_capacity} slots");
        self.buf.grow(new_capacity, self.len);
    }

    fn check_access(&self, index: isize) -> Result<usize, SequenceError> {
        usize::try_from(index)
            .ok()
            .filter(|&at| at < self.len)
            .ok_or_else(|| SequenceError::out_of_bounds(index, self.len))
    }

    fn check_insert(&self, index: isize) -> Result<usize, SequenceError> {
        usize::try_from(index)
            .ok()
            .filter(|&at| at <= self.len)
            .ok_or_else(|| SequenceError::out_of_bounds(index, self.len))
    }
}

impl<T: PartialEq> DynamicSequence<T> {
    /// Returns `true` if some element equals `target`.
    pub fn contains(&self, target: &T) -> bool {
        self.index_of(target).is_some()
    }

    /// Position of the first element equal to `target`.
    pub fn index_of(&self, target: &T) -> Option<usize> {
        self.buf
            .written(self.len)
            .iter()
            .position(|slot| slot.as_ref() == Some(target))
    }

    /// Position of the last element equal to `target`.
    pub fn last_index_of(&self, target: &T) -> Option<usize> {
        self.buf
            .written(self.len)
            .iter()
            .rposition(|slot| slot.as_ref() == Some(target))
    }

    /// [`index_of`](Self::index_of) with [`NOT_FOUND`] in place of `None`.
    pub fn index_of_signed(&self, target: &T) -> isize {
        to_signed(self.index_of(target))
    }

    /// [`last_index_of`](Self::last_index_of) with [`NOT_FOUND`] in place of `None`.
    pub fn last_index_of_signed(&self, target: &T) -> isize {
        to_signed(self.last_index_of(target))
    }

    /// Remove the first element equal to `target`.
    ///
    /// Returns `false`, leaving the sequence untouched, if nothing matches.
    pub fn remove_value(&mut self, target: &T) -> bool {
        match self.index_of(target) {
            Some(at) => self.take_at(at).is_some(),
            None => false,
        }
    }
}

impl<T: Clone> DynamicSequence<T> {
    /// Build a sequence by cloning `items`, with `capacity == len`.
    pub fn from_slice(items: &[T]) -> Self {
        Self::from_sequence(items.to_vec())
    }
}

fn to_signed(position: Option<usize>) -> isize {
    position
        .and_then(|at| isize::try_from(at).ok())
        .unwrap_or(NOT_FOUND)
}

impl<T> Default for DynamicSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for DynamicSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_sequence(items)
    }
}

impl<T: PartialEq> PartialEq for DynamicSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf.written(self.len) == other.buf.written(other.len)
    }
}

impl<T: Eq> Eq for DynamicSequence<T> {}

impl<T> Index<usize> for DynamicSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let len = self.len;
        self.buf
            .get(index)
            .unwrap_or_else(|| panic!("index {index} is out of bounds for sequence of size {len}"))
    }
}

impl<T> IndexMut<usize> for DynamicSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        self.buf
            .get_mut(index)
            .unwrap_or_else(|| panic!("index {index} is out of bounds for sequence of size {len}"))
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.buf.written(self.len).iter().flatten())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.buf.written(self.len).iter().flatten().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
