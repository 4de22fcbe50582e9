//! Growth configuration for [`DynamicSequence`](crate::DynamicSequence).

use crate::error::SequenceError;

/// Capacity and growth parameters for a sequence.
///
/// Growth is lazy: a new block is only allocated when an insertion finds
/// every slot written. The new capacity is `capacity * growth_factor`, or
/// `min_growth_capacity` when the current capacity is zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of slots allocated at construction.
    ///
    /// Default: 10.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity on each growth step.
    ///
    /// Default: 2. Must be at least 2.
    pub growth_factor: usize,

    /// Capacity allocated when growing out of a zero-capacity block.
    ///
    /// Default: 10. Must be at least 1.
    pub min_growth_capacity: usize,
}

impl SequenceConfig {
    /// Default starting capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Default capacity when growing from zero.
    pub const DEFAULT_MIN_GROWTH_CAPACITY: usize = 10;

    /// Create a config with the given starting capacity and default growth.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            min_growth_capacity: Self::DEFAULT_MIN_GROWTH_CAPACITY,
        }
    }

    /// Check that the growth parameters always make progress.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `growth_factor < 2`
    /// or `min_growth_capacity == 0`.
    pub fn validate(&self) -> Result<(), SequenceError> {
        if self.growth_factor < 2 {
            return Err(SequenceError::InvalidArgument {
                reason: format!("growth_factor must be >= 2, got {}", self.growth_factor),
            });
        }
        if self.min_growth_capacity == 0 {
            return Err(SequenceError::InvalidArgument {
                reason: "min_growth_capacity must be >= 1".into(),
            });
        }
        Ok(())
    }

    /// Capacity to grow to from `current`.
    ///
    /// Falls back to exact fit (`current + 1`) if the multiplication would
    /// overflow.
    pub fn next_capacity(&self, current: usize) -> usize {
        if current == 0 {
            return self.min_growth_capacity;
        }
        current
            .checked_mul(self.growth_factor)
            .unwrap_or_else(|| current.saturating_add(1))
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
