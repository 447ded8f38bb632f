use crate::WidgetConfigError;

/// Integer value constrained to an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedCounter {
    value: i32,
    min: i32,
    max: i32,
}

impl Default for BoundedCounter {
    fn default() -> Self {
        Self {
            value: 1,
            min: 1,
            max: 10,
        }
    }
}

impl BoundedCounter {
    /// Creates a counter over `min..=max` starting at `initial`, clamped into range.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetConfigError::InvalidCounterRange`] when `min > max`.
    pub fn new(min: i32, max: i32, initial: i32) -> Result<Self, WidgetConfigError> {
        if min > max {
            return Err(WidgetConfigError::InvalidCounterRange { min, max });
        }
        Ok(Self {
            value: initial.clamp(min, max),
            min,
            max,
        })
    }

    /// Current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Whether [`increment`](Self::increment) can move the value.
    pub fn can_increment(&self) -> bool {
        self.value < self.max
    }

    /// Whether [`decrement`](Self::decrement) can move the value.
    pub fn can_decrement(&self) -> bool {
        self.value > self.min
    }

    /// Sets `value` when it lies in range; out-of-range values are ignored.
    pub fn set(&mut self, value: i32) -> Option<i32> {
        if value < self.min || value > self.max {
            return None;
        }
        self.value = value;
        Some(value)
    }

    /// Adds one when below the upper bound.
    pub fn increment(&mut self) -> Option<i32> {
        self.set(self.value.checked_add(1)?)
    }

    /// Subtracts one when above the lower bound.
    pub fn decrement(&mut self) -> Option<i32> {
        self.set(self.value.checked_sub(1)?)
    }
}
