//! Reference health and absorption pools.

use crate::env::{AbsorptionPool, HealthPool};

/// Primary health pool, kept within `[0, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthStat {
    current: f32,
    max: f32,
}

impl HealthStat {
    pub const DEFAULT_MAX: f32 = 100.0;

    pub fn new(current: f32, max: f32) -> Self {
        let mut stat = Self { current: 0.0, max };
        stat.set_current(current);
        stat
    }

    /// Full pool of the given size.
    pub fn full(max: f32) -> Self {
        Self::new(max, max)
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

impl Default for HealthStat {
    fn default() -> Self {
        Self::full(Self::DEFAULT_MAX)
    }
}

impl HealthPool for HealthStat {
    fn current(&self) -> f32 {
        self.current
    }

    fn set_current(&mut self, value: f32) {
        self.current = value.min(self.max).max(0.0);
    }
}

/// Artificial health: a shield-like buffer drained before [`HealthStat`].
///
/// Absorbs as much of a hit as it currently holds; the remainder passes
/// through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AhpStat {
    current: f32,
    max: f32,
}

impl AhpStat {
    pub fn new(current: f32, max: f32) -> Self {
        Self {
            current: current.min(max).max(0.0),
            max,
        }
    }

    /// Empty buffer with no capacity.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Refills the buffer by `amount`, up to `max`.
    pub fn grant(&mut self, amount: f32) {
        self.current = (self.current + amount.max(0.0)).min(self.max);
    }
}

impl AbsorptionPool for AhpStat {
    fn current(&self) -> f32 {
        self.current
    }

    fn process(&mut self, amount: f32) -> f32 {
        if amount <= 0.0 || self.current <= 0.0 {
            return amount;
        }

        let absorbed = amount.min(self.current);
        self.current -= absorbed;
        amount - absorbed
    }

    fn clear(&mut self) {
        self.current = 0.0;
    }
}
