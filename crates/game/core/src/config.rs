use crate::error::ConfigError;

/// Damage resolution constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageConfig {
    /// Requested damage at or below this value kills instantly, bypassing
    /// artificial health and modifiers.
    pub instant_kill_threshold: f32,

    /// Multiplier applied to head-zone hits by the built-in headshot hook.
    /// `1.0` leaves headshots unchanged.
    pub headshot_multiplier: f32,

    /// Lower bound for the vertical component of a hit's start velocity.
    pub minimum_vertical_velocity: f32,
}

impl DamageConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_STATUS_EFFECTS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INSTANT_KILL_THRESHOLD: f32 = -1.0;
    pub const DEFAULT_HEADSHOT_MULTIPLIER: f32 = 1.0;
    pub const DEFAULT_MINIMUM_VERTICAL_VELOCITY: f32 = 0.0;

    pub fn new() -> Self {
        Self {
            instant_kill_threshold: Self::DEFAULT_INSTANT_KILL_THRESHOLD,
            headshot_multiplier: Self::DEFAULT_HEADSHOT_MULTIPLIER,
            minimum_vertical_velocity: Self::DEFAULT_MINIMUM_VERTICAL_VELOCITY,
        }
    }

    pub fn with_headshot_multiplier(mut self, multiplier: f32) -> Self {
        self.headshot_multiplier = multiplier;
        self
    }

    /// Checks values loaded from outside the binary.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.instant_kill_threshold.is_finite() || self.instant_kill_threshold >= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "instant_kill_threshold",
                value: self.instant_kill_threshold,
                reason: "must be a finite negative number",
            });
        }

        if !self.headshot_multiplier.is_finite() || self.headshot_multiplier < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "headshot_multiplier",
                value: self.headshot_multiplier,
                reason: "must be finite and non-negative",
            });
        }

        if !self.minimum_vertical_velocity.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "minimum_vertical_velocity",
                value: self.minimum_vertical_velocity,
                reason: "must be finite",
            });
        }

        Ok(())
    }
}

impl Default for DamageConfig {
    fn default() -> Self {
        Self::new()
    }
}
