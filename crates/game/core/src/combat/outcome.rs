/// Terminal signal returned to the server loop after resolving a hit.
///
/// The resolver performs no further transition; reacting to `Death`
/// (ragdolls, kill feed, respawn) is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageOutcome {
    /// Nothing happened.
    None,
    /// The target took damage and survived.
    Damage,
    /// The target's health is depleted.
    Death,
}

impl DamageOutcome {
    #[inline]
    pub const fn is_death(self) -> bool {
        matches!(self, Self::Death)
    }
}

/// Classifies a target's post-resolution health.
///
/// `deducted` tells whether this resolution attempted to remove health.
pub fn classify(health: f32, deducted: bool) -> DamageOutcome {
    if health <= 0.0 {
        DamageOutcome::Death
    } else if deducted {
        DamageOutcome::Damage
    } else {
        DamageOutcome::None
    }
}
