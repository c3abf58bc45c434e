//! Status effects carried by actors.
//!
//! Effects store `expires_at: Tick` and are considered active while
//! `current_tick < expires_at`. The list keeps activation order, which is the
//! order the modifier pipeline applies damage multipliers in.

use core::mem;

use arrayvec::ArrayVec;

use crate::config::DamageConfig;
use crate::env::{ActiveEffect, DamageModifier};
use crate::event::{HitZone, StandardDamage};
use crate::state::Tick;

/// Active status effects on an actor, in activation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { DamageConfig::MAX_STATUS_EFFECTS }>,
}

/// A single status effect with expiration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusEffectKind,
    /// Tick at which this effect expires.
    pub expires_at: Tick,
}

/// Types of status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusEffectKind {
    // ========================================================================
    // Damage modifiers
    // ========================================================================
    /// Flat scaling of every hit, `percent / 100`.
    Scaled { percent: u16 },

    /// +10% damage taken per stack.
    Vulnerable { stacks: u8 },

    /// -10% damage taken per stack, never below zero.
    Fortified { stacks: u8 },

    /// Reduces body and limb hits by `percent`. Head hits bypass the armor.
    BodyArmor { percent: u8 },

    /// Takes no damage.
    SpawnProtected,

    // ========================================================================
    // No effect on damage
    // ========================================================================
    Hasted,
    Invisible,
    Burning,
}

impl StatusEffectKind {
    /// Returns true if this effect scales incoming damage.
    pub const fn modifies_damage(&self) -> bool {
        matches!(
            self,
            Self::Scaled { .. }
                | Self::Vulnerable { .. }
                | Self::Fortified { .. }
                | Self::BodyArmor { .. }
                | Self::SpawnProtected
        )
    }

    /// Multiplier for a hit landing on `zone`.
    pub fn multiplier(&self, zone: HitZone) -> f32 {
        match *self {
            Self::Scaled { percent } => f32::from(percent) / 100.0,
            Self::Vulnerable { stacks } => 1.0 + 0.1 * f32::from(stacks),
            Self::Fortified { stacks } => (1.0 - 0.1 * f32::from(stacks)).max(0.0),
            Self::BodyArmor { percent } => match zone {
                HitZone::Head => 1.0,
                HitZone::Body | HitZone::Limb => 1.0 - f32::from(percent.min(100)) / 100.0,
            },
            Self::SpawnProtected => 0.0,
            Self::Hasted | Self::Invisible | Self::Burning => 1.0,
        }
    }
}

impl ActiveEffect for StatusEffect {
    fn name(&self) -> &'static str {
        self.kind.into()
    }

    fn as_damage_modifier(&self) -> Option<&dyn DamageModifier> {
        self.kind.modifies_damage().then_some(self as &dyn DamageModifier)
    }
}

impl DamageModifier for StatusEffect {
    fn damage_multiplier(&self, _damage: f32, _payload: &StandardDamage, zone: HitZone) -> f32 {
        self.kind.multiplier(zone)
    }
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if an effect of the same kind is active at the given tick.
    pub fn has(&self, kind: StatusEffectKind, current_tick: Tick) -> bool {
        self.effects
            .iter()
            .any(|e| same_kind(&e.kind, &kind) && e.expires_at > current_tick)
    }

    /// Adds a status effect with expiration time.
    ///
    /// An existing effect of the same kind keeps its position in the
    /// activation order, takes the new parameters, and extends to the later
    /// expiration time. Returns false if the set is full.
    pub fn add(&mut self, kind: StatusEffectKind, expires_at: Tick) -> bool {
        if let Some(existing) = self.effects.iter_mut().find(|e| same_kind(&e.kind, &kind)) {
            existing.kind = kind;
            existing.expires_at = existing.expires_at.max(expires_at);
            return true;
        }

        self.effects
            .try_push(StatusEffect { kind, expires_at })
            .is_ok()
    }

    /// Removes a status effect immediately.
    pub fn remove(&mut self, kind: StatusEffectKind) {
        self.effects.retain(|e| !same_kind(&e.kind, &kind));
    }

    /// Removes all expired status effects at the current tick.
    pub fn remove_expired(&mut self, current_tick: Tick) {
        self.effects.retain(|e| e.expires_at > current_tick);
    }

    /// Returns an iterator over all active effects at the given tick.
    pub fn active_at(&self, current_tick: Tick) -> impl Iterator<Item = &StatusEffect> + '_ {
        self.effects
            .iter()
            .filter(move |e| e.expires_at > current_tick)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

fn same_kind(a: &StatusEffectKind, b: &StatusEffectKind) -> bool {
    mem::discriminant(a) == mem::discriminant(b)
}
