//! Payload variants carried by a damage event.

use std::fmt;

use crate::state::{Footprint, Vec3};

/// Body region a hit landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitZone {
    Head,
    #[default]
    Body,
    Limb,
}

/// Source category of a numeric hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageType {
    #[default]
    Firearm,
    Melee,
    Explosion,
    Falldown,
    Poison,
    Scp,
    Unknown,
}

/// Numeric hit: requested damage plus the bookkeeping written by resolution.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardDamage {
    /// Requested damage. `<= 0` has no effect, `<= -1` kills instantly.
    pub damage: f32,
    /// Impulse applied to the target when the hit lands.
    pub start_velocity: Vec3,
    /// Health actually removed after absorption.
    pub dealt_health_damage: f32,
    /// Portion intercepted by artificial health.
    pub absorbed_damage: f32,
    pub hit_zone: HitZone,
    pub damage_type: DamageType,
}

impl StandardDamage {
    pub fn new(damage: f32, damage_type: DamageType) -> Self {
        Self {
            damage,
            damage_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_hit_zone(mut self, hit_zone: HitZone) -> Self {
        self.hit_zone = hit_zone;
        self
    }

    /// Hit that kills regardless of health, artificial health and modifiers.
    pub fn instant_kill(damage_type: DamageType) -> Self {
        Self::new(-1.0, damage_type)
    }
}

/// Fixed outcome hits without a numeric payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialDamage {
    Warhead,
    Recontainment,
    Disconnect,
    Crushed,
    Custom(String),
}

impl fmt::Display for SpecialDamage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Warhead => "Warhead",
            Self::Recontainment => "Recontainment",
            Self::Disconnect => "Disconnect",
            Self::Crushed => "Crushed",
            Self::Custom(name) => name.as_str(),
        };
        f.write_str(name)
    }
}

/// Payload of a damage event.
///
/// Only [`DamageKind::Standard`] participates in damage math. Accessors on
/// [`super::DamageEvent`] read zero values from and ignore writes to the
/// special variant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageKind {
    Standard(StandardDamage),
    Special(SpecialDamage),
}

impl DamageKind {
    /// Name used in summaries and logs.
    pub fn type_name(&self) -> String {
        match self {
            Self::Standard(payload) => payload.damage_type.to_string(),
            Self::Special(special) => special.to_string(),
        }
    }
}

impl From<StandardDamage> for DamageKind {
    fn from(payload: StandardDamage) -> Self {
        Self::Standard(payload)
    }
}

impl From<SpecialDamage> for DamageKind {
    fn from(special: SpecialDamage) -> Self {
        Self::Special(special)
    }
}

/// Lower-level hit produced by weapons and hazards before a target is known
/// to the damage core.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawDamage {
    /// Attacker identity if the source is attributable to an actor.
    pub attacker: Option<Footprint>,
    pub kind: DamageKind,
}

impl RawDamage {
    pub fn new(kind: impl Into<DamageKind>) -> Self {
        Self {
            attacker: None,
            kind: kind.into(),
        }
    }

    #[must_use]
    pub fn with_attacker(mut self, attacker: Footprint) -> Self {
        self.attacker = Some(attacker);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        let standard = DamageKind::from(StandardDamage::new(10.0, DamageType::Explosion));
        assert_eq!(standard.type_name(), "Explosion");

        let warhead = DamageKind::from(SpecialDamage::Warhead);
        assert_eq!(warhead.type_name(), "Warhead");

        let custom = DamageKind::from(SpecialDamage::Custom("Tesla".into()));
        assert_eq!(custom.type_name(), "Tesla");
    }
}
