//! Processing hooks that adjust a hit before status effect modifiers run.

use crate::env::DamageTarget;
use crate::event::{HitZone, StandardDamage};

/// Adjusts the numeric payload of a hit before modifiers and absorption.
///
/// Hooks run in registration order and only for positive, non-lethal-sentinel
/// hits. They must not fail; a hook that has nothing to do leaves the payload
/// untouched.
pub trait DamageHook: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &'static str;

    fn process(&self, payload: &mut StandardDamage, target: &dyn DamageTarget);
}

/// Scales hits on the head zone.
#[derive(Debug, Clone, Copy)]
pub struct HeadshotHook {
    pub multiplier: f32,
}

impl HeadshotHook {
    pub fn new(multiplier: f32) -> Self {
        Self { multiplier }
    }
}

impl DamageHook for HeadshotHook {
    fn name(&self) -> &'static str {
        "headshot"
    }

    fn process(&self, payload: &mut StandardDamage, _target: &dyn DamageTarget) {
        if payload.hit_zone == HitZone::Head {
            payload.damage *= self.multiplier;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::DamageType;
    use crate::state::{ActorId, ActorState};

    #[test]
    fn headshot_only_scales_head_zone() {
        let target = ActorState::new(ActorId(1), "Target");
        let hook = HeadshotHook::new(2.0);

        let mut head = StandardDamage::new(15.0, DamageType::Firearm).with_hit_zone(HitZone::Head);
        hook.process(&mut head, &target);
        assert_eq!(head.damage, 30.0);

        let mut limb = StandardDamage::new(15.0, DamageType::Firearm).with_hit_zone(HitZone::Limb);
        hook.process(&mut limb, &target);
        assert_eq!(limb.damage, 15.0);
    }
}
