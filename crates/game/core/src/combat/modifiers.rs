//! Modifier pipeline: multiplicative scaling by active status effects.

use crate::env::{DamageModifier, DamageTarget};
use crate::event::StandardDamage;

/// Damage modifiers of a target, captured once per resolution.
///
/// The capture is taken before any multiplier runs, so the composition is
/// fixed for the whole call.
pub struct ModifierPipeline<'a> {
    modifiers: Vec<(&'static str, &'a dyn DamageModifier)>,
}

impl<'a> ModifierPipeline<'a> {
    /// Collects every active effect with a damage modifier capability, in
    /// activation order.
    pub fn snapshot<T: DamageTarget + ?Sized>(target: &'a T) -> Self {
        let modifiers = target
            .active_effects()
            .filter_map(|effect| {
                effect
                    .as_damage_modifier()
                    .map(|modifier| (effect.name(), modifier))
            })
            .collect();

        Self { modifiers }
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Multiplies `payload.damage` by each modifier, left to right, and
    /// returns the final damage.
    pub fn apply(&self, payload: &mut StandardDamage) -> f32 {
        for (name, modifier) in &self.modifiers {
            let multiplier = modifier.damage_multiplier(payload.damage, payload, payload.hit_zone);
            tracing::trace!(
                effect = name,
                damage = payload.damage,
                multiplier,
                "applying damage modifier"
            );
            payload.damage *= multiplier;
        }

        payload.damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{DamageType, HitZone};
    use crate::state::{ActorId, ActorState, StatusEffectKind, Tick};

    #[test]
    fn multipliers_compose_in_activation_order() {
        let actor = ActorState::new(ActorId(1), "Target")
            .with_effect(StatusEffectKind::Scaled { percent: 200 }, Tick(10))
            .with_effect(StatusEffectKind::Hasted, Tick(10))
            .with_effect(StatusEffectKind::Scaled { percent: 50 }, Tick(10));

        // Second Scaled replaces the first in place.
        let pipeline = ModifierPipeline::snapshot(&actor);
        assert_eq!(pipeline.len(), 1);

        let actor = ActorState::new(ActorId(1), "Target")
            .with_effect(StatusEffectKind::Vulnerable { stacks: 10 }, Tick(10))
            .with_effect(StatusEffectKind::Hasted, Tick(10))
            .with_effect(StatusEffectKind::Fortified { stacks: 5 }, Tick(10));
        let pipeline = ModifierPipeline::snapshot(&actor);
        assert_eq!(pipeline.len(), 2);

        let mut payload = StandardDamage::new(10.0, DamageType::Firearm);
        let damage = pipeline.apply(&mut payload);
        assert!((damage - 10.0).abs() < 1e-5);
        assert_eq!(payload.damage, damage);
    }

    #[test]
    fn hit_zone_reaches_modifiers() {
        let actor = ActorState::new(ActorId(1), "Target")
            .with_effect(StatusEffectKind::BodyArmor { percent: 50 }, Tick(10));
        let pipeline = ModifierPipeline::snapshot(&actor);

        let mut head = StandardDamage::new(40.0, DamageType::Firearm).with_hit_zone(HitZone::Head);
        assert_eq!(pipeline.apply(&mut head), 40.0);

        let mut body = StandardDamage::new(40.0, DamageType::Firearm).with_hit_zone(HitZone::Body);
        assert_eq!(pipeline.apply(&mut body), 20.0);
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let actor = ActorState::new(ActorId(1), "Target");
        let pipeline = ModifierPipeline::snapshot(&actor);
        assert!(pipeline.is_empty());

        let mut payload = StandardDamage::new(17.0, DamageType::Melee);
        assert_eq!(pipeline.apply(&mut payload), 17.0);
    }
}
