//! Resolution engine: applies one damage event to its target.

use crate::config::DamageConfig;
use crate::env::{ActorRegistry, DamageTarget};
use crate::error::DamageError;
use crate::event::DamageEvent;

use super::hooks::{DamageHook, HeadshotHook};
use super::modifiers::ModifierPipeline;
use super::outcome::{DamageOutcome, classify};

/// Applies damage events to actors.
///
/// # Resolution order
///
/// ```text
/// special payload      → Death if health <= 0, else Damage
/// damage <= 0          → None (unless at or below the instant-kill threshold)
/// start velocity       = target velocity, vertical component floored
/// instant kill         → clear artificial health, health = 0, Death
/// hooks                → in registration order
/// modifiers            → damage *= multiplier, in activation order
/// absorb               → dealt = ahp.process(damage)
/// deduct               → health -= dealt
/// classify             → Death if health <= 0, else Damage
/// ```
///
/// Resolution never fails and never panics: malformed hits degrade to
/// `None`. Callers must serialize resolution per actor; the `&mut` target
/// borrow enforces this within one tick.
#[derive(Default)]
pub struct DamageResolver {
    config: DamageConfig,
    hooks: Vec<Box<dyn DamageHook>>,
}

impl DamageResolver {
    pub fn new(config: DamageConfig) -> Self {
        Self {
            config,
            hooks: Vec::new(),
        }
    }

    /// Registers the hooks driven by configuration.
    pub fn with_builtin_hooks(self) -> Self {
        let headshot = HeadshotHook::new(self.config.headshot_multiplier);
        self.with_hook(headshot)
    }

    /// Appends a processing hook. Hooks run in the order they are added.
    pub fn with_hook(mut self, hook: impl DamageHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn config(&self) -> &DamageConfig {
        &self.config
    }

    /// Resolves `event` against `target`.
    ///
    /// `target` must be the actor the event was built for. This is checked in
    /// debug builds only.
    pub fn resolve<T: DamageTarget>(
        &self,
        event: &mut DamageEvent,
        target: &mut T,
    ) -> DamageOutcome {
        debug_assert_eq!(
            event.target(),
            target.id(),
            "damage event resolved against the wrong actor"
        );

        let target_id = event.target();
        let Some(payload) = event.standard_mut() else {
            // Fixed hits skip the damage math entirely.
            let outcome = if target.health().current() > 0.0 {
                DamageOutcome::Damage
            } else {
                DamageOutcome::Death
            };
            tracing::debug!(actor = %target_id, %outcome, "special damage resolved");
            return outcome;
        };

        // NaN is neither positive nor an instant kill.
        let positive = payload.damage > 0.0;
        let instant_kill = payload.damage <= self.config.instant_kill_threshold;
        if !positive && !instant_kill {
            tracing::trace!(
                actor = %target_id,
                damage = payload.damage,
                "non-positive damage ignored"
            );
            return DamageOutcome::None;
        }

        payload.start_velocity = target
            .velocity()
            .with_min_y(self.config.minimum_vertical_velocity);

        if instant_kill {
            target.absorption_mut().clear();
            target.health_mut().set_current(0.0);
            tracing::debug!(actor = %target_id, "instant kill");
            return DamageOutcome::Death;
        }

        for hook in &self.hooks {
            hook.process(payload, &*target);
            tracing::trace!(
                actor = %target_id,
                hook = hook.name(),
                damage = payload.damage,
                "hook processed"
            );
        }

        let damage = ModifierPipeline::snapshot(&*target).apply(payload);

        let absorption_before = target.absorption().current();
        let dealt = target.absorption_mut().process(damage);
        // inf - inf is NaN; fall back to what the pool actually lost.
        let absorbed = match damage - dealt {
            diff if diff.is_finite() => diff,
            _ => absorption_before - target.absorption().current(),
        };
        payload.dealt_health_damage = dealt;
        payload.absorbed_damage = absorbed;
        target.health_mut().deduct(dealt);

        let health = target.health().current();
        let outcome = classify(health, true);
        tracing::debug!(
            actor = %target_id,
            damage,
            dealt,
            absorbed = payload.absorbed_damage,
            health,
            %outcome,
            "damage resolved"
        );

        outcome
    }

    /// Looks the event's target up in `actors` and resolves against it.
    pub fn resolve_by_id<R: ActorRegistry>(
        &self,
        actors: &mut R,
        event: &mut DamageEvent,
    ) -> Result<DamageOutcome, DamageError> {
        let target = event.target();
        let actor = actors
            .actor_mut(target)
            .ok_or(DamageError::TargetNotFound { target })?;

        Ok(self.resolve(event, actor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AbsorptionPool, HealthPool};
    use crate::event::{DamageType, HitZone, SpecialDamage, StandardDamage};
    use crate::state::{
        ActorId, ActorRoster, ActorState, AhpStat, HealthStat, StatusEffectKind, Tick, Vec3,
    };

    fn target(health: f32, ahp: f32) -> ActorState {
        ActorState::new(ActorId(1), "Target")
            .with_health(HealthStat::new(health, 100.0))
            .with_ahp(AhpStat::new(ahp, 75.0))
    }

    fn hit(target: &ActorState, damage: f32) -> DamageEvent {
        DamageEvent::unattributed(target, StandardDamage::new(damage, DamageType::Firearm))
    }

    #[test]
    fn plain_hit_without_absorption() {
        let mut actor = target(100.0, 0.0);
        let mut event = hit(&actor, 30.0);

        let outcome = DamageResolver::default().resolve(&mut event, &mut actor);

        assert_eq!(outcome, DamageOutcome::Damage);
        assert_eq!(event.dealt_health_damage(), 30.0);
        assert_eq!(event.absorbed_damage(), 0.0);
        assert_eq!(actor.health.current(), 70.0);
    }

    #[test]
    fn absorption_takes_the_hit_first() {
        let mut actor = target(100.0, 20.0);
        let mut event = hit(&actor, 30.0);

        let outcome = DamageResolver::default().resolve(&mut event, &mut actor);

        assert_eq!(outcome, DamageOutcome::Damage);
        assert_eq!(event.dealt_health_damage(), 10.0);
        assert_eq!(event.absorbed_damage(), 20.0);
        assert_eq!(actor.ahp.current(), 0.0);
        assert_eq!(actor.health.current(), 90.0);
    }

    #[test]
    fn lethal_hit() {
        let mut actor = target(5.0, 0.0);
        let mut event = hit(&actor, 10.0);

        let outcome = DamageResolver::default().resolve(&mut event, &mut actor);

        assert_eq!(outcome, DamageOutcome::Death);
        assert_eq!(event.dealt_health_damage(), 10.0);
        assert_eq!(actor.health.current(), 0.0);
    }

    #[test]
    fn instant_kill_bypasses_everything() {
        let mut actor =
            target(50.0, 30.0).with_effect(StatusEffectKind::SpawnProtected, Tick(100));
        let mut event =
            DamageEvent::unattributed(&actor, StandardDamage::instant_kill(DamageType::Scp));

        let outcome = DamageResolver::default().resolve(&mut event, &mut actor);

        assert_eq!(outcome, DamageOutcome::Death);
        assert_eq!(actor.ahp.current(), 0.0);
        assert_eq!(actor.health.current(), 0.0);
        assert_eq!(event.dealt_health_damage(), 0.0);
        assert_eq!(event.damage(), -1.0);
    }

    #[test]
    fn non_positive_damage_has_no_effect() {
        for damage in [0.0, -0.5, -0.999, f32::NAN] {
            let mut actor = target(80.0, 10.0).with_velocity(Vec3::new(1.0, -3.0, 0.0));
            let mut event = hit(&actor, damage);

            let outcome = DamageResolver::default().resolve(&mut event, &mut actor);

            assert_eq!(outcome, DamageOutcome::None);
            assert_eq!(actor.health.current(), 80.0);
            assert_eq!(actor.ahp.current(), 10.0);
            assert_eq!(event.start_velocity(), Vec3::ZERO);
        }
    }

    #[test]
    fn start_velocity_never_points_down() {
        let mut actor = target(100.0, 0.0).with_velocity(Vec3::new(2.0, -6.0, 1.0));
        let mut event = hit(&actor, 5.0);
        DamageResolver::default().resolve(&mut event, &mut actor);
        assert_eq!(event.start_velocity(), Vec3::new(2.0, 0.0, 1.0));

        let mut actor = actor.with_velocity(Vec3::new(0.0, 4.0, 0.0));
        let mut event = hit(&actor, 5.0);
        DamageResolver::default().resolve(&mut event, &mut actor);
        assert_eq!(event.start_velocity(), Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn special_damage_reports_current_state() {
        let mut alive = target(40.0, 0.0);
        let mut event = DamageEvent::unattributed(&alive, SpecialDamage::Crushed);
        assert_eq!(
            DamageResolver::default().resolve(&mut event, &mut alive),
            DamageOutcome::Damage
        );
        assert_eq!(alive.health.current(), 40.0);

        let mut dead = target(0.0, 0.0);
        let mut event = DamageEvent::unattributed(&dead, SpecialDamage::Warhead);
        assert_eq!(
            DamageResolver::default().resolve(&mut event, &mut dead),
            DamageOutcome::Death
        );
    }

    #[test]
    fn hooks_run_before_modifiers() {
        let mut actor =
            target(100.0, 0.0).with_effect(StatusEffectKind::Scaled { percent: 50 }, Tick(10));
        let mut event = DamageEvent::unattributed(
            &actor,
            StandardDamage::new(20.0, DamageType::Firearm).with_hit_zone(HitZone::Head),
        );

        let config = DamageConfig::default().with_headshot_multiplier(3.0);
        let resolver = DamageResolver::new(config).with_builtin_hooks();
        resolver.resolve(&mut event, &mut actor);

        // 20 × 3 (headshot) × 0.5 (scaled)
        assert_eq!(event.damage(), 30.0);
        assert_eq!(actor.health.current(), 70.0);
    }

    #[test]
    fn infinite_damage_keeps_absorption_bookkeeping() {
        let mut actor = target(100.0, 20.0);
        let mut event = hit(&actor, f32::INFINITY);

        let outcome = DamageResolver::default().resolve(&mut event, &mut actor);

        assert_eq!(outcome, DamageOutcome::Death);
        assert_eq!(event.absorbed_damage(), 20.0);
        assert_eq!(event.dealt_health_damage(), f32::INFINITY);
        assert_eq!(actor.ahp.current(), 0.0);
        assert_eq!(actor.health.current(), 0.0);
    }

    #[test]
    fn modifier_overflow_keeps_absorption_bookkeeping() {
        let mut actor =
            target(100.0, 20.0).with_effect(StatusEffectKind::Vulnerable { stacks: 5 }, Tick(10));
        let mut event = hit(&actor, f32::MAX);

        let outcome = DamageResolver::default().resolve(&mut event, &mut actor);

        assert_eq!(outcome, DamageOutcome::Death);
        assert!(!event.absorbed_damage().is_nan());
        assert_eq!(event.absorbed_damage(), 20.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "wrong actor")]
    fn resolving_against_another_actor_panics_in_debug() {
        let intended = target(100.0, 0.0);
        let mut bystander = ActorState::new(ActorId(2), "Bystander");
        let mut event = hit(&intended, 10.0);

        DamageResolver::default().resolve(&mut event, &mut bystander);
    }

    #[test]
    fn resolve_by_id_reports_missing_target() {
        let actor = target(100.0, 0.0);
        let mut event = hit(&actor, 10.0);
        let mut roster = ActorRoster::new();

        let err = DamageResolver::default()
            .resolve_by_id(&mut roster, &mut event)
            .unwrap_err();
        assert_eq!(err, DamageError::TargetNotFound { target: ActorId(1) });

        roster.insert(actor);
        let outcome = DamageResolver::default()
            .resolve_by_id(&mut roster, &mut event)
            .unwrap();
        assert_eq!(outcome, DamageOutcome::Damage);
    }
}
