//! Reference actor used by the server loop and tests.

use crate::env::{AbsorptionPool, ActiveEffect, DamageTarget, HealthPool};

use super::{
    ActorId, AhpStat, Faction, Footprint, HealthStat, StatusEffectKind, StatusEffects, Tick, Vec3,
};

/// Live actor state relevant to damage resolution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: ActorId,
    pub nickname: String,
    pub faction: Faction,

    pub health: HealthStat,
    pub ahp: AhpStat,

    /// Velocity reported by movement sync for the current tick.
    pub velocity: Vec3,

    pub status_effects: StatusEffects,

    /// Tick used to decide which status effects are active.
    pub current_tick: Tick,
}

impl ActorState {
    /// Creates an actor at full default health with no artificial health.
    pub fn new(id: ActorId, nickname: impl Into<String>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            faction: Faction::default(),
            health: HealthStat::default(),
            ahp: AhpStat::none(),
            velocity: Vec3::ZERO,
            status_effects: StatusEffects::empty(),
            current_tick: Tick::ZERO,
        }
    }

    pub fn with_faction(mut self, faction: Faction) -> Self {
        self.faction = faction;
        self
    }

    pub fn with_health(mut self, health: HealthStat) -> Self {
        self.health = health;
        self
    }

    pub fn with_ahp(mut self, ahp: AhpStat) -> Self {
        self.ahp = ahp;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Adds an effect that lasts until `expires_at`.
    pub fn with_effect(mut self, kind: StatusEffectKind, expires_at: Tick) -> Self {
        self.status_effects.add(kind, expires_at);
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }

    /// Moves the actor's clock forward and drops expired effects.
    pub fn advance_to(&mut self, tick: Tick) {
        self.current_tick = tick;
        self.status_effects.remove_expired(tick);
    }
}

impl DamageTarget for ActorState {
    fn id(&self) -> ActorId {
        self.id
    }

    fn footprint(&self) -> Footprint {
        Footprint::new(self.id, self.nickname.clone(), self.faction)
    }

    fn health(&self) -> &dyn HealthPool {
        &self.health
    }

    fn health_mut(&mut self) -> &mut dyn HealthPool {
        &mut self.health
    }

    fn absorption(&self) -> &dyn AbsorptionPool {
        &self.ahp
    }

    fn absorption_mut(&mut self) -> &mut dyn AbsorptionPool {
        &mut self.ahp
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn active_effects(&self) -> Box<dyn Iterator<Item = &dyn ActiveEffect> + '_> {
        Box::new(
            self.status_effects
                .active_at(self.current_tick)
                .map(|effect| effect as &dyn ActiveEffect),
        )
    }
}
