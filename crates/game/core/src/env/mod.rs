//! Collaborator interfaces consumed by the damage core.
//!
//! The surrounding server owns actors, their stat pools, movement and status
//! effects. The resolver only reaches them through the traits below, so any
//! actor representation can be damaged as long as it implements
//! [`DamageTarget`]. Reference implementations live in [`crate::state`].

use crate::event::{HitZone, StandardDamage};
use crate::state::{ActorId, Footprint, Vec3};

/// Primary health of an actor.
pub trait HealthPool {
    /// Current health value.
    fn current(&self) -> f32;

    /// Overwrites the current value. Implementations floor the result at 0.
    fn set_current(&mut self, value: f32);

    /// Subtracts `amount` from the current value.
    fn deduct(&mut self, amount: f32) {
        self.set_current(self.current() - amount);
    }
}

/// Secondary pool consumed before primary health.
pub trait AbsorptionPool {
    fn current(&self) -> f32;

    /// Absorbs up to the available capacity and returns the overflow that must
    /// be taken from primary health.
    fn process(&mut self, amount: f32) -> f32;

    /// Empties the pool.
    fn clear(&mut self);
}

/// Capability of an effect that scales incoming damage.
pub trait DamageModifier {
    /// Factor applied to `damage`. `1.0` leaves the hit unchanged.
    fn damage_multiplier(&self, damage: f32, payload: &StandardDamage, zone: HitZone) -> f32;
}

/// An effect currently active on an actor.
pub trait ActiveEffect {
    fn name(&self) -> &'static str;

    /// Returns the damage modifier capability if this effect has one.
    fn as_damage_modifier(&self) -> Option<&dyn DamageModifier> {
        None
    }
}

/// Everything the resolver needs from the actor being hit.
pub trait DamageTarget {
    fn id(&self) -> ActorId;

    /// Identity snapshot taken at the moment of the call.
    fn footprint(&self) -> Footprint;

    fn health(&self) -> &dyn HealthPool;

    fn health_mut(&mut self) -> &mut dyn HealthPool;

    fn absorption(&self) -> &dyn AbsorptionPool;

    fn absorption_mut(&mut self) -> &mut dyn AbsorptionPool;

    /// Current movement velocity.
    fn velocity(&self) -> Vec3;

    /// Active effects in activation order. Enumerated fresh on every call.
    fn active_effects(&self) -> Box<dyn Iterator<Item = &dyn ActiveEffect> + '_>;
}

/// Resolves durable identities to live actors.
pub trait ActorOracle {
    type Actor: DamageTarget;

    /// Returns `None` once the actor has disconnected or despawned.
    fn actor(&self, id: ActorId) -> Option<&Self::Actor>;
}

/// Mutable actor lookup used by the server tick to apply damage by id.
pub trait ActorRegistry: ActorOracle {
    fn actor_mut(&mut self, id: ActorId) -> Option<&mut Self::Actor>;
}
