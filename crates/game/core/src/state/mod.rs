//! Actor state consumed and mutated by damage resolution.
//!
//! - [`ActorState`]: reference implementation of [`crate::env::DamageTarget`]
//! - [`ActorRoster`]: id lookup over connected actors
//! - [`Footprint`]: identity snapshot that outlives the actor
//! - Pools and status effects
mod actor;
mod common;
mod footprint;
mod pools;
mod roster;
mod status;

pub use actor::ActorState;
pub use common::{ActorId, Tick, Vec3};
pub use footprint::{Faction, Footprint};
pub use pools::{AhpStat, HealthStat};
pub use roster::ActorRoster;
pub use status::{StatusEffect, StatusEffectKind, StatusEffects};
