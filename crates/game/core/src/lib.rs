//! Damage resolution for game-server actors.
//!
//! `damage-core` turns a single hit into a health change and an outcome
//! signal. A [`DamageEvent`] records who was hit, who is responsible and how
//! hard; [`DamageResolver`] runs it through processing hooks, status effect
//! modifiers and artificial health before deducting primary health, and
//! returns a [`DamageOutcome`] for the server loop to react to.
//!
//! Actors, stat pools and status effects belong to the surrounding server and
//! are reached through the traits in [`env`]. [`state`] provides reference
//! implementations used by the scenario runner and tests.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use combat::{DamageHook, DamageOutcome, DamageResolver, HeadshotHook, ModifierPipeline};
pub use config::DamageConfig;
pub use env::{
    AbsorptionPool, ActiveEffect, ActorOracle, ActorRegistry, DamageModifier, DamageTarget,
    HealthPool,
};
pub use error::{ConfigError, CoreError, DamageError, ErrorSeverity};
pub use event::{
    DamageEvent, DamageKind, DamageType, HitZone, RawDamage, SpecialDamage, StandardDamage,
};
pub use state::{
    ActorId, ActorRoster, ActorState, AhpStat, Faction, Footprint, HealthStat, StatusEffect,
    StatusEffectKind, StatusEffects, Tick, Vec3,
};
