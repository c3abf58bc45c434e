//! Damage resolution.
//!
//! - [`DamageResolver`]: applies a [`crate::event::DamageEvent`] to its target
//! - [`ModifierPipeline`]: ordered multiplicative status effect scaling
//! - [`DamageHook`]: payload adjustments that run before the pipeline
//! - [`classify`]: maps post-resolution health to a [`DamageOutcome`]

pub mod hooks;
pub mod modifiers;
pub mod outcome;
pub mod resolver;

pub use hooks::{DamageHook, HeadshotHook};
pub use modifiers::ModifierPipeline;
pub use outcome::{DamageOutcome, classify};
pub use resolver::DamageResolver;
