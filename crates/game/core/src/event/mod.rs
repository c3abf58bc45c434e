//! Damage events.
//!
//! A [`DamageEvent`] is built per hit, resolved once against its target and
//! dropped. It records who was hit and who is responsible (live ids plus
//! [`Footprint`] snapshots) and carries a [`DamageKind`] payload.
//!
//! # Payload accessors
//!
//! `damage`, `start_velocity`, `dealt_health_damage`, `absorbed_damage` and
//! `hit_zone` work on every event. On a [`DamageKind::Special`] event getters
//! return zero values and setters do nothing, so a write is not guaranteed to
//! be readable afterwards.
mod payload;

use std::fmt;

pub use payload::{DamageKind, DamageType, HitZone, RawDamage, SpecialDamage, StandardDamage};

use crate::combat::{DamageOutcome, DamageResolver};
use crate::env::{ActorOracle, DamageTarget};
use crate::state::{ActorId, Footprint, Vec3};

/// One hit directed at an actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageEvent {
    target: ActorId,
    attacker: Option<ActorId>,
    target_footprint: Footprint,
    attacker_footprint: Footprint,
    kind: DamageKind,
}

impl DamageEvent {
    /// Builds an event attributed to `attacker`.
    ///
    /// Both footprints are captured immediately.
    pub fn new<T, A>(target: &T, attacker: &A, kind: impl Into<DamageKind>) -> Self
    where
        T: DamageTarget + ?Sized,
        A: DamageTarget + ?Sized,
    {
        Self {
            target: target.id(),
            attacker: Some(attacker.id()),
            target_footprint: target.footprint(),
            attacker_footprint: attacker.footprint(),
            kind: kind.into(),
        }
    }

    /// Builds an event nobody is responsible for.
    pub fn unattributed<T>(target: &T, kind: impl Into<DamageKind>) -> Self
    where
        T: DamageTarget + ?Sized,
    {
        Self {
            target: target.id(),
            attacker: None,
            target_footprint: target.footprint(),
            attacker_footprint: Footprint::EMPTY,
            kind: kind.into(),
        }
    }

    /// Wraps a lower-level hit.
    ///
    /// The attacker is looked up again from the raw hit's attacker identity.
    /// If the raw hit has no attacker, or the attacker is no longer connected,
    /// the event is unattributed and carries the empty attacker footprint.
    pub fn from_raw<T, O>(target: &T, raw: RawDamage, actors: &O) -> Self
    where
        T: DamageTarget + ?Sized,
        O: ActorOracle + ?Sized,
    {
        let attacker = raw
            .attacker
            .as_ref()
            .and_then(|footprint| footprint.id)
            .and_then(|id| actors.actor(id));

        Self {
            target: target.id(),
            attacker: attacker.map(|a| a.id()),
            target_footprint: target.footprint(),
            attacker_footprint: attacker.map(|a| a.footprint()).unwrap_or_default(),
            kind: raw.kind,
        }
    }

    // ========================================================================
    // Identity
    // ========================================================================

    pub fn target(&self) -> ActorId {
        self.target
    }

    /// Responsible actor, or `None` for "no one".
    pub fn attacker(&self) -> Option<ActorId> {
        self.attacker
    }

    /// Reattributes the hit. Footprints keep the values captured at
    /// construction.
    pub fn set_attacker(&mut self, attacker: Option<ActorId>) {
        self.attacker = attacker;
    }

    pub fn target_footprint(&self) -> &Footprint {
        &self.target_footprint
    }

    pub fn attacker_footprint(&self) -> &Footprint {
        &self.attacker_footprint
    }

    // ========================================================================
    // Payload
    // ========================================================================

    pub fn kind(&self) -> &DamageKind {
        &self.kind
    }

    /// The numeric payload, if this event carries one.
    pub fn standard(&self) -> Option<&StandardDamage> {
        match &self.kind {
            DamageKind::Standard(payload) => Some(payload),
            DamageKind::Special(_) => None,
        }
    }

    pub fn standard_mut(&mut self) -> Option<&mut StandardDamage> {
        match &mut self.kind {
            DamageKind::Standard(payload) => Some(payload),
            DamageKind::Special(_) => None,
        }
    }

    pub fn damage(&self) -> f32 {
        self.standard().map_or(0.0, |p| p.damage)
    }

    pub fn set_damage(&mut self, value: f32) {
        if let Some(payload) = self.standard_mut() {
            payload.damage = value;
        }
    }

    pub fn start_velocity(&self) -> Vec3 {
        self.standard().map_or(Vec3::ZERO, |p| p.start_velocity)
    }

    pub fn set_start_velocity(&mut self, value: Vec3) {
        if let Some(payload) = self.standard_mut() {
            payload.start_velocity = value;
        }
    }

    pub fn dealt_health_damage(&self) -> f32 {
        self.standard().map_or(0.0, |p| p.dealt_health_damage)
    }

    pub fn set_dealt_health_damage(&mut self, value: f32) {
        if let Some(payload) = self.standard_mut() {
            payload.dealt_health_damage = value;
        }
    }

    pub fn absorbed_damage(&self) -> f32 {
        self.standard().map_or(0.0, |p| p.absorbed_damage)
    }

    pub fn set_absorbed_damage(&mut self, value: f32) {
        if let Some(payload) = self.standard_mut() {
            payload.absorbed_damage = value;
        }
    }

    pub fn hit_zone(&self) -> HitZone {
        self.standard().map_or(HitZone::default(), |p| p.hit_zone)
    }

    pub fn set_hit_zone(&mut self, value: HitZone) {
        if let Some(payload) = self.standard_mut() {
            payload.hit_zone = value;
        }
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Resolves this event against `target` with the default resolver.
    ///
    /// `target` must be the actor this event was built for.
    pub fn apply_damage<T: DamageTarget>(&mut self, target: &mut T) -> DamageOutcome {
        DamageResolver::default().resolve(self, target)
    }
}

impl fmt::Display for DamageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) ",
            self.target_footprint,
            self.damage(),
            self.kind.type_name()
        )?;

        // After reattribution the captured footprint may name someone else.
        match self.attacker {
            Some(id)
                if self.attacker_footprint.id == Some(id)
                    && !self.attacker_footprint.nickname.is_empty() =>
            {
                f.write_str(&self.attacker_footprint.nickname)
            }
            Some(id) => write!(f, "{id}"),
            None => f.write_str("No one"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorRoster, ActorState, Faction};

    fn guard() -> ActorState {
        ActorState::new(ActorId(1), "Guard").with_faction(Faction::Defenders)
    }

    fn raider() -> ActorState {
        ActorState::new(ActorId(2), "Raider").with_faction(Faction::Raiders)
    }

    #[test]
    fn new_captures_both_footprints() {
        let event = DamageEvent::new(&guard(), &raider(), StandardDamage::default());
        assert_eq!(event.target(), ActorId(1));
        assert_eq!(event.attacker(), Some(ActorId(2)));
        assert_eq!(event.target_footprint().nickname, "Guard");
        assert_eq!(event.attacker_footprint().faction, Faction::Raiders);
    }

    #[test]
    fn from_raw_rederives_connected_attacker() {
        let roster: ActorRoster = [guard(), raider()].into_iter().collect();
        let raw = RawDamage::new(StandardDamage::new(25.0, DamageType::Firearm))
            .with_attacker(raider().footprint());

        let event = DamageEvent::from_raw(&guard(), raw, &roster);
        assert_eq!(event.attacker(), Some(ActorId(2)));
        assert_eq!(event.attacker_footprint().nickname, "Raider");
        assert_eq!(event.damage(), 25.0);
    }

    #[test]
    fn from_raw_with_disconnected_attacker_is_unattributed() {
        let roster: ActorRoster = [guard()].into_iter().collect();
        let raw = RawDamage::new(StandardDamage::new(25.0, DamageType::Firearm))
            .with_attacker(raider().footprint());

        let event = DamageEvent::from_raw(&guard(), raw, &roster);
        assert_eq!(event.attacker(), None);
        assert!(event.attacker_footprint().is_empty());
    }

    #[test]
    fn from_raw_without_attacker() {
        let roster: ActorRoster = [guard(), raider()].into_iter().collect();
        let raw = RawDamage::new(SpecialDamage::Warhead);
        let event = DamageEvent::from_raw(&guard(), raw, &roster);
        assert_eq!(event.attacker(), None);
        assert!(event.attacker_footprint().is_empty());
    }

    #[test]
    fn footprint_survives_reattribution() {
        let mut event = DamageEvent::new(&guard(), &raider(), StandardDamage::default());
        event.set_attacker(None);
        assert_eq!(event.attacker(), None);
        assert_eq!(event.attacker_footprint().nickname, "Raider");
    }

    #[test]
    fn special_event_accessors_are_inert() {
        let mut event = DamageEvent::unattributed(&guard(), SpecialDamage::Crushed);

        event.set_damage(40.0);
        event.set_start_velocity(Vec3::new(1.0, 2.0, 3.0));
        event.set_dealt_health_damage(5.0);
        event.set_absorbed_damage(6.0);
        event.set_hit_zone(HitZone::Head);

        assert_eq!(event.damage(), 0.0);
        assert_eq!(event.start_velocity(), Vec3::ZERO);
        assert_eq!(event.dealt_health_damage(), 0.0);
        assert_eq!(event.absorbed_damage(), 0.0);
        assert_eq!(event.hit_zone(), HitZone::Body);
        assert!(event.standard().is_none());
    }

    #[test]
    fn standard_event_accessors_round_trip() {
        let mut event = DamageEvent::unattributed(&guard(), StandardDamage::default());
        event.set_damage(12.5);
        event.set_hit_zone(HitZone::Limb);
        assert_eq!(event.damage(), 12.5);
        assert_eq!(event.hit_zone(), HitZone::Limb);
    }

    #[test]
    fn summary_string() {
        let event = DamageEvent::new(
            &guard(),
            &raider(),
            StandardDamage::new(30.0, DamageType::Firearm),
        );
        assert_eq!(event.to_string(), "Guard 30 (Firearm) Raider");

        let event = DamageEvent::unattributed(&guard(), SpecialDamage::Warhead);
        assert_eq!(event.to_string(), "Guard 0 (Warhead) No one");
    }

    #[test]
    fn summary_for_reattributed_event_uses_id() {
        let payload = StandardDamage::new(5.0, DamageType::Melee);
        let mut event = DamageEvent::unattributed(&guard(), payload);
        event.set_attacker(Some(ActorId(9)));
        assert_eq!(event.to_string(), "Guard 5 (Melee) #9");
    }

    #[test]
    fn summary_names_the_current_attacker() {
        let payload = StandardDamage::new(30.0, DamageType::Firearm);
        let mut event = DamageEvent::new(&guard(), &raider(), payload);
        event.set_attacker(Some(ActorId(9)));

        assert_eq!(event.to_string(), "Guard 30 (Firearm) #9");
        assert_eq!(event.attacker_footprint().nickname, "Raider");

        event.set_attacker(Some(ActorId(2)));
        assert_eq!(event.to_string(), "Guard 30 (Firearm) Raider");
    }
}
