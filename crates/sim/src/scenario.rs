//! Scenario files: actors, configuration and an ordered list of hits.

use std::path::Path;

use anyhow::{Context, Result};
use damage_core::{
    ActorId, ActorRoster, ActorState, AhpStat, DamageConfig, DamageKind, DamageType, Faction,
    HealthStat, HitZone, SpecialDamage, StandardDamage, StatusEffectKind, Tick, Vec3,
};
use serde::Deserialize;

/// Effects added from a scenario file never expire on their own.
const PERMANENT: Tick = Tick(u64::MAX);

#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: DamageConfig,
    #[serde(default)]
    pub actors: Vec<ActorSpec>,
    #[serde(default)]
    pub hits: Vec<HitSpec>,
}

#[derive(Debug, Deserialize)]
pub struct ActorSpec {
    pub id: u32,
    pub nickname: String,
    #[serde(default)]
    pub faction: Faction,
    #[serde(default = "default_health")]
    pub health: f32,
    #[serde(default)]
    pub max_health: Option<f32>,
    #[serde(default)]
    pub ahp: f32,
    #[serde(default = "default_max_ahp")]
    pub max_ahp: f32,
    #[serde(default)]
    pub velocity: [f32; 3],
    #[serde(default)]
    pub effects: Vec<StatusEffectKind>,
}

#[derive(Debug, Deserialize)]
pub struct HitSpec {
    pub target: u32,
    #[serde(default)]
    pub attacker: Option<u32>,
    /// Server tick the hit happens on. Effects expire relative to it.
    #[serde(default)]
    pub tick: Option<u64>,
    /// Actors that leave the server right before this hit.
    #[serde(default)]
    pub disconnect: Vec<u32>,
    #[serde(default)]
    pub damage: f32,
    #[serde(default)]
    pub zone: HitZone,
    #[serde(default, rename = "type")]
    pub damage_type: DamageType,
    /// Fixed-outcome hit; `damage`, `zone` and `type` are ignored when set.
    #[serde(default)]
    pub special: Option<SpecialDamage>,
}

fn default_health() -> f32 {
    HealthStat::DEFAULT_MAX
}

fn default_max_ahp() -> f32 {
    75.0
}

impl ActorSpec {
    pub fn spawn(&self) -> ActorState {
        let max_health = self.max_health.unwrap_or(self.health);
        let mut actor = ActorState::new(ActorId(self.id), self.nickname.clone())
            .with_faction(self.faction)
            .with_health(HealthStat::new(self.health, max_health))
            .with_ahp(AhpStat::new(self.ahp, self.max_ahp))
            .with_velocity(Vec3::from(self.velocity));

        for kind in &self.effects {
            if !actor.status_effects.add(*kind, PERMANENT) {
                tracing::warn!(actor = %actor.id, effect = %kind, "status effect list full");
            }
        }

        actor
    }
}

impl HitSpec {
    pub fn kind(&self) -> DamageKind {
        match &self.special {
            Some(special) => DamageKind::Special(special.clone()),
            None => DamageKind::Standard(
                StandardDamage::new(self.damage, self.damage_type).with_hit_zone(self.zone),
            ),
        }
    }
}

impl Scenario {
    /// Parses and validates a scenario.
    pub fn parse(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario TOML: {}", e))?;
        scenario.config.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn roster(&self) -> ActorRoster {
        self.actors.iter().map(ActorSpec::spawn).collect()
    }
}
