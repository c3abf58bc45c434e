//! Scenario runner: replays scripted hits through damage-core.
mod scenario;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use damage_core::{
    ActorId, ActorOracle, ActorRoster, CoreError, DamageEvent, DamageResolver, DamageTarget,
    Footprint, RawDamage, Tick,
};

use scenario::{HitSpec, Scenario};

#[derive(Parser)]
#[command(name = "damage-sim", about = "Replay a damage scenario and print each outcome")]
struct Cli {
    /// Path to the scenario TOML file
    scenario: PathBuf,

    /// Log every resolution step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::TRACE
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let scenario = Scenario::load(&cli.scenario)?;
    run(&scenario);
    Ok(())
}

fn run(scenario: &Scenario) {
    let resolver = DamageResolver::new(scenario.config.clone()).with_builtin_hooks();
    let mut roster = scenario.roster();
    tracing::info!(
        actors = roster.len(),
        hits = scenario.hits.len(),
        headshot_multiplier = resolver.config().headshot_multiplier,
        "scenario loaded"
    );

    for (index, hit) in scenario.hits.iter().enumerate() {
        for id in &hit.disconnect {
            if roster.remove(ActorId(*id)).is_some() {
                tracing::info!(actor = %ActorId(*id), "disconnected");
            }
        }

        if let Some(tick) = hit.tick {
            roster.advance_to(Tick(tick));
        }

        let Some(mut event) = build_event(&roster, hit) else {
            tracing::warn!(hit = index, actor = hit.target, "target not connected, hit skipped");
            continue;
        };

        match resolver.resolve_by_id(&mut roster, &mut event) {
            Ok(outcome) => {
                println!("[{index}] {event} -> {outcome}");
                if outcome.is_death() {
                    tracing::info!(
                        victim = %event.target_footprint(),
                        killer = %event.attacker_footprint(),
                        "kill"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(hit = index, severity = e.severity().as_str(), "{e}");
            }
        }
    }

    for actor in roster.iter() {
        println!(
            "{} hp={:.1} ahp={:.1}{}",
            actor.footprint(),
            actor.health().current(),
            actor.absorption().current(),
            if actor.is_alive() { "" } else { " (dead)" }
        );
    }
}

/// Builds the event for `hit`, or `None` if its target is not connected.
fn build_event(roster: &ActorRoster, hit: &HitSpec) -> Option<DamageEvent> {
    let target = roster.actor(ActorId(hit.target))?;

    let mut raw = RawDamage::new(hit.kind());
    if let Some(attacker) = hit.attacker {
        // Weapons only know the shooter's id; a disconnected shooter
        // resolves to "no one".
        let footprint = roster
            .actor(ActorId(attacker))
            .map(|a| a.footprint())
            .unwrap_or_else(|| Footprint {
                id: Some(ActorId(attacker)),
                ..Footprint::EMPTY
            });
        raw = raw.with_attacker(footprint);
    }

    Some(DamageEvent::from_raw(target, raw, roster))
}
