//! Connected actors, indexed by id.

use crate::env::{ActorOracle, ActorRegistry};

use super::{ActorId, ActorState, Tick};

/// Actors currently present on the server.
///
/// Removing an actor models a disconnect: lookups for its id return `None`
/// from then on, while footprints already captured stay valid.
#[derive(Clone, Debug, Default)]
pub struct ActorRoster {
    actors: Vec<ActorState>,
}

impl ActorRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an actor, replacing any actor with the same id.
    pub fn insert(&mut self, actor: ActorState) {
        match self.actors.iter_mut().find(|a| a.id == actor.id) {
            Some(slot) => *slot = actor,
            None => self.actors.push(actor),
        }
    }

    /// Removes an actor and returns its last state.
    pub fn remove(&mut self, id: ActorId) -> Option<ActorState> {
        let index = self.actors.iter().position(|a| a.id == id)?;
        Some(self.actors.remove(index))
    }

    /// Moves every actor's clock to `tick`, dropping expired effects.
    pub fn advance_to(&mut self, tick: Tick) {
        for actor in &mut self.actors {
            actor.advance_to(tick);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.iter()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl FromIterator<ActorState> for ActorRoster {
    fn from_iter<I: IntoIterator<Item = ActorState>>(iter: I) -> Self {
        let mut roster = Self::new();
        for actor in iter {
            roster.insert(actor);
        }
        roster
    }
}

impl ActorOracle for ActorRoster {
    type Actor = ActorState;

    fn actor(&self, id: ActorId) -> Option<&ActorState> {
        self.actors.iter().find(|a| a.id == id)
    }
}

impl ActorRegistry for ActorRoster {
    fn actor_mut(&mut self, id: ActorId) -> Option<&mut ActorState> {
        self.actors.iter_mut().find(|a| a.id == id)
    }
}
