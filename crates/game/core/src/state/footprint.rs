//! Durable identity snapshots.
//!
//! A [`Footprint`] is captured from a live actor when a damage event is built
//! and is never refreshed afterwards. Kill feeds and server logs read the
//! footprint, so attribution survives the attacker leaving the server.

use std::fmt;

use super::ActorId;

/// Allegiance of an actor at the time of a hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Faction {
    #[default]
    Unaffiliated,
    Defenders,
    Raiders,
    Civilians,
    Creatures,
}

/// Immutable identity snapshot of an actor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    /// `None` for the empty footprint recorded when nobody is responsible.
    pub id: Option<ActorId>,
    pub nickname: String,
    pub faction: Faction,
}

impl Footprint {
    /// Footprint recorded for hits without an attacker.
    pub const EMPTY: Self = Self {
        id: None,
        nickname: String::new(),
        faction: Faction::Unaffiliated,
    };

    pub fn new(id: ActorId, nickname: impl Into<String>, faction: Faction) -> Self {
        Self {
            id: Some(id),
            nickname: nickname.into(),
            faction,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.id, self.nickname.is_empty()) {
            (None, _) => f.write_str("No one"),
            (Some(id), true) => write!(f, "{id}"),
            (Some(_), false) => f.write_str(&self.nickname),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_footprint_reads_as_no_one() {
        assert!(Footprint::default().is_empty());
        assert_eq!(Footprint::EMPTY, Footprint::default());
        assert_eq!(Footprint::EMPTY.to_string(), "No one");
    }

    #[test]
    fn nameless_footprint_falls_back_to_id() {
        let footprint = Footprint::new(ActorId(12), "", Faction::Raiders);
        assert_eq!(footprint.to_string(), "#12");

        let named = Footprint::new(ActorId(12), "Vex", Faction::Raiders);
        assert_eq!(named.to_string(), "Vex");
    }
}
