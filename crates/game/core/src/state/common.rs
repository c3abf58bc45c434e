use std::fmt;

/// Stable identifier of an actor known to the server.
///
/// Identifiers are never reused while a match is running, so an id recorded in
/// a damage event still names the same player after they disconnect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// World-space vector in metres (or metres per second for velocities).
///
/// `y` is the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns a copy with the vertical component raised to at least `floor`.
    #[must_use]
    pub fn with_min_y(self, floor: f32) -> Self {
        Self {
            y: self.y.max(floor),
            ..self
        }
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Server tick counter used for status effect expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_y_only_raises() {
        let falling = Vec3::new(1.0, -4.0, 2.0);
        assert_eq!(falling.with_min_y(0.0), Vec3::new(1.0, 0.0, 2.0));

        let jumping = Vec3::new(0.0, 3.5, 0.0);
        assert_eq!(jumping.with_min_y(0.0), jumping);
    }

    #[test]
    fn actor_id_display() {
        assert_eq!(ActorId(7).to_string(), "#7");
    }
}
