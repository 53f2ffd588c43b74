//! Player identity.

use std::fmt;

/// Identifier of a player, used for territory ownership and fog of war.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

impl From<u8> for PlayerId {
    fn from(v: u8) -> Self {
        Self(v)
    }
}
