//! Tile data: terrain, feature, ownership, river edges.

use hexway_core::{Direction, PlayerId};
use hexway_route::{Feature, Terrain};

/// River edges of one tile, one bit per [`Direction`].
///
/// A river runs along the border between two tiles, so the same edge is
/// recorded on both tiles; [`HexMap::set_river`] keeps the two sides in
/// sync.
///
/// [`HexMap::set_river`]: crate::HexMap::set_river
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiverEdges(u8);

impl RiverEdges {
    /// No river on any edge.
    pub const NONE: Self = Self(0);

    /// Mark the edge in `dir` as carrying a river.
    #[inline]
    pub fn set(&mut self, dir: Direction) {
        self.0 |= 1 << dir.index();
    }

    /// Whether the edge in `dir` carries a river.
    #[inline]
    pub const fn has(self, dir: Direction) -> bool {
        self.0 & (1 << dir.index()) != 0
    }

    /// Whether no edge carries a river.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// One map tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub terrain: Terrain,
    pub feature: Option<Feature>,
    pub natural_wonder: bool,
    pub owner: Option<PlayerId>,
    pub rivers: RiverEdges,
}

impl Tile {
    /// A plain tile of the given terrain, nothing on it.
    pub fn of(terrain: Terrain) -> Self {
        Self {
            terrain,
            ..Self::default()
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tile_round_trip() {
        let mut t = Tile::of(Terrain::SnowHills);
        t.feature = Some(Feature::Forest);
        t.owner = Some(PlayerId(3));
        t.rivers.set(Direction::NorthWest);
        let json = serde_json::to_string(&t).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
