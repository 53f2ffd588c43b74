//! The capability trait the host map implements for the route search.

use hexway_core::{Coord, PlayerId};

use crate::terrain::{Feature, Terrain};

/// Read-only view of the map, as narrow as the route search needs.
///
/// Implementations are usually thin adapters over the host's map storage.
/// The search never mutates the world and never looks at a tile outside
/// [`contains`](RouteWorld::contains).
pub trait RouteWorld {
    /// Whether the world has a tile at `c`.
    fn contains(&self, c: Coord) -> bool;

    /// Terrain class of the tile at `c`.
    fn terrain(&self, c: Coord) -> Terrain;

    /// Surface feature of the tile at `c`, if any.
    fn feature(&self, c: Coord) -> Option<Feature>;

    /// Whether a river runs along the shared edge of two adjacent tiles.
    fn river_between(&self, a: Coord, b: Coord) -> bool;

    /// Whether the tile is water.
    fn is_water(&self, c: Coord) -> bool {
        self.terrain(c).is_water()
    }

    /// Whether the tile cannot be entered at all. The default derives this
    /// from terrain; mountains report impassable here and the candidate
    /// filter makes the explicit exception for them.
    fn is_impassable(&self, c: Coord) -> bool {
        self.terrain(c).is_mountain()
    }

    /// Whether the tile holds a natural wonder.
    fn is_natural_wonder(&self, _c: Coord) -> bool {
        false
    }

    /// Territory owner of the tile, `None` for neutral ground.
    fn owner(&self, _c: Coord) -> Option<PlayerId> {
        None
    }

    /// Whether the searching player has revealed the tile. Only consulted
    /// when the config sets `respect_fog`; the default sees everything.
    fn is_revealed(&self, _c: Coord) -> bool {
        true
    }
}
