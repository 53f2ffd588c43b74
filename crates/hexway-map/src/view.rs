//! The adapter that exposes a [`HexMap`] to the route search.

use hexway_core::{Coord, PlayerId};
use hexway_route::{Feature, RouteWorld, Terrain};

use crate::hexmap::HexMap;

/// A read-only [`RouteWorld`] view of a [`HexMap`].
///
/// Optionally scoped to a searching player, in which case the fog-of-war
/// query consults that player's revealed layer. Coordinates outside the map
/// read as open ocean, which the route search never enters.
#[derive(Clone, Copy)]
pub struct MapView<'a> {
    map: &'a HexMap,
    player: Option<PlayerId>,
}

impl<'a> MapView<'a> {
    /// View the map with no fog constraint.
    pub fn new(map: &'a HexMap) -> Self {
        Self { map, player: None }
    }

    /// View the map as seen by `player`.
    pub fn for_player(map: &'a HexMap, player: PlayerId) -> Self {
        Self {
            map,
            player: Some(player),
        }
    }
}

impl RouteWorld for MapView<'_> {
    fn contains(&self, c: Coord) -> bool {
        self.map.contains(c)
    }

    fn terrain(&self, c: Coord) -> Terrain {
        self.map.get(c).map_or(Terrain::Ocean, |t| t.terrain)
    }

    fn feature(&self, c: Coord) -> Option<Feature> {
        self.map.get(c).and_then(|t| t.feature)
    }

    fn river_between(&self, a: Coord, b: Coord) -> bool {
        self.map.river_between(a, b)
    }

    fn is_natural_wonder(&self, c: Coord) -> bool {
        self.map.get(c).is_some_and(|t| t.natural_wonder)
    }

    fn owner(&self, c: Coord) -> Option<PlayerId> {
        self.map.get(c).and_then(|t| t.owner)
    }

    fn is_revealed(&self, c: Coord) -> bool {
        match self.player {
            Some(player) => self.map.is_revealed(player, c),
            None => true,
        }
    }
}

// ---------------------------------------------------------------------------
// End-to-end routing scenarios over a real map
// ---------------------------------------------------------------------------
