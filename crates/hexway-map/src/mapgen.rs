//! Random map generation for demos and tests.
//!
//! The generator scatters terrain and features over a flat map, lays a snow
//! belt along the northern rows, then traces a few meandering rivers. It is
//! deliberately simple: its job is to produce plausible routing terrain,
//! not a balanced game map.

use hexway_core::{Coord, Direction};
use hexway_route::{Feature, Terrain};
use rand::{Rng, RngExt};

use crate::hexmap::HexMap;
use crate::tile::Tile;

/// Densities for the random generator. Fractions are per-tile
/// probabilities in 0.0–1.0.
#[derive(Debug, Clone)]
pub struct TerrainMix {
    pub hills: f64,
    pub mountains: f64,
    pub forest: f64,
    pub jungle: f64,
    pub marsh: f64,
    /// Chance that a mountain tile is topped by a volcano.
    pub volcano: f64,
    /// Northern rows converted to the snow variant of their terrain.
    pub snow_rows: i32,
    /// Number of river runs to trace.
    pub rivers: usize,
}

impl Default for TerrainMix {
    fn default() -> Self {
        Self {
            hills: 0.15,
            mountains: 0.05,
            forest: 0.10,
            jungle: 0.05,
            marsh: 0.03,
            volcano: 0.15,
            snow_rows: 1,
            rivers: 2,
        }
    }
}

/// Map generator operating on a [`HexMap`].
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub map: HexMap,
}

impl<R: Rng> MapGen<R> {
    /// Start from a bare flat map.
    pub fn new(width: i32, height: i32, rng: R) -> Self {
        Self {
            rng,
            map: HexMap::new(width, height),
        }
    }

    /// Generate a complete map with the given mix and return it.
    pub fn generate(width: i32, height: i32, mix: &TerrainMix, rng: R) -> HexMap {
        let mut g = Self::new(width, height, rng);
        g.scatter_terrain(mix);
        g.snow_belt(mix.snow_rows);
        for _ in 0..mix.rivers {
            g.trace_river(height.max(4));
        }
        g.sprinkle_floodplains();
        g.map
    }

    /// Scatter hills, mountains, and features over the flat base.
    pub fn scatter_terrain(&mut self, mix: &TerrainMix) {
        let coords: Vec<Coord> = self.map.coords().collect();
        for c in coords {
            let terrain = if self.rng.random_bool(mix.mountains) {
                Terrain::Mountain
            } else if self.rng.random_bool(mix.hills) {
                Terrain::Hills
            } else {
                Terrain::Flat
            };
            let mut tile = Tile::of(terrain);

            if terrain.is_mountain() {
                if self.rng.random_bool(mix.volcano) {
                    tile.feature = Some(Feature::Volcano);
                }
            } else if self.rng.random_bool(mix.forest) {
                tile.feature = Some(Feature::Forest);
            } else if self.rng.random_bool(mix.jungle) {
                tile.feature = Some(Feature::Jungle);
            } else if self.rng.random_bool(mix.marsh) {
                tile.feature = Some(Feature::Marsh);
            }

            if let Some(slot) = self.map.get_mut(c) {
                *slot = tile;
            }
        }
    }

    /// Convert the northern `rows` rows to snow variants.
    pub fn snow_belt(&mut self, rows: i32) {
        let coords: Vec<Coord> = self.map.coords().collect();
        for c in coords {
            if c.y >= rows {
                continue;
            }
            if let Some(tile) = self.map.get_mut(c) {
                tile.terrain = match tile.terrain {
                    Terrain::Flat => Terrain::SnowFlat,
                    Terrain::Hills => Terrain::SnowHills,
                    Terrain::Mountain => Terrain::SnowMountain,
                    other => other,
                };
            }
        }
    }

    /// Trace one meandering river of roughly `len` edges.
    ///
    /// Walks tile to tile from a random spot, marking the edge between the
    /// previous and next tile on each step.
    pub fn trace_river(&mut self, len: i32) {
        let (w, h) = (self.map.width(), self.map.height());
        if w == 0 || h == 0 {
            return;
        }
        let mut c = Coord::new(self.rng.random_range(0..w), self.rng.random_range(0..h));
        for _ in 0..len {
            let dir = Direction::ALL[self.rng.random_range(0..6)];
            let next = c.neighbor(dir);
            if !self.map.contains(next) {
                continue;
            }
            self.map.set_river(c, dir);
            c = next;
        }
    }

    /// Turn flat river-side tiles into floodplains.
    pub fn sprinkle_floodplains(&mut self) {
        let coords: Vec<Coord> = self.map.coords().collect();
        for c in coords {
            let river_side = self.map.get(c).is_some_and(|t| {
                t.terrain == Terrain::Flat && t.feature.is_none() && !t.rivers.is_empty()
            });
            if !river_side {
                continue;
            }
            if let Some(tile) = self.map.get_mut(c) {
                tile.feature = Some(Feature::Floodplains);
            }
        }
    }
}
