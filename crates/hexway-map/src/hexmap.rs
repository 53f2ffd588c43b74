//! Row-major hex map storage with rivers, ownership, and fog of war.

use std::collections::HashMap;

use hexway_core::{Coord, Direction, PlayerId};

use crate::tile::Tile;

/// A rectangular window of hex tiles in odd-r offset coordinates.
///
/// Tiles are stored row-major. Rivers live on tile edges and are recorded
/// on both adjacent tiles; fog of war is one revealed-layer per player,
/// allocated the first time that player reveals a tile.
#[derive(Debug, Clone, Default)]
pub struct HexMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    fog: HashMap<PlayerId, Vec<bool>>,
}

impl HexMap {
    /// Create a map of bare flat tiles.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            tiles: vec![Tile::default(); (w * h) as usize],
            fog: HashMap::new(),
        }
    }

    /// Map width in tiles.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Map height in tiles.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the map has a tile at `c`.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.y * self.width + c.x) as usize)
    }

    /// The tile at `c`, or `None` outside the map.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<&Tile> {
        self.idx(c).map(|i| &self.tiles[i])
    }

    /// Mutable access to the tile at `c`, or `None` outside the map.
    #[inline]
    pub fn get_mut(&mut self, c: Coord) -> Option<&mut Tile> {
        self.idx(c).map(|i| &mut self.tiles[i])
    }

    /// Overwrite every tile with a copy of `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Row-major iterator over every coordinate of the map.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let w = self.width;
        (0..self.width * self.height).map(move |i| Coord::new(i % w, i / w))
    }

    // -----------------------------------------------------------------------
    // Rivers
    // -----------------------------------------------------------------------

    /// Put a river on the edge of `c` in direction `dir`.
    ///
    /// The matching edge of the neighboring tile is marked too, so the
    /// crossing predicate is symmetric.
    pub fn set_river(&mut self, c: Coord, dir: Direction) {
        if let Some(tile) = self.get_mut(c) {
            tile.rivers.set(dir);
        }
        let other = c.neighbor(dir);
        if let Some(tile) = self.get_mut(other) {
            tile.rivers.set(dir.opposite());
        }
    }

    /// Whether a river runs along the shared edge of two adjacent tiles.
    /// `false` for non-adjacent coordinates.
    pub fn river_between(&self, a: Coord, b: Coord) -> bool {
        match a.direction_to(b) {
            Some(dir) => self.get(a).is_some_and(|t| t.rivers.has(dir)),
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Fog of war
    // -----------------------------------------------------------------------

    /// Mark `c` as revealed to `player`.
    pub fn reveal(&mut self, player: PlayerId, c: Coord) {
        let Some(i) = self.idx(c) else {
            return;
        };
        let len = self.tiles.len();
        self.fog.entry(player).or_insert_with(|| vec![false; len])[i] = true;
    }

    /// Mark the whole map as revealed to `player`.
    pub fn reveal_all(&mut self, player: PlayerId) {
        let len = self.tiles.len();
        self.fog.insert(player, vec![true; len]);
    }

    /// Whether `player` has revealed `c`. A player who has revealed nothing
    /// yet sees nothing.
    pub fn is_revealed(&self, player: PlayerId, c: Coord) -> bool {
        match (self.fog.get(&player), self.idx(c)) {
            (Some(seen), Some(i)) => seen[i],
            _ => false,
        }
    }
}
