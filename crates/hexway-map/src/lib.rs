//! **hexway-map** — concrete hex map storage for the hexway route search.
//!
//! Provides [`HexMap`] (row-major tile storage with river edges, territory
//! ownership, and per-player fog of war), [`MapView`] (the adapter that
//! exposes a map to [`hexway_route::Router`]), and a small random map
//! generator for demos and tests.

pub mod hexmap;
pub mod mapgen;
pub mod tile;
pub mod view;

pub use hexmap::HexMap;
pub use mapgen::{MapGen, TerrainMix};
pub use tile::{RiverEdges, Tile};
pub use view::MapView;
