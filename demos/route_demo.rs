//! Generate a random map and print the cheapest route across it.
//!
//! Usage: `route-demo [seed]`

use std::collections::HashSet;

use hexway_core::Coord;
use hexway_map::{HexMap, MapGen, MapView, TerrainMix};
use hexway_route::{RouteConfig, Router, Terrain};
use rand::SeedableRng;
use rand::rngs::StdRng;

const WIDTH: i32 = 28;
const HEIGHT: i32 = 14;

/// Character for a tile: feature first, then terrain.
fn tile_rune(map: &HexMap, c: Coord) -> char {
    use hexway_route::Feature;
    let Some(tile) = map.get(c) else {
        return ' ';
    };
    if tile.natural_wonder {
        return 'W';
    }
    match tile.feature {
        Some(Feature::Forest) => return '"',
        Some(Feature::Jungle) => return '&',
        Some(Feature::Marsh) => return 'm',
        Some(Feature::Floodplains) => return 'f',
        Some(Feature::Volcano) => return 'V',
        None => {}
    }
    match tile.terrain {
        Terrain::Flat => '.',
        Terrain::Hills => '^',
        Terrain::Mountain => 'M',
        Terrain::SnowFlat => ':',
        Terrain::SnowHills => 'n',
        Terrain::SnowMountain => 'N',
        Terrain::Coast => '-',
        Terrain::Ocean => '~',
    }
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7u64);

    let map = MapGen::generate(WIDTH, HEIGHT, &TerrainMix::default(), StdRng::seed_from_u64(seed));
    let start = Coord::new(1, HEIGHT - 2);
    let end = Coord::new(WIDTH - 2, 1);

    let mut router = Router::new(WIDTH, HEIGHT, RouteConfig::default());
    let route = match router.find_route(&MapView::new(&map), start, end, None) {
        Ok(route) => route,
        Err(err) => {
            eprintln!("route-demo: {err}");
            return;
        }
    };

    let on_route: HashSet<Coord> = route.plots.iter().copied().collect();
    for y in 0..HEIGHT {
        // Half-tile indent on odd rows to suggest the hex layout.
        if y & 1 == 1 {
            print!(" ");
        }
        for x in 0..WIDTH {
            let c = Coord::new(x, y);
            let rune = if c == start {
                'S'
            } else if c == end {
                'E'
            } else if on_route.contains(&c) {
                '*'
            } else {
                tile_rune(&map, c)
            };
            print!("{rune} ");
        }
        println!();
    }

    if route.found() {
        println!("\nroute {start} -> {end}: {} tiles, cost {}", route.plots.len(), route.cost);
    } else {
        println!("\nno route from {start} to {end} (cost sentinel {})", route.cost);
    }
}
