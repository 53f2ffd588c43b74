//! The composite move-cost model and its adjacency classifier.

use hexway_core::{Coord, Direction};

use crate::config::RouteConfig;
use crate::terrain::Feature;
use crate::traits::RouteWorld;

/// Derived data about one edge of an expansion: the direction travelled,
/// whether the edge crosses a river, and whether the direction differs from
/// the one used to reach the predecessor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EdgeContext {
    pub dir: Direction,
    pub crosses_river: bool,
    pub turned: bool,
}

impl EdgeContext {
    /// Classify the edge from `from` to its neighbor `to` in direction
    /// `dir`. `incoming` is the direction used to reach `from`; `None` when
    /// `from` is the start tile, in which case no turn is charged.
    pub fn classify<W: RouteWorld>(
        world: &W,
        from: Coord,
        to: Coord,
        dir: Direction,
        incoming: Option<Direction>,
    ) -> Self {
        Self {
            dir,
            crosses_river: world.river_between(from, to),
            turned: incoming.is_some_and(|d| d != dir),
        }
    }
}

/// Incremental cost of entering `into`.
///
/// Base cost, plus the terrain surcharge (hills or mountain, with snow
/// stacking on top), plus the feature surcharge, plus the river-crossing
/// and direction-change surcharges when an edge context is given.
/// The start tile is never entered, so it is never passed here.
pub fn move_cost<W: RouteWorld>(
    config: &RouteConfig,
    world: &W,
    into: Coord,
    edge: Option<&EdgeContext>,
) -> i32 {
    let terrain = world.terrain(into);
    let mut cost = config.base_cost;

    if terrain.is_mountain() {
        cost += config.mountain_cost;
    } else if terrain.is_hills() {
        cost += config.hills_cost;
    }
    if terrain.is_snow() {
        cost += config.snow_cost;
    }

    cost += match world.feature(into) {
        Some(Feature::Forest) => config.forest_cost,
        Some(Feature::Jungle) => config.jungle_cost,
        Some(Feature::Marsh) => config.marsh_cost,
        Some(Feature::Floodplains) => config.floodplains_cost,
        Some(Feature::Volcano) | None => 0,
    };

    if let Some(edge) = edge {
        if edge.crosses_river {
            cost += config.river_cost;
        }
        if edge.turned {
            cost += config.turn_cost;
        }
    }

    cost
}
