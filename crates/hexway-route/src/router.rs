//! The route search: open/closed node arena, selection loop, backtrace.

use std::collections::BinaryHeap;

use hexway_core::{Coord, Direction, PlayerId, distance};

use crate::config::RouteConfig;
use crate::cost::{EdgeContext, move_cost};
use crate::error::RouteError;
use crate::terrain::Feature;
use crate::traits::RouteWorld;

/// Cost sentinel for endpoints that can never be connected: a water
/// endpoint, or an end tile farther away than the search range.
pub const UNREACHABLE: i32 = 99_999;

/// Cost sentinel for a search that ran to exhaustion without reaching the
/// end tile. Distinct from [`UNREACHABLE`] so callers can tell "rejected up
/// front" from "searched and found nothing".
pub const NO_ROUTE: i32 = 9_999_999;

/// Search range applied when the caller passes `None`.
const RANGE_UNLIMITED: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// A computed route.
///
/// `plots` is ordered **end → start** (the order the backtrace produces);
/// use [`travel_order`](Route::travel_order) for start → end. `cost` is the
/// summed move cost of entering every tile after the start, or a sentinel
/// (`>= UNREACHABLE`) when no route exists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub plots: Vec<Coord>,
    pub cost: i32,
}

impl Route {
    fn empty(cost: i32) -> Self {
        Self {
            plots: Vec::new(),
            cost,
        }
    }

    /// Whether a usable route was produced.
    #[inline]
    pub fn found(&self) -> bool {
        !self.plots.is_empty() && self.cost < UNREACHABLE
    }

    /// Plots in travel order, start first.
    pub fn travel_order(&self) -> impl DoubleEndedIterator<Item = Coord> + '_ {
        self.plots.iter().rev().copied()
    }
}

// ---------------------------------------------------------------------------
// Internal nodes
// ---------------------------------------------------------------------------

/// Per-tile search node in the arena. A node is "open" while discovered but
/// not yet expanded; closing clears the flag. `generation` lazily
/// invalidates stale nodes between searches.
#[derive(Clone)]
struct Node {
    g: i32,
    f: i32,
    parent: usize,
    incoming: Option<Direction>,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            incoming: None,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first. Ties go
        // to the smallest arena index, keeping selection deterministic
        // regardless of insertion order.
        other.f.cmp(&self.f).then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Terrain-aware shortest-route search over a rectangular window of hex
/// tiles.
///
/// The router owns its node arena and heap and reuses them across calls, so
/// repeated queries incur no allocations after warm-up. One router serves
/// one window size; see [`resize`](Router::resize).
pub struct Router {
    width: usize,
    height: usize,
    config: RouteConfig,
    nodes: Vec<Node>,
    generation: u32,
    open: BinaryHeap<NodeRef>,
}

impl Router {
    /// Create a router for a `width` × `height` tile window.
    pub fn new(width: i32, height: i32, config: RouteConfig) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            width: w,
            height: h,
            config,
            nodes: vec![Node::default(); w * h],
            generation: 0,
            open: BinaryHeap::new(),
        }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Replace the configuration for subsequent searches.
    pub fn set_config(&mut self, config: RouteConfig) {
        self.config = config;
    }

    /// Window width in tiles.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Window height in tiles.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Replace the window size, reallocating the arena only when it grows.
    ///
    /// If the new size fits within existing capacity the arena is kept and
    /// the generation counter is bumped so stale nodes are ignored.
    pub fn resize(&mut self, width: i32, height: i32) {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        self.width = w;
        self.height = h;
        let new_len = w * h;
        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }
        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat arena index. `None` if outside the window.
    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if c.x < 0 || c.y < 0 || c.x >= self.width as i32 || c.y >= self.height as i32 {
            return None;
        }
        Some(c.y as usize * self.width + c.x as usize)
    }

    /// Convert a flat arena index back to a `Coord`.
    #[inline]
    fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    // -----------------------------------------------------------------------
    // Candidate filter
    // -----------------------------------------------------------------------

    /// Whether a neighbor tile may be opened at all.
    fn eligible<W: RouteWorld>(
        &self,
        world: &W,
        c: Coord,
        start: Coord,
        start_owner: Option<PlayerId>,
        range: i32,
    ) -> bool {
        if !world.contains(c) || world.is_water(c) {
            return false;
        }
        // Mountains report impassable but the route search crosses them.
        if world.is_impassable(c) && !world.terrain(c).is_mountain() {
            return false;
        }
        if world.feature(c) == Some(Feature::Volcano) || world.is_natural_wonder(c) {
            return false;
        }
        if distance(start, c) > range {
            return false;
        }
        if self.config.respect_fog && !world.is_revealed(c) {
            return false;
        }
        if self.config.friendly_territory_only {
            if let Some(owner) = world.owner(c) {
                if Some(owner) != start_owner {
                    return false;
                }
            }
        }
        true
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Find the cheapest route from `start` to `end`, searching at most
    /// `range` tiles out from `start` (`None` = unbounded).
    ///
    /// Returns the route ordered end → start plus its total cost. When no
    /// route exists the plot list is empty and the cost is a sentinel:
    /// [`UNREACHABLE`] for endpoints rejected up front (water, out of
    /// range), [`NO_ROUTE`] when the search ran and found nothing. An
    /// endpoint outside the router's window is caller misuse and an error.
    pub fn find_route<W: RouteWorld>(
        &mut self,
        world: &W,
        start: Coord,
        end: Coord,
        range: Option<i32>,
    ) -> Result<Route, RouteError> {
        let Some(start_idx) = self.idx(start) else {
            log::error!("find_route: start {start} outside {}x{} window", self.width, self.height);
            return Err(RouteError::OutOfBounds { coord: start });
        };
        let Some(goal_idx) = self.idx(end) else {
            log::error!("find_route: end {end} outside {}x{} window", self.width, self.height);
            return Err(RouteError::OutOfBounds { coord: end });
        };
        let range = range.unwrap_or(RANGE_UNLIMITED);

        // Rejections that need no search.
        if world.is_water(start) || world.is_water(end) {
            return Ok(Route::empty(UNREACHABLE));
        }
        if start == end {
            return Ok(Route {
                plots: vec![start],
                cost: 0,
            });
        }
        let dist = distance(start, end);
        if dist <= 1 {
            return Ok(Route {
                plots: vec![end, start],
                cost: 1,
            });
        }
        if dist > range {
            return Ok(Route::empty(UNREACHABLE));
        }

        let start_owner = world.owner(start);

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = dist;
            node.parent = usize::MAX;
            node.incoming = None;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open = std::mem::take(&mut self.open);
        open.clear();
        open.push(NodeRef {
            idx: start_idx,
            f: dist,
        });

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let incoming = self.nodes[ci].incoming;
            let cp = self.coord(ci);

            if self.config.trace {
                log::trace!("expand {cp} g={current_g} f={}", self.nodes[ci].f);
            }

            for dir in Direction::ALL {
                let np = cp.neighbor(dir);
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if !self.eligible(world, np, start, start_owner, range) {
                    continue;
                }

                let edge = EdgeContext::classify(world, cp, np, dir, incoming);
                let tentative_g = current_g + move_cost(&self.config, world, np, Some(&edge));

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already visited this search; relax only on a strictly
                    // cheaper path. Closed nodes get reopened: the turn
                    // penalty makes the heuristic inconsistent.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + distance(np, end);
                n.parent = ci;
                n.incoming = Some(dir);
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        self.open = open;

        if !found {
            log::error!("find_route: search exhausted, no route {start} -> {end}");
            return Ok(Route::empty(NO_ROUTE));
        }

        // Backtrace: walk parent links from the end tile. The parent chain
        // yields exactly the end → start order callers expect.
        let mut plots = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            plots.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }

        Ok(Route {
            plots,
            cost: self.nodes[goal_idx].g,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::Terrain;
    use std::collections::{HashMap, HashSet};

    /// In-memory world for router tests: flat by default, with terrain,
    /// features, rivers, owners and fog sprinkled per test.
    struct TestWorld {
        width: i32,
        height: i32,
        terrain: HashMap<Coord, Terrain>,
        features: HashMap<Coord, Feature>,
        wonders: HashSet<Coord>,
        rivers: HashSet<(Coord, Coord)>,
        owners: HashMap<Coord, PlayerId>,
        revealed: Option<HashSet<Coord>>,
    }

    impl TestWorld {
        fn flat(width: i32, height: i32) -> Self {
            Self {
                width,
                height,
                terrain: HashMap::new(),
                features: HashMap::new(),
                wonders: HashSet::new(),
                rivers: HashSet::new(),
                owners: HashMap::new(),
                revealed: None,
            }
        }

        fn set_river(&mut self, a: Coord, dir: Direction) {
            let b = a.neighbor(dir);
            self.rivers.insert((a, b));
            self.rivers.insert((b, a));
        }
    }

    impl RouteWorld for TestWorld {
        fn contains(&self, c: Coord) -> bool {
            c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
        }
        fn terrain(&self, c: Coord) -> Terrain {
            self.terrain.get(&c).copied().unwrap_or_default()
        }
        fn feature(&self, c: Coord) -> Option<Feature> {
            self.features.get(&c).copied()
        }
        fn river_between(&self, a: Coord, b: Coord) -> bool {
            self.rivers.contains(&(a, b))
        }
        fn is_natural_wonder(&self, c: Coord) -> bool {
            self.wonders.contains(&c)
        }
        fn owner(&self, c: Coord) -> Option<PlayerId> {
            self.owners.get(&c).copied()
        }
        fn is_revealed(&self, c: Coord) -> bool {
            self.revealed.as_ref().is_none_or(|seen| seen.contains(&c))
        }
    }

    fn router(w: i32, h: i32) -> Router {
        Router::new(w, h, RouteConfig::default())
    }

    /// Travel order must be a chain of adjacent tiles from start to end.
    fn assert_connected(route: &Route, start: Coord, end: Coord) {
        let travel: Vec<Coord> = route.travel_order().collect();
        assert!(travel.len() >= 2);
        assert_eq!(travel[0], start);
        assert_eq!(*travel.last().unwrap(), end);
        for pair in travel.windows(2) {
            assert_eq!(distance(pair[0], pair[1]), 1, "gap between {} and {}", pair[0], pair[1]);
        }
    }

    // -----------------------------------------------------------------------
    // Short-circuits
    // -----------------------------------------------------------------------

    #[test]
    fn endpoint_outside_window_is_an_error() {
        let w = TestWorld::flat(8, 8);
        let mut r = router(8, 8);
        let bad = Coord::new(8, 3);
        assert_eq!(
            r.find_route(&w, bad, Coord::new(1, 1), None),
            Err(RouteError::OutOfBounds { coord: bad })
        );
        assert_eq!(
            r.find_route(&w, Coord::new(1, 1), bad, None),
            Err(RouteError::OutOfBounds { coord: bad })
        );
    }

    #[test]
    fn water_endpoints_are_unreachable() {
        let mut w = TestWorld::flat(8, 8);
        w.terrain.insert(Coord::new(1, 1), Terrain::Coast);
        let mut r = router(8, 8);

        let route = r.find_route(&w, Coord::new(1, 1), Coord::new(5, 5), None).unwrap();
        assert!(route.plots.is_empty());
        assert_eq!(route.cost, UNREACHABLE);

        let route = r.find_route(&w, Coord::new(5, 5), Coord::new(1, 1), None).unwrap();
        assert_eq!(route.cost, UNREACHABLE);
        assert!(!route.found());
    }

    #[test]
    fn start_equals_end() {
        let w = TestWorld::flat(8, 8);
        let mut r = router(8, 8);
        let c = Coord::new(3, 3);
        let route = r.find_route(&w, c, c, None).unwrap();
        assert_eq!(route.plots, vec![c]);
        assert_eq!(route.cost, 0);
        assert!(route.found());
    }

    #[test]
    fn adjacent_endpoints_cost_one() {
        // Adjacency short-circuits before the cost model, even over hills.
        let mut w = TestWorld::flat(8, 8);
        let start = Coord::new(3, 3);
        let end = start.neighbor(Direction::NorthEast);
        w.terrain.insert(end, Terrain::SnowHills);
        let mut r = router(8, 8);
        let route = r.find_route(&w, start, end, None).unwrap();
        assert_eq!(route.plots, vec![end, start]);
        assert_eq!(route.cost, 1);
    }

    #[test]
    fn end_beyond_range_is_unreachable() {
        let w = TestWorld::flat(16, 16);
        let mut r = router(16, 16);
        let route = r
            .find_route(&w, Coord::new(2, 3), Coord::new(8, 3), Some(4))
            .unwrap();
        assert!(route.plots.is_empty());
        assert_eq!(route.cost, UNREACHABLE);
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    #[test]
    fn straight_flat_line() {
        let w = TestWorld::flat(10, 8);
        let mut r = router(10, 8);
        let start = Coord::new(2, 3);
        let end = Coord::new(5, 3);
        let route = r.find_route(&w, start, end, None).unwrap();

        // Three base-cost steps, no turn or terrain surcharge; plots come
        // back end-first.
        assert_eq!(route.cost, 3);
        assert_eq!(
            route.plots,
            vec![
                Coord::new(5, 3),
                Coord::new(4, 3),
                Coord::new(3, 3),
                Coord::new(2, 3)
            ]
        );
        assert_connected(&route, start, end);
    }

    #[test]
    fn river_crossing_adds_exactly_its_surcharge() {
        let mut w = TestWorld::flat(10, 8);
        w.set_river(Coord::new(3, 3), Direction::East);
        let mut r = router(10, 8);
        let route = r
            .find_route(&w, Coord::new(2, 3), Coord::new(5, 3), None)
            .unwrap();
        assert_eq!(route.cost, 3 + r.config().river_cost);
        // Still the straight line; any detour is dearer.
        assert_eq!(route.plots.len(), 4);
    }

    #[test]
    fn volcano_forces_a_detour() {
        let mut w = TestWorld::flat(12, 8);
        let start = Coord::new(2, 3);
        let end = Coord::new(6, 3);
        w.features.insert(Coord::new(4, 3), Feature::Volcano);
        let mut r = router(12, 8);
        let route = r.find_route(&w, start, end, None).unwrap();

        assert!(route.found());
        assert!(!route.plots.contains(&Coord::new(4, 3)));
        assert!(route.cost > 4, "detour must cost more than the straight line");
        assert_connected(&route, start, end);
    }

    #[test]
    fn natural_wonder_wall_exhausts_the_search() {
        let mut w = TestWorld::flat(9, 6);
        for y in 0..6 {
            w.wonders.insert(Coord::new(4, y));
        }
        let mut r = router(9, 6);
        let route = r
            .find_route(&w, Coord::new(1, 2), Coord::new(7, 2), None)
            .unwrap();
        assert!(route.plots.is_empty());
        assert_eq!(route.cost, NO_ROUTE);
        assert!(!route.found());
    }

    #[test]
    fn mountains_are_crossed_at_a_price() {
        let mut w = TestWorld::flat(10, 8);
        let peak = Coord::new(4, 3);
        w.terrain.insert(peak, Terrain::Mountain);
        let config = RouteConfig {
            mountain_cost: 2,
            ..RouteConfig::default()
        };
        let mut r = Router::new(10, 8, config);
        let route = r
            .find_route(&w, Coord::new(2, 3), Coord::new(6, 3), None)
            .unwrap();

        // Straight through the peak: 4 base steps + mountain surcharge.
        assert_eq!(route.cost, 4 + 2);
        assert!(route.plots.contains(&peak));
    }

    #[test]
    fn enemy_territory_blocks_friendly_only_routes() {
        let mut w = TestWorld::flat(9, 6);
        let enemy = PlayerId(2);
        for y in 0..6 {
            w.owners.insert(Coord::new(4, y), enemy);
        }
        let mut r = router(9, 6);
        let route = r
            .find_route(&w, Coord::new(1, 2), Coord::new(7, 2), None)
            .unwrap();
        assert_eq!(route.cost, NO_ROUTE);

        // The same map routes fine once the ownership constraint is lifted.
        let config = RouteConfig {
            friendly_territory_only: false,
            ..RouteConfig::default()
        };
        r.set_config(config);
        let route = r
            .find_route(&w, Coord::new(1, 2), Coord::new(7, 2), None)
            .unwrap();
        assert!(route.found());
    }

    #[test]
    fn own_territory_is_routable() {
        let mut w = TestWorld::flat(10, 8);
        let me = PlayerId(1);
        let start = Coord::new(2, 3);
        w.owners.insert(start, me);
        w.owners.insert(Coord::new(3, 3), me);
        w.owners.insert(Coord::new(4, 3), me);
        let mut r = router(10, 8);
        let route = r.find_route(&w, start, Coord::new(5, 3), None).unwrap();
        assert_eq!(route.cost, 3);
    }

    #[test]
    fn fog_hides_unrevealed_tiles() {
        let mut w = TestWorld::flat(10, 8);
        let start = Coord::new(1, 1);
        let end = Coord::new(4, 1);
        w.revealed = Some(HashSet::new());
        let config = RouteConfig {
            respect_fog: true,
            ..RouteConfig::default()
        };
        let mut r = Router::new(10, 8, config);

        let route = r.find_route(&w, start, end, None).unwrap();
        assert_eq!(route.cost, NO_ROUTE);

        // Reveal the corridor and the route appears.
        let seen = w.revealed.as_mut().unwrap();
        for x in 1..=4 {
            seen.insert(Coord::new(x, 1));
        }
        let route = r.find_route(&w, start, end, None).unwrap();
        assert_eq!(route.cost, 3);
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    #[test]
    fn repeated_calls_are_identical() {
        let mut w = TestWorld::flat(12, 8);
        w.terrain.insert(Coord::new(4, 3), Terrain::Hills);
        w.set_river(Coord::new(5, 3), Direction::East);
        let mut r = router(12, 8);
        let start = Coord::new(2, 3);
        let end = Coord::new(8, 3);

        let first = r.find_route(&w, start, end, None).unwrap();
        let second = r.find_route(&w, start, end, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn widening_the_range_never_worsens_the_route() {
        let mut w = TestWorld::flat(12, 8);
        w.features.insert(Coord::new(4, 3), Feature::Volcano);
        let mut r = router(12, 8);
        let start = Coord::new(2, 3);
        let end = Coord::new(6, 3);

        let tight = r.find_route(&w, start, end, Some(5)).unwrap();
        let wide = r.find_route(&w, start, end, Some(10)).unwrap();
        assert!(wide.cost <= tight.cost);
    }

    #[test]
    fn bending_costs_a_turn() {
        // A distance-2 target off the start's axis always needs one bend.
        let w = TestWorld::flat(8, 8);
        let mut r = router(8, 8);
        let start = Coord::new(2, 2);
        let end = start.neighbor(Direction::East).neighbor(Direction::NorthEast);
        let route = r.find_route(&w, start, end, None).unwrap();
        assert_eq!(route.cost, 2 + r.config().turn_cost);
    }

    #[test]
    fn route_cost_matches_per_step_costs() {
        let mut w = TestWorld::flat(12, 8);
        w.terrain.insert(Coord::new(4, 3), Terrain::Hills);
        w.terrain.insert(Coord::new(6, 3), Terrain::SnowFlat);
        w.features.insert(Coord::new(5, 3), Feature::Forest);
        w.set_river(Coord::new(2, 3), Direction::East);
        // Without the turn surcharge every per-edge cost is history-free,
        // so the stored total must replay exactly.
        let config = RouteConfig {
            turn_cost: 0,
            ..RouteConfig::default()
        };
        let mut r = Router::new(12, 8, config);
        let start = Coord::new(2, 3);
        let end = Coord::new(8, 3);
        let route = r.find_route(&w, start, end, None).unwrap();
        assert!(route.found());

        // Replay the travel order through the cost model.
        let travel: Vec<Coord> = route.travel_order().collect();
        let mut total = 0;
        let mut incoming = None;
        for pair in travel.windows(2) {
            let dir = pair[0].direction_to(pair[1]).unwrap();
            let edge = EdgeContext::classify(&w, pair[0], pair[1], dir, incoming);
            total += move_cost(r.config(), &w, pair[1], Some(&edge));
            incoming = Some(dir);
        }
        assert_eq!(route.cost, total);
        assert!(route.cost >= 0);
    }

    #[test]
    fn arena_survives_resize() {
        let w = TestWorld::flat(6, 6);
        let mut r = router(12, 12);
        r.resize(6, 6);
        let route = r
            .find_route(&w, Coord::new(1, 1), Coord::new(4, 1), None)
            .unwrap();
        assert_eq!(route.cost, 3);
        assert_eq!(r.width(), 6);
    }

    #[test]
    fn travel_order_reverses_plots() {
        let route = Route {
            plots: vec![Coord::new(3, 0), Coord::new(2, 0), Coord::new(1, 0)],
            cost: 2,
        };
        let travel: Vec<Coord> = route.travel_order().collect();
        assert_eq!(
            travel,
            vec![Coord::new(1, 0), Coord::new(2, 0), Coord::new(3, 0)]
        );
    }
}
