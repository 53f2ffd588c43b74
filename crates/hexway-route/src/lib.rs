//! **hexway-route** — terrain-aware shortest-route search for hex maps.
//!
//! The central type is [`Router`], an A\* search over a rectangular window of
//! hex tiles. Movement cost is a composite of terrain, feature, river and
//! direction-change surcharges, so routes bend around expensive ground and
//! prefer straight runs. Typical consumer: a road/infrastructure planner
//! that may only route through friendly or neutral territory.
//!
//! The map itself stays outside this crate: callers implement [`RouteWorld`]
//! (usually as a thin adapter over their map storage) and hand it to
//! [`Router::find_route`]. The router owns and reuses its internal node
//! arena so that repeated queries incur no allocations after warm-up.
//!
//! | Type | Role |
//! |---|---|
//! | [`RouteWorld`] | capability trait the host map implements |
//! | [`RouteConfig`] | surcharge table and search policy |
//! | [`Router`] | the search itself |
//! | [`Route`] | resulting plot sequence (end → start) plus total cost |

mod config;
mod cost;
mod error;
mod router;
mod terrain;
mod traits;

pub use config::RouteConfig;
pub use cost::{EdgeContext, move_cost};
pub use error::RouteError;
pub use router::{NO_ROUTE, Route, Router, UNREACHABLE};
pub use terrain::{Feature, Terrain};
pub use traits::RouteWorld;
