//! Route search errors.

use hexway_core::Coord;

/// Caller misuse reported by [`Router::find_route`].
///
/// Everything else (water endpoints, out-of-range targets, exhausted
/// searches) is communicated through sentinel costs on an otherwise
/// successful return, not through this type.
///
/// [`Router::find_route`]: crate::Router::find_route
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A route endpoint lies outside the router's searchable window.
    #[error("route endpoint {coord} is outside the searchable window")]
    OutOfBounds { coord: Coord },
}
