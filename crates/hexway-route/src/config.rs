//! Route search configuration.

/// Surcharge table and search policy for a [`Router`].
///
/// All costs are additive, non-negative integers. Entering a flat,
/// featureless tile costs `base_cost`; everything else stacks on top of it.
///
/// [`Router`]: crate::Router
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteConfig {
    /// Cost of entering flat terrain with no feature.
    pub base_cost: i32,
    /// Added when entering hills.
    pub hills_cost: i32,
    /// Added when entering a mountain tile.
    pub mountain_cost: i32,
    /// Added when entering snow-covered terrain, on top of the hills or
    /// mountain surcharge.
    pub snow_cost: i32,
    /// Added when entering a forest tile.
    pub forest_cost: i32,
    /// Added when entering a jungle tile.
    pub jungle_cost: i32,
    /// Added when entering a marsh tile.
    pub marsh_cost: i32,
    /// Added when entering floodplains.
    pub floodplains_cost: i32,
    /// Added when the move crosses a river edge.
    pub river_cost: i32,
    /// Added when the move direction differs from the direction used to
    /// reach the predecessor. Biases the search toward straight runs.
    pub turn_cost: i32,
    /// Only open tiles that are unowned or owned by the same player as the
    /// start tile.
    pub friendly_territory_only: bool,
    /// Only open tiles revealed to the searching player.
    pub respect_fog: bool,
    /// Emit per-expansion trace logging.
    pub trace: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            base_cost: 1,
            hills_cost: 1,
            mountain_cost: 3,
            snow_cost: 1,
            forest_cost: 1,
            jungle_cost: 2,
            marsh_cost: 2,
            floodplains_cost: 1,
            river_cost: 2,
            turn_cost: 1,
            friendly_territory_only: true,
            respect_fog: false,
            trace: false,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = RouteConfig {
            river_cost: 7,
            respect_fog: true,
            ..RouteConfig::default()
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: RouteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
