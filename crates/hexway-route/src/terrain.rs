//! Terrain and feature classification consumed by the cost model.

/// Terrain class of a tile.
///
/// Snow variants carry their own surcharge on top of the hills/mountain
/// surcharge, so `SnowHills` costs hills + snow to enter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Flat,
    Hills,
    Mountain,
    SnowFlat,
    SnowHills,
    SnowMountain,
    Coast,
    Ocean,
}

impl Terrain {
    /// Whether this terrain is water.
    #[inline]
    pub const fn is_water(self) -> bool {
        matches!(self, Terrain::Coast | Terrain::Ocean)
    }

    /// Whether this terrain is a mountain (impassable by default, but the
    /// route search explicitly permits crossing it).
    #[inline]
    pub const fn is_mountain(self) -> bool {
        matches!(self, Terrain::Mountain | Terrain::SnowMountain)
    }

    /// Whether this terrain is hilly.
    #[inline]
    pub const fn is_hills(self) -> bool {
        matches!(self, Terrain::Hills | Terrain::SnowHills)
    }

    /// Whether this terrain is snow-covered.
    #[inline]
    pub const fn is_snow(self) -> bool {
        matches!(
            self,
            Terrain::SnowFlat | Terrain::SnowHills | Terrain::SnowMountain
        )
    }
}

/// Surface feature of a tile. A tile has at most one feature; "no feature"
/// is represented as `Option::None` at the [`RouteWorld`] boundary.
///
/// [`RouteWorld`]: crate::RouteWorld
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feature {
    Forest,
    Jungle,
    Marsh,
    Floodplains,
    Volcano,
}
