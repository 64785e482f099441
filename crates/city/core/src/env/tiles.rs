use crate::stats::Stats;

/// Opaque tile handle issued by the tile oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub u32);

/// A tile owned by the city.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileView {
    pub id: TileId,
    pub is_center: bool,
    pub is_worked: bool,
    /// Yields even when no citizen works it.
    pub yields_without_population: bool,
}

impl TileView {
    pub fn contributes(&self) -> bool {
        self.is_center || self.is_worked || self.yields_without_population
    }
}

/// Tiles owned by the city and their yields.
pub trait TileOracle: Send + Sync {
    fn tiles(&self) -> Vec<TileView>;
    fn tile_yield(&self, tile: TileId) -> Stats;
}
