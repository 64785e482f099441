/// Citizen counts of a city.
pub trait PopulationOracle: Send + Sync {
    fn population(&self) -> u32;

    /// Assigned specialists by type name, in display order.
    fn specialists(&self) -> Vec<(String, u32)>;

    /// Citizens neither working a tile nor assigned as specialists.
    fn free_population(&self) -> u32;

    fn specialist_count(&self) -> u32 {
        self.specialists().iter().map(|(_, count)| count).sum()
    }
}
