/// Difficulty and game-option settings.
pub trait SettingsOracle: Send + Sync {
    fn unhappiness_modifier(&self) -> f32;
    fn ai_unhappiness_modifier(&self) -> f32;
    fn ai_building_maintenance_modifier(&self) -> f32;
    fn gold_to_science_enabled(&self) -> bool;

    /// Debug option multiplying every yield.
    fn debug_supercharged(&self) -> bool {
        false
    }
}
