//! Difficulty and game-option settings.

use city_core::SettingsOracle;

/// Per-game difficulty modifiers and options.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DifficultySettings {
    pub unhappiness_modifier: f32,
    pub ai_unhappiness_modifier: f32,
    pub ai_building_maintenance_modifier: f32,
    pub gold_to_science_enabled: bool,
    pub debug_supercharged: bool,
}

impl DifficultySettings {
    pub const fn new() -> Self {
        Self {
            unhappiness_modifier: 1.0,
            ai_unhappiness_modifier: 1.0,
            ai_building_maintenance_modifier: 1.0,
            gold_to_science_enabled: false,
            debug_supercharged: false,
        }
    }
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsOracle for DifficultySettings {
    fn unhappiness_modifier(&self) -> f32 {
        self.unhappiness_modifier
    }

    fn ai_unhappiness_modifier(&self) -> f32 {
        self.ai_unhappiness_modifier
    }

    fn ai_building_maintenance_modifier(&self) -> f32 {
        self.ai_building_maintenance_modifier
    }

    fn gold_to_science_enabled(&self) -> bool {
        self.gold_to_science_enabled
    }

    fn debug_supercharged(&self) -> bool {
        self.debug_supercharged
    }
}
