use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/enchantfix.toml";

/// Settings for the headless demo session.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed of the simulated primary world.
    pub world_seed: u64,
    /// Number of simulated players.
    pub players: u32,
    /// Lifetime enchant count each simulated player starts with.
    pub enchant_count: u64,
    /// Nominal XP level cost per table slot.
    pub slot_costs: [u32; 3],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_seed: 90210,
            players: 3,
            enchant_count: 0,
            slot_costs: [2, 9, 17],
        }
    }
}

impl SimConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<SimConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    SimConfig::default()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                SimConfig::default()
            }
        }
    }
}
