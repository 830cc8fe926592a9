//! Session context that builds farms.
//!
//! One [`Meadow`] is constructed at startup from the loaded configuration
//! and handed to whatever drives the session. Nothing here is global, so
//! tests can build as many independent farms as they like.

use tracing::debug;

use crate::config::SimulationConfig;
use crate::farm::AntFarm;

/// Factory for [`AntFarm`]s sharing one configuration.
#[derive(Debug, Clone, Default)]
pub struct Meadow {
    config: SimulationConfig,
}

impl Meadow {
    /// Create a meadow around a loaded configuration.
    pub const fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The configuration every farm from this meadow is built with.
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Build a fresh, empty farm.
    pub fn create_farm(&self) -> AntFarm {
        debug!(
            room_capacity = self.config.farm.room_capacity,
            agent_step = self.config.farm.agent_step,
            "Creating ant farm"
        );
        AntFarm::with_config(&self.config)
    }
}
