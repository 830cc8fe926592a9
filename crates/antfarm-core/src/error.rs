//! Error types for farm operations.

use antfarm_types::{ColonyId, Species};

/// Errors that can occur while managing colonies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FarmError {
    /// The species has no stat preset, so no ant can be created for it.
    #[error("unsupported species: {species}")]
    UnsupportedSpecies {
        /// The rejected species.
        species: Species,
    },

    /// No colony is registered under the given ID.
    #[error("colony not found: {0}")]
    ColonyNotFound(ColonyId),

    /// Every colony ID has been handed out.
    #[error("colony id space exhausted")]
    ColonyIdExhausted,
}

impl From<antfarm_agents::AgentError> for FarmError {
    fn from(err: antfarm_agents::AgentError) -> Self {
        match err {
            antfarm_agents::AgentError::UnsupportedSpecies { species } => {
                Self::UnsupportedSpecies { species }
            }
        }
    }
}
