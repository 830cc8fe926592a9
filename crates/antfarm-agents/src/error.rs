//! Error types for the antfarm-agents crate.

use antfarm_types::Species;

/// Errors that can occur when creating or operating on ants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    /// No stat preset is configured for the requested species.
    #[error("no stat preset configured for species {species}")]
    UnsupportedSpecies {
        /// The species that could not be created.
        species: Species,
    },
}
