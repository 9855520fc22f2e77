use thiserror::Error;

use super::config::ConfigError;
use crate::core::forcefield::params::ParamLoadError;
use crate::core::models::chain::ChainError;
use crate::core::models::layout::LayoutError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid chain: {source}")]
    Chain {
        #[from]
        source: ChainError,
    },

    #[error("Layout failed: {source}")]
    Layout {
        #[from]
        source: LayoutError,
    },

    #[error("Energy parameters could not be loaded: {source}")]
    Params {
        #[from]
        source: ParamLoadError,
    },

    #[error("Invalid kinetics configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Position {position} is not a pivot of this chain")]
    NotAPivot { position: usize },
}
