use thiserror::Error;

/// Rejected simulation settings
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one bird per strategy is required")]
    NoBirds,

    #[error("at least one round is required")]
    NoRounds,
}
