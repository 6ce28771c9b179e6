use clap;
use serde::{Deserialize, Serialize};

/// How much the search reports through `tracing`.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Verbosity {
    /// Errors only
    Silent,
    /// Search start, periodic statistics and the outcome
    #[default]
    Normal,
    /// Additionally every hill climbing restart
    Verbose,
    /// Additionally every expansion
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_grow_with_verbosity() {
        let levels: Vec<tracing::Level> = [
            Verbosity::Silent,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ]
        .into_iter()
        .map(Into::into)
        .collect();
        assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
