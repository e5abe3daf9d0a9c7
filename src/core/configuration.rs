//! Build configurations.

use serde::{Deserialize, Serialize};

/// A named build profile understood by the build driver.
///
/// Declaration order is significant: target rules are emitted in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Configuration {
    Unknown,
    Debug,
    DebugGame,
    Development,
    Shipping,
    Test,
}

impl Configuration {
    /// Every configuration, in declaration order.
    pub const ALL: [Configuration; 6] = [
        Configuration::Unknown,
        Configuration::Debug,
        Configuration::DebugGame,
        Configuration::Development,
        Configuration::Shipping,
        Configuration::Test,
    ];

    /// Configuration used by the always-emitted default target rule.
    pub const DEFAULT: Configuration = Configuration::Development;

    /// Get the configuration name as passed to the build driver.
    pub fn as_str(&self) -> &'static str {
        match self {
            Configuration::Unknown => "Unknown",
            Configuration::Debug => "Debug",
            Configuration::DebugGame => "DebugGame",
            Configuration::Development => "Development",
            Configuration::Shipping => "Shipping",
            Configuration::Test => "Test",
        }
    }

    /// Whether this configuration gets its own per-configuration rule.
    ///
    /// `Unknown` is a sentinel and `Development` is covered by the default rule.
    pub fn is_enumerated(&self) -> bool {
        !matches!(self, Configuration::Unknown) && *self != Self::DEFAULT
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Configuration {
    type Err = ConfigurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Configuration::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigurationParseError(s.to_string()))
    }
}

/// Error returned when parsing an unknown configuration name.
#[derive(Debug, Clone)]
pub struct ConfigurationParseError(pub String);

impl std::fmt::Display for ConfigurationParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid configuration '{}', valid values: Debug, DebugGame, Development, Shipping, Test",
            self.0
        )
    }
}

impl std::error::Error for ConfigurationParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerated_configurations() {
        let enumerated: Vec<_> = Configuration::ALL
            .into_iter()
            .filter(|c| c.is_enumerated())
            .collect();

        assert_eq!(
            enumerated,
            vec![
                Configuration::Debug,
                Configuration::DebugGame,
                Configuration::Shipping,
                Configuration::Test,
            ]
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "debuggame".parse::<Configuration>().unwrap(),
            Configuration::DebugGame
        );
        assert!("Release".parse::<Configuration>().is_err());
    }
}
