//! Runtime configuration: rule set and display options.
//!
//! Options are set by name the way engine `setoption` commands do it, from
//! command-line flags, or from the `CHESS_RULES` environment variable.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::RuleSet;

/// Environment variable consulted when no `--rules` flag is given.
pub const RULES_ENV: &str = "CHESS_RULES";

/// Error type for configuration failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No option or flag with this name
    UnknownOption { name: String },
    /// Value could not be parsed for the option
    InvalidValue { name: String, value: String },
    /// Flag given without its value
    MissingValue { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
            ConfigError::MissingValue { name } => write!(f, "Option '{name}' needs a value"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl FromStr for RuleSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(RuleSet::Legacy),
            "mirrored" => Ok(RuleSet::Mirrored),
            _ => Err(ConfigError::InvalidValue {
                name: "rules".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Settings for one play session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Generator rules for new games
    pub rules: RuleSet,
    /// Draw pieces as Unicode glyphs instead of two-character tags
    pub glyphs: bool,
}

/// What the caller has to do after an option changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionAction {
    /// Nothing beyond storing the value
    None,
    /// The running game must switch to these rules
    SwitchRules(RuleSet),
}

impl GameConfig {
    /// Set an option by (case-insensitive) name.
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) -> Result<OptionAction, ConfigError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "rules" => {
                let value = value.ok_or_else(|| ConfigError::MissingValue {
                    name: name.to_string(),
                })?;
                let rules: RuleSet = value.parse()?;
                if rules == self.rules {
                    return Ok(OptionAction::None);
                }
                self.rules = rules;
                Ok(OptionAction::SwitchRules(rules))
            }
            "glyphs" => {
                self.glyphs = match value.map(|v| v.trim().to_ascii_lowercase()) {
                    None => true,
                    Some(v) if v == "true" || v == "on" => true,
                    Some(v) if v == "false" || v == "off" => false,
                    Some(v) => {
                        return Err(ConfigError::InvalidValue {
                            name: name.to_string(),
                            value: v,
                        })
                    }
                };
                Ok(OptionAction::None)
            }
            _ => Err(ConfigError::UnknownOption {
                name: name.to_string(),
            }),
        }
    }

    /// Parse command-line flags (`--rules <legacy|mirrored>`, `--glyphs`).
    ///
    /// `env_rules` is the value of [`RULES_ENV`], used when no `--rules` flag
    /// is present.
    pub fn from_args<I, S>(args: I, env_rules: Option<&str>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = GameConfig::default();
        if let Some(rules) = env_rules.filter(|v| !v.trim().is_empty()) {
            config.rules = rules.parse()?;
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--rules" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue {
                        name: "--rules".to_string(),
                    })?;
                    config.rules = value.as_ref().parse()?;
                }
                "--glyphs" => config.glyphs = true,
                other => {
                    return Err(ConfigError::UnknownOption {
                        name: other.to_string(),
                    })
                }
            }
        }
        Ok(config)
    }
}
