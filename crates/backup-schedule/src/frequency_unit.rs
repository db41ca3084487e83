use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The unit `frequency_interval` is counted in.
#[derive(Hash, Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FrequencyUnit {
    /// A backup is taken every `frequency_interval` days.
    #[default]
    Day,

    /// A backup is taken every `frequency_interval` hours.
    Hour,
}

impl FrequencyUnit {
    /// The accepted names, as written in a definition.
    pub const NAMES: &'static [&'static str] = &["Day", "Hour"];

    /// The name of the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrequencyUnit {
    type Err = ParseFrequencyUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Day" => Ok(Self::Day),
            "Hour" => Ok(Self::Hour),
            _ => Err(ParseFrequencyUnitError(s.to_string())),
        }
    }
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid frequency unit '{0}'")]
pub struct ParseFrequencyUnitError(pub String);
