//! Player domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which player register a profile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerType {
    Amateur,
    Professional,
}

impl PlayerType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Amateur => "amateur",
            Self::Professional => "professional",
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown player type: {0}")]
pub struct UnknownPlayerType(pub String);

impl FromStr for PlayerType {
    type Err = UnknownPlayerType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amateur" => Ok(Self::Amateur),
            "professional" => Ok(Self::Professional),
            _ => Err(UnknownPlayerType(s.to_owned())),
        }
    }
}

/// Playing position on a squad list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Goalkeeper => "goalkeeper",
            Self::Defender => "defender",
            Self::Midfielder => "midfielder",
            Self::Forward => "forward",
        }
    }
}
