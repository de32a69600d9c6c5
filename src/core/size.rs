//! Emote size selection
//!
//! The CDN serves a fixed set of square pixel sizes; anything else is
//! rejected up front rather than forwarded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unsupported emote size
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid emote size '{value}': must be one of 48, 64, 96, 128, 256")]
pub struct SizeError {
    value: String,
}

/// Pixel dimension requested from the CDN
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum EmoteSize {
    Px48,
    Px64,
    Px96,
    #[default]
    Px128,
    Px256,
}

impl EmoteSize {
    /// The size as a pixel count
    pub fn as_u32(self) -> u32 {
        match self {
            Self::Px48 => 48,
            Self::Px64 => 64,
            Self::Px96 => 96,
            Self::Px128 => 128,
            Self::Px256 => 256,
        }
    }
}

impl TryFrom<u32> for EmoteSize {
    type Error = SizeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            48 => Ok(Self::Px48),
            64 => Ok(Self::Px64),
            96 => Ok(Self::Px96),
            128 => Ok(Self::Px128),
            256 => Ok(Self::Px256),
            other => Err(SizeError {
                value: other.to_string(),
            }),
        }
    }
}

impl From<EmoteSize> for u32 {
    fn from(size: EmoteSize) -> Self {
        size.as_u32()
    }
}

impl fmt::Display for EmoteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl FromStr for EmoteSize {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.parse().map_err(|_| SizeError {
            value: s.to_string(),
        })?;
        Self::try_from(value)
    }
}
