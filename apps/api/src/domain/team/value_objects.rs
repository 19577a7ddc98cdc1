use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Seniority level of a team
///
/// # Progression
/// ```text
/// Junior -> Senior -> Expert
/// ```
///
/// Variants are declared in seniority order, so `Junior < Senior < Expert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// Newly formed team
    Junior,
    /// Team that has evolved once
    Senior,
    /// Terminal level
    Expert,
}

impl Level {
    /// Returns the level one step above this one
    ///
    /// # Example
    /// ```
    /// use kaddem_api::domain::team::value_objects::Level;
    ///
    /// assert_eq!(Level::Junior.next(), Some(Level::Senior));
    /// assert_eq!(Level::Expert.next(), None);
    /// ```
    pub fn next(&self) -> Option<Level> {
        match self {
            Level::Junior => Some(Level::Senior),
            Level::Senior => Some(Level::Expert),
            Level::Expert => None,
        }
    }

    /// Returns true if no further evolution is possible
    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    /// Returns the persisted representation of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Junior => "JUNIOR",
            Level::Senior => "SENIOR",
            Level::Expert => "EXPERT",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JUNIOR" => Ok(Level::Junior),
            "SENIOR" => Ok(Level::Senior),
            "EXPERT" => Ok(Level::Expert),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}
