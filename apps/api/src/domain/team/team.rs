use super::value_objects::Level;
use serde::{Deserialize, Serialize};

/// Team aggregate root
///
/// A named group of students with a seniority level.
///
/// # Invariants
/// - `id` is `None` until a store assigns one on first save
/// - `level` is always one of the defined [`Level`] values
///
/// # Example
/// ```
/// use kaddem_api::domain::team::{Level, Team};
///
/// let mut team = Team::new("Equipe Test", Level::Junior);
/// assert_eq!(team.id(), None);
///
/// assert_eq!(team.promote(), Some((Level::Junior, Level::Senior)));
/// assert_eq!(team.level(), Level::Senior);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: Option<i32>,
    name: String,
    level: Level,
}

impl Team {
    /// Creates a team that has not been persisted yet
    ///
    /// # Arguments
    /// * `name` - Free-text label
    /// * `level` - Starting seniority level
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            id: None,
            name: name.into(),
            level,
        }
    }

    /// Applies one step of the evolution rule
    ///
    /// # Returns
    /// * `Some((from, to))` - The level changed
    /// * `None` - The team is already at the terminal level
    pub fn promote(&mut self) -> Option<(Level, Level)> {
        let from = self.level;
        let to = from.next()?;
        self.level = to;
        Some((from, to))
    }

    // ===== Getters =====

    /// Returns the store-assigned ID, if any
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the team's current level
    pub fn level(&self) -> Level {
        self.level
    }

    // ===== Setters =====

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations, which own ID assignment.
    pub fn from_persistence(id: i32, name: impl Into<String>, level: Level) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            level,
        }
    }
}
