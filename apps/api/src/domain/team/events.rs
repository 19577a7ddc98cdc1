use super::value_objects::Level;

/// Domain events that occur within the Team aggregate
///
/// Returned by the evolution pass so callers can audit which teams moved.
///
/// # Example
/// ```
/// use kaddem_api::domain::team::events::TeamEvent;
/// use kaddem_api::domain::team::Level;
///
/// let event = TeamEvent::Promoted {
///     team_id: 1,
///     from: Level::Junior,
///     to: Level::Senior,
/// };
/// assert_eq!(event.team_id(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when the evolution rule raises a team's level
    Promoted {
        team_id: i32,
        /// Level before promotion
        from: Level,
        /// Level after promotion
        to: Level,
    },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> i32 {
        match self {
            TeamEvent::Promoted { team_id, .. } => *team_id,
        }
    }
}
