use chrono::{DateTime, Utc};

/// A task with a due time, completion flag, and alert flag.
///
/// The alert flag is monotonic: the daemon sets it once when a due todo is
/// notified and nothing ever clears it. The done flag toggles freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    pub is_done: bool,
    pub due_at: DateTime<Utc>,
    pub alert_sent: bool,
}

/// A freeform text note. The body starts empty and is only ever replaced by
/// the content captured from a completed external editor session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Whether the todo is past due and still waiting on a notification
    pub fn needs_alert(&self, now: DateTime<Utc>) -> bool {
        !self.is_done && !self.alert_sent && self.due_at <= now
    }
}
