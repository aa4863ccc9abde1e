use crate::notifications;
use crate::storage::{Store, StoreResult};
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::thread;
use std::time::Duration;

/// Fixed polling interval for the alert loop
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Run the alert polling loop. Never returns; a failed tick is logged and
/// the loop continues on the next interval.
pub fn run(store: &Store) -> ! {
    info!("alert daemon started, polling every {}s", POLL_INTERVAL.as_secs());

    loop {
        thread::sleep(POLL_INTERVAL);
        if let Err(err) = tick(store, Utc::now(), &mut |task| {
            notifications::notify_task_due(task)
        }) {
            warn!("alert tick failed: {}", err);
        }
    }
}

/// One polling pass: notify every due, unalerted, incomplete todo and mark
/// it alerted so later ticks skip it.
pub fn tick(
    store: &Store,
    now: DateTime<Utc>,
    notify: &mut dyn FnMut(&str),
) -> StoreResult<()> {
    for todo in store.due_unalerted(now)? {
        debug_assert!(todo.needs_alert(now));
        info!("alerting todo {} ({:?} due {})", todo.id, todo.task, todo.due_at);
        notify(&todo.task);
        store.mark_alerted(todo.id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn tick_collecting(store: &Store, now: DateTime<Utc>) -> Vec<String> {
        let mut fired = Vec::new();
        tick(store, now, &mut |task| fired.push(task.to_string())).unwrap();
        fired
    }

    #[test]
    fn test_tick_fires_once_per_item() {
        let store = Store::open_in_memory().unwrap();
        let now = Utc::now();
        store.create_todo("Water plants", now - Duration::minutes(5)).unwrap();

        assert_eq!(tick_collecting(&store, now), vec!["Water plants"]);
        // Alerted on the first pass, silent on the next
        assert_eq!(tick_collecting(&store, now), Vec::<String>::new());
    }

    #[test]
    fn test_tick_skips_future_and_done() {
        let store = Store::open_in_memory().unwrap();
        let now = Utc::now();
        store.create_todo("later", now + Duration::hours(1)).unwrap();
        let done = store.create_todo("done", now - Duration::hours(1)).unwrap();
        store.toggle_todo(done, false).unwrap();

        assert_eq!(tick_collecting(&store, now), Vec::<String>::new());
    }

    #[test]
    fn test_tick_alerts_multiple_overdue() {
        let store = Store::open_in_memory().unwrap();
        let now = Utc::now();
        store.create_todo("first", now - Duration::hours(2)).unwrap();
        store.create_todo("second", now - Duration::hours(1)).unwrap();

        assert_eq!(tick_collecting(&store, now), vec!["first", "second"]);
    }
}
