/// Best-effort desktop notification support.
///
/// Failures are ignored: a missing notification daemon must never break the
/// alert loop.
#[cfg(any(target_os = "linux", target_os = "macos"))]
use std::process::Command;

/// Fire an urgent notification for a todo that has come due
pub fn notify_task_due(task: &str) {
    #[cfg(target_os = "linux")]
    {
        let _ = Command::new("notify-send")
            .arg("-u")
            .arg("critical")
            .arg("Task Due!")
            .arg(task)
            .output();
    }

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Task Due!""#,
            task.replace('"', "\\\"")
        );

        let _ = Command::new("osascript").arg("-e").arg(&script).output();
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        // No-op on other platforms
        let _ = task;
    }
}
