/// Fire-and-forget celebratory feedback
/// Currently only implements macOS notifications; the visual half of the
/// effect is the score-pane flash driven by the app state.

#[cfg(target_os = "macos")]
use std::process::Command;

/// Celebrate a completed (or cleared) task
pub fn celebrate(task_text: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Tally - Nice one! 🎉""#,
            task_text.replace('"', "\\\"")
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = task_text;
    }
}
