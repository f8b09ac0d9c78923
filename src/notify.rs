use crate::chain::Notifier;

/// Fire-and-forget desktop notification. Every failure mode is swallowed:
/// a missing notifier binary must never surface as a chaining failure.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, summary: &str, body: &str) {
        send_desktop_notification(summary, body);
    }
}

#[cfg(target_os = "macos")]
pub fn send_desktop_notification(summary: &str, body: &str) {
    let script = format!(
        "display notification {} with title {}",
        applescript_quote(body),
        applescript_quote(summary)
    );
    let _ = std::process::Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output();
}

#[cfg(target_os = "macos")]
fn applescript_quote(raw: &str) -> String {
    format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(all(unix, not(target_os = "macos")))]
pub fn send_desktop_notification(summary: &str, body: &str) {
    let _ = std::process::Command::new("notify-send")
        .arg(summary)
        .arg(body)
        .output();
}

#[cfg(not(unix))]
pub fn send_desktop_notification(_summary: &str, _body: &str) {}
