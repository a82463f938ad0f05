//! ブラウザのブロッキング通知

use leptos::logging::warn;

/// `window.alert` で通知する。閉じられるまで処理は止まる
pub fn show_alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                warn!("alert failed: {}", message);
            }
        }
        None => warn!("no window: {}", message),
    }
}
