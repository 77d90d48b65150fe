use gloo_storage::{LocalStorage, Storage};

/// Consent-aware UI event tracker. Events are logged to the console for
/// now; the sink can be swapped for a collector endpoint later without
/// touching call sites.
pub fn track_event(name: &str, props: serde_json::Value) {
    if !has_consent() {
        return;
    }
    web_sys::console::log_1(&format!("analytics_event: {name} {props}").into());
}

const CONSENT_KEY: &str = "analytics_consent";

pub fn grant_consent() {
    let _ = LocalStorage::set(CONSENT_KEY, "true");
}

pub fn revoke_consent() {
    LocalStorage::delete(CONSENT_KEY);
}

pub fn has_consent() -> bool {
    LocalStorage::get::<String>(CONSENT_KEY)
        .map(|value| value == "true")
        .unwrap_or(false)
}

pub fn track_tab_selected(tab: &str) {
    track_event(
        "tab_selected",
        serde_json::json!({
            "tab": tab,
        }),
    );
}

/// Records activation of a placeholder action (actionable metric rows, the
/// panels' quick-action buttons) together with the label it will navigate
/// to once the target screens exist.
pub fn track_stub_action(kind: &str, label: &str) {
    track_event(
        "stub_action",
        serde_json::json!({
            "kind": kind,
            "label": label,
        }),
    );
}
