//! Browser-side smoke tests. Run with `wasm-pack test --headless` against
//! the wasm32 target; they are skipped entirely elsewhere.

#![cfg(target_arch = "wasm32")]

use largify_insights::components::common_toast::{Toast, ToastType};
use largify_insights::models::InsightTab;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn toast_construction_works_in_the_browser() {
    let toast = Toast::navigation_stub("Churned Clients");
    assert_eq!(toast.toast_type, ToastType::Info);
    assert!(toast.message.contains("Churned Clients"));
}

#[wasm_bindgen_test]
fn tab_decode_is_total_in_the_browser() {
    for stored in ["Trends", "garbage", ""] {
        let tab = InsightTab::from_str(stored);
        assert!(InsightTab::ALL.contains(&tab));
    }
}

#[wasm_bindgen_test]
fn consent_flag_round_trips() {
    use largify_insights::analytics::events;

    events::revoke_consent();
    assert!(!events::has_consent());
    events::grant_consent();
    assert!(events::has_consent());
    events::revoke_consent();
    assert!(!events::has_consent());
}
