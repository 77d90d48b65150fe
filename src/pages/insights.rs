use gloo_storage::{LocalStorage, Storage};
use log::debug;
use yew::prelude::*;

use crate::analytics::events;
use crate::components::insights::overview_tab::OverviewTab;
use crate::components::insights::subscription_tab::SubscriptionTab;
use crate::components::insights::support_tab::SupportTab;
use crate::components::insights::trends_tab::TrendsTab;
use crate::components::insights::usage_tab::UsageTab;
use crate::components::nav::InsightNav;
use crate::config::Config;
use crate::models::InsightTab;

/// The dashboard page. Owns the one piece of mutable state — the active
/// tab — and dispatches to the matching panel.
#[function_component(InsightsPage)]
pub fn insights_page() -> Html {
    // Restore the last open tab; the decode is total, so a stale or
    // garbled stored value lands on Overview.
    let active_tab = use_state_eq(|| {
        LocalStorage::get::<String>(Config::last_tab_storage_key())
            .map(|saved| InsightTab::from_str(&saved))
            .unwrap_or(InsightTab::Overview)
    });

    let on_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: InsightTab| {
            debug!("Selecting tab: {}", tab.label());
            active_tab.set(tab);
            if let Err(err) = LocalStorage::set(Config::last_tab_storage_key(), tab.as_str()) {
                debug!("Could not persist tab selection: {err}");
            }
            events::track_tab_selected(tab.label());
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    html! {
        <div class="flex flex-col min-h-screen bg-gray-100 dark:bg-gray-900 text-gray-900 dark:text-gray-50 font-sans antialiased">
            <InsightNav active={*active_tab} on_select={on_select} />
            <div class="flex-1 overflow-auto p-4">
                { match *active_tab {
                    InsightTab::Overview => html! { <OverviewTab /> },
                    InsightTab::Usage => html! { <UsageTab /> },
                    InsightTab::Subscription => html! { <SubscriptionTab /> },
                    InsightTab::Trends => html! { <TrendsTab /> },
                    InsightTab::Support => html! { <SupportTab /> },
                } }
            </div>
        </div>
    }
}
