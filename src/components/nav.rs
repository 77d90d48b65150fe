use yew::prelude::*;

use crate::config::Config;
use crate::models::InsightTab;

#[derive(Properties, PartialEq)]
pub struct InsightNavProps {
    pub active: InsightTab,
    pub on_select: Callback<InsightTab>,
}

/// Top navigation bar: brand block on the left, the five tab buttons on the
/// right. Exactly one tab renders as active at any time.
#[function_component(InsightNav)]
pub fn insight_nav(props: &InsightNavProps) -> Html {
    html! {
        <div class="relative rounded-xl p-2 shadow-md mb-4 mx-4 mt-4 flex justify-between items-center overflow-hidden">
            // Backdrop layers matching the panel cards.
            <div class="absolute inset-0 rounded-xl overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-r from-orange-500/5 via-transparent to-orange-500/5 dark:from-orange-500/10 dark:via-transparent dark:to-orange-500/10 rounded-xl blur-xl animate-pulse" />
                <div class="absolute inset-0 p-[1px] rounded-xl bg-gradient-to-br from-orange-500/30 via-white/20 to-blue-500/30 dark:from-orange-500/20 dark:via-white/10 dark:to-blue-500/20">
                    <div class="absolute inset-0 bg-white/90 dark:bg-black/80 backdrop-blur-md rounded-xl" />
                </div>
            </div>

            <div class="relative z-10 flex items-center gap-3 p-2">
                <div class="w-8 h-8 rounded-lg bg-[#F5793B]/10 dark:bg-[#F5793B]/20 flex items-center justify-center">
                    <span class="text-[#F5793B]">{"🔍"}</span>
                </div>
                <div>
                    <h1 class="text-lg font-bold bg-clip-text text-transparent bg-gradient-to-r from-orange-600 via-orange-500 to-orange-600 dark:from-orange-400 dark:via-orange-300 dark:to-orange-400">
                        { Config::app_title() }
                    </h1>
                    <p class="text-xs text-gray-700 dark:text-gray-300">{ Config::app_tagline() }</p>
                </div>
            </div>

            <nav class="relative z-10">
                <ul class="flex flex-wrap md:flex-nowrap gap-1">
                    { InsightTab::ALL.iter().map(|tab| {
                        let is_active = props.active == *tab;
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let tab = *tab;
                            Callback::from(move |_: MouseEvent| on_select.emit(tab))
                        };
                        html! {
                            <li key={tab.label()}>
                                <button
                                    {onclick}
                                    class={classes!(
                                        "flex", "items-center", "space-x-1", "px-2", "py-1",
                                        "rounded-lg", "transition-colors", "duration-200",
                                        if is_active {
                                            classes!(
                                                "bg-orange-500/30", "text-orange-700",
                                                "dark:bg-orange-500/30", "dark:text-orange-300",
                                                "shadow-md"
                                            )
                                        } else {
                                            classes!(
                                                "text-gray-600", "dark:text-gray-300",
                                                "hover:bg-gray-200", "dark:hover:bg-gray-700"
                                            )
                                        }
                                    )}
                                >
                                    <span>{ tab.icon() }</span>
                                    <span class="font-medium text-xs md:text-sm">{ tab.label() }</span>
                                </button>
                            </li>
                        }
                    }).collect::<Html>() }
                </ul>
            </nav>
        </div>
    }
}
