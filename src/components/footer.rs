use yew::prelude::*;

use crate::config::Config;
use crate::version::Version;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-white/90 dark:bg-black/90 border-t border-gray-200 dark:border-gray-700 mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <div class="flex flex-col sm:flex-row justify-between items-center space-y-3 sm:space-y-0">
                    <div class="text-center sm:text-left">
                        <span class="text-sm font-semibold text-gray-900 dark:text-gray-50">
                            { Config::app_title() }
                        </span>
                        <p class="text-xs text-gray-600 dark:text-gray-400">
                            { Config::app_tagline() }
                        </p>
                    </div>
                    <div class="flex space-x-4 text-xs text-gray-600 dark:text-gray-400">
                        <a href="#" class="hover:underline">{"Help Center"}</a>
                        <a href="#" class="hover:underline">{"Privacy Policy"}</a>
                        <a href="#" class="hover:underline">{"Terms of Service"}</a>
                    </div>
                    <div class="text-xs text-gray-500 dark:text-gray-400 font-mono">
                        {"© 2025 Largify · "}{ Version::short() }
                    </div>
                </div>
            </div>
        </footer>
    }
}
