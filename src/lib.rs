use log::{debug, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::common_toast::ToastProvider;
use crate::components::footer::Footer;

pub mod analytics {
    pub mod events;
}
pub mod components;
pub mod config;
pub mod data;
pub mod models;
pub mod version;
pub mod pages {
    pub mod insights;
    pub mod not_found;
}

use pages::{insights::InsightsPage, not_found::NotFound};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Insights,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="app-container flex min-h-screen flex-col">
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </BrowserRouter>
        </ToastProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Insights => html! { <InsightsPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    // Mount the app
    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
