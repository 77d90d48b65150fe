use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-24 text-center">
            <h1 class="text-2xl font-bold">{"404 - Page Not Found"}</h1>
            <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">
                {"The page you're looking for doesn't exist."}
            </p>
        </div>
    }
}
