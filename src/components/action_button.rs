use yew::prelude::*;

use crate::analytics::events;
use crate::components::common_toast::{Toast, ToastContext};

#[derive(Properties, Clone, PartialEq)]
pub struct ActionButtonProps {
    pub icon: &'static str,
    pub label: &'static str,
    pub onclick: Callback<MouseEvent>,
}

/// Orange pill button used for the panels' quick actions.
#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    html! {
        <button
            onclick={props.onclick.clone()}
            class="flex text-sm bg-orange-500/30 text-orange-700 dark:bg-orange-500/30 dark:text-orange-300 shadow-md items-center space-x-1 px-2 py-1 rounded-lg transition-colors duration-200"
        >
            <span>{ props.icon }</span>
            <span>{ props.label }</span>
        </button>
    }
}

/// Click handler for a placeholder action: logs the interaction and raises
/// the acknowledgement toast naming the activated label. Never fails,
/// whatever the label.
pub fn placeholder_action(
    context: &ToastContext,
    kind: &'static str,
    label: &'static str,
) -> Callback<MouseEvent> {
    let add_toast = context.add_toast.clone();
    Callback::from(move |_: MouseEvent| {
        events::track_stub_action(kind, label);
        add_toast.emit(Toast::navigation_stub(label));
    })
}
