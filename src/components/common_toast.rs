use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

/// Visual category of a toast notification.
#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-green-500 border-green-600",
            ToastType::Error => "bg-red-500 border-red-600",
            ToastType::Warning => "bg-yellow-500 border-yellow-600",
            ToastType::Info => "bg-blue-500 border-blue-600",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Warning => "⚠",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration_ms: 4000,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Acknowledgement for actions whose target screens do not exist yet.
    /// Infallible for any label.
    pub fn navigation_stub(label: &str) -> Self {
        Self::new(
            format!("Navigating to the details for: {label}"),
            ToastType::Info,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(Vec::new);

    let add_toast = {
        let toasts = toasts.clone();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration_ms = toast.duration_ms;

            toasts.set({
                let mut current = (*toasts).clone();
                current.push(toast);
                current
            });

            // Fire-and-forget auto-dismiss.
            let toasts = toasts.clone();
            let timeout = Timeout::new(duration_ms, move || {
                toasts.set({
                    let mut current = (*toasts).clone();
                    current.retain(|t| t.id != toast_id);
                    current
                });
            });
            timeout.forget();
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| {
            toasts.set({
                let mut current = (*toasts).clone();
                current.retain(|t| t.id != id);
                current
            });
        })
    };

    let context = ToastContext {
        toasts: (*toasts).clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            { props.children.clone() }
            <ToastList />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            { toast_context.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let on_close = {
        let remove_toast = toast_context.remove_toast.clone();
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| {
            remove_toast.emit(toast_id);
        })
    };

    html! {
        <div class={classes!(
            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4",
            "text-white", "min-w-80", "max-w-md",
            props.toast.toast_type.classes()
        )}>
            <span class="flex-shrink-0 mr-3 text-lg font-bold">
                { props.toast.toast_type.icon() }
            </span>
            <p class="flex-1 text-sm font-medium">{ &props.toast.message }</p>
            <button
                onclick={on_close}
                class="flex-shrink-0 ml-3 text-lg text-white hover:text-gray-200 focus:outline-none transition-colors duration-200"
            >
                {"×"}
            </button>
        </div>
    }
}
