use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct StyledContainerProps {
    #[prop_or_default]
    pub children: Children,
}

/// Gradient-bordered card shell shared by every panel: a blurred pulse
/// layer, a gradient border and a translucent backdrop under the content.
#[function_component(StyledContainer)]
pub fn styled_container(props: &StyledContainerProps) -> Html {
    html! {
        <div class="relative rounded-xl shadow-sm p-4 overflow-hidden mb-4">
            <div class="absolute inset-0 rounded-xl overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-r from-orange-500/5 via-transparent to-orange-500/5 dark:from-orange-500/10 dark:via-transparent dark:to-orange-500/10 rounded-xl blur-xl animate-pulse" />
                <div class="absolute inset-0 p-[1px] rounded-xl bg-gradient-to-br from-orange-500/30 via-white/20 to-blue-500/30 dark:from-orange-500/20 dark:via-gray-900/20 dark:to-blue-500/20">
                    <div class="absolute inset-0 bg-white/90 dark:bg-black/90 backdrop-blur-md rounded-xl" />
                </div>
            </div>
            <div class="relative z-10 space-y-3">
                { props.children.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct CardSectionProps {
    pub title: &'static str,
    /// When set, the card title itself is actionable.
    #[prop_or_default]
    pub on_title_click: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Inner gray card with a titled section, as used inside [`StyledContainer`].
#[function_component(CardSection)]
pub fn card_section(props: &CardSectionProps) -> Html {
    let title = match props.on_title_click.clone() {
        Some(onclick) => html! {
            <h3 class="text-base font-semibold mb-2">
                <button class="text-base font-semibold hover:underline" {onclick}>
                    { props.title }
                </button>
            </h3>
        },
        None => html! {
            <h3 class="text-base font-semibold mb-2">{ props.title }</h3>
        },
    };

    html! {
        <div class="bg-[#eeeeee] dark:bg-[#111111b9] p-4 rounded-lg shadow-md mt-4">
            { title }
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct TableHeadProps {
    pub columns: Vec<&'static str>,
}

/// Column header row shared by the typed tables.
#[function_component(TableHead)]
pub fn table_head(props: &TableHeadProps) -> Html {
    html! {
        <thead>
            <tr>
                { props.columns.iter().map(|column| html! {
                    <th
                        key={*column}
                        scope="col"
                        class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-300 uppercase tracking-wider"
                    >
                        { *column }
                    </th>
                }).collect::<Html>() }
            </tr>
        </thead>
    }
}
