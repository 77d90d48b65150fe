use yew::prelude::*;

use crate::components::action_button::{placeholder_action, ActionButton};
use crate::components::chart_renderer::LineChart;
use crate::components::common_toast::ToastContext;
use crate::components::styled_container::{CardSection, StyledContainer, TableHead};
use crate::data::{USER_DEMOGRAPHICS, USER_GROWTH};
use crate::models::DemographicValue;

#[function_component(TrendsTab)]
pub fn trends_tab() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let predict_click = placeholder_action(&toast_context, "trends_action", "Predict Growth");
    let compare_click = placeholder_action(&toast_context, "trends_action", "Compare Segments");
    let demographics_click =
        placeholder_action(&toast_context, "trends_card", "User Demographics");

    let demographic_rows = USER_DEMOGRAPHICS
        .iter()
        .map(|row| {
            // The one type-discriminating render branch: lists become an
            // ordered bullet list, scalars stay plain text.
            let value = match row.value {
                DemographicValue::Scalar(text) => html! { { text } },
                DemographicValue::List(items) => html! {
                    <ul class="list-disc list-inside">
                        { items.iter().map(|item| html! {
                            <li key={*item}>{ *item }</li>
                        }).collect::<Html>() }
                    </ul>
                },
            };
            html! {
                <tr key={row.metric}>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{ row.metric }</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{ value }</td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <StyledContainer>
            <h2 class="text-lg font-bold">{"User Growth Trends"}</h2>
            <p class="text-sm text-gray-600 dark:text-gray-400">
                {"Insights into your user base's growth and composition."}
            </p>

            <div class="flex space-x-2">
                <ActionButton icon="📈" label="Predict Growth" onclick={predict_click} />
                <ActionButton icon="🧩" label="Compare Segments" onclick={compare_click} />
            </div>

            <CardSection title="User Demographics" on_title_click={demographics_click}>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <TableHead columns={vec!["Metric", "Value"]} />
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            { demographic_rows }
                        </tbody>
                    </table>
                </div>
            </CardSection>

            <CardSection title="User Growth Per Client (last 6 months)">
                <LineChart points={USER_GROWTH.to_vec()} />
            </CardSection>
        </StyledContainer>
    }
}
