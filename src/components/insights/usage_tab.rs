use yew::prelude::*;

use crate::components::styled_container::{CardSection, StyledContainer, TableHead};
use crate::data::USAGE_METRICS;

#[function_component(UsageTab)]
pub fn usage_tab() -> Html {
    let usage_rows = USAGE_METRICS
        .iter()
        .map(|row| {
            html! {
                <tr key={row.metric}>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{ row.metric }</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{ row.value }</td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <StyledContainer>
            <h2 class="text-lg font-bold">{"Usage Analytics"}</h2>
            <p class="text-sm text-gray-600 dark:text-gray-400">
                {"Key metrics on how clients interact with your platform and its modules."}
            </p>

            <CardSection title="Platform Usage Data">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <TableHead columns={vec!["Metric", "Value"]} />
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            { usage_rows }
                        </tbody>
                    </table>
                </div>
            </CardSection>
        </StyledContainer>
    }
}
