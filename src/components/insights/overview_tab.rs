use yew::prelude::*;

use crate::components::action_button::placeholder_action;
use crate::components::common_toast::ToastContext;
use crate::components::styled_container::{CardSection, StyledContainer, TableHead};
use crate::data::{NEW_CLIENTS, OVERVIEW_METRICS, SUBSCRIPTION_TIERS};

#[function_component(OverviewTab)]
pub fn overview_tab() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let metric_rows = OVERVIEW_METRICS
        .iter()
        .map(|metric| {
            let onclick = placeholder_action(&toast_context, "overview_metric", metric.name);
            html! {
                <tr key={metric.name}>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{ metric.name }</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">
                        <button class="text-sm hover:underline" {onclick}>{ metric.value }</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    let tier_rows = SUBSCRIPTION_TIERS
        .iter()
        .map(|tier| {
            html! {
                <tr key={tier.tier}>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{ tier.tier }</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{ tier.clients }</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{ tier.percentage }</td>
                </tr>
            }
        })
        .collect::<Html>();

    let client_rows = NEW_CLIENTS
        .iter()
        .map(|client| {
            html! {
                <tr key={client.id}>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{ client.id }</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{ client.name }</td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <StyledContainer>
            <h2 class="text-lg font-bold">{"Client Overview"}</h2>
            <p class="text-sm text-gray-600 dark:text-gray-400">
                {"Detailed insights into your client base, including retention and subscription tiers."}
            </p>

            <CardSection title="Key Client Metrics">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            { metric_rows }
                        </tbody>
                    </table>
                </div>
            </CardSection>

            <CardSection title="Client Subscription Tiers">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <TableHead columns={vec!["Tier", "Clients", "Percentage"]} />
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            { tier_rows }
                        </tbody>
                    </table>
                </div>
            </CardSection>

            <CardSection title="Newly Onboarded Clients">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <TableHead columns={vec!["ID", "Name"]} />
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            { client_rows }
                        </tbody>
                    </table>
                </div>
            </CardSection>
        </StyledContainer>
    }
}
