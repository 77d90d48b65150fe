use yew::prelude::*;

use crate::components::styled_container::{CardSection, StyledContainer, TableHead};
use crate::data::{CONVERSION_RATES, MRR_BY_MONTH, REVENUE_BY_YEAR};

#[function_component(SubscriptionTab)]
pub fn subscription_tab() -> Html {
    let mrr_rows = MRR_BY_MONTH
        .iter()
        .map(|row| {
            html! {
                <tr key={row.month}>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{ row.month }</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{ row.mrr }</td>
                </tr>
            }
        })
        .collect::<Html>();

    let revenue_rows = REVENUE_BY_YEAR
        .iter()
        .map(|row| {
            html! {
                <tr key={row.year}>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{ row.year }</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{ row.revenue }</td>
                </tr>
            }
        })
        .collect::<Html>();

    let conversion_rows = CONVERSION_RATES
        .iter()
        .map(|row| {
            html! {
                <tr key={row.month}>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{ row.month }</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{ row.rate }</td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <StyledContainer>
            <h2 class="text-lg font-bold">{"Subscription & Billing Overview"}</h2>
            <p class="text-sm text-gray-600 dark:text-gray-400">
                {"A comprehensive look at your subscription revenue and billing status."}
            </p>

            <CardSection title="Monthly Recurring Revenue (MRR)">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <TableHead columns={vec!["Month", "MRR"]} />
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            { mrr_rows }
                        </tbody>
                    </table>
                </div>
            </CardSection>

            <CardSection title="Total Revenue from Subscriptions">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <TableHead columns={vec!["Year", "Revenue"]} />
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            { revenue_rows }
                        </tbody>
                    </table>
                </div>
            </CardSection>

            <CardSection title="Trial-to-paid conversion rate">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <TableHead columns={vec!["Month", "Rate"]} />
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            { conversion_rows }
                        </tbody>
                    </table>
                </div>
            </CardSection>
        </StyledContainer>
    }
}
