use yew::prelude::*;

use crate::components::action_button::{placeholder_action, ActionButton};
use crate::components::common_toast::ToastContext;
use crate::components::styled_container::{CardSection, StyledContainer, TableHead};
use crate::data::RECENT_TICKETS;

#[function_component(SupportTab)]
pub fn support_tab() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let new_ticket_click = placeholder_action(&toast_context, "support_action", "Open a New Ticket");
    let contact_click =
        placeholder_action(&toast_context, "support_action", "Contact Support Team");
    let knowledge_base_click =
        placeholder_action(&toast_context, "support_action", "View Knowledge Base");

    let ticket_rows = RECENT_TICKETS
        .iter()
        .map(|ticket| {
            html! {
                <tr key={ticket.id}>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{ ticket.id }</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{ ticket.subject }</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">
                        <span class={classes!(
                            "px-2", "inline-flex", "text-xs", "leading-5", "font-semibold",
                            "rounded-full", ticket.status.badge_classes()
                        )}>
                            { ticket.status.label() }
                        </span>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <StyledContainer>
            <h2 class="text-lg font-bold">{"Support & Feedback"}</h2>
            <p class="text-sm text-gray-600 dark:text-gray-400">
                {"Monitor support ticket status and client satisfaction with key metrics."}
            </p>

            <div class="flex space-x-2">
                <ActionButton icon="💬" label="Open a New Ticket" onclick={new_ticket_click} />
                <ActionButton icon="👥" label="Contact Support Team" onclick={contact_click} />
            </div>

            <CardSection title="Recent Support Tickets">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <TableHead columns={vec!["Ticket ID", "Subject", "Status"]} />
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            { ticket_rows }
                        </tbody>
                    </table>
                </div>
            </CardSection>

            <CardSection title="Need a quick solution?">
                <p class="text-sm text-gray-700 dark:text-gray-300 mb-4">
                    {"Our comprehensive FAQ and knowledge base can help you find answers to common questions."}
                </p>
                <ActionButton icon="🧱" label="View Knowledge Base" onclick={knowledge_base_click} />
            </CardSection>
        </StyledContainer>
    }
}
