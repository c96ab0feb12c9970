//! Payment history and manual payment entry

use fleetease::access::AdminRoute;
use fleetease::models::{PaymentDraft, PaymentStatus};
use fleetease::panel::PaymentsPage;
use leptos::*;

use crate::components::{Badge, EmptyState, Loading, Modal, Protected};
use crate::format::{format_date, format_money, optional, parse_number};
use crate::pages::form::{number_input, text_input, BUTTON_SECONDARY, INPUT, LABEL};
use crate::state::{drive, drive_then, use_auth, use_global};

const PAYMENT_TYPES: [(&str, &str); 3] = [("card", "Card"), ("cash", "Cash"), ("transfer", "Bank transfer")];

fn blank_draft() -> PaymentDraft {
    PaymentDraft {
        reservation_id: String::new(),
        amount: 0.0,
        payment_type: PAYMENT_TYPES[0].0.to_string(),
        card_holder: None,
    }
}

fn status_color(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Completed => "green",
        PaymentStatus::Pending => "yellow",
        PaymentStatus::Failed => "red",
        PaymentStatus::Refunded => "purple",
        PaymentStatus::Unknown => "gray",
    }
}

#[component]
pub fn Payments() -> impl IntoView {
    view! {
        <Protected route=AdminRoute::Payments>
            <PaymentsContent />
        </Protected>
    }
}

#[component]
fn PaymentsContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().operator.api();
    let page = create_rw_signal(PaymentsPage {
        loading: true,
        ..Default::default()
    });
    let draft = create_rw_signal(blank_draft());
    let dialog_open = create_rw_signal(false);

    let load_api = api.clone();
    drive(page, move |p| {
        Box::pin(async move {
            p.load(&load_api, &global).await;
        })
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        let payment = draft.get_untracked();
        drive_then(
            page,
            move |p| Box::pin(async move { p.record(&api, &global, &payment).await }),
            move |recorded| {
                if recorded {
                    dialog_open.set(false);
                    draft.set(blank_draft());
                }
            },
        );
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Payments"</h1>
                    <p class="text-gray-500 mt-1">"Collected and pending payments"</p>
                </div>
                <button
                    class="px-4 py-2 rounded-lg btn-theme font-medium"
                    on:click=move |_| dialog_open.set(true)
                >
                    "+ Record payment"
                </button>
            </div>

            <section class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <div class="bg-white rounded-xl shadow-sm p-5">
                    <p class="text-sm text-gray-500">"Completed revenue"</p>
                    <p class="text-2xl font-bold mt-1">{move || format_money(page.with(|p| p.completed_revenue()))}</p>
                </div>
                <div class="bg-white rounded-xl shadow-sm p-5">
                    <p class="text-sm text-gray-500">"Completed payments"</p>
                    <p class="text-2xl font-bold mt-1">{move || page.with(|p| p.completed_count())}</p>
                </div>
                <div class="bg-white rounded-xl shadow-sm p-5">
                    <p class="text-sm text-gray-500">"All payments"</p>
                    <p class="text-2xl font-bold mt-1">{move || page.with(|p| p.payments.len())}</p>
                </div>
            </section>

            <input
                type="search"
                placeholder="Search reservation or card holder"
                class="border rounded-lg px-3 py-2 text-sm w-80"
                prop:value=move || page.with(|p| p.search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    page.update(|p| p.search = value);
                }
            />

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                {move || {
                    let payments: Vec<_> = page.with(|p| p.filtered().into_iter().cloned().collect());
                    if payments.is_empty() {
                        return view! { <EmptyState message="No payments found" /> }.into_view();
                    }
                    view! {
                        <div class="bg-white rounded-xl shadow-sm overflow-hidden">
                            <table class="w-full text-sm">
                                <thead class="bg-gray-50 text-left text-gray-500">
                                    <tr>
                                        <th class="px-4 py-3">"Reservation"</th>
                                        <th>"Card holder"</th>
                                        <th>"Type"</th>
                                        <th>"Date"</th>
                                        <th>"Status"</th>
                                        <th class="text-right px-4">"Amount"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {payments.into_iter().map(|payment| view! {
                                        <tr class="border-t">
                                            <td class="px-4 py-3 font-mono">{payment.reservation_id}</td>
                                            <td>{payment.card_holder.unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{payment.payment_type}</td>
                                            <td>{payment.created_at.map(format_date).unwrap_or_default()}</td>
                                            <td><Badge label=payment.status.label() color=status_color(payment.status) /></td>
                                            <td class="text-right px-4 font-medium">{format_money(payment.amount)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_view()
                }}
            </Show>

            <Modal
                title="Record payment"
                open=dialog_open
                on_close=move |_| dialog_open.set(false)
            >
                <form class="space-y-4" on:submit=submit.clone()>
                    {text_input(draft, "Reservation ID", "text", |d| d.reservation_id.clone(), |d, v| d.reservation_id = v)}
                    {number_input(draft, "Amount (₺)", |d| d.amount.to_string(), |d, v| {
                        if let Some(amount) = parse_number(v) { d.amount = amount }
                    })}
                    <div>
                        <label class=LABEL>"Payment type"</label>
                        <select
                            class=INPUT
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.payment_type = value);
                            }
                        >
                            {PAYMENT_TYPES.iter().copied().map(|(value, label)| view! {
                                <option value=value selected=move || draft.with(|d| d.payment_type == value)>{label}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    {text_input(draft, "Card holder", "text",
                        |d| d.card_holder.clone().unwrap_or_default(),
                        |d, v| d.card_holder = optional(v))}
                    <div class="flex justify-end space-x-2">
                        <button type="button" class=BUTTON_SECONDARY on:click=move |_| dialog_open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="px-4 py-2 rounded-lg btn-theme font-medium">"Save"</button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
