//! Customer records

use fleetease::access::AdminRoute;
use fleetease::panel::CustomersPage;
use leptos::*;

use crate::components::{EmptyState, Loading, Modal, Protected};
use crate::format::optional;
use crate::pages::form::{text_input, BUTTON_SECONDARY};
use crate::state::{drive, use_auth, use_global};

#[component]
pub fn Customers() -> impl IntoView {
    view! {
        <Protected route=AdminRoute::Customers>
            <CustomersContent />
        </Protected>
    }
}

#[component]
fn CustomersContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().operator.api();
    let page = create_rw_signal(CustomersPage {
        loading: true,
        ..Default::default()
    });

    let load_api = api.clone();
    drive(page, move |p| {
        Box::pin(async move {
            p.load(&load_api, &global).await;
        })
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        drive(page, move |p| {
            Box::pin(async move {
                p.submit(&api, &global).await;
            })
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Customers"</h1>
                    <p class="text-gray-500 mt-1">
                        {move || format!("{} customers", page.with(|p| p.customers.len()))}
                    </p>
                </div>
                <button
                    class="px-4 py-2 rounded-lg btn-theme font-medium"
                    on:click=move |_| page.update(|p| p.open_create())
                >
                    "+ Add customer"
                </button>
            </div>

            <input
                type="search"
                placeholder="Search name, e-mail, phone or TC number"
                class="border rounded-lg px-3 py-2 text-sm w-80"
                prop:value=move || page.with(|p| p.search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    page.update(|p| p.search = value);
                }
            />

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                {move || {
                    let customers: Vec<_> = page.with(|p| p.filtered().into_iter().cloned().collect());
                    if customers.is_empty() {
                        return view! { <EmptyState message="No customers found" /> }.into_view();
                    }
                    view! {
                        <div class="bg-white rounded-xl shadow-sm overflow-hidden">
                            <table class="w-full text-sm">
                                <thead class="bg-gray-50 text-left text-gray-500">
                                    <tr>
                                        <th class="px-4 py-3">"Name"</th>
                                        <th>"TC number"</th>
                                        <th>"E-mail"</th>
                                        <th>"Phone"</th>
                                        <th>"Licence"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {customers.into_iter().map(|c| view! {
                                        <tr class="border-t">
                                            <td class="px-4 py-3 font-medium">{c.full_name}</td>
                                            <td class="font-mono">{c.tc_no}</td>
                                            <td>{c.email}</td>
                                            <td>{c.phone}</td>
                                            <td>
                                                {match (c.license_no, c.license_class) {
                                                    (Some(no), Some(class)) => format!("{} ({})", no, class),
                                                    (Some(no), None) => no,
                                                    _ => "-".to_string(),
                                                }}
                                            </td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_view()
                }}
            </Show>

            <Modal
                title="New customer"
                open=Signal::derive(move || page.with(|p| p.dialog_open))
                on_close=move |_| page.update(|p| p.close_dialog())
            >
                <form class="space-y-4" on:submit=submit.clone()>
                    {text_input(page, "Full name", "text", |p| p.draft.full_name.clone(), |p, v| p.draft.full_name = v)}
                    {text_input(page, "TC number", "text", |p| p.draft.tc_no.clone(), |p, v| p.draft.tc_no = v)}
                    <div class="grid grid-cols-2 gap-4">
                        {text_input(page, "E-mail", "email", |p| p.draft.email.clone(), |p, v| p.draft.email = v)}
                        {text_input(page, "Phone", "tel", |p| p.draft.phone.clone(), |p, v| p.draft.phone = v)}
                        {text_input(page, "Licence number", "text",
                            |p| p.draft.license_no.clone().unwrap_or_default(),
                            |p, v| p.draft.license_no = optional(v))}
                        {text_input(page, "Licence class", "text",
                            |p| p.draft.license_class.clone().unwrap_or_default(),
                            |p, v| p.draft.license_class = optional(v))}
                    </div>
                    {text_input(page, "Address", "text",
                        |p| p.draft.address.clone().unwrap_or_default(),
                        |p, v| p.draft.address = optional(v))}
                    {move || page.with(|p| p.form_error.clone()).map(|e| view! {
                        <p class="text-sm text-red-600">{e.to_string()}</p>
                    })}
                    <div class="flex justify-end space-x-2">
                        <button type="button" class=BUTTON_SECONDARY on:click=move |_| page.update(|p| p.close_dialog())>
                            "Cancel"
                        </button>
                        <button type="submit" class="px-4 py-2 rounded-lg btn-theme font-medium">"Save"</button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
