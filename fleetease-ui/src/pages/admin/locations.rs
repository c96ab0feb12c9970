//! Pickup and drop-off points

use fleetease::access::AdminRoute;
use fleetease::panel::LocationsPage;
use leptos::*;

use crate::components::{Badge, EmptyState, Loading, Modal, Protected};
use crate::pages::form::{checkbox, text_input, BUTTON_SECONDARY};
use crate::state::{begin, drive, use_auth, use_global};

fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

#[component]
pub fn Locations() -> impl IntoView {
    view! {
        <Protected route=AdminRoute::Locations>
            <LocationsContent />
        </Protected>
    }
}

#[component]
fn LocationsContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().operator.api();
    let page = create_rw_signal(LocationsPage {
        loading: true,
        ..Default::default()
    });

    let load_api = api.clone();
    drive(page, move |p| {
        Box::pin(async move {
            p.load(&load_api, &global).await;
        })
    });

    let saving = create_rw_signal(false);
    let submit_api = api.clone();
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !begin(saving) {
            return;
        }
        let api = submit_api.clone();
        drive(page, move |p| {
            Box::pin(async move {
                p.submit(&api, &global).await;
                saving.set(false);
            })
        });
    };

    let delete = move |id: String| {
        if !confirm("Delete this location?") {
            return;
        }
        let api = api.clone();
        drive(page, move |p| {
            Box::pin(async move {
                p.delete(&api, &global, &id).await;
            })
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Locations"</h1>
                    <p class="text-gray-500 mt-1">"Offices and delivery points"</p>
                </div>
                <button
                    class="px-4 py-2 rounded-lg btn-theme font-medium"
                    on:click=move |_| page.update(|p| p.open_create())
                >
                    "+ Add location"
                </button>
            </div>

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                {
                    let delete = delete.clone();
                    move || {
                        let locations = page.with(|p| p.locations.clone());
                        if locations.is_empty() {
                            return view! { <EmptyState message="No locations yet" /> }.into_view();
                        }
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                                {locations.into_iter().map(|location| {
                                    let delete = delete.clone();
                                    let id = location.id.clone();
                                    let for_edit = location.clone();
                                    view! {
                                        <div class="bg-white rounded-xl shadow-sm p-5 space-y-2">
                                            <div class="flex items-start justify-between">
                                                <div>
                                                    <h3 class="font-semibold">{location.name.clone()}</h3>
                                                    <p class="text-sm text-gray-500">{location.city.clone()}</p>
                                                </div>
                                                {if location.is_active {
                                                    view! { <Badge label="Active" color="green" /> }.into_view()
                                                } else {
                                                    view! { <Badge label="Inactive" color="gray" /> }.into_view()
                                                }}
                                            </div>
                                            {location.address.clone().map(|a| view! { <p class="text-sm">"📍 " {a}</p> })}
                                            {location.phone.clone().map(|p| view! { <p class="text-sm">"☎ " {p}</p> })}
                                            {location.working_hours.clone().map(|h| view! { <p class="text-sm">"🕘 " {h}</p> })}
                                            <div class="flex gap-2 text-xs">
                                                {location.is_pickup.then(|| view! { <Badge label="Pickup" color="blue" /> })}
                                                {location.is_dropoff.then(|| view! { <Badge label="Drop-off" color="indigo" /> })}
                                            </div>
                                            <div class="flex justify-end space-x-3 text-sm pt-2">
                                                <button
                                                    class="text-blue-600 hover:underline"
                                                    on:click=move |_| page.update(|p| p.open_edit(&for_edit))
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="text-red-600 hover:underline"
                                                    on:click=move |_| delete(id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            </Show>

            <Modal
                title=Signal::derive(move || {
                    if page.with(|p| p.editing.is_some()) { "Edit location" } else { "New location" }.to_string()
                })
                open=Signal::derive(move || page.with(|p| p.dialog_open))
                on_close=move |_| page.update(|p| p.close_dialog())
            >
                <form class="space-y-4" on:submit=submit.clone()>
                    <div class="grid grid-cols-2 gap-4">
                        {text_input(page, "Name", "text", |p| p.form.name.clone(), |p, v| p.form.name = v)}
                        {text_input(page, "City", "text", |p| p.form.city.clone(), |p, v| p.form.city = v)}
                    </div>
                    {text_input(page, "Address", "text", |p| p.form.address.clone(), |p, v| p.form.address = v)}
                    <div class="grid grid-cols-2 gap-4">
                        {text_input(page, "Phone", "tel", |p| p.form.phone.clone(), |p, v| p.form.phone = v)}
                        {text_input(page, "Working hours", "text", |p| p.form.working_hours.clone(), |p, v| p.form.working_hours = v)}
                    </div>
                    <div class="flex gap-6">
                        {checkbox(page, "Pickup", |p| p.form.is_pickup, |p, v| p.form.is_pickup = v)}
                        {checkbox(page, "Drop-off", |p| p.form.is_dropoff, |p, v| p.form.is_dropoff = v)}
                        {checkbox(page, "Active", |p| p.form.is_active, |p, v| p.form.is_active = v)}
                    </div>
                    {move || page.with(|p| p.form_error.clone()).map(|e| view! {
                        <p class="text-sm text-red-600">{e.to_string()}</p>
                    })}
                    <div class="flex justify-end space-x-2">
                        <button type="button" class=BUTTON_SECONDARY on:click=move |_| page.update(|p| p.close_dialog())>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 rounded-lg btn-theme font-medium disabled:opacity-50"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
