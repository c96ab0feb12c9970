//! Fleet management

use fleetease::access::AdminRoute;
use fleetease::models::{FuelType, Transmission, VehicleStatus};
use fleetease::panel::VehiclesPage;
use leptos::*;

use crate::components::{Badge, EmptyState, FilterButton, Loading, Modal, Protected};
use crate::format::{format_money, optional, parse_number};
use crate::pages::form::{number_input, select, text_input, BUTTON_SECONDARY};
use crate::state::{drive, use_auth, use_global};

pub(crate) fn status_color(status: VehicleStatus) -> &'static str {
    match status {
        VehicleStatus::Available => "green",
        VehicleStatus::Rented => "blue",
        VehicleStatus::Service => "orange",
        VehicleStatus::Reserved => "purple",
    }
}

#[component]
pub fn Vehicles() -> impl IntoView {
    view! {
        <Protected route=AdminRoute::Vehicles>
            <VehiclesContent />
        </Protected>
    }
}

#[component]
fn VehiclesContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().operator.api();
    let page = create_rw_signal(VehiclesPage {
        loading: true,
        ..Default::default()
    });

    let load_api = api.clone();
    drive(page, move |p| {
        Box::pin(async move {
            p.load(&load_api, &global).await;
        })
    });

    let filter_api = api.clone();
    let set_filter = move |filter: Option<VehicleStatus>| {
        let api = filter_api.clone();
        drive(page, move |p| {
            Box::pin(async move {
                p.set_filter(&api, &global, filter).await;
            })
        });
    };

    let status_api = api.clone();
    let change_status = move |id: String, status: VehicleStatus| {
        let api = status_api.clone();
        drive(page, move |p| {
            Box::pin(async move {
                p.change_status(&api, &global, &id, status).await;
            })
        });
    };

    let submit_api = api.clone();
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let api = submit_api.clone();
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
                    <h1 class="text-3xl font-bold">"Vehicles"</h1>
                    <p class="text-gray-500 mt-1">
                        {move || format!("{} vehicles", page.with(|p| p.vehicles.len()))}
                    </p>
                </div>
                <button
                    class="px-4 py-2 rounded-lg btn-theme font-medium"
                    on:click=move |_| page.update(|p| p.open_create())
                >
                    "+ Add vehicle"
                </button>
            </div>

            <div class="flex flex-wrap items-center gap-2">
                {
                    let set_filter = set_filter.clone();
                    view! {
                        <FilterButton
                            label="All"
                            active=Signal::derive(move || page.with(|p| p.status_filter.is_none()))
                            on_click=move |_| set_filter(None)
                        />
                    }
                }
                {VehicleStatus::ALL
                    .iter()
                    .copied()
                    .map(|status| {
                        let set_filter = set_filter.clone();
                        let label = Signal::derive(move || {
                            let count = page.with(|p| p.status_counts().get(&status).copied().unwrap_or(0));
                            format!("{} ({})", status.label(), count)
                        });
                        view! {
                            <FilterButton
                                label=label
                                active=Signal::derive(move || page.with(|p| p.status_filter == Some(status)))
                                on_click=move |_| set_filter(Some(status))
                            />
                        }
                    })
                    .collect_view()}
                <input
                    type="search"
                    placeholder="Search plate, brand or model"
                    class="ml-auto border rounded-lg px-3 py-1.5 text-sm w-64"
                    prop:value=move || page.with(|p| p.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        page.update(|p| p.search = value);
                    }
                />
            </div>

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                {
                    let change_status = change_status.clone();
                    move || {
                        let vehicles: Vec<_> = page.with(|p| p.filtered().into_iter().cloned().collect());
                        if vehicles.is_empty() {
                            return view! { <EmptyState message="No vehicles found" /> }.into_view();
                        }
                        let change_status = change_status.clone();
                        view! {
                            <div class="bg-white rounded-xl shadow-sm overflow-hidden">
                                <table class="w-full text-sm">
                                    <thead class="bg-gray-50 text-left text-gray-500">
                                        <tr>
                                            <th class="px-4 py-3">"Plate"</th>
                                            <th>"Vehicle"</th>
                                            <th>"Segment"</th>
                                            <th>"Gearbox / Fuel"</th>
                                            <th>"Daily rate"</th>
                                            <th>"Status"</th>
                                            <th class="text-right px-4">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {vehicles.into_iter().map(|vehicle| {
                                            let change_status = change_status.clone();
                                            let id = vehicle.id.clone();
                                            let for_edit = vehicle.clone();
                                            view! {
                                                <tr class="border-t">
                                                    <td class="px-4 py-3 font-mono">{vehicle.plate.clone()}</td>
                                                    <td>{vehicle.display_name()}</td>
                                                    <td>{vehicle.segment.clone()}</td>
                                                    <td>{format!("{} / {}", vehicle.transmission.label(), vehicle.fuel_type.label())}</td>
                                                    <td>{format_money(vehicle.daily_rate)}</td>
                                                    <td><Badge label=vehicle.status.label() color=status_color(vehicle.status) /></td>
                                                    <td class="text-right px-4 space-x-2">
                                                        <select
                                                            class="border rounded px-2 py-1 text-xs"
                                                            on:change=move |ev| {
                                                                let value = event_target_value(&ev);
                                                                if let Some(status) = VehicleStatus::ALL.iter().find(|s| s.as_str() == value) {
                                                                    change_status(id.clone(), *status);
                                                                }
                                                            }
                                                        >
                                                            {VehicleStatus::ALL.iter().copied().map(|s| view! {
                                                                <option value=s.as_str() selected=s == vehicle.status>{s.label()}</option>
                                                            }).collect_view()}
                                                        </select>
                                                        <button
                                                            class="text-blue-600 hover:underline"
                                                            on:click=move |_| page.update(|p| p.open_edit(&for_edit))
                                                        >
                                                            "Edit"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }.into_view()
                    }
                }
            </Show>

            <Modal
                title=Signal::derive(move || {
                    if page.with(|p| p.editing.is_some()) { "Edit vehicle" } else { "New vehicle" }.to_string()
                })
                open=Signal::derive(move || page.with(|p| p.dialog_open))
                on_close=move |_| page.update(|p| p.close_dialog())
            >
                <form class="space-y-4" on:submit=submit.clone()>
                    <div class="grid grid-cols-2 gap-4">
                        {text_input(page, "Plate", "text", |p| p.draft.plate.clone(), |p, v| p.draft.plate = v)}
                        {text_input(page, "Segment", "text", |p| p.draft.segment.clone(), |p, v| p.draft.segment = v)}
                        {text_input(page, "Brand", "text", |p| p.draft.brand.clone(), |p, v| p.draft.brand = v)}
                        {text_input(page, "Model", "text", |p| p.draft.model.clone(), |p, v| p.draft.model = v)}
                        {number_input(page, "Year", |p| p.draft.year.to_string(), |p, v| {
                            if let Some(year) = parse_number(v) { p.draft.year = year }
                        })}
                        {number_input(page, "Daily rate (₺)", |p| p.draft.daily_rate.to_string(), |p, v| {
                            if let Some(rate) = parse_number(v) { p.draft.daily_rate = rate }
                        })}
                        {select(page, "Transmission", &Transmission::ALL, Transmission::label, |p| p.draft.transmission, |p, v| p.draft.transmission = v)}
                        {select(page, "Fuel", &FuelType::ALL, FuelType::label, |p| p.draft.fuel_type, |p, v| p.draft.fuel_type = v)}
                        {number_input(page, "Seats", |p| p.draft.seat_count.to_string(), |p, v| {
                            if let Some(seats) = parse_number(v) { p.draft.seat_count = seats }
                        })}
                        {number_input(page, "Doors", |p| p.draft.door_count.to_string(), |p, v| {
                            if let Some(doors) = parse_number(v) { p.draft.door_count = doors }
                        })}
                        {number_input(page, "Mileage (km)", |p| p.draft.mileage.to_string(), |p, v| {
                            if let Some(km) = parse_number(v) { p.draft.mileage = km }
                        })}
                        {text_input(page, "Colour", "text",
                            |p| p.draft.color.clone().unwrap_or_default(),
                            |p, v| p.draft.color = optional(v))}
                    </div>
                    {text_input(page, "Image URL", "url",
                        |p| p.draft.image_url.clone().unwrap_or_default(),
                        |p, v| p.draft.image_url = optional(v))}
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
