//! Reservation entry form for the counter

use fleetease::access::AdminRoute;
use fleetease::panel::NewReservationPage;
use leptos::*;
use leptos_router::*;

use crate::components::{InlineLoading, Loading, Protected};
use crate::format::{date_input_value, format_money, parse_date_input};
use crate::pages::form::{text_area, text_input, BUTTON_SECONDARY, INPUT, LABEL};
use crate::state::{drive, drive_then, use_auth, use_global};

#[component]
pub fn NewReservation() -> impl IntoView {
    view! {
        <Protected route=AdminRoute::NewReservation>
            <NewReservationContent />
        </Protected>
    }
}

#[component]
fn NewReservationContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().operator.api();
    let navigate = use_navigate();
    let list_path = global.site_mode.path(AdminRoute::Reservations);
    let page = create_rw_signal(NewReservationPage {
        loading: true,
        ..Default::default()
    });

    let load_api = api.clone();
    drive(page, move |p| {
        Box::pin(async move {
            p.load(&load_api, &global).await;
        })
    });

    let (saving, set_saving) = create_signal(false);
    let back_path = list_path.clone();
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        let list_path = list_path.clone();
        drive_then(
            page,
            move |p| Box::pin(async move { p.submit(&api, &global).await }),
            move |created| {
                set_saving.set(false);
                if created {
                    navigate(&list_path, Default::default());
                }
            },
        );
    };

    let date_field = move |label: &'static str, get: fn(&NewReservationPage) -> String, set: fn(&mut NewReservationPage, String)| {
        view! {
            <div>
                <label class=LABEL>{label}</label>
                <input
                    type="date"
                    class=INPUT
                    prop:value=move || page.with(get)
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        page.update(|p| set(p, value));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="max-w-3xl space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"New reservation"</h1>
                <p class="text-gray-500 mt-1">"Book an available vehicle for a registered customer"</p>
            </div>

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                <form class="bg-white rounded-xl shadow-sm p-6 space-y-4" on:submit=submit.clone()>
                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class=LABEL>"Vehicle"</label>
                            <select
                                class=INPUT
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    page.update(|p| p.vehicle_id = value);
                                }
                            >
                                <option value="">"Select a vehicle"</option>
                                {move || page.with(|p| p.vehicles.clone()).into_iter().map(|v| {
                                    let id = v.id.clone();
                                    view! {
                                        <option
                                            value=v.id.clone()
                                            selected=move || page.with(|p| p.vehicle_id == id)
                                        >
                                            {format!("{} · {} · {}/day", v.plate, v.display_name(), format_money(v.daily_rate))}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                        <div>
                            <label class=LABEL>"Customer"</label>
                            <select
                                class=INPUT
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    page.update(|p| p.customer_id = value);
                                }
                            >
                                <option value="">"Select a customer"</option>
                                {move || page.with(|p| p.customers.clone()).into_iter().map(|c| {
                                    let id = c.id.clone();
                                    view! {
                                        <option
                                            value=c.id.clone()
                                            selected=move || page.with(|p| p.customer_id == id)
                                        >
                                            {format!("{} ({})", c.full_name, c.phone)}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                        {date_field("Pickup date",
                            |p| date_input_value(p.start_date),
                            |p, v| p.start_date = parse_date_input(&v))}
                        {date_field("Return date",
                            |p| date_input_value(p.end_date),
                            |p, v| p.end_date = parse_date_input(&v))}
                        {text_input(page, "Pickup location", "text", |p| p.pickup_location.clone(), |p, v| p.pickup_location = v)}
                        {text_input(page, "Return location", "text", |p| p.return_location.clone(), |p, v| p.return_location = v)}
                    </div>
                    {text_area(page, "Notes", |p| p.notes.clone(), |p, v| p.notes = v)}

                    {move || page.with(|p| p.quote()).map(|quote| view! {
                        <div class="rounded-lg bg-blue-50 p-4 flex justify-between text-sm">
                            <span>{format!("{} days × {}", quote.days, format_money(quote.daily_rate))}</span>
                            <span class="font-bold">{format_money(quote.total)}</span>
                        </div>
                    })}

                    <div class="flex justify-end space-x-2">
                        <A href=back_path.clone() class=BUTTON_SECONDARY>"Cancel"</A>
                        <button
                            type="submit"
                            class="px-4 py-2 rounded-lg btn-theme font-medium disabled:opacity-60"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { view! { <InlineLoading /> }.into_view() } else { "Create reservation".into_view() }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
