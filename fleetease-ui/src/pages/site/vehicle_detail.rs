//! Single vehicle with a price calculator

use fleetease::access::public_paths;
use fleetease::storefront::VehicleDetailPage;
use leptos::*;
use leptos_router::*;

use super::PLACEHOLDER_IMAGE;
use crate::components::{EmptyState, Loading, SiteLayout};
use crate::format::{date_input_value, format_money, parse_date_input};
use crate::pages::form::{INPUT, LABEL};
use crate::state::{drive, use_auth, use_global};

#[component]
pub fn VehicleDetail() -> impl IntoView {
    view! {
        <SiteLayout>
            <VehicleDetailContent />
        </SiteLayout>
    }
}

#[component]
fn VehicleDetailContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().customer.api();
    let params = use_params_map();
    let navigate = use_navigate();
    let page = create_rw_signal(VehicleDetailPage {
        loading: true,
        ..Default::default()
    });

    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        let api = api.clone();
        drive(page, move |p| {
            Box::pin(async move {
                p.load(&api, &global, &id).await;
            })
        });
    });

    let reserve = move |_: ev::MouseEvent| match page.with_untracked(|p| p.reserve()) {
        Ok(url) => navigate(&url, Default::default()),
        Err(e) => global.show_error(&e.to_string()),
    };

    view! {
        <div class="container mx-auto px-4 py-10">
            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                {
                    let reserve = reserve.clone();
                    move || match page.with(|p| p.vehicle.clone()) {
                        None => {
                            let message = if page.with(|p| p.not_found) {
                                "This vehicle does not exist"
                            } else {
                                "The vehicle could not be loaded"
                            };
                            view! {
                                <EmptyState message=message />
                                <div class="text-center">
                                    <A href=public_paths::VEHICLES class="text-theme font-medium">"← Back to vehicles"</A>
                                </div>
                            }.into_view()
                        }
                        Some(vehicle) => {
                            let reserve = reserve.clone();
                            let image = vehicle.image_url.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
                            let specs = [
                                ("Year", vehicle.year.to_string()),
                                ("Segment", vehicle.segment.clone()),
                                ("Transmission", vehicle.transmission.label().to_string()),
                                ("Fuel", vehicle.fuel_type.label().to_string()),
                                ("Seats", vehicle.seat_count.to_string()),
                                ("Doors", vehicle.door_count.to_string()),
                            ];
                            view! {
                                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                                    <div class="lg:col-span-2 space-y-6">
                                        <img src=image alt=vehicle.display_name() class="w-full h-96 object-cover rounded-xl" />
                                        <div class="bg-white rounded-xl shadow-sm p-6">
                                            <h1 class="text-3xl font-bold">{vehicle.display_name()}</h1>
                                            <dl class="grid grid-cols-2 md:grid-cols-3 gap-4 mt-6">
                                                {specs.into_iter().map(|(name, value)| view! {
                                                    <div>
                                                        <dt class="text-xs text-gray-500">{name}</dt>
                                                        <dd class="font-medium">{value}</dd>
                                                    </div>
                                                }).collect_view()}
                                            </dl>
                                        </div>
                                    </div>

                                    <div class="bg-white rounded-xl shadow-sm p-6 space-y-4 h-fit">
                                        <p class="text-3xl font-bold text-theme">
                                            {format_money(vehicle.daily_rate)}
                                            <span class="text-base font-normal text-gray-500">" / day"</span>
                                        </p>
                                        <div>
                                            <label class=LABEL>"Pickup date"</label>
                                            <input
                                                type="date"
                                                class=INPUT
                                                prop:value=move || page.with(|p| date_input_value(p.pickup))
                                                on:change=move |ev| {
                                                    let value = parse_date_input(&event_target_value(&ev));
                                                    page.update(|p| p.pickup = value);
                                                }
                                            />
                                        </div>
                                        <div>
                                            <label class=LABEL>"Return date"</label>
                                            <input
                                                type="date"
                                                class=INPUT
                                                prop:value=move || page.with(|p| date_input_value(p.return_date))
                                                on:change=move |ev| {
                                                    let value = parse_date_input(&event_target_value(&ev));
                                                    page.update(|p| p.return_date = value);
                                                }
                                            />
                                        </div>
                                        {move || page.with(|p| p.quote()).map(|quote| view! {
                                            <div class="rounded-lg bg-gray-50 p-4 text-sm space-y-1">
                                                <div class="flex justify-between">
                                                    <span>{format!("{} days × {}", quote.days, format_money(quote.daily_rate))}</span>
                                                </div>
                                                <div class="flex justify-between font-semibold text-base">
                                                    <span>"Total"</span>
                                                    <span>{format_money(quote.total)}</span>
                                                </div>
                                            </div>
                                        })}
                                        <button class="w-full px-4 py-3 rounded-lg btn-theme font-medium" on:click=reserve>
                                            "Reserve"
                                        </button>
                                    </div>
                                </div>
                            }.into_view()
                        }
                    }
                }
            </Show>
        </div>
    }
}
