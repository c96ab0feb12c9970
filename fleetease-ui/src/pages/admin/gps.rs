//! GPS tracking of rented vehicles, polled while the page is open

use fleetease::access::AdminRoute;
use fleetease::panel::{GpsPage, GPS_REFRESH_INTERVAL};
use gloo_timers::callback::Interval;
use leptos::*;

use crate::components::{EmptyState, Loading, Protected};
use crate::state::{begin, drive, use_auth, use_global};

#[component]
pub fn Gps() -> impl IntoView {
    view! {
        <Protected route=AdminRoute::Gps>
            <GpsContent />
        </Protected>
    }
}

#[component]
fn GpsContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().operator.api();
    let page = create_rw_signal(GpsPage {
        loading: true,
        ..Default::default()
    });
    let refreshing = create_rw_signal(false);

    let refresh = move || {
        if !begin(refreshing) {
            return;
        }
        let api = api.clone();
        drive(page, move |p| {
            Box::pin(async move {
                p.refresh(&api, &global).await;
                refreshing.set(false);
            })
        });
    };

    refresh();
    let poll = refresh.clone();
    let ticker = Interval::new(GPS_REFRESH_INTERVAL.as_millis() as u32, move || poll());
    on_cleanup(move || drop(ticker));

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"GPS Tracking"</h1>
                    <p class="text-gray-500 mt-1">"Live positions of rented vehicles"</p>
                </div>
                <button
                    class="px-4 py-2 rounded-lg border font-medium disabled:opacity-50"
                    disabled=move || refreshing.get()
                    on:click=move |_| refresh()
                >
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                {move || {
                    let positions = page.with(|p| p.positions.clone());
                    if positions.is_empty() {
                        return view! { <EmptyState message="No vehicles are out on rent" /> }.into_view();
                    }
                    view! {
                        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                            <div class="lg:col-span-2 bg-white rounded-xl shadow-sm p-6">
                                <h2 class="text-lg font-semibold mb-4">
                                    {format!("{} vehicles tracked", positions.len())}
                                </h2>
                                {move || page.with(|p| p.selected_position().cloned()).map(|pos| view! {
                                    <div class="rounded-lg bg-gray-50 p-4 space-y-1">
                                        <p class="font-bold">{pos.plate.clone()}</p>
                                        <p class="text-sm text-gray-600">{format!("{:.0} km/h", pos.speed)}</p>
                                        <p class="text-sm text-gray-600 font-mono">{pos.coordinates()}</p>
                                    </div>
                                })}
                            </div>
                            <ul class="bg-white rounded-xl shadow-sm divide-y">
                                {positions.into_iter().map(|pos| {
                                    let id = pos.vehicle_id.clone();
                                    let highlighted = id.clone();
                                    let updated = pos
                                        .last_update
                                        .map(|at| at.format("%H:%M:%S").to_string())
                                        .unwrap_or_default();
                                    view! {
                                        <li
                                            class=move || {
                                                if page.with(|p| p.selected.as_deref() == Some(highlighted.as_str())) {
                                                    "px-4 py-3 cursor-pointer bg-gray-100"
                                                } else {
                                                    "px-4 py-3 cursor-pointer hover:bg-gray-50"
                                                }
                                            }
                                            on:click=move |_| page.update(|p| p.toggle(&id))
                                        >
                                            <p class="font-medium">{pos.plate}</p>
                                            <p class="text-xs text-gray-500">
                                                {format!("{:.0} km/h", pos.speed)} " · " {updated}
                                            </p>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        </div>
                    }.into_view()
                }}
            </Show>
        </div>
    }
}
