//! Reservation list and status workflow

use fleetease::access::AdminRoute;
use fleetease::models::ReservationStatus;
use fleetease::panel::ReservationsPage;
use leptos::*;
use leptos_router::*;

use super::dashboard::status_color;
use crate::components::{Badge, EmptyState, FilterButton, Loading, Protected};
use crate::format::{format_date, format_money};
use crate::state::{drive, use_auth, use_global};

#[component]
pub fn Reservations() -> impl IntoView {
    view! {
        <Protected route=AdminRoute::Reservations>
            <ReservationsContent />
        </Protected>
    }
}

#[component]
fn ReservationsContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().operator.api();
    let page = create_rw_signal(ReservationsPage {
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
    let set_filter = move |filter: Option<ReservationStatus>| {
        let api = filter_api.clone();
        drive(page, move |p| {
            Box::pin(async move {
                p.set_filter(&api, &global, filter).await;
            })
        });
    };

    let update_status = move |id: String, status: ReservationStatus| {
        let api = api.clone();
        drive(page, move |p| {
            Box::pin(async move {
                p.update_status(&api, &global, &id, status).await;
            })
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Reservations"</h1>
                    <p class="text-gray-500 mt-1">
                        {move || format!("{} reservations", page.with(|p| p.reservations.len()))}
                    </p>
                </div>
                <A
                    href=global.site_mode.path(AdminRoute::NewReservation)
                    class="px-4 py-2 rounded-lg btn-theme font-medium"
                >
                    "+ New reservation"
                </A>
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
                {ReservationStatus::ALL
                    .iter()
                    .copied()
                    .map(|status| {
                        let set_filter = set_filter.clone();
                        view! {
                            <FilterButton
                                label=status.label()
                                active=Signal::derive(move || page.with(|p| p.status_filter == Some(status)))
                                on_click=move |_| set_filter(Some(status))
                            />
                        }
                    })
                    .collect_view()}
                <input
                    type="search"
                    placeholder="Search plate or customer"
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
                    let update_status = update_status.clone();
                    move || {
                        let reservations: Vec<_> = page.with(|p| p.filtered().into_iter().cloned().collect());
                        if reservations.is_empty() {
                            return view! { <EmptyState message="No reservations found" /> }.into_view();
                        }
                        let update_status = update_status.clone();
                        view! {
                            <div class="bg-white rounded-xl shadow-sm overflow-hidden">
                                <table class="w-full text-sm">
                                    <thead class="bg-gray-50 text-left text-gray-500">
                                        <tr>
                                            <th class="px-4 py-3">"Vehicle"</th>
                                            <th>"Customer"</th>
                                            <th>"Pickup"</th>
                                            <th>"Return"</th>
                                            <th>"Amount"</th>
                                            <th>"Status"</th>
                                            <th class="text-right px-4">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {reservations.into_iter().map(|r| {
                                            let actions = r.status.next_actions().iter().copied().map(|next| {
                                                let update_status = update_status.clone();
                                                let id = r.id.clone();
                                                view! {
                                                    <button
                                                        class="text-xs px-2 py-1 rounded border hover:bg-gray-50"
                                                        on:click=move |_| update_status(id.clone(), next)
                                                    >
                                                        {next.label()}
                                                    </button>
                                                }
                                            }).collect_view();
                                            view! {
                                                <tr class="border-t">
                                                    <td class="px-4 py-3">{r.vehicle_label()}</td>
                                                    <td>{r.customer_label()}</td>
                                                    <td>{format_date(r.start_date)}</td>
                                                    <td>{format_date(r.end_date)}</td>
                                                    <td>{format_money(r.total_amount)}</td>
                                                    <td><Badge label=r.status.label() color=status_color(r.status) /></td>
                                                    <td class="text-right px-4 space-x-1">{actions}</td>
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
        </div>
    }
}
