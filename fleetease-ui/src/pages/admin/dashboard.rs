//! Dashboard Page
//!
//! Fleet counters and the latest reservations.

use fleetease::access::AdminRoute;
use fleetease::models::ReservationStatus;
use fleetease::panel::DashboardPage;
use leptos::*;

use crate::components::{Badge, EmptyState, Loading, Protected};
use crate::format::{format_date, format_money};
use crate::state::{drive, use_auth, use_global};

pub(crate) fn status_color(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Created => "yellow",
        ReservationStatus::Confirmed => "blue",
        ReservationStatus::Delivered => "indigo",
        ReservationStatus::Returned => "teal",
        ReservationStatus::Closed => "green",
        ReservationStatus::Cancelled => "red",
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <Protected route=AdminRoute::Dashboard>
            <DashboardContent />
        </Protected>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().operator.api();
    let page = create_rw_signal(DashboardPage {
        loading: true,
        ..Default::default()
    });

    drive(page, move |p| {
        Box::pin(async move {
            p.load(&api, &global).await;
        })
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-500 mt-1">"Your fleet at a glance"</p>
            </div>

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {move || page.with(|p| p.cards()).into_iter().map(|(label, value)| view! {
                        <div class="bg-white rounded-xl shadow-sm p-5">
                            <p class="text-sm text-gray-500">{label}</p>
                            <p class="text-3xl font-bold mt-1">{value}</p>
                        </div>
                    }).collect_view()}
                </section>

                <section class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <div class="bg-white rounded-xl shadow-sm p-5">
                        <p class="text-sm text-gray-500">"Total revenue"</p>
                        <p class="text-2xl font-bold mt-1">
                            {move || format_money(page.with(|p| p.stats.total_revenue))}
                        </p>
                    </div>
                    <div class="bg-white rounded-xl shadow-sm p-5">
                        <p class="text-sm text-gray-500">"Utilization"</p>
                        <p class="text-2xl font-bold mt-1">
                            {move || format!("{:.0}%", page.with(|p| p.stats.utilization_percent()))}
                        </p>
                    </div>
                    <div class="bg-white rounded-xl shadow-sm p-5">
                        <p class="text-sm text-gray-500">"Pending returns"</p>
                        <p class="text-2xl font-bold mt-1">
                            {move || page.with(|p| p.stats.pending_returns)}
                        </p>
                    </div>
                </section>

                <section class="bg-white rounded-xl shadow-sm p-6">
                    <h2 class="text-lg font-semibold mb-4">"Recent reservations"</h2>
                    {move || {
                        let recent = page.with(|p| p.recent.clone());
                        if recent.is_empty() {
                            return view! { <EmptyState message="No reservations yet" /> }.into_view();
                        }
                        view! {
                            <table class="w-full text-sm">
                                <thead class="text-left text-gray-500">
                                    <tr>
                                        <th class="py-2">"Vehicle"</th>
                                        <th>"Customer"</th>
                                        <th>"Dates"</th>
                                        <th>"Status"</th>
                                        <th class="text-right">"Amount"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {recent.into_iter().map(|r| view! {
                                        <tr class="border-t">
                                            <td class="py-2">{r.vehicle_label()}</td>
                                            <td>{r.customer_label()}</td>
                                            <td>{format!("{} - {}", format_date(r.start_date), format_date(r.end_date))}</td>
                                            <td><Badge label=r.status.label() color=status_color(r.status) /></td>
                                            <td class="text-right">{format_money(r.total_amount)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view()
                    }}
                </section>
            </Show>
        </div>
    }
}
