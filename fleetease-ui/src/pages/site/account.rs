//! Customer's own reservations

use fleetease::access::public_paths;
use fleetease::models::Reservation;
use fleetease::storefront::AccountPage;
use leptos::*;
use leptos_router::*;

use crate::components::{Badge, CustomerOnly, EmptyState, Loading, SiteLayout};
use crate::format::{format_date, format_money};
use crate::pages::admin::dashboard::status_color;
use crate::state::{drive, use_auth, use_global};

#[component]
pub fn Account() -> impl IntoView {
    view! {
        <SiteLayout>
            <CustomerOnly>
                <AccountContent />
            </CustomerOnly>
        </SiteLayout>
    }
}

fn reservation_list(reservations: Vec<Reservation>, empty: &'static str) -> View {
    if reservations.is_empty() {
        return view! { <EmptyState message=empty /> }.into_view();
    }
    reservations
        .into_iter()
        .map(|r| {
            view! {
                <div class="bg-white rounded-xl shadow-sm p-5 flex flex-col md:flex-row md:items-center justify-between gap-3">
                    <div>
                        <p class="font-semibold">{r.vehicle_label()}</p>
                        <p class="text-sm text-gray-500">
                            {format!("{} → {}", format_date(r.start_date), format_date(r.end_date))}
                        </p>
                        {r.pickup_location.clone().map(|place| view! {
                            <p class="text-xs text-gray-400">{place}</p>
                        })}
                    </div>
                    <div class="flex items-center gap-4">
                        <span class="font-semibold">{format_money(r.total_amount)}</span>
                        <Badge label=r.status.label() color=status_color(r.status) />
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn AccountContent() -> impl IntoView {
    let global = use_global();
    let customer = use_auth().customer;
    let api = customer.api();
    let page = create_rw_signal(AccountPage {
        loading: true,
        ..Default::default()
    });

    drive(page, move |p| {
        Box::pin(async move {
            p.load(&api, &global).await;
        })
    });

    let greeting = move || {
        customer
            .user()
            .map(|user| format!("Hello, {}", user.full_name))
            .unwrap_or_default()
    };

    view! {
        <div class="container mx-auto px-4 py-10 max-w-4xl space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"My reservations"</h1>
                    <p class="text-gray-500 mt-1">{greeting}</p>
                </div>
                <A href=public_paths::VEHICLES class="px-4 py-2 rounded-lg btn-theme font-medium">"New booking"</A>
            </div>

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                <section class="space-y-3">
                    <h2 class="text-xl font-semibold">"Active"</h2>
                    {move || reservation_list(
                        page.with(|p| p.active().into_iter().cloned().collect()),
                        "No upcoming reservations",
                    )}
                </section>
                <section class="space-y-3">
                    <h2 class="text-xl font-semibold">"Past"</h2>
                    {move || reservation_list(
                        page.with(|p| p.past().into_iter().cloned().collect()),
                        "Nothing here yet",
                    )}
                </section>
            </Show>
        </div>
    }
}
