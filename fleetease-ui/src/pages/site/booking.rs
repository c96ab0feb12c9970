//! Booking form reached from a vehicle page

use fleetease::access::public_paths;
use fleetease::storefront::{BookingPage, BookingStep};
use leptos::*;
use leptos_router::*;

use crate::components::{EmptyState, InlineLoading, Loading, SiteLayout};
use crate::format::{format_date, format_money};
use crate::pages::form::{checkbox, text_area, text_input};
use crate::state::{drive, drive_then, use_auth, use_global};

#[component]
pub fn Booking() -> impl IntoView {
    view! {
        <SiteLayout>
            <BookingContent />
        </SiteLayout>
    }
}

#[component]
fn BookingContent() -> impl IntoView {
    let global = use_global();
    let customer = use_auth().customer;
    let api = customer.api();
    let query = use_location().search.get_untracked();
    let page = create_rw_signal(BookingPage {
        loading: true,
        ..BookingPage::from_query(&query)
    });

    // Signed-in customers get their contact details filled once
    create_effect(move |prefilled: Option<bool>| {
        if prefilled == Some(true) {
            return true;
        }
        match customer.user() {
            Some(user) => {
                page.update(|p| {
                    if p.full_name.is_empty() {
                        p.prefill(&user);
                    }
                });
                true
            }
            None => false,
        }
    });

    let load_api = api.clone();
    drive(page, move |p| {
        Box::pin(async move {
            if !p.load(&load_api, &global).await {
                p.loading = false;
            }
        })
    });

    let (submitting, set_submitting) = create_signal(false);
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        let api = api.clone();
        drive_then(
            page,
            move |p| Box::pin(async move { p.submit(&api, &global).await }),
            move |_| set_submitting.set(false),
        );
    };

    let trip = move || {
        page.with(|p| match (p.pickup, p.return_date) {
            (Some(pickup), Some(return_date)) => {
                format!("{} → {}", format_date(pickup), format_date(return_date))
            }
            _ => "Dates not selected".to_string(),
        })
    };

    view! {
        <div class="container mx-auto px-4 py-10 max-w-4xl">
            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                {
                    let submit = submit.clone();
                    move || {
                        if page.with(|p| p.vehicle.is_none()) {
                            return view! {
                                <EmptyState message="Pick a vehicle first" />
                                <div class="text-center">
                                    <A href=public_paths::VEHICLES class="text-theme font-medium">"Browse vehicles"</A>
                                </div>
                            }.into_view();
                        }
                        if page.with(|p| p.step) == BookingStep::Confirmed {
                            return view! {
                                <div class="bg-white rounded-xl shadow-sm p-10 text-center space-y-4">
                                    <p class="text-5xl">"✓"</p>
                                    <h1 class="text-2xl font-bold">"Reservation received"</h1>
                                    <p class="text-gray-500">"We will contact you shortly to confirm the details."</p>
                                    <div class="flex justify-center gap-4">
                                        <A href=public_paths::HOME class="text-theme font-medium">"Home"</A>
                                        <A href=public_paths::ACCOUNT class="text-theme font-medium">"My reservations"</A>
                                    </div>
                                </div>
                            }.into_view();
                        }
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                                <form class="md:col-span-2 bg-white rounded-xl shadow-sm p-6 space-y-4" on:submit=submit.clone()>
                                    <h1 class="text-2xl font-bold">"Complete your booking"</h1>
                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                        {text_input(page, "Full name", "text", |p| p.full_name.clone(), |p, v| p.full_name = v)}
                                        {text_input(page, "Email", "email", |p| p.email.clone(), |p, v| p.email = v)}
                                        {text_input(page, "Phone", "tel", |p| p.phone.clone(), |p, v| p.phone = v)}
                                        {text_input(page, "National ID (TC)", "text", |p| p.tc_no.clone(), |p, v| p.tc_no = v)}
                                        {text_input(page, "Pickup location", "text", |p| p.pickup_location.clone(), |p, v| p.pickup_location = v)}
                                        {text_input(page, "Return location", "text", |p| p.return_location.clone(), |p, v| p.return_location = v)}
                                    </div>
                                    {text_area(page, "Notes", |p| p.notes.clone(), |p, v| p.notes = v)}
                                    <div class="space-y-2">
                                        {checkbox(page, "I accept the rental terms", |p| p.terms_accepted, |p, v| p.terms_accepted = v)}
                                        {checkbox(page, "I have read the privacy notice (KVKK)", |p| p.kvkk_accepted, |p, v| p.kvkk_accepted = v)}
                                    </div>
                                    <button
                                        type="submit"
                                        class="w-full px-4 py-3 rounded-lg btn-theme font-medium disabled:opacity-50"
                                        disabled=move || submitting.get()
                                    >
                                        {move || if submitting.get() {
                                            view! { <InlineLoading /> }.into_view()
                                        } else {
                                            "Confirm reservation".into_view()
                                        }}
                                    </button>
                                </form>

                                <aside class="bg-white rounded-xl shadow-sm p-6 space-y-3 h-fit">
                                    <h2 class="font-semibold">"Summary"</h2>
                                    <p class="text-lg">
                                        {move || page.with(|p| p.vehicle.as_ref().map(|v| v.display_name()).unwrap_or_default())}
                                    </p>
                                    <p class="text-sm text-gray-500">{trip}</p>
                                    {move || page.with(|p| p.quote()).map(|quote| view! {
                                        <div class="border-t pt-3 space-y-1 text-sm">
                                            <div class="flex justify-between">
                                                <span>{format!("{} days", quote.days)}</span>
                                                <span>{format_money(quote.daily_rate)} " / day"</span>
                                            </div>
                                            <div class="flex justify-between font-semibold text-base">
                                                <span>"Total"</span>
                                                <span>{format_money(quote.total)}</span>
                                            </div>
                                        </div>
                                    })}
                                </aside>
                            </div>
                        }.into_view()
                    }
                }
            </Show>
        </div>
    }
}
