//! Vehicle catalog with client-side filters

use fleetease::models::{FuelType, Transmission};
use fleetease::storefront::CatalogPage;
use leptos::*;

use super::VehicleCard;
use crate::components::{EmptyState, Loading, SiteLayout};
use crate::format::parse_number;
use crate::pages::form::{BUTTON_SECONDARY, INPUT, LABEL};
use crate::state::{drive, use_auth, use_global};

#[component]
pub fn Catalog() -> impl IntoView {
    view! {
        <SiteLayout>
            <CatalogContent />
        </SiteLayout>
    }
}

#[component]
fn CatalogContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().customer.api();
    let page = create_rw_signal(CatalogPage {
        loading: true,
        ..Default::default()
    });

    drive(page, move |p| {
        Box::pin(async move {
            p.load(&api, &global).await;
        })
    });

    let filtered = move || {
        page.with(|p| p.filtered().into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="container mx-auto px-4 py-10">
            <h1 class="text-3xl font-bold">"Our vehicles"</h1>

            <div class="grid grid-cols-1 lg:grid-cols-4 gap-8 mt-8">
                <aside class="bg-white rounded-xl shadow-sm p-6 space-y-4 h-fit">
                    <div>
                        <label class=LABEL>"Search"</label>
                        <input
                            type="text"
                            placeholder="Brand or model"
                            class=INPUT
                            prop:value=move || page.with(|p| p.filters.search.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                page.update(|p| p.filters.search = value);
                            }
                        />
                    </div>

                    <div>
                        <label class=LABEL>"Segment"</label>
                        <select
                            class=INPUT
                            prop:value=move || page.with(|p| p.filters.segment.clone().unwrap_or_default())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                page.update(|p| p.filters.segment = (!value.is_empty()).then_some(value));
                            }
                        >
                            <option value="">"All"</option>
                            {move || page.with(|p| {
                                p.segments().into_iter().map(|segment| {
                                    let segment = segment.to_string();
                                    view! { <option value=segment.clone()>{segment.clone()}</option> }
                                }).collect_view()
                            })}
                        </select>
                    </div>

                    <div>
                        <label class=LABEL>"Transmission"</label>
                        <select
                            class=INPUT
                            prop:value=move || page.with(|p| p.filters.transmission.map(|t| t.as_str()).unwrap_or_default())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                page.update(|p| p.filters.transmission = value.parse::<Transmission>().ok());
                            }
                        >
                            <option value="">"All"</option>
                            {Transmission::ALL.iter().map(|t| view! {
                                <option value=t.as_str()>{t.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div>
                        <label class=LABEL>"Fuel"</label>
                        <select
                            class=INPUT
                            prop:value=move || page.with(|p| p.filters.fuel_type.map(|f| f.as_str()).unwrap_or_default())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                page.update(|p| p.filters.fuel_type = value.parse::<FuelType>().ok());
                            }
                        >
                            <option value="">"All"</option>
                            {FuelType::ALL.iter().map(|f| view! {
                                <option value=f.as_str()>{f.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="grid grid-cols-2 gap-2">
                        <div>
                            <label class=LABEL>"Min ₺/day"</label>
                            <input
                                type="number"
                                class=INPUT
                                prop:value=move || page.with(|p| p.filters.min_rate.to_string())
                                on:change=move |ev| {
                                    if let Some(value) = parse_number(&event_target_value(&ev)) {
                                        page.update(|p| p.filters.min_rate = value);
                                    }
                                }
                            />
                        </div>
                        <div>
                            <label class=LABEL>"Max ₺/day"</label>
                            <input
                                type="number"
                                class=INPUT
                                prop:value=move || page.with(|p| p.filters.max_rate.to_string())
                                on:change=move |ev| {
                                    if let Some(value) = parse_number(&event_target_value(&ev)) {
                                        page.update(|p| p.filters.max_rate = value);
                                    }
                                }
                            />
                        </div>
                    </div>

                    <button
                        class=format!("w-full {}", BUTTON_SECONDARY)
                        disabled=move || page.with(|p| p.filters.is_default())
                        on:click=move |_| page.update(|p| p.clear_filters())
                    >
                        "Clear filters"
                    </button>
                </aside>

                <div class="lg:col-span-3">
                    <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                        <p class="text-sm text-gray-500 mb-4">
                            {move || format!("{} vehicles found", filtered().len())}
                        </p>
                        {move || {
                            let vehicles = filtered();
                            if vehicles.is_empty() {
                                view! { <EmptyState message="No vehicle matches these filters" /> }.into_view()
                            } else {
                                view! {
                                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
                                        {vehicles.into_iter().map(|vehicle| view! {
                                            <VehicleCard vehicle=vehicle />
                                        }).collect_view()}
                                    </div>
                                }.into_view()
                            }
                        }}
                    </Show>
                </div>
            </div>
        </div>
    }
}
