//! Landing page: hero slider, highlights and popular vehicles

use fleetease::access::public_paths;
use fleetease::storefront::HomePage;
use gloo_timers::callback::Interval;
use leptos::*;
use leptos_router::*;

use super::VehicleCard;
use crate::components::{InlineLoading, SiteLayout};
use crate::state::{drive, use_auth, use_global};

const SLIDE_INTERVAL_MS: u32 = 5000;

const FEATURES: [(&str, &str, &str); 6] = [
    ("🛡", "Full coverage", "Every vehicle is fully insured"),
    ("🕑", "24/7 support", "Our team is reachable around the clock"),
    ("💳", "Flexible payment", "Card or bank transfer"),
    ("📍", "Free delivery", "Free drop-off inside the city"),
    ("🏅", "Quality guarantee", "Serviced and cleaned before every rental"),
    ("🎧", "Roadside assistance", "Emergency help wherever you are"),
];

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <SiteLayout>
            <HomeContent />
        </SiteLayout>
    }
}

#[component]
fn HomeContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().customer.api();
    let page = create_rw_signal(HomePage {
        loading: true,
        ..Default::default()
    });
    let slide = create_rw_signal(0usize);

    drive(page, move |p| {
        Box::pin(async move {
            p.load(&api).await;
            global.set_public_theme(p.theme.clone());
        })
    });

    let ticker = Interval::new(SLIDE_INTERVAL_MS, move || slide.update(|i| *i = i.wrapping_add(1)));
    on_cleanup(move || drop(ticker));

    let style = move || global.theme();

    view! {
        <section class="relative h-[520px] overflow-hidden">
            {move || {
                let style = style();
                let count = style.slides.len().max(1);
                let current = slide.get() % count;
                style.slides.iter().enumerate().map(|(index, image)| {
                    let title = image.title.clone().unwrap_or_else(|| style.hero_title.clone());
                    let subtitle = image.subtitle.clone().unwrap_or_else(|| style.hero_subtitle.clone());
                    let opacity = if index == current { "opacity-100" } else { "opacity-0" };
                    view! {
                        <div
                            class=format!("absolute inset-0 bg-cover bg-center transition-opacity duration-700 {}", opacity)
                            style=format!("background-image: {}", style.hero_background(&image.url))
                        >
                            <div class="container mx-auto px-4 h-full flex flex-col justify-center text-white">
                                <h1 class="text-4xl md:text-5xl font-bold max-w-2xl">{title}</h1>
                                <p class="mt-4 text-lg max-w-xl">{subtitle}</p>
                                <div class="mt-8">
                                    <A href=public_paths::VEHICLES class="px-6 py-3 rounded-lg btn-theme font-medium">
                                        "Browse vehicles"
                                    </A>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()
            }}
        </section>

        <Show when=move || style().show_stats>
            <section class="bg-white border-b">
                <div class="container mx-auto px-4 py-10 grid grid-cols-2 md:grid-cols-4 gap-6 text-center">
                    {move || style().stats.into_iter().map(|(value, caption)| view! {
                        <div>
                            <p class="text-3xl font-bold text-theme">{value}</p>
                            <p class="text-sm text-gray-500 mt-1">{caption}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </Show>

        <Show when=move || style().show_features>
            <section class="container mx-auto px-4 py-16">
                <h2 class="text-3xl font-bold text-center">"Why rent with us"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-10">
                    {FEATURES.iter().copied().map(|(icon, title, text)| view! {
                        <div class="bg-white rounded-xl shadow-sm p-6">
                            <span class="text-3xl">{icon}</span>
                            <h3 class="font-semibold mt-3">{title}</h3>
                            <p class="text-sm text-gray-500 mt-1">{text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </Show>

        <Show when=move || style().show_popular_vehicles>
            <section class="container mx-auto px-4 pb-16">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-3xl font-bold">"Popular vehicles"</h2>
                    <A href=public_paths::VEHICLES class="text-theme font-medium">"See all →"</A>
                </div>
                <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <InlineLoading /> }>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {move || page.with(|p| p.featured.clone()).into_iter().map(|vehicle| view! {
                            <VehicleCard vehicle=vehicle />
                        }).collect_view()}
                    </div>
                </Show>
            </section>
        </Show>
    }
}
