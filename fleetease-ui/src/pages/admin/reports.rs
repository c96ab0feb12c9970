//! Reports: revenue and fleet figures

use fleetease::access::AdminRoute;
use fleetease::panel::{ReportFigure, ReportsPage};
use leptos::*;

use crate::components::{Loading, Protected};
use crate::format::format_money;
use crate::state::{drive, use_auth, use_global};

fn figure_value(figure: &ReportFigure) -> String {
    if figure.money {
        format_money(figure.value)
    } else {
        format!("{:.0}", figure.value)
    }
}

#[component]
pub fn Reports() -> impl IntoView {
    view! {
        <Protected route=AdminRoute::Reports>
            <ReportsContent />
        </Protected>
    }
}

#[component]
fn ReportsContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().operator.api();
    let page = create_rw_signal(ReportsPage {
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
                <h1 class="text-3xl font-bold">"Reports"</h1>
                <p class="text-gray-500 mt-1">"Business figures and fleet performance"</p>
            </div>

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {move || page.with(|p| p.summary()).into_iter().map(|figure| view! {
                        <div class="bg-white rounded-xl shadow-sm p-5">
                            <p class="text-sm text-gray-500">{figure.label}</p>
                            <p class="text-2xl font-bold mt-1">{figure_value(&figure)}</p>
                        </div>
                    }).collect_view()}
                </section>

                <section class="bg-white rounded-xl shadow-sm p-6 space-y-4">
                    <h2 class="text-lg font-semibold">"Fleet utilization"</h2>
                    <div class="flex items-center gap-4">
                        <div class="flex-1 h-3 rounded-full bg-gray-100 overflow-hidden">
                            <div
                                class="h-full btn-theme"
                                style:width=move || format!("{}%", page.with(|p| p.utilization()))
                            ></div>
                        </div>
                        <span class="font-bold">{move || format!("{}%", page.with(|p| p.utilization()))}</span>
                    </div>
                    <div class="grid grid-cols-3 gap-4">
                        {move || page.with(|p| p.fleet()).into_iter().map(|figure| view! {
                            <div>
                                <p class="text-sm text-gray-500">{figure.label}</p>
                                <p class="text-xl font-bold">{figure_value(&figure)}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </section>
            </Show>
        </div>
    }
}
