//! Admin sidebar
//!
//! Lists the menu entries the signed-in role may open, highlighting the
//! one that owns the current path.

use fleetease::access::{is_active_path, visible_menu};
use leptos::*;
use leptos_router::*;

use crate::state::{use_auth, use_global};

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "dashboard" => "📊",
        "car" => "🚗",
        "users" => "👥",
        "calendar" => "📅",
        "map-pin" => "📍",
        "navigation" => "🛰",
        "credit-card" => "💳",
        "bar-chart" => "📈",
        "palette" => "🎨",
        "help-circle" => "❓",
        _ => "•",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let global = use_global();
    let auth = use_auth();
    let location = use_location();

    let items = move || {
        auth.operator
            .user()
            .map(|user| visible_menu(user.role, global.site_mode))
            .unwrap_or_default()
    };

    view! {
        <aside class="w-60 shrink-0 bg-gray-900 text-gray-100 min-h-screen">
            <div class="h-16 flex items-center px-6 border-b border-gray-800">
                <span class="text-xl font-bold">"FleetEase"</span>
            </div>
            <nav class="p-3 space-y-1">
                {move || {
                    let current = location.pathname.get();
                    items()
                        .into_iter()
                        .map(|(item, path)| {
                            let active = is_active_path(&current, &path);
                            let class = if active {
                                "flex items-center space-x-3 px-3 py-2 rounded-lg bg-gray-800 text-white"
                            } else {
                                "flex items-center space-x-3 px-3 py-2 rounded-lg text-gray-400 hover:text-white hover:bg-gray-800"
                            };
                            view! {
                                <A href=path class=class>
                                    <span>{icon_glyph(item.icon)}</span>
                                    <span>{item.label}</span>
                                </A>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </aside>
    }
}
