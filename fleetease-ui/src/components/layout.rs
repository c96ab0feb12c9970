//! Page frames
//!
//! `AdminShell` wraps panel pages with the sidebar and account bar,
//! `SiteLayout` wraps public pages with the themed header and footer.

use fleetease::access::public_paths;
use leptos::*;
use leptos_router::*;

use crate::components::sidebar::Sidebar;
use crate::state::{use_auth, use_global};

#[component]
pub fn AdminShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let session = auth.operator;

    let company = move || {
        session
            .state()
            .company()
            .map(|company| company.name.clone())
            .unwrap_or_default()
    };
    let account = move || {
        session
            .user()
            .map(|user| format!("{} · {}", user.full_name, user.role.label()))
            .unwrap_or_default()
    };

    view! {
        <div class="flex min-h-screen bg-gray-50">
            <Sidebar />
            <div class="flex-1 flex flex-col">
                <header class="h-16 bg-white border-b flex items-center justify-between px-8">
                    <span class="font-semibold text-gray-700">{company}</span>
                    <div class="flex items-center space-x-4">
                        <span class="text-sm text-gray-500">{account}</span>
                        <button
                            class="text-sm px-3 py-1.5 rounded-lg border hover:bg-gray-100"
                            on:click=move |_| session.logout()
                        >
                            "Sign out"
                        </button>
                    </div>
                </header>
                <main class="flex-1 p-8">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    let global = use_global();
    let auth = use_auth();

    if !global.theme_loaded.get_untracked() {
        let api = auth.customer.api();
        spawn_local(async move {
            match api.public_theme().await {
                Ok(theme) => global.set_public_theme(theme),
                Err(e) => web_sys::console::warn_1(&format!("Theme settings unavailable: {}", e).into()),
            }
        });
    }

    let style = move || global.theme().inline_style();
    let settings = move || global.public_theme.with(|t| t.settings.clone());

    view! {
        <div class="min-h-screen flex flex-col" style=style>
            <header class="bg-white shadow-sm">
                <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                    <A href=public_paths::HOME class="flex items-center space-x-2">
                        {move || match global.theme().logo_url {
                            Some(url) => view! { <img src=url class="h-8" alt="logo" /> }.into_view(),
                            None => view! { <span class="text-xl font-bold text-theme">"FleetEase"</span> }.into_view(),
                        }}
                    </A>
                    <nav class="flex items-center space-x-6 text-sm">
                        <A href=public_paths::HOME>"Home"</A>
                        <A href=public_paths::VEHICLES>"Vehicles"</A>
                        <CustomerMenu />
                    </nav>
                </div>
            </header>

            <main class="flex-1">{children()}</main>

            <footer class="bg-gray-900 text-gray-300 py-8">
                <div class="container mx-auto px-4 flex flex-col md:flex-row justify-between gap-4 text-sm">
                    <span>"© FleetEase"</span>
                    <div class="flex gap-6">
                        {move || settings().contact_phone.map(|phone| view! { <span>"☎ " {phone}</span> })}
                        {move || settings().contact_email.map(|email| view! { <span>"✉ " {email}</span> })}
                        {move || settings().social_instagram.map(|url| view! { <a href=url target="_blank">"Instagram"</a> })}
                        {move || settings().social_facebook.map(|url| view! { <a href=url target="_blank">"Facebook"</a> })}
                        {move || settings().social_twitter.map(|url| view! { <a href=url target="_blank">"X"</a> })}
                    </div>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn CustomerMenu() -> impl IntoView {
    let auth = use_auth();
    let customer = auth.customer;

    view! {
        {move || match customer.user() {
            Some(user) => view! {
                <A href=public_paths::ACCOUNT>{user.full_name}</A>
                <button class="text-gray-500 hover:text-gray-800" on:click=move |_| customer.logout()>
                    "Sign out"
                </button>
            }.into_view(),
            None => view! {
                <A href=public_paths::CUSTOMER_LOGIN>"Sign in"</A>
                <A href=public_paths::CUSTOMER_REGISTER class="px-4 py-2 rounded-lg btn-theme">"Register"</A>
            }.into_view(),
        }}
    }
}
