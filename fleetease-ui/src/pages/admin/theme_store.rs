//! Theme store and public site settings

use fleetease::access::AdminRoute;
use fleetease::models::PublicTheme;
use fleetease::panel::ThemeStorePage;
use leptos::*;
use serde_json::json;

use crate::components::{Badge, Loading, Protected};
use crate::format::optional;
use crate::pages::form::{checkbox, text_input, BUTTON_SECONDARY, INPUT, LABEL};
use crate::state::{drive, use_auth, use_global};

/// Social links are edited by settings key
const SOCIAL_FIELDS: [(&str, &str); 3] = [
    ("social_facebook", "Facebook"),
    ("social_instagram", "Instagram"),
    ("social_twitter", "Twitter"),
];

fn social_value(page: &ThemeStorePage, key: &str) -> String {
    let settings = &page.settings;
    match key {
        "social_facebook" => settings.social_facebook.clone(),
        "social_instagram" => settings.social_instagram.clone(),
        "social_twitter" => settings.social_twitter.clone(),
        _ => None,
    }
    .unwrap_or_default()
}

/// What the storefront will render once the saved settings are live
fn public_theme(page: &ThemeStorePage) -> PublicTheme {
    PublicTheme {
        settings: page.settings.clone(),
        theme: page.active_theme().cloned(),
    }
}

#[component]
pub fn ThemeStore() -> impl IntoView {
    view! {
        <Protected route=AdminRoute::ThemeStore>
            <ThemeStoreContent />
        </Protected>
    }
}

#[component]
fn ThemeStoreContent() -> impl IntoView {
    let global = use_global();
    let api = use_auth().operator.api();
    let page = create_rw_signal(ThemeStorePage {
        loading: true,
        ..Default::default()
    });
    let saving = create_rw_signal(false);
    let new_slide = create_rw_signal(String::new());

    let load_api = api.clone();
    drive(page, move |p| {
        Box::pin(async move {
            p.load(&load_api, &global).await;
        })
    });

    let activate_api = api.clone();
    let activate = move |theme_id: String| {
        let api = activate_api.clone();
        saving.set(true);
        drive(page, move |p| {
            Box::pin(async move {
                if p.activate(&api, &global, &theme_id).await {
                    global.set_public_theme(public_theme(p));
                }
                saving.set(false);
            })
        });
    };

    let save = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        saving.set(true);
        drive(page, move |p| {
            Box::pin(async move {
                if p.save(&api, &global).await {
                    global.set_public_theme(public_theme(p));
                }
                saving.set(false);
            })
        });
    };

    let add_slide = move |_| {
        let url = new_slide.get_untracked();
        page.update(|p| p.add_slide(&url));
        new_slide.set(String::new());
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Theme store"</h1>
                <p class="text-gray-500 mt-1">"Choose how your public booking site looks"</p>
            </div>

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <Loading /> }>
                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
                    {
                        let activate = activate.clone();
                        move || page.with(|p| p.themes.clone()).into_iter().map(|theme| {
                            let activate = activate.clone();
                            let id = theme.id.clone();
                            let active_id = theme.id.clone();
                            let is_active = move || page.with(|p| p.is_active(&active_id));
                            let highlighted = is_active.clone();
                            let swatches = [
                                theme.colors.primary.clone(),
                                theme.colors.secondary.clone(),
                                theme.colors.accent.clone(),
                                theme.colors.background.clone(),
                            ];
                            view! {
                                <div class=move || if highlighted() {
                                    "bg-white rounded-xl shadow-sm overflow-hidden ring-2 ring-blue-500"
                                } else {
                                    "bg-white rounded-xl shadow-sm overflow-hidden"
                                }>
                                    {theme.preview_image.clone().map(|src| view! {
                                        <img src=src alt="" class="w-full h-40 object-cover" />
                                    })}
                                    <div class="p-4 space-y-3">
                                        <div class="flex items-center justify-between">
                                            <h3 class="font-semibold">{theme.name.clone()}</h3>
                                            {theme.is_premium.then(|| view! { <Badge label="Premium" color="yellow" /> })}
                                        </div>
                                        <p class="text-sm text-gray-500">{theme.description.clone()}</p>
                                        <div class="flex space-x-2">
                                            {swatches.into_iter().map(|color| view! {
                                                <span class="w-6 h-6 rounded-full border" style=format!("background-color: {}", color)></span>
                                            }).collect_view()}
                                        </div>
                                        <Show
                                            when=is_active.clone()
                                            fallback={
                                                let activate = activate.clone();
                                                let id = id.clone();
                                                move || {
                                                    let activate = activate.clone();
                                                    let id = id.clone();
                                                    view! {
                                                        <button
                                                            class="w-full px-4 py-2 rounded-lg btn-theme font-medium disabled:opacity-50"
                                                            disabled=move || saving.get()
                                                            on:click=move |_| activate(id.clone())
                                                        >
                                                            "Activate"
                                                        </button>
                                                    }
                                                }
                                            }
                                        >
                                            <p class="text-center text-sm font-medium text-green-600">"✓ Active theme"</p>
                                        </Show>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                </div>

                <form class="bg-white rounded-xl shadow-sm p-6 space-y-6" on:submit=save.clone()>
                    <h2 class="text-xl font-semibold">"Site settings"</h2>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {text_input(page, "Hero title", "text",
                            |p| p.settings.custom_hero_title.clone().unwrap_or_default(),
                            |p, v| p.settings.custom_hero_title = optional(v))}
                        {text_input(page, "Hero subtitle", "text",
                            |p| p.settings.custom_hero_subtitle.clone().unwrap_or_default(),
                            |p, v| p.settings.custom_hero_subtitle = optional(v))}
                        {text_input(page, "Logo URL", "url",
                            |p| p.settings.custom_logo_url.clone().unwrap_or_default(),
                            |p, v| p.settings.custom_logo_url = optional(v))}
                        {text_input(page, "Contact phone", "tel",
                            |p| p.settings.contact_phone.clone().unwrap_or_default(),
                            |p, v| p.settings.contact_phone = optional(v))}
                        {text_input(page, "Contact email", "email",
                            |p| p.settings.contact_email.clone().unwrap_or_default(),
                            |p, v| p.settings.contact_email = optional(v))}
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {SOCIAL_FIELDS.iter().copied().map(|(key, label)| view! {
                            <div>
                                <label class=LABEL>{label}</label>
                                <input
                                    type="url"
                                    class=INPUT
                                    prop:value=move || page.with(|p| social_value(p, key))
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        let value = optional(value);
                                        page.update(|p| {
                                            if let Err(e) = p.edit(&json!({ key: value })) {
                                                global.show_error(&e.to_string());
                                            }
                                        });
                                    }
                                />
                            </div>
                        }).collect_view()}
                    </div>

                    <div class="flex flex-wrap gap-6">
                        {checkbox(page, "Show statistics", |p| p.settings.show_stats, |p, v| p.settings.show_stats = v)}
                        {checkbox(page, "Show features", |p| p.settings.show_features, |p, v| p.settings.show_features = v)}
                        {checkbox(page, "Show popular vehicles", |p| p.settings.show_popular_vehicles,
                            |p, v| p.settings.show_popular_vehicles = v)}
                    </div>

                    <div class="space-y-3">
                        <h3 class="font-semibold">"Hero slides"</h3>
                        {move || page.with(|p| p.settings.slider_images.clone()).into_iter().enumerate().map(|(index, slide)| {
                            let subtitle = slide.subtitle.clone();
                            view! {
                                <div class="flex items-center gap-3 border rounded-lg p-3">
                                    <img src=slide.url.clone() alt="" class="w-24 h-14 object-cover rounded" />
                                    <input
                                        type="text"
                                        placeholder="Title"
                                        class=INPUT
                                        prop:value=slide.title.clone().unwrap_or_default()
                                        on:change=move |ev| {
                                            let title = Some(event_target_value(&ev));
                                            let subtitle = subtitle.clone();
                                            page.update(|p| p.update_slide(index, title, subtitle));
                                        }
                                    />
                                    <input
                                        type="text"
                                        placeholder="Subtitle"
                                        class=INPUT
                                        prop:value=slide.subtitle.clone().unwrap_or_default()
                                        on:change={
                                            let title = slide.title.clone();
                                            move |ev| {
                                                let subtitle = Some(event_target_value(&ev));
                                                let title = title.clone();
                                                page.update(|p| p.update_slide(index, title, subtitle));
                                            }
                                        }
                                    />
                                    <button
                                        type="button"
                                        class="text-red-600 hover:underline text-sm"
                                        on:click=move |_| page.update(|p| p.remove_slide(index))
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        }).collect_view()}
                        <div class="flex gap-2">
                            <input
                                type="url"
                                placeholder="Image URL"
                                class=INPUT
                                prop:value=move || new_slide.get()
                                on:input=move |ev| new_slide.set(event_target_value(&ev))
                            />
                            <button type="button" class=BUTTON_SECONDARY on:click=add_slide>"Add slide"</button>
                        </div>
                    </div>

                    <div class="flex justify-end">
                        <button
                            type="submit"
                            class="px-6 py-2 rounded-lg btn-theme font-medium disabled:opacity-50"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Saving..." } else { "Save settings" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
