//! Inputs bound to a field of a page controller
//!
//! Getters and setters are plain `fn` pointers so a form is a list of
//! one-line field declarations.

use leptos::*;

pub(crate) const INPUT: &str =
    "w-full border rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500";
pub(crate) const LABEL: &str = "block text-sm font-medium text-gray-600 mb-1";
pub(crate) const BUTTON_SECONDARY: &str = "px-4 py-2 rounded-lg border hover:bg-gray-50";

/// Text-like `<input>` for a string field
pub fn text_input<P: 'static>(
    page: RwSignal<P>,
    label: &'static str,
    kind: &'static str,
    get: fn(&P) -> String,
    set: fn(&mut P, String),
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL>{label}</label>
            <input
                type=kind
                class=INPUT
                prop:value=move || page.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    page.update(|p| set(p, value));
                }
            />
        </div>
    }
}

/// Numeric field, committed on change so partial input like `12.` survives
pub fn number_input<P: 'static>(
    page: RwSignal<P>,
    label: &'static str,
    get: fn(&P) -> String,
    set: fn(&mut P, &str),
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL>{label}</label>
            <input
                type="number"
                class=INPUT
                prop:value=move || page.with(get)
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    page.update(|p| set(p, &value));
                }
            />
        </div>
    }
}

/// Multi-line text field
pub fn text_area<P: 'static>(
    page: RwSignal<P>,
    label: &'static str,
    get: fn(&P) -> String,
    set: fn(&mut P, String),
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL>{label}</label>
            <textarea
                rows="4"
                class=INPUT
                prop:value=move || page.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    page.update(|p| set(p, value));
                }
            />
        </div>
    }
}

/// Checkbox for a boolean field
pub fn checkbox<P: 'static>(
    page: RwSignal<P>,
    label: &'static str,
    get: fn(&P) -> bool,
    set: fn(&mut P, bool),
) -> impl IntoView {
    view! {
        <label class="flex items-center space-x-2 text-sm">
            <input
                type="checkbox"
                prop:checked=move || page.with(get)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    page.update(|p| set(p, checked));
                }
            />
            <span>{label}</span>
        </label>
    }
}

/// `<select>` over a fixed list of enum values
pub fn select<P: 'static, V: Copy + PartialEq + 'static>(
    page: RwSignal<P>,
    label: &'static str,
    options: &'static [V],
    text: fn(&V) -> &'static str,
    get: fn(&P) -> V,
    set: fn(&mut P, V),
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL>{label}</label>
            <select
                class=INPUT
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    if let Ok(index) = value.parse::<usize>() {
                        if let Some(choice) = options.get(index) {
                            page.update(|p| set(p, *choice));
                        }
                    }
                }
            >
                {options
                    .iter()
                    .enumerate()
                    .map(|(index, option)| {
                        let option = *option;
                        view! {
                            <option
                                value=index.to_string()
                                selected=move || page.with(get) == option
                            >
                                {text(&option)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
