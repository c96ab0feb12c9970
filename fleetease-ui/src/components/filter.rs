use leptos::*;

/// Toggle button of a filter bar
#[component]
pub fn FilterButton(
    #[prop(into)]
    label: MaybeSignal<String>,
    #[prop(into)]
    active: Signal<bool>,
    #[prop(into)]
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || if active.get() {
                "px-3 py-1.5 rounded-lg text-sm btn-theme"
            } else {
                "px-3 py-1.5 rounded-lg text-sm bg-white border hover:bg-gray-50"
            }
            on:click=move |_| on_click.call(())
        >
            {move || label.get()}
        </button>
    }
}
