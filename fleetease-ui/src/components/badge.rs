use leptos::*;

/// Coloured status pill
#[component]
pub fn Badge(
    #[prop(into)]
    label: String,
    /// Tailwind colour family, e.g. `green`
    #[prop(default = "gray")]
    color: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-{color}-100 text-{color}-700"
        )>
            {label}
        </span>
    }
}
