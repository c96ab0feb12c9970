//! Loading Component

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline loading spinner for buttons
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Placeholder for an empty list
#[component]
pub fn EmptyState(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="text-center text-gray-500 py-12">{message}</div>
    }
}
