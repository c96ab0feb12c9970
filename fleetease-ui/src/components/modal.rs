//! Dialog overlay used by the create/edit forms

use leptos::*;

#[component]
pub fn Modal(
    #[prop(into)]
    title: MaybeSignal<String>,
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/50">
                <div class="bg-white rounded-xl shadow-xl w-full max-w-lg max-h-[90vh] overflow-y-auto">
                    <div class="flex items-center justify-between px-6 py-4 border-b">
                        <h2 class="text-lg font-semibold">
                            {let title = title.clone(); move || title.get()}
                        </h2>
                        <button
                            class="text-gray-400 hover:text-gray-600"
                            on:click=move |_| on_close.call(())
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="p-6">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
