//! Route gates
//!
//! Thin views over `fleetease::access`: every decision comes from the
//! library, these components only render it.

use fleetease::access::{customer_guard, guard, public_guard, AdminRoute, GuardDecision};
use leptos::*;
use leptos_router::*;

use crate::components::layout::AdminShell;
use crate::components::loading::Loading;
use crate::state::{use_auth, use_global};

fn render(decision: GuardDecision, children: &ChildrenFn) -> View {
    match decision {
        GuardDecision::Wait => view! { <Loading /> }.into_view(),
        GuardDecision::Allow => children().into_view(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path /> }.into_view(),
        GuardDecision::Forbidden => view! { <Forbidden /> }.into_view(),
    }
}

/// Admin page: signed-in operator with a role allowed on `route`
#[component]
pub fn Protected(route: AdminRoute, children: ChildrenFn) -> impl IntoView {
    let global = use_global();
    let auth = use_auth();
    let decision = create_memo(move |_| guard(route, &auth.operator.state(), global.site_mode));

    view! {
        {move || match decision.get() {
            GuardDecision::Allow => {
                let children = children.clone();
                view! { <AdminShell>{children()}</AdminShell> }.into_view()
            }
            other => render(other, &children),
        }}
    }
}

/// Operator login and register: signed-in operators go to the dashboard
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let global = use_global();
    let auth = use_auth();
    let decision = create_memo(move |_| public_guard(&auth.operator.state(), global.site_mode));

    view! { {move || render(decision.get(), &children)} }
}

/// Customer account pages
#[component]
pub fn CustomerOnly(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let decision = create_memo(move |_| customer_guard(&auth.customer.state()));

    view! { {move || render(decision.get(), &children)} }
}

#[component]
fn Forbidden() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🚫"</div>
            <h1 class="text-2xl font-bold mb-2">"No access"</h1>
            <p class="text-gray-500 mb-6">"This account cannot use the admin panel."</p>
            <button
                class="px-6 py-3 btn-theme rounded-lg font-medium"
                on:click=move |_| auth.operator.logout()
            >
                "Sign out"
            </button>
        </div>
    }
}
