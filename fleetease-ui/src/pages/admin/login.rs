//! Operator sign-in

use leptos::*;
use leptos_router::*;

use crate::components::{GuestOnly, InlineLoading};
use crate::pages::form::{INPUT, LABEL};
use crate::state::{use_auth, use_global};

#[component]
pub fn Login() -> impl IntoView {
    let global = use_global();
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = auth
                .operator
                .login(&email.get_untracked(), &password.get_untracked())
                .await;
            set_submitting.set(false);
            match result {
                Ok(user) => {
                    global.show_success(&format!("Welcome, {}", user.full_name));
                    navigate(&global.site_mode.dashboard_path(), Default::default());
                }
                Err(e) => global.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <GuestOnly>
            <div class="min-h-screen flex items-center justify-center bg-gray-100">
                <form class="bg-white rounded-xl shadow p-8 w-full max-w-sm space-y-4" on:submit=on_submit.clone()>
                    <h1 class="text-2xl font-bold text-center">"FleetEase"</h1>
                    <p class="text-center text-gray-500 text-sm">"Sign in to the admin panel"</p>
                    <div>
                        <label class=LABEL>"E-mail"</label>
                        <input
                            type="email"
                            required=true
                            class=INPUT
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class=LABEL>"Password"</label>
                        <input
                            type="password"
                            required=true
                            class=INPUT
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2.5 rounded-lg btn-theme font-medium disabled:opacity-60"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { view! { <InlineLoading /> }.into_view() } else { "Sign in".into_view() }}
                    </button>
                    <p class="text-center text-sm text-gray-500">
                        "No account yet? "
                        <A href=global.site_mode.register_path() class="text-theme">"Register"</A>
                    </p>
                </form>
            </div>
        </GuestOnly>
    }
}
