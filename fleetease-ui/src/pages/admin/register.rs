//! Operator sign-up

use fleetease::models::{RegisterRequest, Role, OPERATOR_ROLES};
use leptos::*;
use leptos_router::*;

use crate::components::{GuestOnly, InlineLoading};
use crate::format::optional;
use crate::pages::form::{INPUT, LABEL};
use crate::state::{use_auth, use_global};

#[component]
pub fn Register() -> impl IntoView {
    let global = use_global();
    let auth = use_auth();
    let navigate = use_navigate();

    let full_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let role = create_rw_signal(Role::Personel);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let request = RegisterRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            full_name: full_name.get_untracked().trim().to_string(),
            role: Some(role.get_untracked()),
            company_id: None,
            phone: optional(phone.get_untracked()),
        };
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = auth.operator.register(&request).await;
            set_submitting.set(false);
            match result {
                Ok(_) => {
                    global.show_success("Account created");
                    navigate(&global.site_mode.dashboard_path(), Default::default());
                }
                Err(e) => global.show_error(&e.to_string()),
            }
        });
    };

    let text_field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div>
                <label class=LABEL>{label}</label>
                <input
                    type=kind
                    required=true
                    class=INPUT
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <GuestOnly>
            <div class="min-h-screen flex items-center justify-center bg-gray-100">
                <form class="bg-white rounded-xl shadow p-8 w-full max-w-sm space-y-4" on:submit=on_submit.clone()>
                    <h1 class="text-2xl font-bold text-center">"Create an account"</h1>
                    {text_field("Full name", "text", full_name)}
                    {text_field("E-mail", "email", email)}
                    {text_field("Phone", "tel", phone)}
                    {text_field("Password", "password", password)}
                    <div>
                        <label class=LABEL>"Role"</label>
                        <select
                            class=INPUT
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                if let Some(selected) = OPERATOR_ROLES.iter().find(|r| r.as_str() == value) {
                                    role.set(*selected);
                                }
                            }
                        >
                            {OPERATOR_ROLES
                                .iter()
                                .copied()
                                .map(|r| view! {
                                    <option value=r.as_str() selected=move || role.get() == r>{r.label()}</option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2.5 rounded-lg btn-theme font-medium disabled:opacity-60"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { view! { <InlineLoading /> }.into_view() } else { "Register".into_view() }}
                    </button>
                    <p class="text-center text-sm text-gray-500">
                        "Already registered? "
                        <A href=global.site_mode.login_path() class="text-theme">"Sign in"</A>
                    </p>
                </form>
            </div>
        </GuestOnly>
    }
}
