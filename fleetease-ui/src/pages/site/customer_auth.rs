//! Customer sign-in and sign-up for the booking site

use fleetease::access::public_paths;
use fleetease::auth::CustomerSignup;
use leptos::*;
use leptos_router::*;

use crate::components::{InlineLoading, SiteLayout};
use crate::pages::form::{text_input, INPUT, LABEL};
use crate::state::{use_auth, use_global};

#[component]
pub fn CustomerLogin() -> impl IntoView {
    let global = use_global();
    let customer = use_auth().customer;
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = customer
                .login(&email.get_untracked(), &password.get_untracked())
                .await;
            set_submitting.set(false);
            match result {
                Ok(user) => {
                    global.show_success(&format!("Welcome, {}", user.full_name));
                    navigate(public_paths::ACCOUNT, Default::default());
                }
                Err(e) => global.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <SiteLayout>
            <div class="container mx-auto px-4 py-16 flex justify-center">
                <form class="bg-white rounded-xl shadow-sm p-8 w-full max-w-sm space-y-4" on:submit=on_submit>
                    <h1 class="text-2xl font-bold text-center">"Sign in"</h1>
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
                        "New here? "
                        <A href=public_paths::CUSTOMER_REGISTER class="text-theme">"Create an account"</A>
                    </p>
                </form>
            </div>
        </SiteLayout>
    }
}

#[component]
pub fn CustomerRegister() -> impl IntoView {
    let global = use_global();
    let customer = use_auth().customer;
    let navigate = use_navigate();

    let form = create_rw_signal(CustomerSignup::default());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let signup = form.get_untracked();
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = customer.register_customer(&signup).await;
            set_submitting.set(false);
            match result {
                Ok(_) => {
                    global.show_success("Account created");
                    navigate(public_paths::ACCOUNT, Default::default());
                }
                Err(e) => global.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <SiteLayout>
            <div class="container mx-auto px-4 py-16 flex justify-center">
                <form class="bg-white rounded-xl shadow-sm p-8 w-full max-w-md space-y-4" on:submit=on_submit>
                    <h1 class="text-2xl font-bold text-center">"Create an account"</h1>
                    {text_input(form, "Full name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                    {text_input(form, "E-mail", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {text_input(form, "Phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                    {text_input(form, "National ID (TC)", "text", |f| f.tc_no.clone(), |f, v| f.tc_no = v)}
                    {text_input(form, "Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    <button
                        type="submit"
                        class="w-full py-2.5 rounded-lg btn-theme font-medium disabled:opacity-60"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { view! { <InlineLoading /> }.into_view() } else { "Register".into_view() }}
                    </button>
                    <p class="text-center text-sm text-gray-500">
                        "Already registered? "
                        <A href=public_paths::CUSTOMER_LOGIN class="text-theme">"Sign in"</A>
                    </p>
                </form>
            </div>
        </SiteLayout>
    }
}
