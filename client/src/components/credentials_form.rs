//! Username/password form shared by the signup and login pages.

use leptos::prelude::*;

use crate::net::api::{AuthAction, DefaultTransport, submit};
use crate::state::form::FormState;
use crate::util::config::ApiConfig;

/// Two inputs, one button, one status line.
///
/// Every click starts its own submission; the button stays enabled and the
/// last reply to arrive decides the status text.
#[component]
pub fn CredentialsForm(action: AuthAction, title: &'static str, submit_label: &'static str) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let form = RwSignal::new(FormState::new(action));

    let on_submit = move |_| {
        let credentials = form.with_untracked(FormState::credentials);
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = submit(&DefaultTransport::default(), &config, action, &credentials).await;
            form.update(|f| f.apply(&result));
        });
    };

    view! {
        <div class="auth-form">
            <h2>{title}</h2>
            <input
                class="auth-form__input"
                type="text"
                placeholder="Username"
                prop:value=move || form.with(|f| f.username().to_owned())
                on:input=move |ev| form.update(|f| f.set_username(event_target_value(&ev)))
            />
            <input
                class="auth-form__input"
                type="password"
                placeholder="Password"
                prop:value=move || form.with(|f| f.password().to_owned())
                on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
            />
            <button class="auth-form__button" on:click=on_submit>
                {submit_label}
            </button>
            <p class="auth-form__message">{move || form.with(|f| f.message().to_owned())}</p>
        </div>
    }
}
