//! Signup page at `/signup`.

use leptos::prelude::*;

use crate::components::credentials_form::CredentialsForm;
use crate::net::api::AuthAction;
use crate::state::route::Page;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="signup-page">
            <CredentialsForm action=AuthAction::Signup title="Sign Up" submit_label="Sign Up"/>
            <p class="auth-page__alt">
                "Already registered? "
                <a href=Page::Login.path()>"Log in"</a>
            </p>
        </div>
    }
}
