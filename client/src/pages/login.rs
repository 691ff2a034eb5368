//! Login page at `/`.

use leptos::prelude::*;

use crate::components::credentials_form::CredentialsForm;
use crate::net::api::AuthAction;
use crate::state::route::Page;

/// Login page. Shows the server's reply and nothing more: no token is kept
/// and there is no redirect on success.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <CredentialsForm action=AuthAction::Login title="Log In" submit_label="Log In"/>
            <p class="auth-page__alt">
                "No account yet? "
                <a href=Page::Signup.path()>"Sign up"</a>
            </p>
        </div>
    }
}
