//! Dashboard page at `/dashboard`.
//!
//! Static landing view. It is not guarded: reaching it does not require a
//! prior login.

use leptos::prelude::*;

use crate::state::route::Page;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
            </header>
            <nav class="dashboard-page__nav">
                <a href=Page::Login.path()>"Log in"</a>
                " | "
                <a href=Page::Signup.path()>"Sign up"</a>
            </nav>
        </div>
    }
}
