//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::route::Page;
use crate::util::config::ApiConfig;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API configuration and maps `/`, `/signup` and `/dashboard`
/// to their pages. Any other path renders nothing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/credentials-portal.css"/>
        <Title text="Credentials Portal"/>

        <Router>
            <Routes fallback=|| ()>
                <Route path=StaticSegment(Page::Signup.segment()) view=SignupPage/>
                <Route path=StaticSegment(Page::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(Page::Dashboard.segment()) view=DashboardPage/>
            </Routes>
        </Router>
    }
}
