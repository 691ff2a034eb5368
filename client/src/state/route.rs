//! Route table for the three top-level pages.
//!
//! The Leptos router in `app.rs` takes its segments from [`Page::segment`];
//! links use [`Page::path`]. Matching is exact, so `/signup/` is not a page.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// A top-level page. There are no guards: any page is reachable by URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
    Dashboard,
}

impl Page {
    pub const ALL: [Self; 3] = [Self::Login, Self::Signup, Self::Dashboard];

    /// Router segment for this page (`""` is the root).
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Login => "",
            Self::Signup => "signup",
            Self::Dashboard => "dashboard",
        }
    }

    /// Absolute path, suitable for links.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
        }
    }
}
