//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped composition and delegates form behavior to
//! `components::credentials_form`.

pub mod dashboard;
pub mod login;
pub mod signup;
