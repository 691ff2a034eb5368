//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`form` drafts, `route` table) so pages depend on
//! small focused models that test without a browser.

pub mod form;
pub mod route;
