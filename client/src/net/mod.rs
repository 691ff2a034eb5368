//! Networking modules for the auth HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the submission path and its transport seam; request and response
//! bodies come from the shared `wire` crate.

pub mod api;
