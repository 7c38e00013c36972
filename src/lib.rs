//! Registration, login, and dashboard controllers for a demo
//! authentication flow, persisted through a string-keyed blob store.
//!
//! The crate is the logic layer only: a host UI constructs an
//! [`core::state::AppState`], calls the controller functions under
//! [`handlers`], renders the notices collected by the
//! [`notify::toast::Notifier`], and performs the [`handlers::Navigation`]
//! values they return.

pub mod core;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod stores;
pub mod utils;
pub mod validation;
