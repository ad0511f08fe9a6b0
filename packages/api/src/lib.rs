//! # API crate — the login service boundary of the sign-in portal
//!
//! This crate holds everything the portal knows about the external login service:
//! the JSON shapes exchanged with it, the endpoints it lives at, and the client
//! that talks to it. It has no UI dependency, so the ui crate and the tests can
//! both build on it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`LoginService`] trait and its reqwest implementation, [`HttpLoginService`] |
//! | [`config`] | [`PortalConfig`]: login endpoint, dashboard origins, registration link |
//! | [`error`] | [`LoginError`] and the generic failure message |
//! | [`models`] | [`Role`], [`LoginRequest`], [`LoginResponse`], [`LoginErrorBody`] |

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{HttpLoginService, LoginService};
pub use config::PortalConfig;
pub use error::{LoginError, UNEXPECTED_ERROR};
pub use models::{LoginErrorBody, LoginRequest, LoginResponse, Role};
