//! # Rollcall (Student Records Console Core)
//!
//! `rollcall` is the core of a student-management console: administrators
//! manage student records, marks, and attendance; students self-register and
//! check their own dashboards against the same backend.
//!
//! The crate is deliberately interface-agnostic. It carries the pieces every
//! front end needs and nothing any particular front end owns:
//!
//! - **Validation** (`validation`): a rule-set engine over plain string
//!   records. Rules run in declared order and the first failure per field
//!   wins, so forms show one message at a time.
//! - **Registration wizard** (`features::register`): the two-step
//!   verify-identity-then-set-password flow shared by first-time
//!   registration and password resets. The state machine does no I/O;
//!   responses are folded back in with tickets so a stale reply can never
//!   overwrite newer state.
//! - **API client** (`http` + `features::*::client`): typed calls over the
//!   backend's JSON envelope, with bearer-token injection from an injected
//!   session store and forced logout on any unauthorized response.
//!
//! ## Sessions
//!
//! Admin and student sessions are independent key sets in a [`session::SessionStore`];
//! presence of the respective token is the only gate the console applies.
//! Hosts inject their own store (browser storage, keychain) and a
//! [`navigator::Navigator`] deciding where an expired session lands.

pub mod cli;
pub mod config;
pub mod errors;
pub mod features;
pub mod http;
pub mod navigator;
pub mod session;
pub mod validation;

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
