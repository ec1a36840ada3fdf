#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

//! HTTP client and page flows for the Tripper travel-booking app.
//!
//! Everything here is target-agnostic: the browser app drives it from
//! `spawn_local`, native tests drive it from tokio.

pub mod api;
pub mod error;
pub mod flows;
pub mod scope;

pub use api::{TravelApi, TravelClient};
pub use error::ClientError;
pub use scope::TaskScope;
