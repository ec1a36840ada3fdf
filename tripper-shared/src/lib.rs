#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

//! Models, session storage, auth-gate policy, and configuration shared by the
//! Tripper client, web app, and server.

pub mod config;
pub mod gate;
pub mod models;
pub mod session;
