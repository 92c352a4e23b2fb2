//! HTTP gateway for the spellserve suggestion service.
//!
//! Exposes the endpoint catalog at `/` and spelling suggestions at
//! `/suggest?q=<word>`, backed by a single dictionary loaded at startup.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
