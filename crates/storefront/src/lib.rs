//! Rocketshoes Storefront library.
//!
//! This crate provides the catalog page as a library, allowing it to be
//! tested and reused. The binary in `main.rs` only wires configuration,
//! tracing, Sentry and the HTTP listener around [`routes::app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod routes;
pub mod state;
pub mod view;
