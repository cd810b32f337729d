//! HTTP client for the Dynali dynamic DNS API.
//!
//! This crate provides the main [`DynaliClient`] for interacting with Dynali:
//! [`my_ip`](DynaliClient::my_ip), [`update`](DynaliClient::update) and
//! [`status`](DynaliClient::status).

#![doc(html_root_url = "https://docs.rs/dynali-client/1.0.0")]

mod api;
mod client;
mod config;
mod transport;

pub use client::{DynaliClient, DynaliClientBuilder};
pub use config::*;
pub use dynali_core::{DynaliError, Result};
pub use transport::Transport;
