//! Core types and errors for the Dynali dynamic DNS client.
//!
//! This crate provides the foundational types used across the Dynali library:
//!
//! - **Wire types**: the request body, the response [`Envelope`] and its
//!   validation rules
//! - **Records**: [`StatusRecord`] describing a hostname's registration
//! - **Errors**: every failure mode as a [`DynaliError`] value
//!
//! # Example
//!
//! ```rust,ignore
//! use dynali_core::{Result, StatusRecord};
//!
//! fn report(record: &StatusRecord) -> Result<()> {
//!     println!("{} -> {} ({})", record.hostname(), record.ip(), record.state());
//!     println!("expires {}", record.expiry_date());
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/dynali-core/1.0.0")]

mod error;
pub mod types;

pub use error::{
    DynaliError, Result, MISSING_FIELDS_CODE, MISSING_MESSAGE_CODE, MISSING_PAYLOAD_CODE,
};
pub use types::*;
