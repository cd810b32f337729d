//! Rust client for the Dynali dynamic DNS service.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dynali::{DynaliClient, AUTODETECT_IP};
//!
//! #[tokio::main]
//! async fn main() -> dynali::Result<()> {
//!     let client = DynaliClient::new()?;
//!
//!     // Public IP as seen by Dynali
//!     println!("My IP: {}", client.my_ip().await?);
//!
//!     // Point the hostname at the detected address
//!     client
//!         .update("home.dynali.net", "alice", "secret", AUTODETECT_IP)
//!         .await?;
//!
//!     // Check the registration
//!     let status = client.status("home.dynali.net", "alice", "secret").await?;
//!     println!("{} is {}, expires {}", status.hostname(), status.state(), status.expiry_date());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/dynali/1.0.0")]

// Re-export core types
pub use dynali_core::*;

// Re-export client
pub use dynali_client::{
    ClientConfig, DynaliClient, DynaliClientBuilder, Transport, DEFAULT_ENDPOINT,
    DEFAULT_TIMEOUT_MS,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
