//! Dynali API operations.

mod hostname;
mod myip;
