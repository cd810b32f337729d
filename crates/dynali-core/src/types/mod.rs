mod credentials;
mod ip;
mod status;
mod wire;

pub use credentials::*;
pub use ip::*;
pub use status::*;
pub use wire::*;
