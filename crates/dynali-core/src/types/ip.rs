use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{DynaliError, Result};

/// Address to publish for a hostname
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum IpTarget {
    /// Ask the service for the caller's public IP first
    #[default]
    Autodetect,
    /// Use this address as given
    Address(String),
}

/// Sentinel asking `update` to detect the public IP
pub const AUTODETECT_IP: IpTarget = IpTarget::Autodetect;

impl IpTarget {
    /// Returns true for the autodetect sentinel
    #[must_use]
    pub const fn is_autodetect(&self) -> bool {
        matches!(self, Self::Autodetect)
    }
}

impl From<&str> for IpTarget {
    fn from(s: &str) -> Self {
        Self::Address(s.to_string())
    }
}

impl From<String> for IpTarget {
    fn from(s: String) -> Self {
        Self::Address(s)
    }
}

impl From<IpAddr> for IpTarget {
    fn from(ip: IpAddr) -> Self {
        Self::Address(ip.to_string())
    }
}

impl From<Ipv4Addr> for IpTarget {
    fn from(ip: Ipv4Addr) -> Self {
        Self::Address(ip.to_string())
    }
}

impl From<Ipv6Addr> for IpTarget {
    fn from(ip: Ipv6Addr) -> Self {
        Self::Address(ip.to_string())
    }
}

impl std::fmt::Display for IpTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Autodetect => write!(f, "autodetect"),
            Self::Address(ip) => write!(f, "{ip}"),
        }
    }
}

/// Check that `ip` is a literal IPv4 or IPv6 address
pub fn validate_ip(ip: &str) -> Result<IpAddr> {
    ip.parse()
        .map_err(|_| DynaliError::InvalidArgument(format!("Invalid IP. Provided: `{ip}`.")))
}
