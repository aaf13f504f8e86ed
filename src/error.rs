//! Error types for address parsing and range checks

use std::net::IpAddr;
use thiserror::Error;

/// Errors returned by the codec, the range computation and the verifier.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("cidr: invalid CIDR block: {0}")]
    InvalidCidr(String),

    /// The codec error that caused it is kept as the source.
    #[error("cidr: invalid IP address")]
    InvalidIp {
        #[source]
        source: Box<Error>,
    },

    #[error("cidr: invalid IP address format")]
    InvalidIpFormat,

    #[error("cidr: invalid byte value")]
    InvalidByteValue,

    #[error("cidr: {0} is not an IPv4 network")]
    NotIpv4(IpAddr),
}

impl Error {
    pub(crate) fn invalid_ip(source: Error) -> Self {
        Error::InvalidIp {
            source: Box::new(source),
        }
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
