//! Membership checks of an address against a CIDR block, both given as text.

use crate::block::{CidrParser, StdCidrParser};
use crate::codec::single_ipv4_to_u32;
use crate::error::{Error, Result};
use crate::range::ipv4_to_range;
use log::{debug, trace};

/// How the verifier reports an address that fails to parse: `Collapsed`
/// wraps the codec error in [`Error::InvalidIp`], `Preserved` returns it as is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorDetail {
    Collapsed,
    Preserved,
}

impl Default for ErrorDetail {
    fn default() -> Self {
        ErrorDetail::Collapsed
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VerifierConfig {
    pub error_detail: ErrorDetail,
}

#[derive(Clone, Debug)]
pub struct RangeVerifier<P = StdCidrParser> {
    parser: P,
    config: VerifierConfig,
}

impl Default for RangeVerifier<StdCidrParser> {
    fn default() -> Self {
        RangeVerifier::new(StdCidrParser)
    }
}

impl<P: CidrParser> RangeVerifier<P> {
    pub fn new(parser: P) -> Self {
        Self::with_config(parser, VerifierConfig::default())
    }

    pub fn with_config(parser: P, config: VerifierConfig) -> Self {
        RangeVerifier { parser, config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Any parser failure is reported as [`Error::InvalidCidr`].
    pub fn verify(&self, cidr: &str, ip: &str) -> Result<bool> {
        let block = self.parser.parse_cidr(cidr).map_err(|e| match e {
            Error::InvalidCidr(text) => Error::InvalidCidr(text),
            other => Error::InvalidCidr(format!("{}: {}", cidr, other)),
        })?;
        let range = ipv4_to_range(&block)?;
        let ip_num = single_ipv4_to_u32(ip).map_err(|e| {
            debug!("rejected address {:?}: {}", ip, e);
            match self.config.error_detail {
                ErrorDetail::Collapsed => Error::invalid_ip(e),
                ErrorDetail::Preserved => e,
            }
        })?;
        let within = range.contains(ip_num);
        trace!("{} in {} ({}): {}", ip, block, range, within);
        Ok(within)
    }
}

/// Checks `ip` against `cidr` with the default parser and configuration.
pub fn ipv4_range_verify(cidr: &str, ip: &str) -> Result<bool> {
    RangeVerifier::<StdCidrParser>::default().verify(cidr, ip)
}
