//! Convert IPv4 CIDR blocks to numeric address ranges and check whether an
//! address falls inside one.
//!
//! ```
//! use cidr_range::{ipv4_range_verify, ipv4_to_range, single_ipv4_to_u32, CidrBlock};
//!
//! let block: CidrBlock = "192.168.1.0/24".parse()?;
//! let range = ipv4_to_range(&block)?;
//! assert_eq!((0xC0A8_0100, 0xC0A8_01FF), (range.start(), range.end()));
//!
//! assert!(ipv4_range_verify("192.168.1.0/24", "192.168.1.134")?);
//! assert!(!ipv4_range_verify("192.168.1.0/24", "192.168.2.10")?);
//! assert_eq!(0xC0A8_0101, single_ipv4_to_u32("192.168.1.1")?);
//! # Ok::<(), cidr_range::Error>(())
//! ```
//!
//! CIDR text is parsed by a [`CidrParser`]. [`StdCidrParser`] is used by
//! default; a [`RangeVerifier`] can be built over any other parser, including
//! a plain closure.

mod block;
mod codec;
mod error;
mod range;
mod verify;

pub use block::{CidrBlock, CidrParser, StdCidrParser};
pub use codec::{octets_to_u32, single_ipv4_to_u32, u32_to_ipv4_string};
pub use error::{Error, Result};
pub use range::{host_mask, ipv4_to_range, AddressRange};
pub use verify::{ipv4_range_verify, ErrorDetail, RangeVerifier, VerifierConfig};
