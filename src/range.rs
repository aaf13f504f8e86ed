//! Inclusive numeric address ranges covered by IPv4 CIDR blocks.

use crate::block::CidrBlock;
use crate::codec::{octets_to_u32, u32_to_ipv4_string};
use crate::error::{Error, Result};
use log::debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::net::{IpAddr, Ipv4Addr};

/// First and last address of a block, both inclusive, with `start <= end`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AddressRange {
    start: u32,
    end: u32,
}

impl AddressRange {
    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn first_ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.start)
    }

    pub fn last_ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.end)
    }

    pub fn contains(&self, ip: u32) -> bool {
        self.start <= ip && ip <= self.end
    }

    /// Number of addresses in the range; `2^32` for `0.0.0.0/0`.
    pub fn size(&self) -> u64 {
        u64::from(self.end - self.start) + 1
    }
}

impl Display for AddressRange {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            u32_to_ipv4_string(self.start),
            u32_to_ipv4_string(self.end)
        )
    }
}

impl From<AddressRange> for (u32, u32) {
    fn from(range: AddressRange) -> Self {
        (range.start, range.end)
    }
}

/// All host bits set: `(1 << host_bits) - 1`. Anything from 32 host bits up
/// gives `u32::MAX`.
pub fn host_mask(host_bits: u8) -> u32 {
    ((1u64 << host_bits.min(32)) - 1) as u32
}

/// Computes the addresses covered by an IPv4 block.
///
/// `start` is the network address with its host bits cleared, `end` is
/// `start | host_mask`. An IPv4-mapped IPv6 block (`::ffff:a.b.c.d/n`, n at
/// least 96) counts as IPv4; any other network fails with
/// [`Error::NotIpv4`].
pub fn ipv4_to_range(block: &CidrBlock) -> Result<AddressRange> {
    let network = match block.network() {
        IpAddr::V4(network) => network,
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(network) if block.prefix() >= 96 => network,
            _ => {
                debug!("{} has no IPv4 range", block);
                return Err(Error::NotIpv4(IpAddr::V6(v6)));
            }
        },
    };
    let mask = host_mask(block.host_bits());
    let start = octets_to_u32(network.octets()) & !mask;
    Ok(AddressRange {
        start,
        end: start | mask,
    })
}

impl CidrBlock {
    pub fn to_range(&self) -> Result<AddressRange> {
        ipv4_to_range(self)
    }
}
