//! Dotted-decimal IPv4 text to and from its `u32` form.

use crate::error::{Error, Result};
use log::trace;

/// Parses `"192.168.1.1"` into `0xC0A8_0101`, most significant octet first.
pub fn single_ipv4_to_u32(text: &str) -> Result<u32> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        trace!("{:?} has {} components", text, parts.len());
        return Err(Error::InvalidIpFormat);
    }
    parts
        .iter()
        .try_fold(0u32, |acc, part| -> Result<u32> {
            Ok((acc << 8) | u32::from(parse_octet(part)?))
        })
}

fn parse_octet(part: &str) -> Result<u8> {
    // u8::from_str would let a leading '+' through
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        trace!("octet {:?} is not an unsigned decimal", part);
        return Err(Error::InvalidByteValue);
    }
    part.parse::<u8>().map_err(|_| {
        trace!("octet {:?} is out of range", part);
        Error::InvalidByteValue
    })
}

pub fn octets_to_u32(octets: [u8; 4]) -> u32 {
    octets
        .iter()
        .fold(0u32, |acc, &octet| (acc << 8) | u32::from(octet))
}

pub fn u32_to_ipv4_string(value: u32) -> String {
    let a1 = value & 0xFF;
    let a2 = (value >> 8) & 0xFF;
    let a3 = (value >> 16) & 0xFF;
    let a4 = (value >> 24) & 0xFF;
    format!("{}.{}.{}.{}", a4, a3, a2, a1)
}
