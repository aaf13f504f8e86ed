use crate::error::{Error, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::Captures;
use regex::Regex;
use std::fmt::Display;
use std::fmt::Formatter;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// A network address together with its prefix length.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CidrBlock {
    network: IpAddr,
    prefix: u8,
}

impl CidrBlock {
    /// Host bits of `network` are kept as given.
    pub fn new(network: IpAddr, prefix: u8) -> Result<Self> {
        if prefix > max_prefix(&network) {
            return Err(Error::InvalidCidr(format!("{}/{}", network, prefix)));
        }
        Ok(CidrBlock { network, prefix })
    }

    pub fn network(&self) -> IpAddr {
        self.network
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn host_bits(&self) -> u8 {
        max_prefix(&self.network) - self.prefix
    }
}

fn max_prefix(network: &IpAddr) -> u8 {
    match network {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

impl Display for CidrBlock {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

impl FromStr for CidrBlock {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        StdCidrParser.parse_cidr(s)
    }
}

/// Turns CIDR notation into a [`CidrBlock`].
///
/// Any `Fn(&str) -> Result<CidrBlock>` is a parser, so a verifier can be
/// backed by another networking library without wrapping it in a type.
pub trait CidrParser {
    fn parse_cidr(&self, text: &str) -> Result<CidrBlock>;
}

impl<F> CidrParser for F
where
    F: Fn(&str) -> Result<CidrBlock>,
{
    fn parse_cidr(&self, text: &str) -> Result<CidrBlock> {
        self(text)
    }
}

/// Parser for `a.b.c.d/n` and `ipv6/n`. The prefix is required and host bits
/// are cleared from the returned network address.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StdCidrParser;

impl CidrParser for StdCidrParser {
    fn parse_cidr(&self, text: &str) -> Result<CidrBlock> {
        lazy_static! {
            static ref RE: Regex = Regex::new(
                r"^(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])/([0-9]|[12][0-9]|3[012])$"
            )
            .expect("Not possible");
        }
        fn capture<T: FromStr>(ind: usize, v: &Captures, text: &str) -> Result<T> {
            v.get(ind)
                .and_then(|r| r.as_str().parse::<T>().ok())
                .ok_or_else(|| Error::InvalidCidr(text.to_owned()))
        }

        if let Some(ref v) = RE.captures(text) {
            let ip = Ipv4Addr::new(
                capture(1, v, text)?,
                capture(2, v, text)?,
                capture(3, v, text)?,
                capture(4, v, text)?,
            );
            let prefix: u8 = capture(5, v, text)?;
            let net = u32::from(ip) & u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
            return CidrBlock::new(IpAddr::V4(Ipv4Addr::from(net)), prefix);
        }

        parse_ipv6(text).ok_or_else(|| {
            debug!("rejected CIDR block {:?}", text);
            Error::InvalidCidr(text.to_owned())
        })
    }
}

fn parse_ipv6(text: &str) -> Option<CidrBlock> {
    let (addr, prefix) = text.split_once('/')?;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let ip = Ipv6Addr::from_str(addr).ok()?;
    let prefix = prefix.parse::<u8>().ok().filter(|&p| p <= 128)?;
    let net = u128::from(ip) & u128::MAX.checked_shl(128 - u32::from(prefix)).unwrap_or(0);
    CidrBlock::new(IpAddr::V6(Ipv6Addr::from(net)), prefix).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn v4(a: u8, b: u8, c: u8, d: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(a, b, c, d))
    }

    #[test]
    fn some_tests() {
        let block: CidrBlock = "192.168.1.0/24".parse().unwrap();
        assert_eq!(v4(192, 168, 1, 0), block.network());
        assert_eq!(24, block.prefix());
        assert_eq!(8, block.host_bits());
        assert_eq!("192.168.1.0/24", block.to_string());

        assert_eq!("0.0.0.0/0", "0.0.0.0/0".parse::<CidrBlock>().unwrap().to_string());
        assert_eq!(
            "255.255.255.255/32",
            "255.255.255.255/32".parse::<CidrBlock>().unwrap().to_string()
        );
    }

    #[test]
    fn host_bits_are_cleared() {
        let block: CidrBlock = "10.1.2.3/8".parse().unwrap();
        assert_eq!("10.0.0.0/8", block.to_string());
        let block: CidrBlock = "10.1.2.3/0".parse().unwrap();
        assert_eq!("0.0.0.0/0", block.to_string());
        let block: CidrBlock = "2001:db8::1/32".parse().unwrap();
        assert_eq!("2001:db8::/32", block.to_string());
    }

    #[test]
    fn rejects_malformed() {
        for s in &[
            "not a cidr",
            "192.168.1.0",
            "192.168.1.0/",
            "192.168.1.0/33",
            "192.168.1.0/+8",
            "256.0.0.0/8",
            "1.2.3/8",
            "192.168.01.0/24",
            "10.0.0.00/8",
            "010.0.0.0/8",
            "::1/129",
            "::1/",
            "/24",
            "",
        ] {
            match s.parse::<CidrBlock>() {
                Err(Error::InvalidCidr(text)) => assert_eq!(*s, text),
                other => panic!("{:?} parsed as {:?}", s, other),
            }
        }
    }

    #[test]
    fn octet_boundaries() {
        for s in &["0.9.10.99/32", "100.199.200.249/32", "250.255.1.0/32"] {
            assert_eq!(*s, s.parse::<CidrBlock>().unwrap().to_string());
        }
    }

    #[test]
    fn new_checks_prefix_against_family() {
        assert!(CidrBlock::new(v4(10, 0, 0, 0), 32).is_ok());
        assert_eq!(
            Err(Error::InvalidCidr("10.0.0.0/33".to_owned())),
            CidrBlock::new(v4(10, 0, 0, 0), 33)
        );
        assert!(CidrBlock::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 128).is_ok());
        // keeps host bits as given
        assert_eq!(v4(10, 9, 8, 7), CidrBlock::new(v4(10, 9, 8, 7), 8).unwrap().network());
    }

    #[test]
    fn closures_are_parsers() {
        let fixed = |_: &str| CidrBlock::new(v4(172, 16, 0, 0), 12);
        assert_eq!(12, fixed.parse_cidr("anything").unwrap().prefix());
    }

    #[quickcheck]
    fn display_parse(ip: u32, prefix: u8) -> bool {
        let prefix = prefix % 33;
        let block = match format!("{}/{}", Ipv4Addr::from(ip), prefix).parse::<CidrBlock>() {
            Ok(block) => block,
            Err(_) => return false,
        };
        block.to_string().parse::<CidrBlock>() == Ok(block) && block.prefix() == prefix
    }
}
