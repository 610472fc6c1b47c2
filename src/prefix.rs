//! IPv6 network prefix arithmetic.
//!
//! This module contains the core address math: parsing CIDR literals,
//! counting subnets between two prefix lengths, and deriving child
//! networks by setting bits inside a 128-bit address.

use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Errors that can occur while parsing an IPv6 CIDR literal
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing prefix length in '{input}': expected address/length")]
    MissingLength { input: String },

    #[error("invalid IPv6 address '{address}'")]
    InvalidAddress { address: String },

    #[error("prefix length '{length}' is not a number between 0 and 128")]
    InvalidLength { length: String },
}

/// An IPv6 network prefix: a 128-bit address plus a prefix length.
///
/// The stored address is always canonical - every bit beyond the prefix
/// length is zero. Construction masks off stray host bits, so
/// `3fff:db8::1/32` and `3fff:db8::/32` produce the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkPrefix {
    addr: u128,
    len: u8,
}

impl NetworkPrefix {
    /// Create a prefix from an address and length, zeroing host bits.
    ///
    /// `len` must be at most 128.
    pub fn new(addr: Ipv6Addr, len: u8) -> Self {
        debug_assert!(len <= 128);
        NetworkPrefix {
            addr: u128::from(addr) & network_mask(len),
            len,
        }
    }

    /// The canonical network address.
    pub fn address(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.addr)
    }

    /// The prefix length (the `/N` in CIDR notation).
    pub fn len(&self) -> u8 {
        self.len
    }

    /// Derive the `child_index`-th network of length `child_len` directly
    /// under this prefix.
    ///
    /// Bit `b` of `child_index` lands at address bit `self.len() + b`,
    /// counting from the most significant bit. Index 0 therefore yields the
    /// parent address itself, re-stamped at `child_len`.
    ///
    /// `child_len` must be greater than `self.len()` and at most 128. The
    /// index is not bounds-checked against `2^(child_len - self.len())`;
    /// callers keep it in range.
    pub fn derive_child(&self, child_index: u128, child_len: u8) -> NetworkPrefix {
        debug_assert!(child_len > self.len && child_len <= 128);

        let mut addr = self.addr;
        for bit in 0..(child_len - self.len) {
            if (child_index >> bit) & 1 == 1 {
                addr |= 1u128 << (127 - (self.len + bit));
            }
        }

        NetworkPrefix {
            addr,
            len: child_len,
        }
    }
}

/// Number of subnets of length `child_len` that fit inside a prefix of
/// length `parent_len`: `2^(child_len - parent_len)`.
///
/// Returns 0 when `child_len <= parent_len` - a level that is not strictly
/// deeper than its parent offers no subdivision, and the callers treat that
/// as a skip rather than an error.
///
/// The count is a `u128`, exact for deltas up to 127 bits. The one
/// degenerate case, a /0 parent with /128 children (delta 128), exceeds the
/// counter and also returns 0.
pub fn available_subnets(parent_len: u8, child_len: u8) -> u128 {
    if child_len <= parent_len {
        return 0;
    }
    1u128
        .checked_shl(u32::from(child_len - parent_len))
        .unwrap_or(0)
}

/// Bit mask covering the first `len` bits of a 128-bit address.
fn network_mask(len: u8) -> u128 {
    if len == 0 {
        0
    } else {
        u128::MAX << (128 - u32::from(len))
    }
}

impl FromStr for NetworkPrefix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (addr_text, len_text) = s.split_once('/').ok_or_else(|| ParseError::MissingLength {
            input: s.to_string(),
        })?;

        let addr: Ipv6Addr = addr_text.parse().map_err(|_| ParseError::InvalidAddress {
            address: addr_text.to_string(),
        })?;

        let len: u8 = len_text
            .parse()
            .ok()
            .filter(|len| *len <= 128)
            .ok_or_else(|| ParseError::InvalidLength {
                length: len_text.to_string(),
            })?;

        Ok(NetworkPrefix::new(addr, len))
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address(), self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_cidr() {
        let prefix: NetworkPrefix = "3fff:db8::/32".parse().unwrap();
        assert_eq!(prefix.len(), 32);
        assert_eq!(prefix.address(), "3fff:db8::".parse::<Ipv6Addr>().unwrap());

        let prefix: NetworkPrefix = "::/0".parse().unwrap();
        assert_eq!(prefix.len(), 0);

        let prefix: NetworkPrefix = "2001:db8::1/128".parse().unwrap();
        assert_eq!(prefix.len(), 128);
    }

    #[test]
    fn test_parse_canonicalizes_host_bits() {
        // Stray host bits beyond the prefix length are masked off
        let prefix: NetworkPrefix = "3fff:db8::1/32".parse().unwrap();
        assert_eq!(prefix.to_string(), "3fff:db8::/32");

        let prefix: NetworkPrefix = "2001:db8:ffff::/24".parse().unwrap();
        assert_eq!(prefix.to_string(), "2001:d00::/24");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(
            "3fff:db8::".parse::<NetworkPrefix>(),
            Err(ParseError::MissingLength {
                input: "3fff:db8::".to_string()
            })
        );
        assert_eq!(
            "not-an-address/32".parse::<NetworkPrefix>(),
            Err(ParseError::InvalidAddress {
                address: "not-an-address".to_string()
            })
        );
        assert_eq!(
            "192.168.0.0/16".parse::<NetworkPrefix>(),
            Err(ParseError::InvalidAddress {
                address: "192.168.0.0".to_string()
            })
        );
        assert_eq!(
            "3fff::/129".parse::<NetworkPrefix>(),
            Err(ParseError::InvalidLength {
                length: "129".to_string()
            })
        );
        assert_eq!(
            "3fff::/abc".parse::<NetworkPrefix>(),
            Err(ParseError::InvalidLength {
                length: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_parse_render_round_trip() {
        for text in ["3fff:db8::/48", "::/0", "2001:db8:100::/40", "ff00::/8"] {
            let prefix: NetworkPrefix = text.parse().unwrap();
            assert_eq!(prefix.to_string(), text);
            assert_eq!(prefix.to_string().parse::<NetworkPrefix>(), Ok(prefix));
        }
    }

    #[test]
    fn test_available_subnets_powers_of_two() {
        assert_eq!(available_subnets(32, 48), 65536);
        assert_eq!(available_subnets(32, 52), 1048576);
        assert_eq!(available_subnets(32, 56), 16777216);
        assert_eq!(available_subnets(32, 64), 1099511627776);
        assert_eq!(available_subnets(40, 48), 256);
        assert_eq!(available_subnets(40, 64), 4294967296);
        assert_eq!(available_subnets(63, 64), 2);
    }

    #[test]
    fn test_available_subnets_no_subdivision() {
        assert_eq!(available_subnets(48, 48), 0);
        assert_eq!(available_subnets(48, 32), 0);
        assert_eq!(available_subnets(128, 128), 0);
    }

    #[test]
    fn test_available_subnets_wide_delta() {
        // Delta of 127 is the widest exact count
        assert_eq!(available_subnets(1, 128), 1u128 << 127);
        // Delta of 128 exceeds the counter and collapses to 0
        assert_eq!(available_subnets(0, 128), 0);
    }

    #[test]
    fn test_derive_child_index_zero_is_parent() {
        let base: NetworkPrefix = "3fff:db8::/32".parse().unwrap();
        let child = base.derive_child(0, 40);
        assert_eq!(child.to_string(), "3fff:db8::/40");
        assert_eq!(child.address(), base.address());
    }

    #[test]
    fn test_derive_child_bit_order() {
        // Bit 0 of the index lands at the first bit after the parent prefix
        let base: NetworkPrefix = "3fff:db8::/32".parse().unwrap();
        assert_eq!(base.derive_child(1, 40).to_string(), "3fff:db8:8000::/40");
        assert_eq!(base.derive_child(2, 40).to_string(), "3fff:db8:4000::/40");
        assert_eq!(base.derive_child(3, 40).to_string(), "3fff:db8:c000::/40");
    }

    #[test]
    fn test_derive_child_distinct_and_canonical() {
        let base: NetworkPrefix = "2001:db8::/48".parse().unwrap();
        let mut seen = std::collections::HashSet::new();
        for index in 0..16u128 {
            let child = base.derive_child(index, 52);
            assert_eq!(child.len(), 52);
            // All host bits beyond the child length are zero
            assert_eq!(child, NetworkPrefix::new(child.address(), 52));
            assert!(seen.insert(child), "duplicate child for index {}", index);
        }
    }

    #[test]
    fn test_network_mask_boundaries() {
        assert_eq!(network_mask(0), 0);
        assert_eq!(network_mask(128), u128::MAX);
        assert_eq!(network_mask(1), 1u128 << 127);
    }
}
