//! Ethernet hardware addresses.

use core::fmt;
use core::str::FromStr;

/// Length of an Ethernet hardware address.
pub const ETH_ALEN: usize = 6;

/// 48-bit Ethernet MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MacAddress(pub [u8; ETH_ALEN]);

impl MacAddress {
    pub const BROADCAST: MacAddress = MacAddress([0xFF; ETH_ALEN]);

    pub const fn new(octets: [u8; ETH_ALEN]) -> Self {
        Self(octets)
    }

    #[inline]
    pub const fn octets(&self) -> [u8; ETH_ALEN] {
        self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; ETH_ALEN] {
        &self.0
    }

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Group bit set (includes broadcast).
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Parse `AA:BB:CC:DD:EE:FF` or `AA-BB-CC-DD-EE-FF`, any hex case.
    pub fn parse(s: &str) -> Result<Self, MacParseError> {
        let bytes = s.as_bytes();
        if bytes.len() != ETH_ALEN * 3 - 1 {
            return Err(MacParseError::InvalidLength);
        }

        let sep = bytes[2];
        if sep != b':' && sep != b'-' {
            return Err(MacParseError::InvalidSeparator);
        }

        let mut octets = [0u8; ETH_ALEN];
        for (i, octet) in octets.iter_mut().enumerate() {
            let at = i * 3;
            if i > 0 && bytes[at - 1] != sep {
                return Err(MacParseError::InvalidSeparator);
            }
            *octet = (hex_nibble(bytes[at])? << 4) | hex_nibble(bytes[at + 1])?;
        }
        Ok(Self(octets))
    }
}

fn hex_nibble(c: u8) -> Result<u8, MacParseError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(MacParseError::InvalidDigit),
    }
}

impl From<[u8; ETH_ALEN]> for MacAddress {
    fn from(octets: [u8; ETH_ALEN]) -> Self {
        Self(octets)
    }
}

impl From<MacAddress> for [u8; ETH_ALEN] {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

impl FromStr for MacAddress {
    type Err = MacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// XX:XX:XX:XX:XX:XX, lowercase hex.
impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// MAC address parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacParseError {
    /// Not exactly 17 characters.
    InvalidLength,
    /// Separators missing or mixed.
    InvalidSeparator,
    /// Non-hex digit.
    InvalidDigit,
}

impl fmt::Display for MacParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "MAC address must be 17 characters"),
            Self::InvalidSeparator => write!(f, "MAC address separators must be all ':' or all '-'"),
            Self::InvalidDigit => write!(f, "MAC address contains a non-hex digit"),
        }
    }
}
