use crate::error::{ParseError, Result};

/// A TCP/UDP port number within the 16-bit unsigned range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortNumber {
    number: u16,
}

impl PortNumber {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 65535;

    /// # Errors
    ///
    /// Returns [`ParseError::PortOutOfRange`] if `value` is negative or
    /// above 65535.
    pub fn new(value: i64) -> Result<Self> {
        u16::try_from(value)
            .map(|number| Self { number })
            .map_err(|_| ParseError::PortOutOfRange(value))
    }

    pub fn to_int(self) -> u16 {
        self.number
    }
}

impl From<u16> for PortNumber {
    fn from(number: u16) -> Self {
        Self { number }
    }
}

impl TryFrom<i64> for PortNumber {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PortNumber> for u16 {
    fn from(port: PortNumber) -> Self {
        port.number
    }
}

impl core::fmt::Display for PortNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.number)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PortNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.number)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PortNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let value = <i64 as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
