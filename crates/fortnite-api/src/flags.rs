//! Response flags requesting optional fields in API responses
//!
//! The service accepts a `responseFlags` query parameter holding a bitmask.
//! Each [`ResponseFlag`] is one bit; [`ResponseFlags`] is a set of them.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A single optional-field capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResponseFlag {
    /// Include asset paths (bit 0)
    IncludePaths = 0x01,
    /// Include gameplay tags (bit 1)
    IncludeGameplayTags = 0x02,
    /// Include shop history (bit 2)
    IncludeShopHistory = 0x04,
}

impl ResponseFlag {
    /// Every defined flag
    pub const VARIANTS: [Self; 3] = [
        Self::IncludePaths,
        Self::IncludeGameplayTags,
        Self::IncludeShopHistory,
    ];

    /// Raw bit value of this flag
    pub const fn bit(self) -> u8 {
        self as u8
    }
}

/// Set of [`ResponseFlag`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResponseFlags(u8);

impl ResponseFlags {
    /// No flags set
    pub const NONE: Self = Self(0);

    /// Every defined flag
    pub const ALL: Self = Self::from_slice(&ResponseFlag::VARIANTS);

    const fn from_slice(flags: &[ResponseFlag]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < flags.len() {
            bits |= flags[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Combine any number of flags into a set
    pub fn combine(flags: impl IntoIterator<Item = ResponseFlag>) -> Self {
        flags.into_iter().fold(Self::NONE, |set, flag| set | flag)
    }

    /// Raw bitmask sent on the wire
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if no flag is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if flag is set
    pub const fn contains(self, flag: ResponseFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Set flag
    pub fn insert(&mut self, flag: ResponseFlag) {
        self.0 |= flag.bit();
    }

    /// Iterate over the flags in this set
    pub fn iter(self) -> impl Iterator<Item = ResponseFlag> {
        ResponseFlag::VARIANTS
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }
}

impl From<ResponseFlag> for ResponseFlags {
    fn from(flag: ResponseFlag) -> Self {
        Self(flag.bit())
    }
}

impl FromIterator<ResponseFlag> for ResponseFlags {
    fn from_iter<I: IntoIterator<Item = ResponseFlag>>(iter: I) -> Self {
        Self::combine(iter)
    }
}

impl BitOr for ResponseFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<ResponseFlag> for ResponseFlags {
    type Output = Self;

    fn bitor(self, rhs: ResponseFlag) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl BitOr for ResponseFlag {
    type Output = ResponseFlags;

    fn bitor(self, rhs: Self) -> ResponseFlags {
        ResponseFlags(self.bit() | rhs.bit())
    }
}

impl BitOrAssign<ResponseFlag> for ResponseFlags {
    fn bitor_assign(&mut self, rhs: ResponseFlag) {
        self.insert(rhs);
    }
}

impl fmt::Display for ResponseFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ResponseFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}
