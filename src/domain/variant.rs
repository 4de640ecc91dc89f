//! Variant tag for selecting the storage/evolution implementation.
//!
//! This module provides a unified way to select between the three engines
//! for simulation, comparison and benchmarking.

use std::fmt;
use std::str::FromStr;

use super::LifeError;

/// Available engine implementations.
/// Each variant trades off between simplicity and memory traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Scalar cells, bounds-checked neighbor lookups (ground truth)
    #[default]
    Reference,
    /// One byte per cell with a dead halo
    PackedByte,
    /// One bit per cell in 32-bit words with a dead halo
    BitPacked,
}

impl Variant {
    /// Get all available variants in tag order
    pub const fn all() -> [Variant; 3] {
        [Variant::Reference, Variant::PackedByte, Variant::BitPacked]
    }

    /// Numeric tag used on the command line (0, 1, 2)
    pub const fn tag(self) -> u8 {
        match self {
            Variant::Reference => 0,
            Variant::PackedByte => 1,
            Variant::BitPacked => 2,
        }
    }

    /// Display name used in logs and diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Reference => "REFERENCE",
            Variant::PackedByte => "ARRAY",
            Variant::BitPacked => "BITS",
        }
    }

    /// Short description for help output and benchmark tables
    pub const fn description(self) -> &'static str {
        match self {
            Variant::Reference => "Scalar cells, no halo, 1 byte/cell",
            Variant::PackedByte => "Byte array with dead halo, 1 byte/cell",
            Variant::BitPacked => "32-bit words with dead halo, 1 bit/cell",
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = LifeError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Variant::all()
            .into_iter()
            .find(|v| v.tag() == tag)
            .ok_or_else(|| LifeError::UnknownVariant(tag.to_string()))
    }
}

impl FromStr for Variant {
    type Err = LifeError;

    /// Accepts the numeric tag or a name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "ref" | "reference" => Ok(Variant::Reference),
            "1" | "array" | "byte" | "packed-byte" => Ok(Variant::PackedByte),
            "2" | "bits" | "bit" | "bit-packed" => Ok(Variant::BitPacked),
            _ => Err(LifeError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants_returns_three() {
        assert_eq!(Variant::all().len(), 3);
    }

    #[test]
    fn test_default_is_reference() {
        assert_eq!(Variant::default(), Variant::Reference);
    }

    #[test]
    fn test_tags_round_trip() {
        for variant in Variant::all() {
            assert_eq!(Variant::try_from(variant.tag()).unwrap(), variant);
        }
        assert!(matches!(Variant::try_from(3), Err(LifeError::UnknownVariant(_))));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("bits".parse::<Variant>().unwrap(), Variant::BitPacked);
        assert_eq!("Array".parse::<Variant>().unwrap(), Variant::PackedByte);
        assert_eq!("0".parse::<Variant>().unwrap(), Variant::Reference);
        assert!("hashlife".parse::<Variant>().is_err());
        assert!("7".parse::<Variant>().is_err());
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Variant::all().iter().map(|v| v.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
