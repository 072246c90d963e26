//! Risk profile and product variant labels
//!
//! Both are user-facing selections. Neither changes the projection today; they
//! are carried through the scenario so reports and batch output can show them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Investor risk profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Profile {
    #[default]
    Defensief,
    Neutraal,
    Offensief,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Defensief, Profile::Neutraal, Profile::Offensief];

    pub fn label(&self) -> &'static str {
        match self {
            Profile::Defensief => "Defensief",
            Profile::Neutraal => "Neutraal",
            Profile::Offensief => "Offensief",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Profile {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Profile::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ProjectionError::UnknownLabel {
                kind: "profile",
                label: s.to_string(),
            })
    }
}

/// Product variant offered to the investor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductVariant {
    #[default]
    #[serde(rename = "Bloei")]
    Bloei,
    #[serde(rename = "Bloei Plus")]
    BloeiPlus,
}

impl ProductVariant {
    pub const ALL: [ProductVariant; 2] = [ProductVariant::Bloei, ProductVariant::BloeiPlus];

    pub fn label(&self) -> &'static str {
        match self {
            ProductVariant::Bloei => "Bloei",
            ProductVariant::BloeiPlus => "Bloei Plus",
        }
    }
}

impl fmt::Display for ProductVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductVariant {
    type Err = ProjectionError;

    /// Accepts the display label, ignoring case and with `-`/`_` allowed for the space
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        ProductVariant::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ProjectionError::UnknownLabel {
                kind: "product variant",
                label: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_parse() {
        assert_eq!("Neutraal".parse::<Profile>().unwrap(), Profile::Neutraal);
        assert_eq!(" offensief ".parse::<Profile>().unwrap(), Profile::Offensief);
        assert!("agressief".parse::<Profile>().is_err());
        assert_eq!(Profile::default(), Profile::Defensief);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("bloei".parse::<ProductVariant>().unwrap(), ProductVariant::Bloei);
        assert_eq!("Bloei Plus".parse::<ProductVariant>().unwrap(), ProductVariant::BloeiPlus);
        assert_eq!("bloei-plus".parse::<ProductVariant>().unwrap(), ProductVariant::BloeiPlus);
        assert!("Groei".parse::<ProductVariant>().is_err());
    }

    #[test]
    fn test_variant_serde_uses_label() {
        let json = serde_json::to_string(&ProductVariant::BloeiPlus).unwrap();
        assert_eq!(json, "\"Bloei Plus\"");
    }
}
