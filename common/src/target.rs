//! # Scan Target Model
//!
//! The host, address, or network range a scan run is aimed at.
//!
//! Sweepr hands the target to the underlying tools verbatim. Whether
//! `192.168.1.0/24` is a valid range for `arp-scan` but not for
//! `snmpwalk` is the tools' concern, so the only rule enforced here is
//! that the target is not empty.

use std::fmt;
use std::str::FromStr;

/// An opaque, non-empty target token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target(String);

impl Target {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(String::from("target must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
