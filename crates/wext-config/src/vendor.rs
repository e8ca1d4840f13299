//! The vendor registry: the closed set of supported browser platforms.
//!
//! Each vendor carries a small set of static capability facts consumed by the
//! assembler and the manifest compiler. The registry is a plain enum so that
//! adding or removing a vendor is an exhaustive-match change checked at
//! compile time, not a runtime string lookup with a silent fallback.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A supported target browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Chrome,
    Firefox,
    Opera,
    Edge,
}

/// Capability facts for one vendor.
///
/// Profiles are `'static` data baked into the binary; there is no mutable
/// registry state anywhere in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VendorProfile {
    /// Vendor identifier as it appears in paths, env defines and filenames.
    pub id: &'static str,
    /// Whether the reload helper entry can be injected for this vendor.
    pub supports_auto_reload: bool,
    /// Whether the `browser` polyfill shim must be provided.
    pub needs_compat_shim: bool,
    /// File extension the vendor's store expects for packaged extensions.
    pub archive_ext: &'static str,
}

const CHROME: VendorProfile = VendorProfile {
    id: "chrome",
    supports_auto_reload: true,
    needs_compat_shim: true,
    archive_ext: "zip",
};

const FIREFOX: VendorProfile = VendorProfile {
    id: "firefox",
    supports_auto_reload: false,
    needs_compat_shim: false,
    archive_ext: "xpi",
};

const OPERA: VendorProfile = VendorProfile {
    id: "opera",
    supports_auto_reload: true,
    needs_compat_shim: true,
    archive_ext: "crx",
};

const EDGE: VendorProfile = VendorProfile {
    id: "edge",
    supports_auto_reload: false,
    needs_compat_shim: false,
    archive_ext: "zip",
};

impl Vendor {
    /// All supported vendors, in documentation order.
    pub const ALL: &'static [Vendor] =
        &[Vendor::Chrome, Vendor::Firefox, Vendor::Opera, Vendor::Edge];

    /// Validate a user-supplied vendor id.
    ///
    /// This is the first gate of every assembly: everything downstream
    /// assumes a known vendor.
    pub fn parse(id: &str) -> Result<Self, ConfigError> {
        match id {
            "chrome" => Ok(Vendor::Chrome),
            "firefox" => Ok(Vendor::Firefox),
            "opera" => Ok(Vendor::Opera),
            "edge" => Ok(Vendor::Edge),
            other => Err(ConfigError::UnknownVendor(other.to_string())),
        }
    }

    /// Capability facts for this vendor (zero allocation, static data).
    pub fn profile(&self) -> &'static VendorProfile {
        match self {
            Vendor::Chrome => &CHROME,
            Vendor::Firefox => &FIREFOX,
            Vendor::Opera => &OPERA,
            Vendor::Edge => &EDGE,
        }
    }

    /// Vendor id as a lowercase string.
    pub fn id(&self) -> &'static str {
        self.profile().id
    }

    /// Vendor name with the first letter uppercased, as browserslist
    /// queries spell it (`last 2 Chrome versions`).
    pub fn display_name(&self) -> &'static str {
        match self {
            Vendor::Chrome => "Chrome",
            Vendor::Firefox => "Firefox",
            Vendor::Opera => "Opera",
            Vendor::Edge => "Edge",
        }
    }
}

impl std::str::FromStr for Vendor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vendor::parse(s)
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
