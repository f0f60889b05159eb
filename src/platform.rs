//! Target platforms and their fixed icon size tables.
//!
//! Every platform maps to an ordered list of square icon sizes (pixels). The
//! tables are static and must not be reordered: listings print them as-is and
//! the batch writer walks them front to back.
//!
//! ```text
//! phone       20 40 60 29 58 87 80 120 180 76 152 167
//! tablet      20 40 29 58 40 80 76 152 167 83
//! desktop     16 32 64 128 256 512 1024
//! watch       48 55 58 87 80 88 172 196 216 1024
//! tv          400 800 1200 2400
//! automotive  200 400 800 1600
//! ```
//!
//! `tablet` lists 40 twice. Both entries are kept; the second write lands on
//! the same file as the first.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown platform '{0}'")]
pub struct UnknownPlatform(pub String);

/// A platform with a fixed icon size table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Phone,
    Tablet,
    Desktop,
    Watch,
    Tv,
    Automotive,
}

impl Platform {
    /// All platforms in listing order.
    pub const ALL: [Platform; 6] = [
        Platform::Phone,
        Platform::Tablet,
        Platform::Desktop,
        Platform::Watch,
        Platform::Tv,
        Platform::Automotive,
    ];

    /// Identifier used on the command line, as directory name and in filenames.
    pub fn id(self) -> &'static str {
        match self {
            Platform::Phone => "phone",
            Platform::Tablet => "tablet",
            Platform::Desktop => "desktop",
            Platform::Watch => "watch",
            Platform::Tv => "tv",
            Platform::Automotive => "automotive",
        }
    }

    pub fn sizes(self) -> &'static [u32] {
        match self {
            Platform::Phone => &[20, 40, 60, 29, 58, 87, 80, 120, 180, 76, 152, 167],
            Platform::Tablet => &[20, 40, 29, 58, 40, 80, 76, 152, 167, 83],
            Platform::Desktop => &[16, 32, 64, 128, 256, 512, 1024],
            Platform::Watch => &[48, 55, 58, 87, 80, 88, 172, 196, 216, 1024],
            Platform::Tv => &[400, 800, 1200, 2400],
            Platform::Automotive => &[200, 400, 800, 1600],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// Largest edge accepted for a single custom icon.
pub const MAX_CUSTOM_SIZE: u32 = 4096;

/// What a generate run produces: a full platform set or one custom size.
///
/// The custom target writes into `custom/` with the same filename pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTarget {
    Platform(Platform),
    Custom(u32),
}

impl IconTarget {
    pub fn id(&self) -> &'static str {
        match self {
            IconTarget::Platform(p) => p.id(),
            IconTarget::Custom(_) => "custom",
        }
    }

    pub fn sizes(&self) -> Vec<u32> {
        match self {
            IconTarget::Platform(p) => p.sizes().to_vec(),
            IconTarget::Custom(size) => vec![*size],
        }
    }

    /// `Icon-<id>-<size>x<size>.png`
    pub fn file_name(&self, size: u32) -> String {
        format!("Icon-{}-{}x{}.png", self.id(), size, size)
    }
}
