use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Refresh interval used whenever a document does not name one (one hour).
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 3600;

/// The three supported widget display sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// Key used for this size under `widgets.<key>` in a config document.
    pub fn key(self) -> &'static str {
        match self {
            Self::Small  => "small",
            Self::Medium => "medium",
            Self::Large  => "large",
        }
    }

    /// Nominal point size of the rendered widget (width, height).
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            Self::Small  => (155.0, 155.0),
            Self::Medium => (329.0, 155.0),
            Self::Large  => (329.0, 345.0),
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SizeClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small"  => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large"  => Ok(Self::Large),
            other    => Err(format!("unknown widget size '{other}'")),
        }
    }
}
