//! # Video Resolutions
//!
//! A resolution is written `<width>x<height>`; the separator may be `x` or
//! `X`. Parsing ([`Resolution::from_str`]) checks shape only. Whether the
//! platform accepts a resolution is a separate question answered by a
//! [`ResolutionSet`]: the default set holds 640x480, 1280x720 and
//! 1920x1080 in both landscape and portrait orientation.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValidationError;

/// Pixel dimensions of a video frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// 640x480.
    pub const SD_LANDSCAPE: Resolution = Resolution { width: 640, height: 480 };
    /// 480x640.
    pub const SD_PORTRAIT: Resolution = Resolution { width: 480, height: 640 };
    /// 1280x720.
    pub const HD_LANDSCAPE: Resolution = Resolution { width: 1280, height: 720 };
    /// 720x1280.
    pub const HD_PORTRAIT: Resolution = Resolution { width: 720, height: 1280 };
    /// 1920x1080.
    pub const FHD_LANDSCAPE: Resolution = Resolution { width: 1920, height: 1080 };
    /// 1080x1920.
    pub const FHD_PORTRAIT: Resolution = Resolution { width: 1080, height: 1920 };

    /// Create a resolution. Both dimensions must be positive.
    pub fn new(width: u32, height: u32) -> Result<Self, ValidationError> {
        if width == 0 || height == 0 {
            return Err(ValidationError::invalid(
                "resolution",
                format!("{width}x{height} has a zero dimension"),
            ));
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Taller than wide.
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    /// The same frame in the other orientation.
    pub fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Parse one dimension: ASCII digits, no sign, no leading zero.
fn parse_dimension(raw: &str, input: &str) -> Result<u32, ValidationError> {
    let malformed = || {
        ValidationError::invalid(
            "resolution",
            format!("\"{input}\" does not match <width>x<height>"),
        )
    };
    if raw.is_empty() || raw.starts_with('0') || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    raw.parse().map_err(|_| malformed())
}

impl FromStr for Resolution {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s.split_once(['x', 'X']).ok_or_else(|| {
            ValidationError::invalid(
                "resolution",
                format!("\"{s}\" does not match <width>x<height>"),
            )
        })?;
        Ok(Self {
            width: parse_dimension(w, s)?,
            height: parse_dimension(h, s)?,
        })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Serialize for Resolution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Resolution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The resolutions a deployment accepts.
///
/// [`ResolutionSet::default`] is the platform's standard allow-list.
/// Deployments that support more can extend it without code changes to
/// the validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionSet(BTreeSet<Resolution>);

impl ResolutionSet {
    /// An empty set. Every resolution is rejected until one is added.
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Add a resolution. Returns `false` if it was already present.
    pub fn insert(&mut self, resolution: Resolution) -> bool {
        self.0.insert(resolution)
    }

    /// Add a resolution in both orientations.
    pub fn with_both_orientations(mut self, resolution: Resolution) -> Self {
        self.0.insert(resolution);
        self.0.insert(resolution.rotated());
        self
    }

    /// Whether `resolution` is allowed.
    pub fn contains(&self, resolution: &Resolution) -> bool {
        self.0.contains(resolution)
    }

    /// Allowed resolutions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Resolution> {
        self.0.iter()
    }

    /// Number of allowed resolutions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when nothing is allowed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse `value` and require it to be in this set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] if `value` is malformed
    /// or names a resolution outside the set.
    pub fn check(&self, value: &str) -> Result<Resolution, ValidationError> {
        let resolution: Resolution = value.parse()?;
        self.ensure(&resolution)?;
        Ok(resolution)
    }

    /// Require an already-parsed resolution to be in this set.
    pub fn ensure(&self, resolution: &Resolution) -> Result<(), ValidationError> {
        if self.contains(resolution) {
            return Ok(());
        }
        let supported: Vec<String> = self.iter().map(Resolution::to_string).collect();
        Err(ValidationError::invalid(
            "resolution",
            format!(
                "{resolution} is not supported; expected one of: {}",
                supported.join(", ")
            ),
        ))
    }
}

impl Default for ResolutionSet {
    fn default() -> Self {
        Self::empty()
            .with_both_orientations(Resolution::SD_LANDSCAPE)
            .with_both_orientations(Resolution::HD_LANDSCAPE)
            .with_both_orientations(Resolution::FHD_LANDSCAPE)
    }
}

impl FromIterator<Resolution> for ResolutionSet {
    fn from_iter<I: IntoIterator<Item = Resolution>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Validate a resolution string against the default allow-list.
pub fn validate_resolution(value: &str) -> Result<(), ValidationError> {
    ResolutionSet::default().check(value).map(|_| ())
}
