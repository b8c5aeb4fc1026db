//! Dotted numeric version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::VersionError;
use crate::version::tokenizer::parse_components;

/// A version made of dot-separated non-negative integers, e.g. `1.2.0.3`.
///
/// Trailing zero components are insignificant: `1.2` and `1.2.0.0` are equal
/// and render as `1.2`. The literal components are still kept because range
/// enumeration depends on how many of them were written.
#[derive(Debug, Clone, Default)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Parse a version string. The empty string is the smallest version.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        Ok(Self {
            components: parse_components(input)?,
        })
    }

    /// Copy a version through its canonical string form.
    ///
    /// Unlike `clone`, trailing zeros of the source are not carried over:
    /// a copy of `1.1.0` is indistinguishable from `Version::parse("1.1")`.
    pub fn from_version(other: &Version) -> Self {
        Self {
            components: other.canonical().to_vec(),
        }
    }

    /// Components with trailing zeros stripped, as an owned copy.
    pub fn components(&self) -> Vec<u64> {
        self.canonical().to_vec()
    }

    /// Exactly `count` components taken from the literal sequence,
    /// truncated or right-padded with zeros.
    pub fn components_padded(&self, count: usize) -> Vec<u64> {
        let mut components: Vec<u64> = self.components.iter().copied().take(count).collect();
        components.resize(count, 0);
        components
    }

    /// Components exactly as they were parsed, trailing zeros included.
    pub fn raw_components(&self) -> &[u64] {
        &self.components
    }

    /// Three-way comparison as `-1`, `0` or `1`.
    pub fn compare(&self, other: &Version) -> i8 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    fn canonical(&self) -> &[u64] {
        canonical(&self.components)
    }
}

/// Strip trailing zero components.
pub(crate) fn canonical(components: &[u64]) -> &[u64] {
    let len = components
        .iter()
        .rposition(|&c| c != 0)
        .map_or(0, |last| last + 1);
    &components[..len]
}

/// Render components in canonical dotted form.
pub(crate) fn render(components: &[u64]) -> String {
    canonical(components)
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.components))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.canonical();
        let rhs = other.canonical();
        let len = lhs.len().max(rhs.len());

        (0..len)
            .map(|i| {
                let a = lhs.get(i).copied().unwrap_or(0);
                let b = rhs.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Version::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Conversion of version sources (strings or existing versions) into a `Version`.
///
/// Existing versions are copied through their canonical string, strings are parsed.
pub trait IntoVersion {
    fn into_version(self) -> Result<Version, VersionError>;
}

impl IntoVersion for &str {
    fn into_version(self) -> Result<Version, VersionError> {
        Version::parse(self)
    }
}

impl IntoVersion for String {
    fn into_version(self) -> Result<Version, VersionError> {
        Version::parse(&self)
    }
}

impl IntoVersion for &String {
    fn into_version(self) -> Result<Version, VersionError> {
        Version::parse(self)
    }
}

impl IntoVersion for Version {
    fn into_version(self) -> Result<Version, VersionError> {
        Ok(Version::from_version(&self))
    }
}

impl IntoVersion for &Version {
    fn into_version(self) -> Result<Version, VersionError> {
        Ok(Version::from_version(self))
    }
}
