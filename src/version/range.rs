//! Half-open version ranges
//!
//! A range includes its lower bound and excludes its upper bound. Enumeration
//! walks every version between the bounds like an odometer: each position
//! counts from 0 to 9 and carries into the position on its left.

use std::iter::FusedIterator;

use tracing::trace;

use crate::version::dotted::{IntoVersion, Version, render};
use crate::version::error::VersionError;

/// Value at which a component position rolls over during enumeration.
const CARRY_THRESHOLD: u64 = 10;

/// Versions in `[lower, upper)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    lower: Version,
    upper: Version,
}

impl VersionRange {
    pub fn new(lower: impl IntoVersion, upper: impl IntoVersion) -> Result<Self, VersionError> {
        Ok(Self {
            lower: lower.into_version()?,
            upper: upper.into_version()?,
        })
    }

    pub fn lower(&self) -> &Version {
        &self.lower
    }

    pub fn upper(&self) -> &Version {
        &self.upper
    }

    /// True when no version satisfies the range, e.g. equal bounds.
    pub fn is_empty(&self) -> bool {
        self.lower >= self.upper
    }

    /// Check whether a version string or version lies within the range.
    pub fn contains(&self, candidate: impl IntoVersion) -> Result<bool, VersionError> {
        Ok(self.contains_version(&candidate.into_version()?))
    }

    pub fn contains_version(&self, candidate: &Version) -> bool {
        &self.lower <= candidate && candidate < &self.upper
    }

    /// Iterate over every version string in the range, in ascending order.
    ///
    /// The enumeration depth is the longer of the two bounds' literal
    /// component counts, so `1.1.0..1.2` steps through `1.1.1`, `1.1.2`, ...
    /// rather than jumping straight to `1.2`.
    pub fn iter(&self) -> Versions {
        let lower = self.lower.raw_components();
        let upper = self.upper.raw_components();
        let depth = lower.len().max(upper.len());

        let mut current = lower.to_vec();
        current.resize(depth, 0);
        let mut end = upper.to_vec();
        end.resize(depth, 0);

        Versions { current, end }
    }

    /// All version strings in the range, in ascending order.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().collect()
    }
}

impl IntoIterator for &VersionRange {
    type Item = String;
    type IntoIter = Versions;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the version strings of a [`VersionRange`].
///
/// `current` and `end` always have the same length.
#[derive(Debug, Clone)]
pub struct Versions {
    current: Vec<u64>,
    end: Vec<u64>,
}

impl Versions {
    fn increment(&mut self) {
        for position in (0..self.current.len()).rev() {
            // Checked before adding so `u64::MAX` carries instead of overflowing.
            if self.current[position] < CARRY_THRESHOLD - 1 {
                self.current[position] += 1;
                return;
            }
            self.current[position] = 0;
        }

        // Carried past the most significant position.
        self.current.insert(0, 1);
        self.end.insert(0, 0);
        trace!("Enumeration depth grew to {}", self.current.len());
    }
}

impl Iterator for Versions {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.end {
            return None;
        }

        let version = render(&self.current);
        self.increment();
        Some(version)
    }
}

impl FusedIterator for Versions {}
