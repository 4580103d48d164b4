//! iOS version ordering for simulator selection.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Regex for each numeric component of a runtime key.
///
/// Components may be separated by `.` (`iOS 16.4`) or `-`
/// (`com.apple.CoreSimulator.SimRuntime.iOS-16-4`).
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("VERSION_REGEX must compile"));

/// An iOS version key, ordered by its numeric components.
///
/// `"16.0" > "15.4"` and `"10.0" > "9.3"`. Keys with the same numbers
/// (`"iOS 16.0"` and `"16.0"`) fall back to plain string order so the
/// ordering stays total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IosVersion<'a> {
    raw: &'a str,
    parts: Vec<u32>,
}

impl<'a> IosVersion<'a> {
    /// Parse a version key. Keys without digits sort below every numbered key.
    pub fn parse(raw: &'a str) -> Self {
        let parts = VERSION_REGEX
            .find_iter(raw)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();
        Self { raw, parts }
    }

    /// The key this version was parsed from.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Numeric components of the version.
    pub fn parts(&self) -> &[u32] {
        &self.parts
    }
}

impl Ord for IosVersion<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parts
            .cmp(&other.parts)
            .then_with(|| self.raw.cmp(other.raw))
    }
}

impl PartialOrd for IosVersion<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pick the highest version key.
pub fn highest_version<'a>(keys: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    keys.into_iter()
        .map(IosVersion::parse)
        .max()
        .map(|v| v.as_str())
}
