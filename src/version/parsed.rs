use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A version string parsed into a totally ordered representation.
///
/// Dot-separated all-digit segments parse exactly into integer components.
/// Trailing zero components are trimmed so that `"1.2"` and `"1.2.0"` compare
/// equal, and shorter prefixes order before longer ones otherwise
/// (`"1.2" < "1.2.1"`).
///
/// Anything else (pre-release tags, build metadata, empty segments, overflow)
/// parses in degraded mode: the original string becomes an opaque
/// lexicographic key that orders below every exactly parsed version. Parsing
/// never fails.
#[derive(Debug, Clone)]
pub struct ParsedVersion {
    raw: String,
    /// Integer components with trailing zeros trimmed; `None` in degraded mode.
    components: Option<Vec<u64>>,
}

impl ParsedVersion {
    /// Parse a version string. Total: malformed input yields a degraded
    /// ordering key instead of an error.
    pub fn parse(raw: &str) -> Self {
        let components = raw
            .split('.')
            .map(|segment| {
                if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
                    segment.parse::<u64>().ok()
                } else {
                    None
                }
            })
            .collect::<Option<Vec<u64>>>()
            .map(|mut components| {
                while components.last() == Some(&0) {
                    components.pop();
                }
                components
            });

        Self {
            raw: raw.to_string(),
            components,
        }
    }

    /// Whether every segment parsed as an integer. Degraded versions always
    /// order below exact ones.
    pub fn is_exact(&self) -> bool {
        self.components.is_some()
    }

    /// The original version string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Ord for ParsedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.components, &other.components) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

impl PartialOrd for ParsedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ParsedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ParsedVersion {}

impl Hash for ParsedVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with Eq: exact versions hash their trimmed components
        // (so "1.2" and "1.2.0" collide), degraded ones hash the raw string.
        match &self.components {
            Some(components) => components.hash(state),
            None => self.raw.hash(state),
        }
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ParsedVersion {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for ParsedVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for ParsedVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
