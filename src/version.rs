use crate::error::{ChangelogError, Result};
use std::fmt;

/// Release version with major, minor, and micro components.
///
/// Changelog headings carry it in bracketed form (`[1.2.3]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub micro: u64,
}

impl Version {
    /// Creates a new Version with the specified components.
    pub fn new(major: u64, minor: u64, micro: u64) -> Self {
        Version {
            major,
            minor,
            micro,
        }
    }

    /// Parses a dotted version string, with or without surrounding brackets.
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(Version::parse("[1.2.3]").unwrap(), Version::new(1, 2, 3));
    /// assert_eq!(Version::parse("0.1.0").unwrap(), Version::new(0, 1, 0));
    /// assert!(Version::parse("[1.2]").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner.split('.').collect();
        if parts.len() != 3 {
            return Err(ChangelogError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                text
            )));
        }

        let component = |name: &str, value: &str| {
            value.parse::<u64>().map_err(|_| {
                ChangelogError::version(format!("Invalid {} version: {}", name, value))
            })
        };

        Ok(Version {
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            micro: component("micro", parts[2])?,
        })
    }

    /// The version of the next release: micro bumped by one.
    ///
    /// Fails when the micro component is already at its maximum.
    pub fn next(&self) -> Result<Self> {
        let micro = self.micro.checked_add(1).ok_or_else(|| {
            ChangelogError::version(format!("Cannot bump micro version of {}", self))
        })?;
        Ok(Version { micro, ..*self })
    }

    /// Bracketed form used in changelog headings, e.g. `[1.2.3]`.
    pub fn bracketed(&self) -> String {
        format!("[{}]", self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}
