//! Host platform capability.
//!
//! Widgets that render differently per target (the pager, for one) read the
//! host platform through [`Platform`] instead of sprinkling `cfg!` checks
//! around. The value is read-only: it is derived from the compile target or
//! parsed from an identifier supplied by the host.

use std::fmt;
use std::str::FromStr;

/// The platform a widget tree is rendered for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
    /// Any host that is neither of the recognized mobile targets.
    ///
    /// Holds the identifier as reported by the host.
    Other(String),
}

impl Platform {
    /// Platform of the current compile target.
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Other(std::env::consts::OS.to_owned())
        }
    }

    /// Lenient parse: recognized identifiers map to their variant, anything
    /// else becomes [`Platform::Other`].
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.parse::<Platform>() {
            Ok(platform) => platform,
            Err(PlatformError::Unrecognized(identifier)) => {
                log::trace!("treating platform {identifier:?} as unrecognized host");
                Platform::Other(identifier)
            }
        }
    }

    /// Canonical identifier, e.g. `"ios"` or `"android"`.
    pub fn identifier(&self) -> &str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Other(identifier) => identifier,
        }
    }

    /// Returns true if the platform ships a native paging container.
    pub fn has_native_pager(&self) -> bool {
        matches!(self, Platform::Android)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Strict parse. Unrecognized identifiers are an error, for hosts that want
/// to fail closed instead of falling back.
impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        let trimmed = identifier.trim();
        if trimmed.eq_ignore_ascii_case("ios") {
            Ok(Platform::Ios)
        } else if trimmed.eq_ignore_ascii_case("android") {
            Ok(Platform::Android)
        } else {
            Err(PlatformError::Unrecognized(identifier.to_owned()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    Unrecognized(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Unrecognized(identifier) => {
                write!(f, "unrecognized platform identifier {identifier:?}")
            }
        }
    }
}

impl std::error::Error for PlatformError {}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
