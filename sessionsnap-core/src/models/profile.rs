use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, SnapError};

pub const DEFAULT_PROFILE: &str = "default";

/// The name of an independently saved session.
///
/// Names are restricted so that each one maps to its own file: no path
/// separators, no leading dot and not empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Profile(String);

impl Profile {
    /// # Errors
    ///
    /// Will error if the name is empty, contains a path separator or a NUL
    /// byte, or starts with a dot.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let valid = !name.is_empty()
            && !name.starts_with('.')
            && !name.contains(['/', '\\', '\0']);
        if !valid {
            return Err(SnapError::InvalidProfile(name));
        }
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_PROFILE
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self(DEFAULT_PROFILE.to_owned())
    }
}

impl FromStr for Profile {
    type Err = SnapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_named_default() {
        let profile = Profile::default();
        assert!(profile.is_default());
        assert_eq!(profile, Profile::new("default").unwrap());
    }

    #[test]
    fn names_that_escape_the_profile_dir_are_rejected() {
        for name in ["", "../session", "a/b", ".hidden", "back\\slash", "nul\0"] {
            assert!(
                matches!(Profile::new(name), Err(SnapError::InvalidProfile(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn ordinary_names_are_accepted() {
        let profile: Profile = "deep-work".parse().unwrap();
        assert_eq!(profile.name(), "deep-work");
        assert!(!profile.is_default());
        assert_eq!(profile.to_string(), "deep-work");
    }
}
