use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name chosen by a user. Bounded so a profile update cannot
/// push an arbitrarily long string to the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 32;

    pub fn new(value: String) -> Result<Self, String> {
        Self::validate(&value)?;
        Ok(Self(value))
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        Self::validate(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err("Username cannot be empty".to_string());
        }
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(format!(
                "Username is too long (max {} characters)",
                Self::MAX_LENGTH
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}
