//! Unix permission bits as a small value type.

use std::fmt;
use std::fs::Permissions;
use std::os::unix::fs::PermissionsExt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permission bits applied by copy, chmod and directory creation.
///
/// Only the low twelve bits (`0o7777`) are kept. The default is `0755`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mode(u32);

/// Returned when text cannot be read as an octal mode.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid octal mode `{0}`")]
pub struct ParseModeError(pub String);

impl Mode {
    pub const DEFAULT: Mode = Mode(0o755);

    pub const fn new(bits: u32) -> Self {
        Mode(bits & 0o7777)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn permissions(self) -> Permissions {
        Permissions::from_mode(self.0)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::DEFAULT
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    /// Accepts `755`, `0755` and `0o755`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0o")
            .or_else(|| trimmed.strip_prefix("0O"))
            .unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ParseModeError(s.to_string()));
        }
        match u32::from_str_radix(digits, 8) {
            Ok(bits) if bits <= 0o7777 => Ok(Mode(bits)),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl From<u32> for Mode {
    fn from(bits: u32) -> Self {
        Mode::new(bits)
    }
}

impl TryFrom<String> for Mode {
    type Error = ParseModeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.to_string()
    }
}
